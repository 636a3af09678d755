// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("tourdesk")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tourism agency back office: bookings, trips, expenses, clients, treasury")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(login_cmd())
        .subcommand(booking_cmd())
        .subcommand(trip_cmd())
        .subcommand(expense_cmd())
        .subcommand(client_cmd())
        .subcommand(supervisor_cmd())
        .subcommand(treasury_cmd())
        .subcommand(report_cmd())
        .subcommand(admin_cmd())
        .subcommand(Command::new("seed").about("Load the demo data set into an empty store"))
        .subcommand(Command::new("doctor").about("Check the store for integrity problems"))
        .subcommand(export_cmd())
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn yes_flag() -> Arg {
    Arg::new("yes")
        .long("yes")
        .short('y')
        .action(ArgAction::SetTrue)
        .help("Skip the confirmation prompt")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .long("id")
        .required(true)
        .value_parser(value_parser!(i64))
}

fn login_cmd() -> Command {
    Command::new("login")
        .about("Verify back-office credentials")
        .arg(Arg::new("username").long("username").short('u').required(true))
        .arg(Arg::new("password").long("password").short('p').required(true))
}

fn booking_record_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("client")
            .long("client")
            .required(required)
            .help("Client name"),
    )
    .arg(
        Arg::new("client-type")
            .long("client-type")
            .help("INDIVIDUAL or COMPANY"),
    )
    .arg(Arg::new("hotel").long("hotel").help("Hotel / pickup point"))
    .arg(Arg::new("room").long("room").help("Room number"))
    .arg(
        Arg::new("phone")
            .long("phone")
            .required(required)
            .help("Client phone"),
    )
    .arg(
        Arg::new("trip")
            .long("trip")
            .required(required)
            .help("Trip name"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .required(required)
            .help("Trip date YYYY-MM-DD"),
    )
    .arg(Arg::new("time").long("time").help("MORNING or EVENING"))
    .arg(Arg::new("supervisor").long("supervisor").help("Supervisor name"))
    .arg(
        Arg::new("adults")
            .long("adults")
            .value_parser(value_parser!(u32)),
    )
    .arg(
        Arg::new("children")
            .long("children")
            .value_parser(value_parser!(u32)),
    )
    .arg(Arg::new("price").long("price").help("Price per person"))
    .arg(
        Arg::new("pay-method")
            .long("pay-method")
            .help("CASH, BANK_TRANSFER or E_WALLET"),
    )
    .arg(
        Arg::new("currency")
            .long("currency")
            .help("EGP, USD, EUR or GBP (display only, never converted)"),
    )
    .arg(Arg::new("paid").long("paid").help("Amount paid so far"))
    .arg(
        Arg::new("discount")
            .long("discount")
            .help("Discount percentage, 0-100"),
    )
    .arg(Arg::new("fee").long("fee").help("Delivery fee"))
    .arg(
        Arg::new("status")
            .long("status")
            .help("PENDING, CONFIRMED or CANCELED"),
    )
}

fn booking_cmd() -> Command {
    Command::new("booking")
        .about("Manage bookings")
        .subcommand(booking_record_args(
            Command::new("add").about("Record a new booking (total is computed)"),
            true,
        ))
        .subcommand(booking_record_args(
            Command::new("edit")
                .about("Update a booking; the total is recomputed from its inputs")
                .arg(id_arg()),
            false,
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a booking")
                .arg(id_arg())
                .arg(yes_flag()),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List bookings, newest first")
                .arg(Arg::new("status").long("status").help("Filter by status"))
                .arg(Arg::new("month").long("month").help("Filter by trip month YYYY-MM"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(Command::new("show").about("Show one booking in full").arg(id_arg()))
        .subcommand(
            Command::new("whatsapp")
                .about("Print a wa.me link carrying the booking summary")
                .arg(id_arg())
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(["client", "supervisor"])
                        .default_value("client"),
                ),
        )
}

fn trip_record_args(cmd: Command, required: bool) -> Command {
    cmd.arg(Arg::new("name").long("name").required(required))
        .arg(Arg::new("cost-adult").long("cost-adult"))
        .arg(Arg::new("cost-child").long("cost-child"))
        .arg(Arg::new("sell-adult").long("sell-adult"))
        .arg(Arg::new("sell-child").long("sell-child"))
        .arg(Arg::new("flight-cost").long("flight-cost"))
        .arg(Arg::new("flight-sell").long("flight-sell"))
        .arg(Arg::new("car-cost").long("car-cost"))
        .arg(Arg::new("car-sell").long("car-sell"))
}

fn trip_cmd() -> Command {
    Command::new("trip")
        .about("Manage the trip catalog")
        .subcommand(trip_record_args(
            Command::new("add").about("Add a catalog entry"),
            true,
        ))
        .subcommand(trip_record_args(
            Command::new("edit").about("Update a catalog entry").arg(id_arg()),
            false,
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a catalog entry")
                .arg(id_arg())
                .arg(yes_flag()),
        )
        .subcommand(json_flags(
            Command::new("list").about("List catalog entries, newest first"),
        ))
}

fn expense_record_args(cmd: Command, required: bool) -> Command {
    cmd.arg(
        Arg::new("category")
            .long("category")
            .required(required)
            .help("DRIVER_CUSTODY, CUSTODY_SETTLEMENT, CAR_MAINTENANCE, COMPANY_RENT, SALARIES or COMMISSIONS"),
    )
    .arg(Arg::new("desc").long("desc").required(required))
    .arg(Arg::new("amount").long("amount").required(required))
    .arg(
        Arg::new("date")
            .long("date")
            .required(required)
            .help("YYYY-MM-DD"),
    )
    .arg(
        Arg::new("pay-method")
            .long("pay-method")
            .help("CASH, BANK_TRANSFER or E_WALLET"),
    )
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Manage expenses")
        .subcommand(expense_record_args(
            Command::new("add").about("Record an expense"),
            true,
        ))
        .subcommand(expense_record_args(
            Command::new("edit").about("Update an expense").arg(id_arg()),
            false,
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete an expense")
                .arg(id_arg())
                .arg(yes_flag()),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List expenses, newest first")
                .arg(Arg::new("category").long("category").help("Filter by category"))
                .arg(Arg::new("month").long("month").help("Filter by month YYYY-MM")),
        ))
}

fn client_cmd() -> Command {
    Command::new("client")
        .about("Manage clients")
        .subcommand(
            Command::new("add")
                .about("Add a client")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("client-type")
                        .long("client-type")
                        .help("INDIVIDUAL or COMPANY"),
                )
                .arg(Arg::new("phone").long("phone")),
        )
        .subcommand(
            Command::new("edit")
                .about("Update a client")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("client-type").long("client-type"))
                .arg(Arg::new("phone").long("phone")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a client; their bookings are kept untouched")
                .arg(id_arg())
                .arg(yes_flag()),
        )
        .subcommand(json_flags(
            Command::new("list").about("List clients with their booking counts"),
        ))
        .subcommand(json_flags(
            Command::new("history")
                .about("List the bookings linked to a client")
                .arg(id_arg()),
        ))
}

fn supervisor_cmd() -> Command {
    Command::new("supervisor")
        .about("Manage supervisors")
        .subcommand(
            Command::new("add")
                .about("Add a supervisor")
                .arg(Arg::new("name").long("name").required(true))
                .arg(Arg::new("phone").long("phone")),
        )
        .subcommand(
            Command::new("edit")
                .about("Update a supervisor")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("phone").long("phone")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a supervisor; their bookings are kept untouched")
                .arg(id_arg())
                .arg(yes_flag()),
        )
        .subcommand(json_flags(
            Command::new("list").about("List supervisors with their booking counts"),
        ))
        .subcommand(json_flags(
            Command::new("history")
                .about("List the bookings linked to a supervisor")
                .arg(id_arg()),
        ))
}

fn treasury_cmd() -> Command {
    json_flags(
        Command::new("treasury")
            .about("Financial summary: per-currency revenue/expenses and per-method balances"),
    )
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Report actions (stubs; nothing is generated or sent)")
        .subcommand(Command::new("print").arg(yes_flag()))
        .subcommand(Command::new("send").arg(yes_flag()))
}

fn admin_cmd() -> Command {
    Command::new("admin")
        .about("Company settings")
        .subcommand(Command::new("show").about("Show the current settings"))
        .subcommand(
            Command::new("set-company")
                .about("Set the company name")
                .arg(Arg::new("name").long("name").required(true)),
        )
        .subcommand(
            Command::new("set-logo")
                .about("Store an image file as the company logo data URL")
                .arg(Arg::new("file").long("file").conflicts_with("remove"))
                .arg(
                    Arg::new("remove")
                        .long("remove")
                        .action(ArgAction::SetTrue)
                        .help("Clear the stored logo"),
                ),
        )
        .subcommand(
            Command::new("set-language")
                .about("Switch the interface language")
                .arg(
                    Arg::new("lang")
                        .long("lang")
                        .required(true)
                        .value_parser(["ar", "en"]),
                ),
        )
}

fn export_cmd() -> Command {
    let sub = |name: &'static str| {
        Command::new(name)
            .arg(Arg::new("out").long("out").required(true))
            .arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["csv", "json"])
                    .default_value("csv"),
            )
    };
    Command::new("export")
        .about("Dump raw records to a file")
        .subcommand(sub("bookings"))
        .subcommand(sub("expenses"))
}
