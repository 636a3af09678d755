// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tourdesk::commands::{bookings, expenses, treasury};
use tourdesk::{cli, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run(conn: &Connection, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    match matches.subcommand() {
        Some(("booking", sub)) => bookings::handle(conn, sub).unwrap(),
        Some(("expense", sub)) => expenses::handle(conn, sub).unwrap(),
        other => panic!("unhandled subcommand {:?}", other.map(|(n, _)| n)),
    }
}

fn add_booking(conn: &Connection, paid: &str, extra: &[&str]) {
    let mut args = vec![
        "tourdesk", "booking", "add", "--client", "C", "--phone", "0100", "--trip", "T",
        "--date", "2024-08-15", "--paid", paid,
    ];
    args.extend_from_slice(extra);
    run(conn, &args);
}

#[test]
fn empty_store_reports_a_zero_egp_line() {
    let conn = setup();
    let summary = treasury::summarize(&conn).unwrap();
    assert_eq!(summary.by_currency.len(), 1);
    assert_eq!(summary.by_currency[0].currency, "EGP");
    assert_eq!(summary.by_currency[0].net, "0.00");
    assert!(summary.by_method.is_empty());
}

#[test]
fn revenue_and_expenses_net_out_per_currency() {
    let conn = setup();
    add_booking(&conn, "1500", &[]);
    add_booking(&conn, "300", &[]);
    run(
        &conn,
        &[
            "tourdesk", "expense", "add", "--category", "car-maintenance", "--desc",
            "Bus service", "--amount", "500", "--date", "2024-08-15",
        ],
    );
    let summary = treasury::summarize(&conn).unwrap();
    let egp = &summary.by_currency[0];
    assert_eq!(egp.currency, "EGP");
    assert_eq!(egp.revenue, "1800.00");
    assert_eq!(egp.expenses, "500.00");
    assert_eq!(egp.net, "1300.00");
}

#[test]
fn currencies_are_never_mixed() {
    let conn = setup();
    add_booking(&conn, "1000", &[]);
    add_booking(&conn, "200", &["--currency", "usd"]);
    let summary = treasury::summarize(&conn).unwrap();
    assert_eq!(summary.by_currency.len(), 2);
    // BTreeMap order: EGP before USD
    assert_eq!(summary.by_currency[0].currency, "EGP");
    assert_eq!(summary.by_currency[0].revenue, "1000.00");
    assert_eq!(summary.by_currency[1].currency, "USD");
    assert_eq!(summary.by_currency[1].revenue, "200.00");
    // expenses only ever land on the EGP line
    assert_eq!(summary.by_currency[1].expenses, "0.00");
}

#[test]
fn canceled_bookings_contribute_nothing() {
    let conn = setup();
    add_booking(&conn, "1000", &[]);
    add_booking(&conn, "999", &["--status", "canceled"]);
    let summary = treasury::summarize(&conn).unwrap();
    assert_eq!(summary.by_currency[0].revenue, "1000.00");
}

#[test]
fn methods_track_inflow_and_outflow_separately() {
    let conn = setup();
    add_booking(&conn, "1000", &[]); // cash by default
    add_booking(&conn, "400", &["--pay-method", "e-wallet"]);
    run(
        &conn,
        &[
            "tourdesk", "expense", "add", "--category", "salaries", "--desc",
            "August payroll", "--amount", "250", "--date", "2024-08-15", "--pay-method",
            "cash",
        ],
    );
    let summary = treasury::summarize(&conn).unwrap();
    let cash = summary.by_method.iter().find(|m| m.method == "CASH").unwrap();
    assert_eq!(cash.currency, "EGP");
    assert_eq!(cash.inflow, "1000.00");
    assert_eq!(cash.outflow, "250.00");
    assert_eq!(cash.balance, "750.00");
    let wallet = summary
        .by_method
        .iter()
        .find(|m| m.method == "E_WALLET")
        .unwrap();
    assert_eq!(wallet.inflow, "400.00");
    assert_eq!(wallet.outflow, "0.00");
}

#[test]
fn one_method_keeps_currencies_on_separate_lines() {
    let conn = setup();
    add_booking(&conn, "1000", &[]); // cash, EGP
    add_booking(&conn, "200", &["--currency", "usd"]); // cash, USD
    let summary = treasury::summarize(&conn).unwrap();

    let cash_lines: Vec<_> = summary
        .by_method
        .iter()
        .filter(|m| m.method == "CASH")
        .collect();
    assert_eq!(cash_lines.len(), 2);
    let egp = cash_lines.iter().find(|m| m.currency == "EGP").unwrap();
    assert_eq!(egp.inflow, "1000.00");
    let usd = cash_lines.iter().find(|m| m.currency == "USD").unwrap();
    assert_eq!(usd.inflow, "200.00");
    // never a converted or cross-currency sum
    assert!(summary.by_method.iter().all(|m| m.inflow != "1200.00"));
}
