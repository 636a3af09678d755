// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tourdesk::commands::{bookings, clients, doctor};
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
        Some(("client", sub)) => clients::handle(conn, sub).unwrap(),
        other => panic!("unhandled subcommand {:?}", other.map(|(n, _)| n)),
    }
}

fn add_booking(conn: &Connection) {
    run(
        conn,
        &[
            "tourdesk", "booking", "add", "--client", "Ahmed", "--phone", "0100", "--trip",
            "Pyramids", "--date", "2024-08-15", "--adults", "2", "--price", "500",
        ],
    );
}

fn issues(conn: &Connection) -> Vec<String> {
    doctor::findings(conn)
        .unwrap()
        .into_iter()
        .map(|row| row[0].clone())
        .collect()
}

#[test]
fn healthy_store_has_no_findings() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking(&conn);
    assert!(issues(&conn).is_empty());
}

#[test]
fn tampered_total_is_reported() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking(&conn);
    conn.execute("UPDATE bookings SET total='9999' WHERE id=1", [])
        .unwrap();
    assert_eq!(issues(&conn), vec!["stored_total_mismatch"]);
}

#[test]
fn out_of_range_discount_is_reported() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking(&conn);
    // the stored total still matches what the bad discount computes to,
    // so only the range finding fires
    conn.execute(
        "UPDATE bookings SET discount='150', total='-500' WHERE id=1",
        [],
    )
    .unwrap();
    assert_eq!(issues(&conn), vec!["discount_out_of_range"]);
}

#[test]
fn negative_amounts_are_reported() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking(&conn);
    conn.execute("UPDATE bookings SET paid='-100' WHERE id=1", [])
        .unwrap();
    assert_eq!(issues(&conn), vec!["negative_amount"]);
}

#[test]
fn unlinked_client_name_is_reported() {
    let conn = setup();
    add_booking(&conn); // no such client exists
    assert_eq!(issues(&conn), vec!["client_not_linked"]);
}

#[test]
fn renamed_client_shows_up_as_name_drift() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking(&conn);
    run(
        &conn,
        &["tourdesk", "client", "edit", "--id", "1", "--name", "Ahmed Mahmoud"],
    );
    assert_eq!(issues(&conn), vec!["client_name_drift"]);
}

#[test]
fn unknown_supervisor_name_is_reported() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "Ahmed", "--phone", "0100", "--trip",
            "Pyramids", "--date", "2024-08-15", "--supervisor", "Ghost",
        ],
    );
    assert_eq!(issues(&conn), vec!["supervisor_not_linked"]);
}

#[test]
fn unknown_expense_category_is_reported() {
    let conn = setup();
    conn.execute(
        "INSERT INTO expenses(category, description, amount, date, payment_method) \
         VALUES ('FUEL', 'x', '10', '2024-08-15', 'CASH')",
        [],
    )
    .unwrap();
    assert_eq!(issues(&conn), vec!["unknown_expense_category"]);
}
