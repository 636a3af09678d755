// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tourdesk::commands::{bookings, exporter, expenses};
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
        Some(("export", sub)) => exporter::handle(conn, sub).unwrap(),
        other => panic!("unhandled subcommand {:?}", other.map(|(n, _)| n)),
    }
}

fn populate(conn: &Connection) {
    run(
        conn,
        &[
            "tourdesk", "booking", "add", "--client", "Ahmed Mahmoud", "--phone",
            "01234567890", "--trip", "Pyramids", "--date", "2024-08-15", "--adults", "2",
            "--children", "1", "--price", "500", "--fee", "50", "--paid", "1500",
        ],
    );
    run(
        conn,
        &[
            "tourdesk", "expense", "add", "--category", "salaries", "--desc",
            "August payroll", "--amount", "5000", "--date", "2024-08-31",
        ],
    );
}

#[test]
fn bookings_export_defaults_to_csv() {
    let conn = setup();
    populate(&conn);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bookings.csv");
    run(
        &conn,
        &["tourdesk", "export", "bookings", "--out", out.to_str().unwrap()],
    );
    let content = std::fs::read_to_string(&out).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "date,client,trip,adults,children,price,discount,fee,paid,total,currency,status"
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("2024-08-15,Ahmed Mahmoud,Pyramids,2,1,"));
    assert!(row.contains(",1550,EGP,PENDING"));
    assert!(lines.next().is_none());
}

#[test]
fn bookings_export_as_json() {
    let conn = setup();
    populate(&conn);
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("bookings.json");
    run(
        &conn,
        &[
            "tourdesk", "export", "bookings", "--out", out.to_str().unwrap(), "--format",
            "json",
        ],
    );
    let items: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["client"], "Ahmed Mahmoud");
    assert_eq!(items[0]["total"], "1550");
    assert_eq!(items[0]["adults"], 2);
}

#[test]
fn expenses_export_csv_and_json_agree() {
    let conn = setup();
    populate(&conn);
    let dir = tempfile::tempdir().unwrap();

    let csv_out = dir.path().join("expenses.csv");
    run(
        &conn,
        &["tourdesk", "export", "expenses", "--out", csv_out.to_str().unwrap()],
    );
    let content = std::fs::read_to_string(&csv_out).unwrap();
    assert!(content.starts_with("date,category,description,amount,method\n"));
    assert!(content.contains("2024-08-31,SALARIES,August payroll,5000,CASH"));

    let json_out = dir.path().join("expenses.json");
    run(
        &conn,
        &[
            "tourdesk", "export", "expenses", "--out", json_out.to_str().unwrap(),
            "--format", "json",
        ],
    );
    let items: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(items[0]["category"], "SALARIES");
    assert_eq!(items[0]["amount"], "5000");
}

#[test]
fn empty_store_exports_just_the_header() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.csv");
    run(
        &conn,
        &["tourdesk", "export", "bookings", "--out", out.to_str().unwrap()],
    );
    let content = std::fs::read_to_string(&out).unwrap();
    assert_eq!(content.lines().count(), 1);
}
