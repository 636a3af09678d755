// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tourdesk::commands::{bookings, clients, supervisors};
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
        Some(("supervisor", sub)) => supervisors::handle(conn, sub).unwrap(),
        other => panic!("unhandled subcommand {:?}", other.map(|(n, _)| n)),
    }
}

fn add_booking_for(conn: &Connection, client: &str, trip: &str) {
    run(
        conn,
        &[
            "tourdesk", "booking", "add", "--client", client, "--phone", "0100", "--trip",
            trip, "--date", "2024-08-15", "--price", "100", "--adults", "1",
        ],
    );
}

#[test]
fn booking_links_to_existing_client_by_name() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking_for(&conn, "Ahmed", "Pyramids");
    let client_id: Option<i64> = conn
        .query_row("SELECT client_id FROM bookings WHERE id=1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(client_id, Some(1));
}

#[test]
fn unknown_client_name_stays_free_text() {
    let conn = setup();
    add_booking_for(&conn, "Nobody", "Pyramids");
    let client_id: Option<i64> = conn
        .query_row("SELECT client_id FROM bookings WHERE id=1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(client_id, None);
}

#[test]
fn deleting_a_client_leaves_their_bookings_untouched() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking_for(&conn, "Ahmed", "Pyramids");
    add_booking_for(&conn, "Ahmed", "Luxor");

    run(&conn, &["tourdesk", "client", "rm", "--id", "1", "--yes"]);

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM bookings", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 2);
    // the snapshot survives, only the link is nulled
    let (name, client_id): (String, Option<i64>) = conn
        .query_row(
            "SELECT client_name, client_id FROM bookings WHERE id=1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .unwrap();
    assert_eq!(name, "Ahmed");
    assert_eq!(client_id, None);
}

#[test]
fn history_lists_only_linked_bookings_newest_first() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    run(&conn, &["tourdesk", "client", "add", "--name", "Sara"]);
    add_booking_for(&conn, "Ahmed", "Pyramids");
    add_booking_for(&conn, "Sara", "Old Cairo");
    add_booking_for(&conn, "Ahmed", "Luxor");

    let rows = clients::history_rows(&conn, "client_id", 1).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].trip, "Luxor");
    assert_eq!(rows[1].trip, "Pyramids");
}

#[test]
fn client_listing_counts_linked_bookings() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    run(&conn, &["tourdesk", "client", "add", "--name", "Sara"]);
    add_booking_for(&conn, "Ahmed", "Pyramids");
    add_booking_for(&conn, "Ahmed", "Luxor");

    let rows = clients::query_rows(&conn).unwrap();
    // newest first: Sara then Ahmed
    assert_eq!(rows[0].name, "Sara");
    assert_eq!(rows[0].total_trips, 0);
    assert_eq!(rows[1].name, "Ahmed");
    assert_eq!(rows[1].total_trips, 2);
}

#[test]
fn supervisor_history_uses_the_supervisor_link() {
    let conn = setup();
    run(
        &conn,
        &["tourdesk", "supervisor", "add", "--name", "Mohamed", "--phone", "01001001001"],
    );
    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "Ahmed", "--phone", "0100", "--trip",
            "Pyramids", "--date", "2024-08-15", "--supervisor", "Mohamed",
        ],
    );
    let rows = clients::history_rows(&conn, "supervisor_id", 1).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].trip, "Pyramids");

    let sups = supervisors::query_rows(&conn).unwrap();
    assert_eq!(sups[0].total_trips, 1);
}

#[test]
fn renaming_a_client_does_not_rewrite_booking_snapshots() {
    let conn = setup();
    run(&conn, &["tourdesk", "client", "add", "--name", "Ahmed"]);
    add_booking_for(&conn, "Ahmed", "Pyramids");
    run(
        &conn,
        &["tourdesk", "client", "edit", "--id", "1", "--name", "Ahmed Mahmoud"],
    );
    let name: String = conn
        .query_row("SELECT client_name FROM bookings WHERE id=1", [], |r| r.get(0))
        .unwrap();
    assert_eq!(name, "Ahmed");
}
