// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use tourdesk::commands::bookings::{self, BookingRow};
use tourdesk::settings::Settings;
use tourdesk::{cli, db};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

fn run(conn: &Connection, args: &[&str]) {
    let matches = cli::build_cli().get_matches_from(args);
    if let Some(("booking", sub)) = matches.subcommand() {
        bookings::handle(conn, sub).unwrap();
    } else {
        panic!("no booking subcommand");
    }
}

fn list_rows(conn: &Connection) -> Vec<BookingRow> {
    let matches = cli::build_cli().get_matches_from(["tourdesk", "booking", "list"]);
    if let Some(("booking", bm)) = matches.subcommand() {
        if let Some(("list", lm)) = bm.subcommand() {
            return bookings::query_rows(conn, lm).unwrap();
        }
    }
    panic!("no list subcommand");
}

fn add_family_booking(conn: &Connection) {
    run(
        conn,
        &[
            "tourdesk", "booking", "add", "--client", "Ahmed Mahmoud", "--phone",
            "01234567890", "--trip", "Pyramids", "--date", "2024-08-15", "--adults", "2",
            "--children", "1", "--price", "500", "--fee", "50", "--paid", "1500",
        ],
    );
}

#[test]
fn add_computes_total_and_lands_at_head() {
    let conn = setup();
    add_family_booking(&conn);
    let rows = list_rows(&conn);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total, "1550");
    assert_eq!(rows[0].remaining, "50");

    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "Al Nour", "--phone", "01098765432",
            "--trip", "Luxor", "--date", "2024-09-01", "--adults", "15", "--children", "5",
            "--price", "2500", "--discount", "5", "--paid", "40000",
        ],
    );
    let rows = list_rows(&conn);
    assert_eq!(rows.len(), 2);
    // newest first
    assert_eq!(rows[0].client, "Al Nour");
    assert_eq!(rows[0].total, "47500");
    assert_eq!(rows[1].client, "Ahmed Mahmoud");
}

#[test]
fn add_defaults_to_one_adult_and_no_children() {
    let conn = setup();
    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "Solo", "--phone", "0100", "--trip",
            "Old Cairo", "--date", "2024-08-20", "--price", "300",
        ],
    );
    let rows = list_rows(&conn);
    assert_eq!(rows[0].guests, "1 + 0");
    assert_eq!(rows[0].total, "300");
}

#[test]
fn edit_recomputes_total_from_inputs() {
    let conn = setup();
    add_family_booking(&conn);
    run(
        &conn,
        &["tourdesk", "booking", "edit", "--id", "1", "--discount", "50"],
    );
    let rows = list_rows(&conn);
    // subtotal 1500 halved plus the 50 fee
    assert_eq!(rows[0].total, "800");
}

#[test]
fn unchanged_edit_is_idempotent() {
    let conn = setup();
    add_family_booking(&conn);
    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "Second", "--phone", "0100",
            "--trip", "Old Cairo", "--date", "2024-08-20", "--price", "300",
        ],
    );
    let before = serde_json::to_value(list_rows(&conn)).unwrap();
    run(&conn, &["tourdesk", "booking", "edit", "--id", "1"]);
    let after = serde_json::to_value(list_rows(&conn)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn edit_of_unknown_id_changes_nothing() {
    let conn = setup();
    add_family_booking(&conn);
    let before = serde_json::to_value(list_rows(&conn)).unwrap();
    run(
        &conn,
        &["tourdesk", "booking", "edit", "--id", "99", "--discount", "50"],
    );
    let after = serde_json::to_value(list_rows(&conn)).unwrap();
    assert_eq!(before, after);
}

#[test]
fn delete_removes_exactly_one_and_keeps_order() {
    let conn = setup();
    for name in ["first", "second", "third"] {
        run(
            &conn,
            &[
                "tourdesk", "booking", "add", "--client", name, "--phone", "0100", "--trip",
                "T", "--date", "2024-08-15",
            ],
        );
    }
    run(&conn, &["tourdesk", "booking", "rm", "--id", "2", "--yes"]);
    let rows = list_rows(&conn);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 3);
    assert_eq!(rows[1].id, 1);
}

#[test]
fn delete_of_unknown_id_is_a_noop() {
    let conn = setup();
    add_family_booking(&conn);
    run(&conn, &["tourdesk", "booking", "rm", "--id", "42", "--yes"]);
    assert_eq!(list_rows(&conn).len(), 1);
}

#[test]
fn status_filter_narrows_the_listing() {
    let conn = setup();
    add_family_booking(&conn);
    run(
        &conn,
        &[
            "tourdesk", "booking", "add", "--client", "C", "--phone", "0100", "--trip", "T",
            "--date", "2024-08-16", "--status", "confirmed",
        ],
    );
    let matches = cli::build_cli().get_matches_from([
        "tourdesk", "booking", "list", "--status", "confirmed",
    ]);
    if let Some(("booking", bm)) = matches.subcommand() {
        if let Some(("list", lm)) = bm.subcommand() {
            let rows = bookings::query_rows(&conn, lm).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].status, "CONFIRMED");
            return;
        }
    }
    panic!("no list subcommand");
}

#[test]
fn whatsapp_message_carries_financials_in_arabic_by_default() {
    let conn = setup();
    add_family_booking(&conn);
    let booking = bookings::get_booking(&conn, 1).unwrap().unwrap();
    let msg = bookings::whatsapp_message(&booking, &Settings::default());
    assert!(msg.contains("تفاصيل الحجز"));
    assert!(msg.contains("Ahmed Mahmoud"));
    assert!(msg.contains("1550"));
    assert!(msg.contains("1500"));
    assert!(msg.contains("50"));
}

#[test]
fn whatsapp_message_switches_language() {
    let conn = setup();
    add_family_booking(&conn);
    let booking = bookings::get_booking(&conn, 1).unwrap().unwrap();
    let settings = Settings {
        company_name: "Sunrise Tours".into(),
        language: tourdesk::i18n::Lang::En,
        ..Settings::default()
    };
    let msg = bookings::whatsapp_message(&booking, &settings);
    assert!(msg.starts_with("*Sunrise Tours*"));
    assert!(msg.contains("Booking details"));
    assert!(msg.contains("Remaining"));
}

#[test]
fn whatsapp_url_is_percent_encoded() {
    let url = bookings::whatsapp_url("01234567890", "hello world *bold*");
    assert!(url.starts_with("https://wa.me/01234567890?text="));
    assert!(url.contains("hello%20world"));
    assert!(!url.contains(' '));
}
