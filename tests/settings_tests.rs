// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, params};
use std::io::Write as _;
use tourdesk::db;
use tourdesk::i18n::Lang;
use tourdesk::settings::{self, SETTINGS_KEY, Settings};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn fresh_store_loads_defaults() {
    let conn = setup();
    let s = settings::load(&conn);
    assert_eq!(s, Settings::default());
    assert_eq!(s.language, Lang::Ar);
}

#[test]
fn save_then_load_round_trips() {
    let conn = setup();
    let s = Settings {
        company_name: "Sunrise Tours".into(),
        company_logo: "data:image/png;base64,AAAA".into(),
        language: Lang::En,
    };
    settings::save(&conn, &s).unwrap();
    assert_eq!(settings::load(&conn), s);
}

#[test]
fn default_settings_are_not_written() {
    let conn = setup();
    settings::save(&conn, &Settings::default()).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings", [], |r| r.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn stored_json_uses_camel_case_under_the_fixed_key() {
    let conn = setup();
    let s = Settings {
        company_name: "Sunrise Tours".into(),
        ..Settings::default()
    };
    settings::save(&conn, &s).unwrap();
    let raw: String = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![SETTINGS_KEY],
            |r| r.get(0),
        )
        .unwrap();
    let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(v["companyName"], "Sunrise Tours");
    assert_eq!(v["language"], "ar");
}

#[test]
fn corrupt_stored_settings_fall_back_to_defaults() {
    let conn = setup();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)",
        params![SETTINGS_KEY, "{not json"],
    )
    .unwrap();
    assert_eq!(settings::load(&conn), Settings::default());
}

#[test]
fn partial_json_fills_missing_fields_with_defaults() {
    let conn = setup();
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)",
        params![SETTINGS_KEY, r#"{"companyName":"Sunrise Tours"}"#],
    )
    .unwrap();
    let s = settings::load(&conn);
    assert_eq!(s.company_name, "Sunrise Tours");
    assert_eq!(s.language, Lang::Ar);
    assert!(s.company_logo.is_empty());
}

#[test]
fn logo_file_becomes_a_data_url() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&[0x89, b'P', b'N', b'G']).unwrap();

    let url = settings::logo_data_url(&path).unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn unknown_logo_extension_gets_a_generic_mime() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.bin");
    std::fs::write(&path, b"xx").unwrap();

    let url = settings::logo_data_url(&path).unwrap();
    assert!(url.starts_with("data:application/octet-stream;base64,"));
}
