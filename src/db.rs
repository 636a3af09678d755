// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.tourdesk", "Tourdesk", "tourdesk"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tourdesk.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// One shared table per entity type; every command works against the same
/// store. Money columns hold canonical Decimal strings, dates ISO strings.
/// Booking person links are nullable and SET NULL on delete so removing a
/// client or supervisor never removes or rewrites a booking.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS clients(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        client_type TEXT NOT NULL DEFAULT 'INDIVIDUAL',
        phone TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS supervisors(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        phone TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS trips(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        cost_adult TEXT NOT NULL DEFAULT '0',
        cost_child TEXT NOT NULL DEFAULT '0',
        sell_price TEXT NOT NULL DEFAULT '0',
        sell_price_child TEXT NOT NULL DEFAULT '0',
        flight_cost TEXT NOT NULL DEFAULT '0',
        flight_sell_price TEXT NOT NULL DEFAULT '0',
        car_cost TEXT NOT NULL DEFAULT '0',
        car_sell_price TEXT NOT NULL DEFAULT '0',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS bookings(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        client_name TEXT NOT NULL,
        client_type TEXT NOT NULL DEFAULT 'INDIVIDUAL',
        client_id INTEGER,
        hotel TEXT NOT NULL DEFAULT '',
        room_number TEXT NOT NULL DEFAULT '',
        adults INTEGER NOT NULL DEFAULT 0,
        children INTEGER NOT NULL DEFAULT 0,
        phone TEXT NOT NULL DEFAULT '',
        trip_name TEXT NOT NULL,
        trip_date TEXT NOT NULL,
        trip_time TEXT NOT NULL DEFAULT 'MORNING',
        price_per_person TEXT NOT NULL DEFAULT '0',
        supervisor_name TEXT NOT NULL DEFAULT '',
        supervisor_id INTEGER,
        payment_method TEXT NOT NULL DEFAULT 'CASH',
        currency TEXT,
        paid TEXT NOT NULL DEFAULT '0',
        discount TEXT NOT NULL DEFAULT '0',
        delivery_fee TEXT NOT NULL DEFAULT '0',
        total TEXT NOT NULL,
        status TEXT NOT NULL DEFAULT 'PENDING',
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        FOREIGN KEY(client_id) REFERENCES clients(id) ON DELETE SET NULL,
        FOREIGN KEY(supervisor_id) REFERENCES supervisors(id) ON DELETE SET NULL
    );
    CREATE INDEX IF NOT EXISTS idx_bookings_trip_date ON bookings(trip_date);
    CREATE INDEX IF NOT EXISTS idx_bookings_client ON bookings(client_id);
    CREATE INDEX IF NOT EXISTS idx_bookings_supervisor ON bookings(supervisor_id);

    CREATE TABLE IF NOT EXISTS expenses(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        category TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        amount TEXT NOT NULL,
        date TEXT NOT NULL,
        payment_method TEXT NOT NULL DEFAULT 'CASH',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
    "#,
    )?;
    Ok(())
}
