// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ClientType;
use crate::utils::{confirm, maybe_print_json, parse_keyword, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("history", sub)) => history(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let client_type: ClientType = sub
        .get_one::<String>("client-type")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(ClientType::Individual);
    let phone = sub.get_one::<String>("phone").cloned().unwrap_or_default();
    conn.execute(
        "INSERT INTO clients(name, client_type, phone) VALUES (?1, ?2, ?3)",
        params![name, client_type.as_str(), phone],
    )?;
    println!(
        "Added client #{} '{}' ({})",
        conn.last_insert_rowid(),
        name,
        client_type
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let existing: Option<(String, String, String)> = conn
        .query_row(
            "SELECT name, client_type, phone FROM clients WHERE id=?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?)),
        )
        .optional()?;
    let Some((mut name, mut client_type, mut phone)) = existing else {
        println!("No client with id {}", id);
        return Ok(());
    };
    if let Some(v) = sub.get_one::<String>("name") {
        name = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("client-type") {
        client_type = parse_keyword::<ClientType>(v)?.as_str().to_string();
    }
    if let Some(v) = sub.get_one::<String>("phone") {
        phone = v.clone();
    }
    conn.execute(
        "UPDATE clients SET name=?1, client_type=?2, phone=?3 WHERE id=?4",
        params![name, client_type, phone, id],
    )?;
    println!("Updated client #{}", id);
    Ok(())
}

// Bookings are left as they are: the name snapshot stays, the link is
// nulled by the FK. No cascade.
fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !confirm(&format!("Delete client #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted.");
        return Ok(());
    }
    let n = conn.execute("DELETE FROM clients WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No client with id {}", id);
    } else {
        println!("Deleted client #{}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ClientRow {
    pub id: i64,
    pub name: String,
    pub client_type: String,
    pub phone: String,
    pub total_trips: i64,
}

pub fn query_rows(conn: &Connection) -> Result<Vec<ClientRow>> {
    let mut stmt = conn.prepare(
        "SELECT c.id, c.name, c.client_type, c.phone,
                (SELECT COUNT(*) FROM bookings b WHERE b.client_id=c.id) AS total_trips
         FROM clients c ORDER BY c.id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(ClientRow {
            id: r.get(0)?,
            name: r.get(1)?,
            client_type: r.get(2)?,
            phone: r.get(3)?,
            total_trips: r.get(4)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.name.clone(),
                    r.client_type.clone(),
                    r.phone.clone(),
                    r.total_trips.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Name", "Type", "Phone", "Trips"], rows)
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct HistoryRow {
    pub booking_id: i64,
    pub trip: String,
    pub date: String,
    pub total: String,
    pub paid: String,
    pub status: String,
}

/// Read-only view of the bookings linked to one person, newest first.
pub fn history_rows(conn: &Connection, column: &str, person_id: i64) -> Result<Vec<HistoryRow>> {
    // column is always a compile-time constant ("client_id"/"supervisor_id")
    let sql = format!(
        "SELECT id, trip_name, trip_date, total, paid, status FROM bookings \
         WHERE {}=?1 ORDER BY id DESC",
        column
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![person_id], |r| {
        Ok(HistoryRow {
            booking_id: r.get(0)?,
            trip: r.get(1)?,
            date: r.get(2)?,
            total: r.get(3)?,
            paid: r.get(4)?,
            status: r.get(5)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}

pub fn print_history(
    conn: &Connection,
    column: &str,
    person_id: i64,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = history_rows(conn, column, person_id)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.booking_id.to_string(),
                    r.trip.clone(),
                    r.date.clone(),
                    r.total.clone(),
                    r.paid.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Booking", "Trip", "Date", "Total", "Paid", "Status"], rows)
        );
    }
    Ok(())
}

fn history(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    print_history(conn, "client_id", id, sub)
}
