// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::clients::print_history;
use crate::utils::{confirm, maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("history", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            print_history(conn, "supervisor_id", id, sub)?;
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let phone = sub.get_one::<String>("phone").cloned().unwrap_or_default();
    conn.execute(
        "INSERT INTO supervisors(name, phone) VALUES (?1, ?2)",
        params![name, phone],
    )?;
    println!("Added supervisor #{} '{}'", conn.last_insert_rowid(), name);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let existing: Option<(String, String)> = conn
        .query_row(
            "SELECT name, phone FROM supervisors WHERE id=?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?)),
        )
        .optional()?;
    let Some((mut name, mut phone)) = existing else {
        println!("No supervisor with id {}", id);
        return Ok(());
    };
    if let Some(v) = sub.get_one::<String>("name") {
        name = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("phone") {
        phone = v.clone();
    }
    conn.execute(
        "UPDATE supervisors SET name=?1, phone=?2 WHERE id=?3",
        params![name, phone, id],
    )?;
    println!("Updated supervisor #{}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !confirm(&format!("Delete supervisor #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted.");
        return Ok(());
    }
    let n = conn.execute("DELETE FROM supervisors WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No supervisor with id {}", id);
    } else {
        println!("Deleted supervisor #{}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct SupervisorRow {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub total_trips: i64,
}

pub fn query_rows(conn: &Connection) -> Result<Vec<SupervisorRow>> {
    let mut stmt = conn.prepare(
        "SELECT s.id, s.name, s.phone,
                (SELECT COUNT(*) FROM bookings b WHERE b.supervisor_id=s.id) AS total_trips
         FROM supervisors s ORDER BY s.id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(SupervisorRow {
            id: r.get(0)?,
            name: r.get(1)?,
            phone: r.get(2)?,
            total_trips: r.get(3)?,
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
                    r.phone.clone(),
                    r.total_trips.to_string(),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["ID", "Name", "Phone", "Trips"], rows));
    }
    Ok(())
}
