// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{confirm, maybe_print_json, parse_amount, pretty_table};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        _ => {}
    }
    Ok(())
}

// (arg name, column) for the eight catalog money fields.
const MONEY_FIELDS: [(&str, &str); 8] = [
    ("cost-adult", "cost_adult"),
    ("cost-child", "cost_child"),
    ("sell-adult", "sell_price"),
    ("sell-child", "sell_price_child"),
    ("flight-cost", "flight_cost"),
    ("flight-sell", "flight_sell_price"),
    ("car-cost", "car_cost"),
    ("car-sell", "car_sell_price"),
];

fn money_arg(sub: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    sub.get_one::<String>(name).map(|s| parse_amount(s)).transpose()
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let mut values = Vec::with_capacity(MONEY_FIELDS.len());
    for (arg, _) in MONEY_FIELDS {
        values.push(money_arg(sub, arg)?.unwrap_or(Decimal::ZERO).to_string());
    }
    conn.execute(
        "INSERT INTO trips(name, cost_adult, cost_child, sell_price, sell_price_child, \
         flight_cost, flight_sell_price, car_cost, car_sell_price)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
        params![
            name, values[0], values[1], values[2], values[3], values[4], values[5], values[6],
            values[7]
        ],
    )?;
    println!("Added trip #{} '{}'", conn.last_insert_rowid(), name);
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let exists: Option<i64> = conn
        .query_row("SELECT id FROM trips WHERE id=?1", params![id], |r| r.get(0))
        .optional()?;
    if exists.is_none() {
        println!("No trip with id {}", id);
        return Ok(());
    }
    if let Some(v) = sub.get_one::<String>("name") {
        conn.execute(
            "UPDATE trips SET name=?1 WHERE id=?2",
            params![v.trim(), id],
        )?;
    }
    for (arg, column) in MONEY_FIELDS {
        if let Some(v) = money_arg(sub, arg)? {
            let sql = format!("UPDATE trips SET {}=?1 WHERE id=?2", column);
            conn.execute(&sql, params![v.to_string(), id])?;
        }
    }
    println!("Updated trip #{}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !confirm(&format!("Delete trip #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted.");
        return Ok(());
    }
    let n = conn.execute("DELETE FROM trips WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No trip with id {}", id);
    } else {
        println!("Deleted trip #{}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TripRow {
    pub id: i64,
    pub name: String,
    pub sell_adult: String,
    pub sell_child: String,
    pub cost_adult: String,
    pub cost_child: String,
    pub flight_sell: String,
    pub car_sell: String,
}

pub fn query_rows(conn: &Connection) -> Result<Vec<TripRow>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, sell_price, sell_price_child, cost_adult, cost_child, \
         flight_sell_price, car_sell_price FROM trips ORDER BY id DESC",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok(TripRow {
            id: r.get(0)?,
            name: r.get(1)?,
            sell_adult: r.get(2)?,
            sell_child: r.get(3)?,
            cost_adult: r.get(4)?,
            cost_child: r.get(5)?,
            flight_sell: r.get(6)?,
            car_sell: r.get(7)?,
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
                    r.sell_adult.clone(),
                    r.sell_child.clone(),
                    r.cost_adult.clone(),
                    r.cost_child.clone(),
                    r.flight_sell.clone(),
                    r.car_sell.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID",
                    "Name",
                    "Sell (adult)",
                    "Sell (child)",
                    "Cost (adult)",
                    "Cost (child)",
                    "Flight sell",
                    "Car sell"
                ],
                rows
            )
        );
    }
    Ok(())
}
