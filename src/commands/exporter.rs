// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("bookings", sub)) => export_bookings(conn, sub),
        Some(("expenses", sub)) => export_expenses(conn, sub),
        _ => Ok(()),
    }
}

fn export_bookings(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().as_str();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT trip_date, client_name, trip_name, adults, children, price_per_person, \
         discount, delivery_fee, paid, total, COALESCE(currency,'EGP'), status \
         FROM bookings ORDER BY trip_date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, u32>(3)?,
            r.get::<_, u32>(4)?,
            r.get::<_, String>(5)?,
            r.get::<_, String>(6)?,
            r.get::<_, String>(7)?,
            r.get::<_, String>(8)?,
            r.get::<_, String>(9)?,
            r.get::<_, String>(10)?,
            r.get::<_, String>(11)?,
        ))
    })?;

    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "client", "trip", "adults", "children", "price", "discount", "fee",
                "paid", "total", "currency", "status",
            ])?;
            for row in rows {
                let (d, client, trip, a, c, price, disc, fee, paid, total, ccy, status) = row?;
                wtr.write_record([
                    d,
                    client,
                    trip,
                    a.to_string(),
                    c.to_string(),
                    price,
                    disc,
                    fee,
                    paid,
                    total,
                    ccy,
                    status,
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (d, client, trip, a, c, price, disc, fee, paid, total, ccy, status) = row?;
                items.push(json!({
                    "date": d, "client": client, "trip": trip, "adults": a, "children": c,
                    "price": price, "discount": disc, "fee": fee, "paid": paid,
                    "total": total, "currency": ccy, "status": status
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => unreachable!("format is validated by clap"),
    }
    println!("Exported bookings to {}", out);
    Ok(())
}

fn export_expenses(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().as_str();
    let out = sub.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT date, category, description, amount, payment_method FROM expenses \
         ORDER BY date, id",
    )?;
    let rows = stmt.query_map([], |r| {
        Ok((
            r.get::<_, String>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, String>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
        ))
    })?;

    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["date", "category", "description", "amount", "method"])?;
            for row in rows {
                let (d, cat, desc, amount, method) = row?;
                wtr.write_record([d, cat, desc, amount, method])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (d, cat, desc, amount, method) = row?;
                items.push(json!({
                    "date": d, "category": cat, "description": desc,
                    "amount": amount, "method": method
                }));
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => unreachable!("format is validated by clap"),
    }
    println!("Exported expenses to {}", out);
    Ok(())
}
