// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ExpenseCategory;
use crate::pricing;
use crate::utils::{parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = findings(conn)?;
    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}

/// Integrity sweep over the store. Findings are reported, never repaired.
pub fn findings(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Booking money columns: stored total vs the pricing formula,
    //    discount range, negative amounts.
    let mut stmt = conn.prepare(
        "SELECT id, adults, children, price_per_person, discount, delivery_fee, paid, total \
         FROM bookings ORDER BY id",
    )?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let adults: u32 = r.get(1)?;
        let children: u32 = r.get(2)?;
        let price = parse_decimal(&r.get::<_, String>(3)?)?;
        let discount = parse_decimal(&r.get::<_, String>(4)?)?;
        let fee = parse_decimal(&r.get::<_, String>(5)?)?;
        let paid = parse_decimal(&r.get::<_, String>(6)?)?;
        let total = parse_decimal(&r.get::<_, String>(7)?)?;

        let expected = pricing::booking_total(adults, children, price, discount, fee);
        if expected != total {
            rows.push(vec![
                "stored_total_mismatch".into(),
                format!("booking #{}: stored {} recomputed {}", id, total, expected),
            ]);
        }
        if discount < Decimal::ZERO || discount > Decimal::ONE_HUNDRED {
            rows.push(vec![
                "discount_out_of_range".into(),
                format!("booking #{}: {}", id, discount),
            ]);
        }
        for (label, v) in [("price_per_person", price), ("delivery_fee", fee), ("paid", paid)] {
            if v < Decimal::ZERO {
                rows.push(vec![
                    "negative_amount".into(),
                    format!("booking #{}: {} = {}", id, label, v),
                ]);
            }
        }
    }

    // 2) Person links: names with no link, and snapshots that drifted from
    //    the linked person's current name.
    for (kind, id_col, name_col, table) in [
        ("client", "client_id", "client_name", "clients"),
        ("supervisor", "supervisor_id", "supervisor_name", "supervisors"),
    ] {
        let sql = format!(
            "SELECT id, {name} FROM bookings WHERE {id} IS NULL AND {name} != ''",
            name = name_col,
            id = id_col
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let bid: i64 = r.get(0)?;
            let name: String = r.get(1)?;
            rows.push(vec![
                format!("{}_not_linked", kind),
                format!("booking #{}: '{}'", bid, name),
            ]);
        }

        let sql = format!(
            "SELECT b.id, b.{name}, p.name FROM bookings b \
             JOIN {table} p ON b.{id}=p.id WHERE b.{name} != p.name",
            name = name_col,
            id = id_col,
            table = table
        );
        let mut stmt = conn.prepare(&sql)?;
        let mut cur = stmt.query([])?;
        while let Some(r) = cur.next()? {
            let bid: i64 = r.get(0)?;
            let snapshot: String = r.get(1)?;
            let current: String = r.get(2)?;
            rows.push(vec![
                format!("{}_name_drift", kind),
                format!("booking #{}: '{}' vs '{}'", bid, snapshot, current),
            ]);
        }
    }

    // 3) Expense categories outside the known set.
    let mut stmt = conn.prepare("SELECT id, category FROM expenses ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let category: String = r.get(1)?;
        if category.parse::<ExpenseCategory>().is_err() {
            rows.push(vec![
                "unknown_expense_category".into(),
                format!("expense #{}: '{}'", id, category),
            ]);
        }
    }

    Ok(rows)
}
