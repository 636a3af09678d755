// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{ExpenseCategory, PaymentMethod};
use crate::utils::{
    confirm, maybe_print_json, parse_amount, parse_date, parse_keyword, pretty_table,
};
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};
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

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category: ExpenseCategory = parse_keyword(sub.get_one::<String>("category").unwrap())?;
    let desc = sub.get_one::<String>("desc").unwrap().trim().to_string();
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let method: PaymentMethod = sub
        .get_one::<String>("pay-method")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(PaymentMethod::Cash);
    conn.execute(
        "INSERT INTO expenses(category, description, amount, date, payment_method)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            category.as_str(),
            desc,
            amount.to_string(),
            date,
            method.as_str()
        ],
    )?;
    println!(
        "Recorded expense #{}: {} {} ({})",
        conn.last_insert_rowid(),
        amount,
        desc,
        category
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let existing: Option<(String, String, String, String, String)> = conn
        .query_row(
            "SELECT category, description, amount, date, payment_method FROM expenses WHERE id=?1",
            params![id],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
        )
        .optional()?;
    let Some((mut category, mut desc, mut amount, mut date, mut method)) = existing else {
        println!("No expense with id {}", id);
        return Ok(());
    };
    if let Some(v) = sub.get_one::<String>("category") {
        category = parse_keyword::<ExpenseCategory>(v)?.as_str().to_string();
    }
    if let Some(v) = sub.get_one::<String>("desc") {
        desc = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("amount") {
        amount = parse_amount(v)?.to_string();
    }
    if let Some(v) = sub.get_one::<String>("date") {
        date = parse_date(v)?.to_string();
    }
    if let Some(v) = sub.get_one::<String>("pay-method") {
        method = parse_keyword::<PaymentMethod>(v)?.as_str().to_string();
    }
    conn.execute(
        "UPDATE expenses SET category=?1, description=?2, amount=?3, date=?4, payment_method=?5 \
         WHERE id=?6",
        params![category, desc, amount, date, method, id],
    )?;
    println!("Updated expense #{}", id);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !confirm(&format!("Delete expense #{}?", id), sub.get_flag("yes"))? {
        println!("Aborted.");
        return Ok(());
    }
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No expense with id {}", id);
    } else {
        println!("Deleted expense #{}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub id: i64,
    pub date: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub method: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let mut sql = String::from(
        "SELECT id, date, category, description, amount, payment_method FROM expenses WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();
    if let Some(cat) = sub.get_one::<String>("category") {
        let cat: ExpenseCategory = parse_keyword(cat)?;
        sql.push_str(" AND category=?");
        params_vec.push(cat.as_str().to_string());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(month.clone());
    }
    sql.push_str(" ORDER BY id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(ExpenseRow {
            id: r.get(0)?,
            date: r.get(1)?,
            category: r.get(2)?,
            description: r.get(3)?,
            amount: r.get(4)?,
            method: r.get(5)?,
        });
    }
    Ok(data)
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.to_string(),
                    r.date.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.method.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Category", "Description", "Amount", "Method"],
                rows
            )
        );
    }
    Ok(())
}
