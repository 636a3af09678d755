// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{maybe_print_json, parse_decimal, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct CurrencyLine {
    pub currency: String,
    pub revenue: String,
    pub expenses: String,
    pub net: String,
}

#[derive(Serialize)]
pub struct MethodLine {
    pub method: String,
    pub currency: String,
    pub inflow: String,
    pub outflow: String,
    pub balance: String,
}

#[derive(Serialize)]
pub struct TreasurySummary {
    pub by_currency: Vec<CurrencyLine>,
    pub by_method: Vec<MethodLine>,
}

/// Aggregates the shared store. Amounts stay grouped by currency and are
/// never converted; expenses carry no currency and count under EGP.
/// Canceled bookings contribute nothing.
pub fn summarize(conn: &Connection) -> Result<TreasurySummary> {
    let mut revenue: BTreeMap<String, Decimal> = BTreeMap::new();
    // Keyed by (method, currency) so one method never sums across currencies.
    let mut methods: BTreeMap<(String, String), (Decimal, Decimal)> = BTreeMap::new();

    let mut stmt = conn.prepare(
        "SELECT COALESCE(currency, 'EGP'), paid, payment_method FROM bookings \
         WHERE status != 'CANCELED'",
    )?;
    let mut rows = stmt.query([])?;
    while let Some(r) = rows.next()? {
        let ccy: String = r.get(0)?;
        let paid_s: String = r.get(1)?;
        let method: String = r.get(2)?;
        let paid = parse_decimal(&paid_s)?;
        *revenue.entry(ccy.clone()).or_insert(Decimal::ZERO) += paid;
        methods
            .entry((method, ccy))
            .or_insert((Decimal::ZERO, Decimal::ZERO))
            .0 += paid;
    }

    let mut expenses_total = Decimal::ZERO;
    let mut stmt_e = conn.prepare("SELECT amount, payment_method FROM expenses")?;
    let mut rows_e = stmt_e.query([])?;
    while let Some(r) = rows_e.next()? {
        let amount_s: String = r.get(0)?;
        let method: String = r.get(1)?;
        let amount = parse_decimal(&amount_s)?;
        expenses_total += amount;
        methods
            .entry((method, "EGP".to_string()))
            .or_insert((Decimal::ZERO, Decimal::ZERO))
            .1 += amount;
    }

    revenue.entry("EGP".to_string()).or_insert(Decimal::ZERO);
    let by_currency = revenue
        .into_iter()
        .map(|(ccy, rev)| {
            let exp = if ccy == "EGP" { expenses_total } else { Decimal::ZERO };
            CurrencyLine {
                currency: ccy,
                revenue: format!("{:.2}", rev),
                expenses: format!("{:.2}", exp),
                net: format!("{:.2}", rev - exp),
            }
        })
        .collect();

    let by_method = methods
        .into_iter()
        .map(|((method, currency), (inflow, outflow))| MethodLine {
            method,
            currency,
            inflow: format!("{:.2}", inflow),
            outflow: format!("{:.2}", outflow),
            balance: format!("{:.2}", inflow - outflow),
        })
        .collect();

    Ok(TreasurySummary {
        by_currency,
        by_method,
    })
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let summary = summarize(conn)?;
    if maybe_print_json(json_flag, jsonl_flag, &summary)? {
        return Ok(());
    }
    let ccy_rows: Vec<Vec<String>> = summary
        .by_currency
        .iter()
        .map(|l| {
            vec![
                l.currency.clone(),
                l.revenue.clone(),
                l.expenses.clone(),
                l.net.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Currency", "Revenue", "Expenses", "Net"], ccy_rows)
    );
    let method_rows: Vec<Vec<String>> = summary
        .by_method
        .iter()
        .map(|l| {
            vec![
                l.method.clone(),
                l.currency.clone(),
                l.inflow.clone(),
                l.outflow.clone(),
                l.balance.clone(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Method", "CCY", "In", "Out", "Balance"], method_rows)
    );
    Ok(())
}
