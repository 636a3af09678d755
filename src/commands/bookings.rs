// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::tr;
use crate::models::{
    Booking, BookingStatus, ClientType, Currency, PaymentMethod, TripTime,
};
use crate::pricing;
use crate::settings::{self, Settings};
use crate::utils::{
    confirm, find_client_id, find_supervisor_id, maybe_print_json, normalize_phone, parse_amount,
    parse_date, parse_discount, parse_keyword, pretty_table,
};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;
use serde::Serialize;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("edit", sub)) => edit(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("show", sub)) => show(conn, sub)?,
        Some(("whatsapp", sub)) => whatsapp(conn, sub)?,
        _ => {}
    }
    Ok(())
}

const BOOKING_COLS: &str = "id, client_name, client_type, client_id, hotel, room_number, \
     adults, children, phone, trip_name, trip_date, trip_time, price_per_person, \
     supervisor_name, supervisor_id, payment_method, currency, paid, discount, \
     delivery_fee, total, status";

// Columns as stored; enum and money parsing happens in parse().
struct RawBooking {
    id: i64,
    client_name: String,
    client_type: String,
    client_id: Option<i64>,
    hotel: String,
    room_number: String,
    adults: u32,
    children: u32,
    phone: String,
    trip_name: String,
    trip_date: NaiveDate,
    trip_time: String,
    price_per_person: String,
    supervisor_name: String,
    supervisor_id: Option<i64>,
    payment_method: String,
    currency: Option<String>,
    paid: String,
    discount: String,
    delivery_fee: String,
    total: String,
    status: String,
}

fn map_raw(r: &Row) -> rusqlite::Result<RawBooking> {
    Ok(RawBooking {
        id: r.get(0)?,
        client_name: r.get(1)?,
        client_type: r.get(2)?,
        client_id: r.get(3)?,
        hotel: r.get(4)?,
        room_number: r.get(5)?,
        adults: r.get(6)?,
        children: r.get(7)?,
        phone: r.get(8)?,
        trip_name: r.get(9)?,
        trip_date: r.get(10)?,
        trip_time: r.get(11)?,
        price_per_person: r.get(12)?,
        supervisor_name: r.get(13)?,
        supervisor_id: r.get(14)?,
        payment_method: r.get(15)?,
        currency: r.get(16)?,
        paid: r.get(17)?,
        discount: r.get(18)?,
        delivery_fee: r.get(19)?,
        total: r.get(20)?,
        status: r.get(21)?,
    })
}

impl RawBooking {
    fn parse(self) -> Result<Booking> {
        Ok(Booking {
            id: self.id,
            client_name: self.client_name,
            client_type: self.client_type.parse()?,
            client_id: self.client_id,
            hotel: self.hotel,
            room_number: self.room_number,
            adults: self.adults,
            children: self.children,
            phone: self.phone,
            trip_name: self.trip_name,
            trip_date: self.trip_date,
            trip_time: self.trip_time.parse()?,
            price_per_person: crate::utils::parse_decimal(&self.price_per_person)?,
            supervisor_name: self.supervisor_name,
            supervisor_id: self.supervisor_id,
            payment_method: self.payment_method.parse()?,
            currency: self
                .currency
                .as_deref()
                .map(str::parse::<Currency>)
                .transpose()?,
            paid: crate::utils::parse_decimal(&self.paid)?,
            discount: crate::utils::parse_decimal(&self.discount)?,
            delivery_fee: crate::utils::parse_decimal(&self.delivery_fee)?,
            total: crate::utils::parse_decimal(&self.total)?,
            status: self.status.parse()?,
        })
    }
}

pub fn get_booking(conn: &Connection, id: i64) -> Result<Option<Booking>> {
    let sql = format!("SELECT {} FROM bookings WHERE id=?1", BOOKING_COLS);
    let raw = conn.query_row(&sql, params![id], map_raw).optional()?;
    raw.map(RawBooking::parse).transpose()
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let client_name = sub.get_one::<String>("client").unwrap().trim().to_string();
    let client_type: ClientType = sub
        .get_one::<String>("client-type")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(ClientType::Individual);
    let hotel = sub.get_one::<String>("hotel").cloned().unwrap_or_default();
    let room = sub.get_one::<String>("room").cloned().unwrap_or_default();
    let phone = sub.get_one::<String>("phone").unwrap().trim().to_string();
    let trip_name = sub.get_one::<String>("trip").unwrap().trim().to_string();
    let trip_date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let trip_time: TripTime = sub
        .get_one::<String>("time")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(TripTime::Morning);
    let supervisor_name = sub
        .get_one::<String>("supervisor")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();
    // Missing pricing inputs count as zero; adults default to 1.
    let adults = *sub.get_one::<u32>("adults").unwrap_or(&1);
    let children = *sub.get_one::<u32>("children").unwrap_or(&0);
    let price = sub
        .get_one::<String>("price")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let discount = sub
        .get_one::<String>("discount")
        .map(|s| parse_discount(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let fee = sub
        .get_one::<String>("fee")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let paid = sub
        .get_one::<String>("paid")
        .map(|s| parse_amount(s))
        .transpose()?
        .unwrap_or(Decimal::ZERO);
    let payment: PaymentMethod = sub
        .get_one::<String>("pay-method")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(PaymentMethod::Cash);
    let currency: Option<Currency> = sub
        .get_one::<String>("currency")
        .map(|s| parse_keyword(s))
        .transpose()?;
    let status: BookingStatus = sub
        .get_one::<String>("status")
        .map(|s| parse_keyword(s))
        .transpose()?
        .unwrap_or(BookingStatus::Pending);

    let client_id = find_client_id(conn, &client_name)?;
    let supervisor_id = if supervisor_name.is_empty() {
        None
    } else {
        find_supervisor_id(conn, &supervisor_name)?
    };
    let total = pricing::booking_total(adults, children, price, discount, fee);

    conn.execute(
        "INSERT INTO bookings(client_name, client_type, client_id, hotel, room_number, \
         adults, children, phone, trip_name, trip_date, trip_time, price_per_person, \
         supervisor_name, supervisor_id, payment_method, currency, paid, discount, \
         delivery_fee, total, status)
         VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16,?17,?18,?19,?20,?21)",
        params![
            client_name,
            client_type.as_str(),
            client_id,
            hotel,
            room,
            adults,
            children,
            phone,
            trip_name,
            trip_date,
            trip_time.as_str(),
            price.to_string(),
            supervisor_name,
            supervisor_id,
            payment.as_str(),
            currency.map(|c| c.as_str()),
            paid.to_string(),
            discount.to_string(),
            fee.to_string(),
            total.to_string(),
            status.as_str(),
        ],
    )?;
    let id = conn.last_insert_rowid();
    let ccy = currency.map(|c| c.as_str()).unwrap_or("EGP");
    println!(
        "Recorded booking #{} for '{}' on {} (total {} {})",
        id, client_name, trip_date, total, ccy
    );
    Ok(())
}

fn edit(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(mut b) = get_booking(conn, id)? else {
        println!("No booking with id {}", id);
        return Ok(());
    };

    if let Some(v) = sub.get_one::<String>("client") {
        b.client_name = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("client-type") {
        b.client_type = parse_keyword(v)?;
    }
    if let Some(v) = sub.get_one::<String>("hotel") {
        b.hotel = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("room") {
        b.room_number = v.clone();
    }
    if let Some(v) = sub.get_one::<String>("phone") {
        b.phone = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("trip") {
        b.trip_name = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<String>("date") {
        b.trip_date = parse_date(v)?;
    }
    if let Some(v) = sub.get_one::<String>("time") {
        b.trip_time = parse_keyword(v)?;
    }
    if let Some(v) = sub.get_one::<String>("supervisor") {
        b.supervisor_name = v.trim().to_string();
    }
    if let Some(v) = sub.get_one::<u32>("adults") {
        b.adults = *v;
    }
    if let Some(v) = sub.get_one::<u32>("children") {
        b.children = *v;
    }
    if let Some(v) = sub.get_one::<String>("price") {
        b.price_per_person = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("discount") {
        b.discount = parse_discount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("fee") {
        b.delivery_fee = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("paid") {
        b.paid = parse_amount(v)?;
    }
    if let Some(v) = sub.get_one::<String>("pay-method") {
        b.payment_method = parse_keyword(v)?;
    }
    if let Some(v) = sub.get_one::<String>("currency") {
        b.currency = Some(parse_keyword(v)?);
    }
    if let Some(v) = sub.get_one::<String>("status") {
        b.status = parse_keyword(v)?;
    }

    // Person links and the total always track the current field values.
    b.client_id = find_client_id(conn, &b.client_name)?;
    b.supervisor_id = if b.supervisor_name.is_empty() {
        None
    } else {
        find_supervisor_id(conn, &b.supervisor_name)?
    };
    b.total = pricing::booking_total(
        b.adults,
        b.children,
        b.price_per_person,
        b.discount,
        b.delivery_fee,
    );

    conn.execute(
        "UPDATE bookings SET client_name=?1, client_type=?2, client_id=?3, hotel=?4, \
         room_number=?5, adults=?6, children=?7, phone=?8, trip_name=?9, trip_date=?10, \
         trip_time=?11, price_per_person=?12, supervisor_name=?13, supervisor_id=?14, \
         payment_method=?15, currency=?16, paid=?17, discount=?18, delivery_fee=?19, \
         total=?20, status=?21 WHERE id=?22",
        params![
            b.client_name,
            b.client_type.as_str(),
            b.client_id,
            b.hotel,
            b.room_number,
            b.adults,
            b.children,
            b.phone,
            b.trip_name,
            b.trip_date,
            b.trip_time.as_str(),
            b.price_per_person.to_string(),
            b.supervisor_name,
            b.supervisor_id,
            b.payment_method.as_str(),
            b.currency.map(|c| c.as_str()),
            b.paid.to_string(),
            b.discount.to_string(),
            b.delivery_fee.to_string(),
            b.total.to_string(),
            b.status.as_str(),
            id,
        ],
    )?;
    let ccy = b.currency.map(|c| c.as_str()).unwrap_or("EGP");
    println!("Updated booking #{} (total {} {})", id, b.total, ccy);
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    if !confirm(
        &format!("Delete booking #{}?", id),
        sub.get_flag("yes"),
    )? {
        println!("Aborted.");
        return Ok(());
    }
    let n = conn.execute("DELETE FROM bookings WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No booking with id {}", id);
    } else {
        println!("Deleted booking #{}", id);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct BookingRow {
    pub id: i64,
    pub client: String,
    pub trip: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub total: String,
    pub paid: String,
    pub remaining: String,
    pub currency: String,
    pub status: String,
}

pub fn query_rows(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<BookingRow>> {
    let mut sql = String::from(
        "SELECT id, client_name, trip_name, trip_date, trip_time, adults, children, \
         total, paid, currency, status FROM bookings WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();

    if let Some(status) = sub.get_one::<String>("status") {
        let status: BookingStatus = parse_keyword(status)?;
        sql.push_str(" AND status=?");
        params_vec.push(status.as_str().to_string());
    }
    if let Some(month) = sub.get_one::<String>("month") {
        sql.push_str(" AND substr(trip_date,1,7)=?");
        params_vec.push(month.clone());
    }
    sql.push_str(" ORDER BY id DESC");
    if let Some(limit) = sub.get_one::<usize>("limit") {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

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
        let id: i64 = r.get(0)?;
        let client: String = r.get(1)?;
        let trip: String = r.get(2)?;
        let date: String = r.get(3)?;
        let time: String = r.get(4)?;
        let adults: u32 = r.get(5)?;
        let children: u32 = r.get(6)?;
        let total_s: String = r.get(7)?;
        let paid_s: String = r.get(8)?;
        let currency: Option<String> = r.get(9)?;
        let status: String = r.get(10)?;
        let total = crate::utils::parse_decimal(&total_s)?;
        let paid = crate::utils::parse_decimal(&paid_s)?;
        data.push(BookingRow {
            id,
            client,
            trip,
            date,
            time,
            guests: format!("{} + {}", adults, children),
            total: total_s,
            paid: paid_s,
            remaining: pricing::remaining(total, paid).to_string(),
            currency: currency.unwrap_or_else(|| "EGP".into()),
            status,
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
                    r.client.clone(),
                    r.trip.clone(),
                    r.date.clone(),
                    r.time.clone(),
                    r.guests.clone(),
                    r.total.clone(),
                    r.paid.clone(),
                    r.remaining.clone(),
                    r.currency.clone(),
                    r.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &[
                    "ID", "Client", "Trip", "Date", "Time", "Guests", "Total", "Paid",
                    "Remaining", "CCY", "Status"
                ],
                rows,
            )
        );
    }
    Ok(())
}

fn show(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let Some(b) = get_booking(conn, id)? else {
        println!("No booking with id {}", id);
        return Ok(());
    };
    let ccy = b.currency.map(|c| c.as_str()).unwrap_or("EGP").to_string();
    let rows = vec![
        vec!["Client".into(), b.client_name.clone()],
        vec!["Client type".into(), b.client_type.to_string()],
        vec!["Phone".into(), b.phone.clone()],
        vec!["Hotel / pickup".into(), b.hotel.clone()],
        vec!["Room".into(), b.room_number.clone()],
        vec!["Trip".into(), b.trip_name.clone()],
        vec!["Date".into(), b.trip_date.to_string()],
        vec!["Time".into(), b.trip_time.to_string()],
        vec!["Supervisor".into(), b.supervisor_name.clone()],
        vec!["Guests".into(), format!("{} + {}", b.adults, b.children)],
        vec!["Price/person".into(), b.price_per_person.to_string()],
        vec!["Discount %".into(), b.discount.to_string()],
        vec!["Delivery fee".into(), b.delivery_fee.to_string()],
        vec!["Total".into(), crate::utils::fmt_money(&b.total, &ccy)],
        vec!["Paid".into(), crate::utils::fmt_money(&b.paid, &ccy)],
        vec![
            "Remaining".into(),
            crate::utils::fmt_money(&pricing::remaining(b.total, b.paid), &ccy),
        ],
        vec!["Payment".into(), b.payment_method.to_string()],
        vec!["Status".into(), b.status.to_string()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

/// Booking summary for sharing over WhatsApp, rendered in the configured
/// language. Bold markers are WhatsApp formatting.
pub fn whatsapp_message(booking: &Booking, settings: &Settings) -> String {
    let lang = settings.language;
    let ccy_key = booking.currency.map(|c| c.as_str()).unwrap_or("EGP");
    let ccy = tr(lang, ccy_key);
    let header = if settings.company_name.is_empty() {
        tr(lang, "company_name").to_string()
    } else {
        settings.company_name.clone()
    };
    let remaining = pricing::remaining(booking.total, booking.paid);
    format!(
        "*{header}*\n\n\
         *{details}*\n\n\
         *{client_label}:* {client}\n\
         *{trip_label}:* {trip}\n\
         *{date_label}:* {date} - {time}\n\
         *{guests_label}:* {adults} {adults_label}, {children} {children_label}\n\
         *{hotel_label}:* {hotel}\n\
         *{sup_label}:* {supervisor}\n\n\
         *{fin_label}*\n\
         *{total_label}:* {total} {ccy}\n\
         *{paid_label}:* {paid} {ccy}\n\
         *{rem_label}:* {remaining} {ccy}\n\n\
         {footer}",
        header = header,
        details = tr(lang, "booking_details"),
        client_label = tr(lang, "client_name"),
        client = booking.client_name,
        trip_label = tr(lang, "trip"),
        trip = booking.trip_name,
        date_label = tr(lang, "date"),
        date = booking.trip_date,
        time = tr(lang, booking.trip_time.as_str()),
        guests_label = tr(lang, "guests"),
        adults = booking.adults,
        adults_label = tr(lang, "adults"),
        children = booking.children,
        children_label = tr(lang, "children"),
        hotel_label = tr(lang, "hotel_pickup"),
        hotel = booking.hotel,
        sup_label = tr(lang, "supervisor"),
        supervisor = booking.supervisor_name,
        fin_label = tr(lang, "financials"),
        total_label = tr(lang, "total"),
        total = booking.total,
        paid_label = tr(lang, "paid_amount"),
        paid = booking.paid,
        rem_label = tr(lang, "remaining_amount"),
        remaining = remaining,
        footer = tr(lang, "whatsapp_footer"),
    )
}

pub fn whatsapp_url(phone: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", phone, urlencoding::encode(message))
}

fn whatsapp(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let to = sub.get_one::<String>("to").unwrap();
    let settings = settings::load(conn);
    let Some(b) = get_booking(conn, id)? else {
        println!("No booking with id {}", id);
        return Ok(());
    };

    let raw_phone = if to == "supervisor" {
        let phone: Option<String> = match b.supervisor_id {
            Some(sid) => conn
                .query_row(
                    "SELECT phone FROM supervisors WHERE id=?1",
                    params![sid],
                    |r| r.get(0),
                )
                .optional()?,
            None => conn
                .query_row(
                    "SELECT phone FROM supervisors WHERE name=?1 ORDER BY id LIMIT 1",
                    params![b.supervisor_name],
                    |r| r.get(0),
                )
                .optional()?,
        };
        phone.unwrap_or_default()
    } else {
        b.phone.clone()
    };

    let phone = normalize_phone(&raw_phone);
    if phone.is_empty() {
        return Err(anyhow!("{}", tr(settings.language, "phone_not_available")));
    }
    let message = whatsapp_message(&b, &settings);
    println!("{}", whatsapp_url(&phone, &message));
    Ok(())
}
