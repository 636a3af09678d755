// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    BookingStatus, ClientType, Currency, ExpenseCategory, PaymentMethod, TripTime,
};
use crate::pricing;
use anyhow::Result;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

/// Demo data set for trying the commands out. Refuses to run on a
/// non-empty store so it never duplicates.
pub fn handle(conn: &Connection) -> Result<()> {
    let existing: i64 = conn.query_row(
        "SELECT (SELECT COUNT(*) FROM bookings) + (SELECT COUNT(*) FROM clients) \
         + (SELECT COUNT(*) FROM expenses) + (SELECT COUNT(*) FROM trips)",
        [],
        |r| r.get(0),
    )?;
    if existing > 0 {
        println!("Store already has data, seed skipped");
        return Ok(());
    }

    let add_client = |name: &str, ctype: ClientType, phone: &str| -> Result<i64> {
        conn.execute(
            "INSERT INTO clients(name, client_type, phone) VALUES (?1, ?2, ?3)",
            params![name, ctype.as_str(), phone],
        )?;
        Ok(conn.last_insert_rowid())
    };
    let ahmed = add_client("أحمد محمود", ClientType::Individual, "01234567890")?;
    let alnour = add_client("شركة النور للسياحة", ClientType::Company, "01098765432")?;
    add_client("سارة عبد الرحمن", ClientType::Individual, "01122334455")?;

    let add_supervisor = |name: &str, phone: &str| -> Result<i64> {
        conn.execute(
            "INSERT INTO supervisors(name, phone) VALUES (?1, ?2)",
            params![name, phone],
        )?;
        Ok(conn.last_insert_rowid())
    };
    let mohamed = add_supervisor("محمد علي", "01001001001")?;
    let khaled = add_supervisor("خالد إبراهيم", "01221221221")?;

    let trips: [(&str, &str, &str, &str, &str, &str, &str, &str, &str); 4] = [
        ("رحلة الأهرامات وأبو الهول", "350", "200", "500", "300", "0", "0", "100", "150"),
        ("رحلة الأقصر وأسوان (3 أيام)", "2000", "1200", "2500", "1500", "800", "1000", "200", "300"),
        ("جولة في القاهرة القديمة", "200", "100", "300", "150", "0", "0", "50", "80"),
        ("رحلة سفاري الصحراء", "400", "250", "550", "350", "0", "0", "150", "200"),
    ];
    for t in trips {
        conn.execute(
            "INSERT INTO trips(name, cost_adult, cost_child, sell_price, sell_price_child, \
             flight_cost, flight_sell_price, car_cost, car_sell_price)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9)",
            params![t.0, t.1, t.2, t.3, t.4, t.5, t.6, t.7, t.8],
        )?;
    }

    struct SeedBooking<'a> {
        client: (&'a str, ClientType, Option<i64>),
        hotel: &'a str,
        room: &'a str,
        adults: u32,
        children: u32,
        phone: &'a str,
        trip: &'a str,
        date: &'a str,
        time: TripTime,
        price: Decimal,
        supervisor: (&'a str, Option<i64>),
        method: PaymentMethod,
        paid: Decimal,
        discount: Decimal,
        fee: Decimal,
        status: BookingStatus,
    }
    let bookings = [
        SeedBooking {
            client: ("أحمد محمود", ClientType::Individual, Some(ahmed)),
            hotel: "فندق النيل",
            room: "502",
            adults: 2,
            children: 1,
            phone: "01234567890",
            trip: "رحلة الأهرامات",
            date: "2024-08-15",
            time: TripTime::Morning,
            price: Decimal::from(500),
            supervisor: ("محمد علي", Some(mohamed)),
            method: PaymentMethod::Cash,
            paid: Decimal::from(1500),
            discount: Decimal::ZERO,
            fee: Decimal::from(50),
            status: BookingStatus::Confirmed,
        },
        SeedBooking {
            client: ("شركة النور للسياحة", ClientType::Company, Some(alnour)),
            hotel: "N/A",
            room: "N/A",
            adults: 15,
            children: 5,
            phone: "01098765432",
            trip: "رحلة الأقصر وأسوان",
            date: "2024-09-01",
            time: TripTime::Evening,
            price: Decimal::from(2500),
            supervisor: ("خالد إبراهيم", Some(khaled)),
            method: PaymentMethod::BankTransfer,
            paid: Decimal::from(40000),
            discount: Decimal::from(5),
            fee: Decimal::ZERO,
            status: BookingStatus::Pending,
        },
        SeedBooking {
            client: ("أحمد محمود", ClientType::Individual, Some(ahmed)),
            hotel: "فندق ماريوت",
            room: "1210",
            adults: 1,
            children: 0,
            phone: "01122334455",
            trip: "جولة في القاهرة القديمة",
            date: "2024-08-20",
            time: TripTime::Morning,
            price: Decimal::from(300),
            supervisor: ("محمد علي", Some(mohamed)),
            method: PaymentMethod::EWallet,
            paid: Decimal::from(300),
            discount: Decimal::ZERO,
            fee: Decimal::ZERO,
            status: BookingStatus::Canceled,
        },
    ];
    for b in bookings {
        let total =
            pricing::booking_total(b.adults, b.children, b.price, b.discount, b.fee);
        conn.execute(
            "INSERT INTO bookings(client_name, client_type, client_id, hotel, room_number, \
             adults, children, phone, trip_name, trip_date, trip_time, price_per_person, \
             supervisor_name, supervisor_id, payment_method, currency, paid, discount, \
             delivery_fee, total, status)
             VALUES (?1,?2,?3,?4,?5,?6,?7,?8,?9,?10,?11,?12,?13,?14,?15,?16,?17,?18,?19,?20,?21)",
            params![
                b.client.0,
                b.client.1.as_str(),
                b.client.2,
                b.hotel,
                b.room,
                b.adults,
                b.children,
                b.phone,
                b.trip,
                b.date,
                b.time.as_str(),
                b.price.to_string(),
                b.supervisor.0,
                b.supervisor.1,
                b.method.as_str(),
                Currency::Egp.as_str(),
                b.paid.to_string(),
                b.discount.to_string(),
                b.fee.to_string(),
                total.to_string(),
                b.status.as_str(),
            ],
        )?;
    }

    let expenses: [(&str, &str, &str, ExpenseCategory, PaymentMethod); 5] = [
        (
            "عهدة للسائق/أحمد للسفر للأقصر",
            "2000",
            "2024-08-10",
            ExpenseCategory::DriverCustody,
            PaymentMethod::Cash,
        ),
        (
            "تغيير زيت وفلتر للسيارة رقم 123",
            "500",
            "2024-08-11",
            ExpenseCategory::CarMaintenance,
            PaymentMethod::EWallet,
        ),
        (
            "راتب شهر أغسطس - محمد علي",
            "5000",
            "2024-08-31",
            ExpenseCategory::Salaries,
            PaymentMethod::BankTransfer,
        ),
        (
            "إيجار المكتب لشهر أغسطس",
            "3000",
            "2024-08-01",
            ExpenseCategory::CompanyRent,
            PaymentMethod::Cash,
        ),
        (
            "تصفية عهدة السائق/أحمد",
            "1850",
            "2024-08-14",
            ExpenseCategory::CustodySettlement,
            PaymentMethod::Cash,
        ),
    ];
    for (desc, amount, date, category, method) in expenses {
        conn.execute(
            "INSERT INTO expenses(category, description, amount, date, payment_method)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![category.as_str(), desc, amount, date, method.as_str()],
        )?;
    }

    println!("Seeded demo data: 3 bookings, 3 clients, 2 supervisors, 4 trips, 5 expenses");
    Ok(())
}
