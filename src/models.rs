// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raised when a stored or user-supplied keyword does not name a known
/// enum member. Keywords are the canonical uppercase strings.
#[derive(Debug, thiserror::Error)]
#[error("invalid {kind} '{value}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClientType {
    Individual,
    Company,
}

impl ClientType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Company => "COMPANY",
        }
    }
}

impl fmt::Display for ClientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INDIVIDUAL" => Ok(Self::Individual),
            "COMPANY" => Ok(Self::Company),
            _ => Err(ParseEnumError {
                kind: "client type",
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripTime {
    Morning,
    Evening,
}

impl TripTime {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "MORNING",
            Self::Evening => "EVENING",
        }
    }
}

impl fmt::Display for TripTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripTime {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MORNING" => Ok(Self::Morning),
            "EVENING" => Ok(Self::Evening),
            _ => Err(ParseEnumError {
                kind: "trip time",
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    BankTransfer,
    EWallet,
}

impl PaymentMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cash => "CASH",
            Self::BankTransfer => "BANK_TRANSFER",
            Self::EWallet => "E_WALLET",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CASH" => Ok(Self::Cash),
            "BANK_TRANSFER" => Ok(Self::BankTransfer),
            "E_WALLET" => Ok(Self::EWallet),
            _ => Err(ParseEnumError {
                kind: "payment method",
                value: s.into(),
            }),
        }
    }
}

/// Display-only label; amounts are never converted between currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Egp,
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Egp => "EGP",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Currency {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EGP" => Ok(Self::Egp),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            _ => Err(ParseEnumError {
                kind: "currency",
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(Self::Pending),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELED" => Ok(Self::Canceled),
            _ => Err(ParseEnumError {
                kind: "booking status",
                value: s.into(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    DriverCustody,
    CustodySettlement,
    CarMaintenance,
    CompanyRent,
    Salaries,
    Commissions,
}

impl ExpenseCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DriverCustody => "DRIVER_CUSTODY",
            Self::CustodySettlement => "CUSTODY_SETTLEMENT",
            Self::CarMaintenance => "CAR_MAINTENANCE",
            Self::CompanyRent => "COMPANY_RENT",
            Self::Salaries => "SALARIES",
            Self::Commissions => "COMMISSIONS",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpenseCategory {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRIVER_CUSTODY" => Ok(Self::DriverCustody),
            "CUSTODY_SETTLEMENT" => Ok(Self::CustodySettlement),
            "CAR_MAINTENANCE" => Ok(Self::CarMaintenance),
            "COMPANY_RENT" => Ok(Self::CompanyRent),
            "SALARIES" => Ok(Self::Salaries),
            "COMMISSIONS" => Ok(Self::Commissions),
            _ => Err(ParseEnumError {
                kind: "expense category",
                value: s.into(),
            }),
        }
    }
}

/// A reserved trip slot for a client on a date, with pricing and payment
/// state. `total` is derived from the five pricing inputs and is never
/// accepted from the user. `client_id`/`supervisor_id` link to the person
/// tables when the saved name resolves; the name strings stay on the record
/// as a snapshot, so deleting a person never touches its bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub client_name: String,
    pub client_type: ClientType,
    pub client_id: Option<i64>,
    pub hotel: String,
    pub room_number: String,
    pub adults: u32,
    pub children: u32,
    pub phone: String,
    pub trip_name: String,
    pub trip_date: NaiveDate,
    pub trip_time: TripTime,
    pub price_per_person: Decimal,
    pub supervisor_name: String,
    pub supervisor_id: Option<i64>,
    pub payment_method: PaymentMethod,
    pub currency: Option<Currency>,
    pub paid: Decimal,
    pub discount: Decimal,
    pub delivery_fee: Decimal,
    pub total: Decimal,
    pub status: BookingStatus,
}

