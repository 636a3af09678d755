// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::ParseEnumError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// The back office is Arabic-first with an English toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Lang {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ar => "ar",
            Self::En => "en",
        }
    }

    pub fn direction(self) -> Direction {
        match self {
            Self::Ar => Direction::Rtl,
            Self::En => Direction::Ltr,
        }
    }
}

impl FromStr for Lang {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ar" => Ok(Self::Ar),
            "en" => Ok(Self::En),
            _ => Err(ParseEnumError {
                kind: "language",
                value: s.into(),
            }),
        }
    }
}

static AR: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("company_name", "شركة السلام للسياحة"),
        ("booking_details", "تفاصيل الحجز"),
        ("client_name", "اسم العميل"),
        ("trip", "الرحلة"),
        ("date", "التاريخ"),
        ("guests", "الأفراد"),
        ("adults", "بالغ"),
        ("children", "طفل"),
        ("hotel_pickup", "الفندق / مكان التجمع"),
        ("supervisor", "المشرف"),
        ("financials", "الحسابات"),
        ("total", "الإجمالي"),
        ("paid_amount", "المبلغ المدفوع"),
        ("remaining_amount", "المبلغ المتبقي"),
        ("whatsapp_footer", "شكراً لاختياركم خدماتنا، رحلة سعيدة!"),
        ("invalid_credentials", "اسم المستخدم أو كلمة المرور غير صحيحة"),
        ("login_success", "تم تسجيل الدخول بنجاح"),
        ("phone_not_available", "رقم الهاتف غير متوفر"),
        ("print_report", "طباعة التقرير"),
        ("send_report", "إرسال التقرير عبر واتساب"),
        ("report_not_generated", "لا يتم إنشاء المستندات في هذا الإصدار"),
        ("report_not_sent", "لا يتم إرسال التقارير في هذا الإصدار"),
        ("settings_saved", "تم حفظ الإعدادات بنجاح"),
        ("MORNING", "صباحاً"),
        ("EVENING", "مساءً"),
        ("EGP", "جنيه"),
        ("USD", "دولار"),
        ("EUR", "يورو"),
        ("GBP", "جنيه إسترليني"),
    ])
});

static EN: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("company_name", "Al Salam Tourism"),
        ("booking_details", "Booking details"),
        ("client_name", "Client name"),
        ("trip", "Trip"),
        ("date", "Date"),
        ("guests", "Guests"),
        ("adults", "adults"),
        ("children", "children"),
        ("hotel_pickup", "Hotel / pickup"),
        ("supervisor", "Supervisor"),
        ("financials", "Financials"),
        ("total", "Total"),
        ("paid_amount", "Paid"),
        ("remaining_amount", "Remaining"),
        ("whatsapp_footer", "Thank you for choosing us, have a great trip!"),
        ("invalid_credentials", "Invalid username or password"),
        ("login_success", "Logged in successfully"),
        ("phone_not_available", "Phone number not available"),
        ("print_report", "Print report"),
        ("send_report", "Send report via WhatsApp"),
        ("report_not_generated", "Document generation is not available in this build"),
        ("report_not_sent", "Report sending is not available in this build"),
        ("settings_saved", "Settings saved"),
        ("MORNING", "Morning"),
        ("EVENING", "Evening"),
        ("EGP", "EGP"),
        ("USD", "USD"),
        ("EUR", "EUR"),
        ("GBP", "GBP"),
    ])
});

/// Flat key lookup; a missing key falls back to the key itself.
pub fn tr<'a>(lang: Lang, key: &'a str) -> &'a str {
    let map = match lang {
        Lang::Ar => &AR,
        Lang::En => &EN,
    };
    map.get(key).copied().unwrap_or(key)
}
