// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

/// Booking total:
///
/// ```text
/// subtotal        = (adults + children) * price_per_person
/// discount_amount = subtotal * (discount / 100)
/// total           = subtotal - discount_amount + delivery_fee
/// ```
///
/// The price per person applies equally to adults and children. No rounding
/// is applied here; display formatting is a presentation concern. Discount is
/// expected in [0, 100] (enforced at the argument parser); the computation
/// itself does not clamp, so a discount above 100 yields a negative total.
pub fn booking_total(
    adults: u32,
    children: u32,
    price_per_person: Decimal,
    discount: Decimal,
    delivery_fee: Decimal,
) -> Decimal {
    let heads = Decimal::from(adults) + Decimal::from(children);
    let subtotal = heads * price_per_person;
    let discount_amount = subtotal * discount / Decimal::ONE_HUNDRED;
    subtotal - discount_amount + delivery_fee
}

/// Display-only derivation, never stored.
pub fn remaining(total: Decimal, paid: Decimal) -> Decimal {
    total - paid
}
