// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod admin;
pub mod bookings;
pub mod clients;
pub mod doctor;
pub mod expenses;
pub mod exporter;
pub mod login;
pub mod reports;
pub mod seed;
pub mod supervisors;
pub mod treasury;
pub mod trips;
