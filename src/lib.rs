// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod auth;
pub mod cli;
pub mod db;
pub mod i18n;
pub mod models;
pub mod pricing;
pub mod settings;
pub mod utils;
pub mod commands;
