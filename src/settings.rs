// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::Lang;
use anyhow::{Context, Result};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use rusqlite::{Connection, OptionalExtension, params};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fixed storage key; the whole object lives as one JSON value under it.
pub const SETTINGS_KEY: &str = "app-settings";

/// Company identity and language, loaded once at startup and passed to the
/// commands that need it. Saved whenever the admin command changes a field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub company_name: String,
    pub company_logo: String,
    pub language: Lang,
}

impl Settings {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_empty()
            && self.company_logo.is_empty()
            && self.language == Lang::default()
    }
}

/// Storage failures are logged and swallowed; the app continues on
/// defaults. Never fatal.
pub fn load(conn: &Connection) -> Settings {
    let stored: Option<String> = match conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![SETTINGS_KEY],
            |r| r.get(0),
        )
        .optional()
    {
        Ok(v) => v,
        Err(e) => {
            eprintln!("warning: could not read settings: {}", e);
            None
        }
    };
    match stored {
        Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
            eprintln!("warning: stored settings are corrupt ({}), using defaults", e);
            Settings::default()
        }),
        None => Settings::default(),
    }
}

/// Writes only when something is actually set.
pub fn save(conn: &Connection, settings: &Settings) -> Result<()> {
    if settings.is_empty() {
        return Ok(());
    }
    let raw = serde_json::to_string(settings).context("Serialize settings")?;
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![SETTINGS_KEY, raw],
    )?;
    Ok(())
}

/// Reads an image file into a `data:<mime>;base64,` URL, the form the logo
/// is stored and displayed in.
pub fn logo_data_url(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).with_context(|| format!("Read logo file {}", path.display()))?;
    let mime = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}
