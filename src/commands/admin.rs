// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::{Direction, Lang, tr};
use crate::settings::{self, Settings};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(conn),
        Some(("set-company", sub)) => set_company(conn, sub),
        Some(("set-logo", sub)) => set_logo(conn, sub),
        Some(("set-language", sub)) => set_language(conn, sub),
        _ => Ok(()),
    }
}

fn show(conn: &Connection) -> Result<()> {
    let s = settings::load(conn);
    let logo = if s.company_logo.is_empty() {
        "(none)".to_string()
    } else {
        format!("data URL, {} bytes", s.company_logo.len())
    };
    let direction = match s.language.direction() {
        Direction::Rtl => "rtl",
        Direction::Ltr => "ltr",
    };
    let rows = vec![
        vec!["Company".into(), s.company_name.clone()],
        vec!["Logo".into(), logo],
        vec![
            "Language".into(),
            format!("{} ({})", s.language.as_str(), direction),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}

fn save_and_confirm(conn: &Connection, s: &Settings) -> Result<()> {
    settings::save(conn, s)?;
    println!("{}", tr(s.language, "settings_saved"));
    Ok(())
}

fn set_company(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut s = settings::load(conn);
    s.company_name = sub.get_one::<String>("name").unwrap().trim().to_string();
    save_and_confirm(conn, &s)
}

fn set_logo(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut s = settings::load(conn);
    if sub.get_flag("remove") {
        s.company_logo.clear();
    } else if let Some(file) = sub.get_one::<String>("file") {
        s.company_logo = settings::logo_data_url(Path::new(file))?;
    } else {
        println!("Nothing to do: pass --file or --remove");
        return Ok(());
    }
    save_and_confirm(conn, &s)
}

fn set_language(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let mut s = settings::load(conn);
    s.language = sub.get_one::<String>("lang").unwrap().parse::<Lang>()?;
    save_and_confirm(conn, &s)
}
