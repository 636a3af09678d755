// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tourdesk::{cli, commands, db};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("login", sub)) => commands::login::handle(&conn, sub)?,
        Some(("booking", sub)) => commands::bookings::handle(&conn, sub)?,
        Some(("trip", sub)) => commands::trips::handle(&conn, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&conn, sub)?,
        Some(("client", sub)) => commands::clients::handle(&conn, sub)?,
        Some(("supervisor", sub)) => commands::supervisors::handle(&conn, sub)?,
        Some(("treasury", sub)) => commands::treasury::handle(&conn, sub)?,
        Some(("report", sub)) => commands::reports::handle(&conn, sub)?,
        Some(("admin", sub)) => commands::admin::handle(&conn, sub)?,
        Some(("seed", _)) => commands::seed::handle(&conn)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
