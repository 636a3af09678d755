// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::i18n::tr;
use crate::settings;
use crate::utils::confirm;
use anyhow::Result;
use rusqlite::Connection;

// Both actions are stubs: they describe what would happen, ask for
// confirmation, and then state that nothing is produced.
pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let lang = settings::load(conn).language;
    match m.subcommand() {
        Some(("print", sub)) => stub(
            tr(lang, "print_report"),
            tr(lang, "report_not_generated"),
            sub,
        ),
        Some(("send", sub)) => stub(tr(lang, "send_report"), tr(lang, "report_not_sent"), sub),
        _ => Ok(()),
    }
}

fn stub(action: &str, notice: &str, sub: &clap::ArgMatches) -> Result<()> {
    if confirm(action, sub.get_flag("yes"))? {
        println!("{}", notice);
    } else {
        println!("Aborted.");
    }
    Ok(())
}
