// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::auth::{Authenticator, StaticCredentials};
use crate::i18n::tr;
use crate::settings;
use anyhow::Result;
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let lang = settings::load(conn).language;
    let username = m.get_one::<String>("username").unwrap();
    let password = m.get_one::<String>("password").unwrap();
    let auth = StaticCredentials::default();
    if auth.verify(username, password) {
        println!("{}", tr(lang, "login_success"));
    } else {
        // One generic message for every wrong pair.
        eprintln!("{}", tr(lang, "invalid_credentials"));
    }
    Ok(())
}
