// Copyright (c) 2025 Tourdesk contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Credential check behind a seam so a real credential store can be swapped
/// in without touching the command layer. No session state is kept anywhere.
pub trait Authenticator {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Exact-match check against one fixed credential pair. Explicitly not a
/// security mechanism; the back office runs single-user on one machine.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for StaticCredentials {
    fn default() -> Self {
        Self::new("admin", "12345")
    }
}

impl Authenticator for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}
