//! Fixed demo credential table.

use crate::directory::domain::Role;
use sha2::{Digest, Sha256};

/// One demo account in the fixed credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoAccount {
    username: &'static str,
    password_sha256: &'static str,
    role: Role,
    display_name: &'static str,
}

impl DemoAccount {
    /// Returns the login name.
    #[must_use]
    pub const fn username(&self) -> &'static str {
        self.username
    }

    /// Returns the role granted on sign-in.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the display name shown after sign-in.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        self.display_name
    }
}

/// The three demo accounts.
///
/// Passwords are stored as lowercase hex SHA-256 digests of the demo
/// passwords `admin123`, `manager123`, and `executor123`.
pub static DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        username: "admin",
        password_sha256: "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9",
        role: Role::Admin,
        display_name: "Administrator",
    },
    DemoAccount {
        username: "manager",
        password_sha256: "866485796cfa8d7c0cf7111640205b83076433547577511d81f8030ae99ecea5",
        role: Role::Manager,
        display_name: "Ivan Petrov",
    },
    DemoAccount {
        username: "executor",
        password_sha256: "0c5908c35fb0138198f9c0de7bf7df4819d2fb58a7bc0ca607dc8994a94a96d9",
        role: Role::Executor,
        display_name: "Sergei Ivanov",
    },
];

fn sha256_hex(input: &str) -> String {
    Sha256::digest(input.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}

/// Checks submitted credentials against the demo table.
///
/// Returns the matched account, or `None` when no entry matches exactly.
/// Every attempt is independent: there is no lockout or backoff.
#[must_use]
pub fn verify_credentials(username: &str, password: &str) -> Option<&'static DemoAccount> {
    let digest = sha256_hex(password);
    DEMO_ACCOUNTS
        .iter()
        .find(|account| account.username == username && account.password_sha256 == digest)
}
