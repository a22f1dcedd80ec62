//! Device fingerprinting.
//!
//! The fingerprint (HWID) is the SHA-256 of `"{hostname}|{username}|{arch}"`,
//! hex encoded. It is recomputed on every run and never stored.

use sha2::{Digest, Sha256};

/// Substituted for any host property that cannot be read.
pub const UNKNOWN: &str = "unknown";

/// The ambient host properties a fingerprint is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub hostname: String,
    /// `None` when the OS user name is unavailable.
    pub username: Option<String>,
    pub arch: String,
}

impl HostIdentity {
    /// Read the identity of the machine and user this process runs as.
    pub fn current() -> Self {
        let hostname = whoami::fallible::hostname().unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Could not read host name");
            UNKNOWN.to_string()
        });
        let username = whoami::fallible::username().ok();

        Self {
            hostname,
            username,
            arch: std::env::consts::ARCH.to_string(),
        }
    }

    /// The `|`-joined string that gets hashed.
    pub fn canonical(&self) -> String {
        let username = match self.username.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => UNKNOWN,
        };
        format!("{}|{}|{}", self.hostname, username, self.arch)
    }

    /// 64-character lowercase hex SHA-256 of [`HostIdentity::canonical`].
    pub fn fingerprint(&self) -> String {
        hex::encode(Sha256::digest(self.canonical().as_bytes()))
    }
}

/// Returns the fingerprint of the current machine.
pub fn compute_fingerprint() -> String {
    HostIdentity::current().fingerprint()
}

/// First eight characters of a fingerprint, for display.
pub fn short_fingerprint(fingerprint: &str) -> &str {
    fingerprint.get(..8).unwrap_or(fingerprint)
}
