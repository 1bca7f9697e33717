//! Shared-secret gate for mutating operations.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::AppError;

/// Decides whether a mutating request carries the admin secret.
///
/// Every rejection is [`AppError::Unauthorized`], which renders as the same
/// status with an empty message regardless of the cause (no secret
/// configured, no token supplied, wrong token), so the response cannot be
/// used as an oracle.
pub struct AdminGate {
    secret: Option<String>,
}

impl AdminGate {
    /// Creates a gate around the server-held secret.
    ///
    /// `None` (or an empty string) means no secret is configured and every
    /// mutating request is rejected.
    pub fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    /// Authorizes a caller-supplied token against the secret.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] when either side is absent/empty
    /// or the comparison fails.
    pub fn authorize(&self, token: Option<&str>) -> Result<(), AppError> {
        let secret = match self.secret.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => return Err(AppError::unauthorized()),
        };

        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AppError::unauthorized()),
        };

        if constant_time_eq(token.as_bytes(), secret.as_bytes()) {
            Ok(())
        } else {
            Err(AppError::unauthorized())
        }
    }
}

/// Compares two byte strings in constant time.
///
/// Both sides are hashed first and the fixed-length digests compared with
/// `ct_eq`, so the comparison takes the same time wherever the first
/// differing byte sits and regardless of whether the lengths differ.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let a_digest = Sha256::digest(a);
    let b_digest = Sha256::digest(b);
    bool::from(a_digest.as_slice().ct_eq(b_digest.as_slice()))
}
