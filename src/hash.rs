//! Hash algorithm selection and digest helpers.

use std::fmt;
use std::str::FromStr;

use sha1::Sha1;
use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;

use crate::Error;

/// Hash algorithms accepted by the gateway.
///
/// The gateway supports exactly these three; anything else must be rejected
/// at configuration time instead of silently falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-1, 40 hex chars.
    Sha1,
    /// SHA-256, 64 hex chars.
    Sha256,
    /// SHA-512, 128 hex chars.
    Sha512,
}

impl HashAlgorithm {
    /// The canonical lowercase name, as it appears in gateway configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Length of the hex rendering of a digest.
    pub fn hex_digest_len(&self) -> usize {
        self.digest_len() * 2
    }

    /// Digest `content` and render it as uppercase hex, the form the
    /// gateway exchanges signatures in.
    pub fn hex_digest(&self, content: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha1 => hex::encode_upper(Sha1::digest(content)),
            HashAlgorithm::Sha256 => hex::encode_upper(Sha256::digest(content)),
            HashAlgorithm::Sha512 => hex::encode_upper(Sha512::digest(content)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(HashAlgorithm::Sha1),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::config_invalid(format!(
                "unsupported hash algorithm: {s}"
            ))),
        }
    }
}

/// Equality comparison without early exit, so timing reveals nothing about
/// how many leading bytes matched.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
