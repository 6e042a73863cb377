//! The signature canonicalizer.

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::constants::SHA_IN_PARAMS;
use crate::constants::SHA_OUT_PARAMS;
use crate::hash::constant_time_eq;
use crate::Error;
use crate::HashAlgorithm;
use crate::ParamMap;
use crate::Result;

/// The parameter carrying the digest itself. Matched exactly, on the
/// original unnormalized key, and never part of its own input.
const SIGNATURE_PARAM: &str = "SHASIGN";

/// Which way the signed message travels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// A request from the merchant toward the gateway, signed with the
    /// SHA-IN parameter list.
    #[default]
    Outbound,
    /// A response or callback from the gateway, verified against the
    /// SHA-OUT parameter list.
    Inbound,
}

/// Which allow-list admits parameters into the signature.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ParamFilter {
    /// The published list for the configured [`Direction`].
    #[default]
    Standard,
    /// A caller-supplied set of uppercase parameter names. Merchant
    /// accounts can be configured to sign a different subset than the
    /// published lists.
    Custom(HashSet<String>),
    /// Admit every parameter. Empty values and `SHASIGN` are still
    /// excluded.
    AllowAll,
}

/// Byte encoding applied to the string to sign before hashing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8, the default.
    #[default]
    Utf8,
    /// ISO-8859-1, the gateway's legacy page encoding.
    Iso8859_1,
}

impl Encoding {
    /// Encode `s` into bytes.
    pub fn encode(&self, s: &str) -> Result<Vec<u8>> {
        match self {
            Encoding::Utf8 => Ok(s.as_bytes().to_vec()),
            Encoding::Iso8859_1 => {
                let mut bytes = Vec::with_capacity(s.len());
                for c in s.chars() {
                    let cp = c as u32;
                    if cp > 0xFF {
                        return Err(Error::value_invalid(format!(
                            "character {c:?} has no ISO-8859-1 encoding"
                        )));
                    }
                    bytes.push(cp as u8);
                }
                Ok(bytes)
            }
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Encoding::Iso8859_1),
            _ => Err(Error::config_invalid(format!("unsupported encoding: {s}"))),
        }
    }
}

/// Computes the `SHASIGN` digest over a set of gateway parameters.
///
/// The canonicalization protocol is fixed by the gateway and order and
/// filter sensitive:
///
/// - keys are uppercased;
/// - entries with empty or absent values are dropped;
/// - entries whose key is not in the allow-list for the direction are
///   dropped, as is the `SHASIGN` field itself;
/// - the survivors are sorted ascending by uppercased key;
/// - each pair is rendered `KEY=value` and the shared secret is placed
///   between every pair and once more at the end;
/// - the result is encoded and hashed, and the digest rendered as
///   uppercase hex.
///
/// If two keys differ only in case they collapse onto one uppercased name
/// and the entry inserted later into the [`ParamMap`] wins.
///
/// A `Signature` is immutable once built; construct one per signing
/// operation.
pub struct Signature {
    params: ParamMap,
    hash_method: HashAlgorithm,
    secret: String,
    direction: Direction,
    filter: ParamFilter,
    encoding: Encoding,
}

impl Signature {
    /// Create a canonicalizer over `params`.
    ///
    /// Fails with a configuration error when `secret` is empty. Direction
    /// defaults to [`Direction::Outbound`], the filter to the published
    /// list for that direction, and the encoding to UTF-8.
    pub fn new(
        params: ParamMap,
        hash_method: HashAlgorithm,
        secret: impl Into<String>,
    ) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::config_invalid("secret must not be empty"));
        }

        Ok(Self {
            params,
            hash_method,
            secret,
            direction: Direction::default(),
            filter: ParamFilter::default(),
            encoding: Encoding::default(),
        })
    }

    /// Set the message direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Override the parameter filter.
    pub fn with_filter(mut self, filter: ParamFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the byte encoding of the string to sign.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    fn admits(&self, upper_key: &str) -> bool {
        match &self.filter {
            ParamFilter::Standard => match self.direction {
                Direction::Outbound => SHA_IN_PARAMS.contains(upper_key),
                Direction::Inbound => SHA_OUT_PARAMS.contains(upper_key),
            },
            ParamFilter::Custom(names) => names.contains(upper_key),
            ParamFilter::AllowAll => true,
        }
    }

    /// Filter and sort the parameters into their canonical order.
    ///
    /// Returns `(uppercased key, rendered value)` pairs sorted ascending
    /// by key. This is the representation the preimage is built from,
    /// independent of the mapping's insertion order.
    pub fn canonical_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = BTreeMap::new();
        for (key, value) in self.params.iter() {
            if key == SIGNATURE_PARAM {
                continue;
            }
            if value.is_empty() {
                continue;
            }
            let upper = key.to_uppercase();
            if !self.admits(&upper) {
                continue;
            }

            // Later entries overwrite earlier ones when two keys fold onto
            // the same uppercased name.
            pairs.insert(upper, value.render()?);
        }

        Ok(pairs.into_iter().collect())
    }

    /// Join the canonical pairs with the secret.
    ///
    /// The secret separates every pair and is appended once at the end.
    /// With no pairs at all the string to sign is the bare secret.
    fn merge(&self, pairs: &[(String, String)]) -> String {
        if pairs.is_empty() {
            return self.secret.clone();
        }

        let mut s = String::new();
        for (key, value) in pairs {
            s.push_str(key);
            s.push('=');
            s.push_str(value);
            s.push_str(&self.secret);
        }

        s
    }

    /// The exact byte sequence that gets hashed.
    pub fn preimage(&self) -> Result<Vec<u8>> {
        let pairs = self.canonical_pairs()?;
        self.encoding.encode(&self.merge(&pairs))
    }

    /// Compute the signed digest.
    pub fn signature(&self) -> Result<String> {
        debug!("making signature for params: {:?}", self.params);

        let pairs = self.canonical_pairs()?;
        debug!("canonical pairs: {pairs:?}");

        let string_to_sign = self.merge(&pairs);
        debug!("string to sign: {string_to_sign}");

        let signed = self
            .hash_method
            .hex_digest(&self.encoding.encode(&string_to_sign)?);
        debug!("signed digest: {signed}");

        Ok(signed)
    }

    /// Check a digest received from the other party.
    ///
    /// The comparison ignores case and runs in constant time. A digest of
    /// the wrong length is simply wrong.
    pub fn verify(&self, provided: &str) -> Result<bool> {
        let expected = self.signature()?;
        let provided = provided.to_uppercase();

        Ok(constant_time_eq(
            expected.as_bytes(),
            provided.as_bytes(),
        ))
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("params", &self.params)
            .field("hash_method", &self.hash_method)
            .field("secret", &"***")
            .field("direction", &self.direction)
            .field("filter", &self.filter)
            .field("encoding", &self.encoding)
            .finish()
    }
}
