//! SHA signature canonicalization for Ogone-style payment gateways.
//!
//! The gateway and the merchant share a secret passphrase. Every message
//! between them carries a `SHASIGN` digest computed over the message's
//! parameters through a fixed canonicalization protocol: uppercase the
//! keys, drop empty values and parameters outside the published
//! allow-list for the message's direction, sort, join with the secret,
//! hash. Both sides recompute the digest to detect tampering, so the
//! canonicalization here has to match the gateway's specification
//! bit-for-bit.
//!
//! ## Example
//!
//! Signing an outbound payment request:
//!
//! ```
//! use shasign::{HashAlgorithm, ParamMap, Signature};
//!
//! # fn main() -> shasign::Result<()> {
//! let params: ParamMap = [
//!     ("amount", "1500"),
//!     ("currency", "EUR"),
//!     ("operation", "RES"),
//!     ("orderID", "1234"),
//!     ("PSPID", "MyPSPID"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let signature = Signature::new(params, HashAlgorithm::Sha1, "Mysecretsig1875!?")?;
//! assert_eq!(
//!     signature.signature()?,
//!     "EB52902BCC4B50DC1250E5A7C1068ECF97751256"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Verifying an inbound callback:
//!
//! ```
//! use shasign::{Direction, HashAlgorithm, ParamMap, Signature};
//!
//! # fn main() -> shasign::Result<()> {
//! let params: ParamMap = [("orderId", "12"), ("STATUS", "9")].into_iter().collect();
//!
//! let signature = Signature::new(params, HashAlgorithm::Sha1, "Mysecretsig1875!?")?
//!     .with_direction(Direction::Inbound);
//! assert!(signature.verify("6A6C21C6F1339AAE09B93079B83CC34D2FB43F03")?);
//! # Ok(())
//! # }
//! ```
//!
//! Logging is the `log` facade: at debug level the canonicalizer traces
//! the input mapping, the canonical pairs, the string to sign, and the
//! digest. Note that the string to sign embeds the shared secret.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod constants;
pub mod hash;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

mod params;
pub use params::ParamMap;
pub use params::Value;

mod sign;
pub use sign::Direction;
pub use sign::Encoding;
pub use sign::ParamFilter;
pub use sign::Signature;

pub use hash::HashAlgorithm;
