//! # Account Addresses
//!
//! The [`Address`] newtype wraps a 20-byte hex account address and validates
//! it at construction and deserialization. Schema validation enforces the
//! same pattern (`^0x[a-fA-F0-9]{40}$`) on the wire, so a value that made it
//! into an `Address` serializes back to a schema-conformant string.
//!
//! Case is preserved verbatim: addresses are compared byte-for-byte and
//! round-trip without normalization.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Chain ID of the only network proposals currently execute on.
pub const MAINNET_CHAIN_ID: u64 = 1;

/// Agent accounts allowed to originate on-chain transactions for the DAO.
///
/// Transfers and contract calls must name one of these as their `from`
/// account; the schema registry pins the same set per revision.
pub const DAO_AGENTS: [&str; 2] = [
    "0x7b81e8d4e82796c9b76284fa4d21e57b8b86a06c",
    "0x336252602b3a8a0be336ed942228305173e8082b",
];

/// Error returned when a string is not a well-formed account address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid account address '{0}': expected 0x followed by 40 hex characters")]
pub struct AddressError(pub String);

/// A 20-byte hex account address (`0x` followed by 40 hex characters).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parse and validate an address string.
    ///
    /// # Errors
    ///
    /// Returns [`AddressError`] if the input does not match the 20-byte
    /// hex pattern.
    pub fn parse(s: impl Into<String>) -> Result<Self, AddressError> {
        let s = s.into();
        if is_well_formed(&s) {
            Ok(Self(s))
        } else {
            Err(AddressError(s))
        }
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this address is one of the DAO agent accounts.
    pub fn is_dao_agent(&self) -> bool {
        DAO_AGENTS.iter().any(|a| a.eq_ignore_ascii_case(&self.0))
    }
}

fn is_well_formed(s: &str) -> bool {
    let Some(hex) = s.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.0
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
