//! Error types for monetary values.
//!
//! Each failure mode gets its own variant so callers can branch on kind
//! rather than matching message text. The crate never swallows an error:
//! anything that cannot be represented exactly or combined safely surfaces
//! here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The given amount cannot be converted to an exact decimal, or the
    /// currency was specified two conflicting ways during construction.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// The given code does not resolve to any currency in the registry.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
    /// The given string does not match the `"CODE amount"` grammar and does
    /// not parse as a bare decimal either.
    #[error("malformed money string: {0}")]
    MalformedMoneyString(String),
    /// Two values of differing currencies were added, subtracted, or
    /// order-compared. No implicit exchange rate exists, so this is an error
    /// rather than a coercion.
    #[error("currency mismatch: {0} != {1}")]
    CurrencyMismatch(String, String),
    /// The attempted operation has no monetary meaning for its operand
    /// types (multiplying two money values, taking a modulus, etc).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
