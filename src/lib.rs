//! An exact-decimal monetary value type with ISO 4217 currency safety.
//!
//! This crate provides two things: a read-only [registry][currency] of ISO
//! 4217 currency descriptors, and the [`Money`] value type binding an
//! arbitrary-precision decimal amount to one of those descriptors. The point
//! is to be embedded as a primitive inside larger systems (accounting,
//! billing, e-commerce) so money is never silently mixed across currencies
//! or degraded to floating point.
//!
//! ```
//! use money_core::{Error, Money};
//!
//! let subtotal: Money = "USD 123".parse()?;
//! let tax = subtotal.checked_mul(rust_decimal_macros::dec!(0.0825))?;
//! let shipped = subtotal.checked_add(Money::from_parts("4.50", "USD")?)?;
//!
//! // cross-currency arithmetic is an error, not a coercion
//! let yen = Money::from_parts(500, "JPY")?;
//! assert!(matches!(subtotal.checked_add(yen), Err(Error::CurrencyMismatch(..))));
//! # Ok::<(), Error>(())
//! ```
//!
//! Serialization (canonical `"USD 123.45"` strings) is behind the
//! `with_serde` feature flag.

pub mod currency;
pub mod error;
mod iso4217;
pub mod money;

pub use currency::{default_currency, lookup, register, Currency, NO_CURRENCY};
pub use error::{Error, Result};
pub use money::{Amount, CurrencyArg, Money, Operand};
