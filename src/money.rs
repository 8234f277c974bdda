//! The `Money` value type: an exact-decimal amount bound to a currency
//! descriptor from the registry.
//!
//! Amounts are [`rust_decimal::Decimal`]s, never floats, so arithmetic and
//! comparison carry no rounding error. The operator rules are deliberately
//! asymmetric: two money values of the same currency may be added or
//! subtracted, a money value may be scaled by a dimensionless number, but
//! multiplying or dividing two money values has no monetary meaning and is
//! refused outright, as is any cross-currency combination. Operand pairings
//! that can fail go through the `checked_*` methods and return a
//! [`Result`]; the `std::ops` impls exist only for pairings that cannot.
//!
//! Values are immutable: every operation produces a new `Money`.

use crate::{
    currency::{self, Currency},
    error::{Error, Result},
};
use rust_decimal::prelude::*;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// An amount given to [`Money::from_parts`]: either an exact decimal (or
/// anything convertible to one) or a piece of text still to be parsed.
#[derive(Clone, Copy, Debug)]
pub enum Amount<'a> {
    Decimal(Decimal),
    Text(&'a str),
}

impl From<Decimal> for Amount<'_> {
    fn from(val: Decimal) -> Self {
        Amount::Decimal(val)
    }
}

impl<'a> From<&'a str> for Amount<'a> {
    fn from(val: &'a str) -> Self {
        Amount::Text(val)
    }
}

macro_rules! amount_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Amount<'_> {
                fn from(val: $ty) -> Self {
                    Amount::Decimal(val.into())
                }
            }
        )*
    };
}

amount_from_int! { i8, i16, i32, i64, u8, u16, u32, u64, isize, usize }

/// A currency given to [`Money::from_parts`]: a resolved descriptor, a code
/// still to be looked up, or nothing at all (the registry default).
#[derive(Clone, Copy, Debug)]
pub enum CurrencyArg<'a> {
    Default,
    Code(&'a str),
    Currency(&'static Currency),
}

impl<'a> From<&'a str> for CurrencyArg<'a> {
    fn from(val: &'a str) -> Self {
        CurrencyArg::Code(val)
    }
}

impl From<&'static Currency> for CurrencyArg<'_> {
    fn from(val: &'static Currency) -> Self {
        CurrencyArg::Currency(val)
    }
}

impl CurrencyArg<'_> {
    fn resolve(self) -> Result<Option<&'static Currency>> {
        match self {
            CurrencyArg::Default => Ok(None),
            CurrencyArg::Code(code) => currency::lookup(code).map(Some),
            CurrencyArg::Currency(cur) => Ok(Some(cur)),
        }
    }
}

/// The right-hand side of a checked arithmetic operation: another money
/// value, or a dimensionless scalar.
#[derive(Clone, Copy, Debug)]
pub enum Operand {
    Money(Money),
    Scalar(Decimal),
}

impl From<Money> for Operand {
    fn from(val: Money) -> Self {
        Operand::Money(val)
    }
}

impl From<&Money> for Operand {
    fn from(val: &Money) -> Self {
        Operand::Money(*val)
    }
}

impl From<Decimal> for Operand {
    fn from(val: Decimal) -> Self {
        Operand::Scalar(val)
    }
}

macro_rules! operand_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(val: $ty) -> Self {
                    Operand::Scalar(val.into())
                }
            }
        )*
    };
}

operand_from_int! { i8, i16, i32, i64, u8, u16, u32, u64, isize, usize }

/// An exact-decimal amount of money in a particular currency.
///
/// The canonical string form is `"<CODE> <amount>"` where the amount is
/// printed exactly as held, scale included. `minor_unit_digits` never rounds
/// or pads it: a JPY value constructed from `123.25` prints as
/// `"JPY 123.25"` even though yen have no conventional subdivision.
#[derive(Clone, Copy, Debug, getset::CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Money {
    /// The exact decimal amount.
    amount: Decimal,
    /// The currency this amount is denominated in.
    currency: &'static Currency,
}

impl Money {
    /// Create a money value from a resolved amount and currency.
    pub fn new(amount: Decimal, currency: &'static Currency) -> Self {
        Self { amount, currency }
    }

    /// A zero amount of the given currency.
    pub fn zero(currency: &'static Currency) -> Self {
        Self::new(Decimal::zero(), currency)
    }

    /// Create a money value from loosely-specified parts.
    ///
    /// The amount may be an exact decimal, an integer, or text; text is
    /// tried as a bare decimal literal first and as a full `"CODE amount"`
    /// money string second. The currency may be a resolved descriptor, a
    /// code to look up, or [`CurrencyArg::Default`] for the `XXX` sentinel.
    ///
    /// ```
    /// use money_core::{Money, CurrencyArg};
    /// use rust_decimal_macros::dec;
    ///
    /// let price = Money::from_parts("10.50", "USD").unwrap();
    /// assert_eq!(price.amount(), dec!(10.50));
    /// assert_eq!(price.to_string(), "USD 10.50");
    ///
    /// let bare = Money::from_parts(dec!(123), CurrencyArg::Default).unwrap();
    /// assert_eq!(bare.to_string(), "XXX 123");
    /// ```
    ///
    /// Fails with [`Error::InvalidAmount`] when the amount is unparseable or
    /// when the text carries a currency that conflicts with an explicitly
    /// given one, and with [`Error::UnknownCurrency`] when a code does not
    /// resolve.
    pub fn from_parts<'a, A, C>(amount: A, currency: C) -> Result<Self>
        where A: Into<Amount<'a>>,
              C: Into<CurrencyArg<'a>>,
    {
        let explicit = currency.into().resolve()?;
        let (amount, parsed) = match amount.into() {
            Amount::Decimal(val) => (val, None),
            Amount::Text(text) => {
                let trimmed = text.trim();
                match Decimal::from_str(trimmed) {
                    Ok(val) => (val, None),
                    Err(_) => {
                        let money = parse_money_string(trimmed).map_err(|_| Error::InvalidAmount(text.to_string()))?;
                        (money.amount, Some(money.currency))
                    }
                }
            }
        };
        if let (Some(explicit), Some(parsed)) = (explicit, parsed) {
            if explicit != parsed {
                return Err(Error::InvalidAmount(format!("currency specified two conflicting ways: {} and {}", parsed.code(), explicit.code())));
            }
        }
        let currency = explicit.or(parsed).unwrap_or_else(currency::default_currency);
        Ok(Self::new(amount, currency))
    }

    /// Copy this value with a different amount, keeping the currency. The
    /// supported way to "modify" a value; prefer constructing anew.
    pub fn with_amount(&self, amount: Decimal) -> Self {
        Self::new(amount, self.currency)
    }

    /// Whether the amount is exactly zero, regardless of currency.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Whether the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_positive()
    }

    /// Whether the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.amount.is_zero() && self.amount.is_sign_negative()
    }

    /// The amount as a float. Lossy; for display/interop only.
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    /// The amount truncated to an integer, where it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.amount.trunc().to_i64()
    }

    fn currency_check(&self, other: &Money) -> Result<()> {
        if self.currency != other.currency {
            Err(Error::CurrencyMismatch(self.currency.code().clone(), other.currency.code().clone()))?;
        }
        Ok(())
    }

    /// Add another money value (same currency required) or a scalar.
    pub fn checked_add<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        match rhs.into() {
            Operand::Money(other) => {
                self.currency_check(&other)?;
                Ok(self.with_amount(self.amount + other.amount))
            }
            Operand::Scalar(val) => Ok(self.with_amount(self.amount + val)),
        }
    }

    /// Subtract another money value (same currency required) or a scalar.
    /// The reverse, scalar-minus-money, does not exist: a bare scalar cannot
    /// carry the result's currency.
    pub fn checked_sub<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        match rhs.into() {
            Operand::Money(other) => {
                self.currency_check(&other)?;
                Ok(self.with_amount(self.amount - other.amount))
            }
            Operand::Scalar(val) => Ok(self.with_amount(self.amount - val)),
        }
    }

    /// Scale by a dimensionless number. Multiplying two money values is
    /// refused regardless of currency: dollars-squared is not a quantity.
    pub fn checked_mul<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        match rhs.into() {
            Operand::Money(_) => Err(Error::InvalidOperation("cannot multiply monetary quantities")),
            Operand::Scalar(val) => Ok(self.with_amount(self.amount * val)),
        }
    }

    /// Divide by a dimensionless number. Dividing by another money value is
    /// refused regardless of currency.
    pub fn checked_div<T: Into<Operand>>(&self, rhs: T) -> Result<Self> {
        match rhs.into() {
            Operand::Money(_) => Err(Error::InvalidOperation("cannot divide monetary quantities")),
            Operand::Scalar(val) => {
                let amount = self.amount.checked_div(val).ok_or(Error::InvalidOperation("division by zero"))?;
                Ok(self.with_amount(amount))
            }
        }
    }

    /// Modulus is never defined for monetary quantities, whatever the
    /// operand. Present so callers get a domain error instead of reaching
    /// for `%` on the raw amount.
    pub fn checked_rem<T: Into<Operand>>(&self, _rhs: T) -> Result<Self> {
        Err(Error::InvalidOperation("modulus not supported for monetary quantities"))
    }

    /// Compare two money values, failing with [`Error::CurrencyMismatch`]
    /// when the currencies differ.
    pub fn checked_cmp(&self, other: &Money) -> Result<Ordering> {
        self.currency_check(other)?;
        Ok(self.amount.cmp(&other.amount))
    }

    /// Compare the amount against a bare scalar. A scalar has no currency to
    /// mismatch, so this never fails. Separate from `PartialOrd` because an
    /// ordering impl against scalars would have to disagree with the
    /// zero-only equality rule.
    pub fn cmp_amount<T: Into<Decimal>>(&self, rhs: T) -> Ordering {
        self.amount.cmp(&rhs.into())
    }
}

impl Default for Money {
    /// Zero in the no-currency sentinel.
    fn default() -> Self {
        Self::zero(currency::default_currency())
    }
}

/// Strict `"CODE amount"` parse: 3 alphabetic characters resolvable in the
/// registry, whitespace, then a decimal literal with nothing trailing.
fn parse_money_string(trimmed: &str) -> Result<Money> {
    let malformed = || Error::MalformedMoneyString(trimmed.to_string());
    if trimmed.len() < 3 || !trimmed.is_char_boundary(3) {
        return Err(malformed());
    }
    let (prefix, rest) = trimmed.split_at(3);
    if !prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(malformed());
    }
    let currency = currency::lookup(prefix).map_err(|_| malformed())?;
    if !rest.starts_with(char::is_whitespace) {
        return Err(malformed());
    }
    let amount = Decimal::from_str(rest.trim()).map_err(|_| malformed())?;
    Ok(Money::new(amount, currency))
}

impl FromStr for Money {
    type Err = Error;

    /// Parse the canonical `"USD 123.45"` form. A string with no
    /// recognizable code prefix falls back to parsing the whole thing as a
    /// bare decimal under the default currency, so `"123.45"` alone is
    /// accepted.
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        match Decimal::from_str(trimmed) {
            Ok(amount) => Ok(Money::new(amount, currency::default_currency())),
            Err(_) => parse_money_string(trimmed).map_err(|_| Error::MalformedMoneyString(text.to_string())),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}

impl PartialEq for Money {
    /// Amount and currency must both match; a dollar is never a euro, even
    /// at the same numeric value.
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.currency == other.currency
    }
}

impl PartialEq<Decimal> for Money {
    /// True only when both sides are zero: the zero-check idiom needs no
    /// currency, but a nonzero scalar never equals a money value.
    fn eq(&self, other: &Decimal) -> bool {
        other.is_zero() && self.amount.is_zero()
    }
}

impl PartialEq<Money> for Decimal {
    fn eq(&self, other: &Money) -> bool {
        other == self
    }
}

impl PartialEq<i64> for Money {
    fn eq(&self, other: &i64) -> bool {
        *other == 0 && self.amount.is_zero()
    }
}

impl PartialEq<Money> for i64 {
    fn eq(&self, other: &Money) -> bool {
        other == self
    }
}

impl PartialOrd for Money {
    /// `None` when the currencies differ; use [`Money::checked_cmp`] to get
    /// the mismatch as an error instead.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        Some(self.amount.cmp(&other.amount))
    }
}

impl<T: Into<Decimal>> Add<T> for Money {
    type Output = Money;

    fn add(self, rhs: T) -> Money {
        self.with_amount(self.amount + rhs.into())
    }
}

impl Add<Money> for Decimal {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        rhs + self
    }
}

impl<T: Into<Decimal>> Sub<T> for Money {
    type Output = Money;

    fn sub(self, rhs: T) -> Money {
        self.with_amount(self.amount - rhs.into())
    }
}

impl<T: Into<Decimal>> Mul<T> for Money {
    type Output = Money;

    fn mul(self, rhs: T) -> Money {
        self.with_amount(self.amount * rhs.into())
    }
}

impl Mul<Money> for Decimal {
    type Output = Money;

    fn mul(self, rhs: Money) -> Money {
        rhs * self
    }
}

impl<T: Into<Decimal>> Div<T> for Money {
    type Output = Money;

    /// Panics on a zero divisor, like `Decimal`'s own operator; use
    /// [`Money::checked_div`] for the fallible form.
    fn div(self, rhs: T) -> Money {
        self.with_amount(self.amount / rhs.into())
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.with_amount(-self.amount)
    }
}

#[cfg(feature = "with_serde")]
mod ser {
    use super::Money;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    /// Money round-trips through its canonical string form, `"USD 10.50"`.
    impl Serialize for Money {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Money::from_str(&text).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::lookup;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, lookup("USD").unwrap())
    }

    fn jpy(amount: Decimal) -> Money {
        Money::new(amount, lookup("JPY").unwrap())
    }

    #[test]
    fn from_parts_amount_forms() {
        assert_eq!(Money::from_parts(dec!(10), "USD").unwrap().amount(), dec!(10));
        assert_eq!(Money::from_parts(-10, "USD").unwrap().amount(), dec!(-10));
        assert_eq!(Money::from_parts("10.50", "USD").unwrap().amount(), dec!(10.50));
        assert_eq!(Money::from_parts("-10.50", "USD").unwrap().amount(), dec!(-10.50));
        assert_eq!(Money::from_parts(" 123", "USD").unwrap().amount(), dec!(123));

        let price = Money::from_parts("10.50", "USD").unwrap();
        assert_eq!(price.currency().code(), "USD");
        assert_eq!(price.to_string(), "USD 10.50");
    }

    #[test]
    fn from_parts_currency_forms() {
        let eur = lookup("EUR").unwrap();
        assert_eq!(Money::from_parts(dec!(1), eur).unwrap().currency(), eur);
        assert_eq!(Money::from_parts(dec!(1), "eur").unwrap().currency(), eur);
        assert_eq!(Money::from_parts(dec!(1), CurrencyArg::Default).unwrap().currency().code(), "XXX");
    }

    #[test]
    fn from_parts_rejects_garbage_amounts() {
        assert_eq!(Money::from_parts("1,000", "USD"), Err(Error::InvalidAmount("1,000".into())));
        assert_eq!(Money::from_parts("", "USD"), Err(Error::InvalidAmount("".into())));
        assert!(Money::from_parts("ten", "USD").is_err());
    }

    #[test]
    fn from_parts_unknown_currency() {
        assert_eq!(Money::from_parts(dec!(10), "ZZZ"), Err(Error::UnknownCurrency("ZZZ".into())));
    }

    #[test]
    fn from_parts_embedded_currency() {
        // text may carry its own currency when none is given explicitly
        let parsed = Money::from_parts("USD 123", CurrencyArg::Default).unwrap();
        assert_eq!(parsed, usd(dec!(123)));

        // agreement between the two specifications is fine
        let agreed = Money::from_parts("USD 123", "usd").unwrap();
        assert_eq!(agreed, usd(dec!(123)));

        // disagreement is not
        let conflict = Money::from_parts("USD 123", "JPY");
        assert!(matches!(conflict, Err(Error::InvalidAmount(_))), "got {:?}", conflict);
    }

    #[test]
    fn zero_and_default() {
        let nothing = Money::default();
        assert_eq!(nothing.amount(), Decimal::zero());
        assert_eq!(nothing.currency().code(), "XXX");
        assert_eq!(Money::zero(lookup("USD").unwrap()).to_string(), "USD 0");
    }

    #[test]
    fn with_amount_keeps_currency() {
        let price = usd(dec!(10.50));
        let repriced = price.with_amount(dec!(12));
        assert_eq!(repriced.amount(), dec!(12));
        assert_eq!(repriced.currency(), price.currency());
    }

    #[test]
    fn parses_canonical_strings() {
        assert_eq!("USD 123.45".parse::<Money>().unwrap(), usd(dec!(123.45)));
        assert_eq!("JPY -12.50".parse::<Money>().unwrap(), jpy(dec!(-12.50)));
        assert_eq!("usd 5".parse::<Money>().unwrap(), usd(dec!(5)));
        assert_eq!("  USD   7.25  ".parse::<Money>().unwrap(), usd(dec!(7.25)));
    }

    #[test]
    fn parses_bare_decimals_under_the_default_currency() {
        let bare = "123.45".parse::<Money>().unwrap();
        assert_eq!(bare.amount(), dec!(123.45));
        assert_eq!(bare.currency().code(), "XXX");
        assert_eq!("-123".parse::<Money>().unwrap().to_string(), "XXX -123");
    }

    #[test]
    fn parse_rejects_malformed_strings() {
        for bad in &["USD 123 USD", "USD", "USD ", "USDX 5", "ZZZ 123", "12 USD", "USD 1,5", ""] {
            let res = bad.parse::<Money>();
            assert_eq!(res, Err(Error::MalformedMoneyString(bad.to_string())), "input {:?}", bad);
        }
        // no-space form is not part of the grammar
        assert!("USD123.45".parse::<Money>().is_err());
    }

    #[test]
    fn display_preserves_scale() {
        assert_eq!(usd(dec!(123.0000)).to_string(), "USD 123.0000");
        assert_eq!(usd(dec!(-123.25)).to_string(), "USD -123.25");
        // minor-unit metadata never rounds the amount
        assert_eq!(jpy(dec!(123.25)).to_string(), "JPY 123.25");
        assert_eq!(jpy(dec!(123)).to_string(), "JPY 123");
    }

    #[test]
    fn round_trips_through_the_canonical_form() {
        for (amount, code) in &[("10.50", "USD"), ("-123.0000", "JPY"), ("0", "EUR"), ("123.45", "XXX")] {
            let money = Money::from_parts(*amount, *code).unwrap();
            assert_eq!(money.to_string().parse::<Money>().unwrap(), money);
        }
    }

    #[test]
    fn checked_add_and_sub() {
        let a = usd(dec!(100));
        assert_eq!(a.checked_add(usd(dec!(100))).unwrap(), usd(dec!(200)));
        assert_eq!(a.checked_add(usd(dec!(-100))).unwrap(), usd(dec!(0)));
        assert_eq!(a.checked_add(dec!(0.5)).unwrap(), usd(dec!(100.5)));
        assert_eq!(a.checked_sub(usd(dec!(3))).unwrap(), usd(dec!(97)));
        assert_eq!(a.checked_sub(101).unwrap(), usd(dec!(-1)));

        // subtraction below zero is fine, amounts are signed
        assert_eq!(usd(dec!(3)).checked_sub(usd(dec!(10))).unwrap(), usd(dec!(-7)));
    }

    #[test]
    fn cross_currency_add_and_sub_fail() {
        let mismatch = Err(Error::CurrencyMismatch("JPY".into(), "USD".into()));
        assert_eq!(jpy(dec!(10)).checked_add(usd(dec!(3))), mismatch);
        assert_eq!(jpy(dec!(10)).checked_sub(usd(dec!(3))), mismatch);
    }

    #[test]
    fn money_times_money_is_refused() {
        let a = usd(dec!(100));
        // same and differing currencies alike
        assert_eq!(a.checked_mul(usd(dec!(3))), Err(Error::InvalidOperation("cannot multiply monetary quantities")));
        assert_eq!(a.checked_mul(jpy(dec!(3))), Err(Error::InvalidOperation("cannot multiply monetary quantities")));
        assert_eq!(a.checked_div(usd(dec!(3))), Err(Error::InvalidOperation("cannot divide monetary quantities")));
        assert_eq!(a.checked_div(jpy(dec!(3))), Err(Error::InvalidOperation("cannot divide monetary quantities")));
    }

    #[test]
    fn scalar_scaling() {
        let a = usd(dec!(100));
        assert_eq!(a.checked_mul(4).unwrap(), usd(dec!(400)));
        assert_eq!(a.checked_mul(dec!(0.25)).unwrap(), usd(dec!(25)));
        assert_eq!(a.checked_div(4).unwrap(), usd(dec!(25)));
        assert_eq!(a.checked_div(0), Err(Error::InvalidOperation("division by zero")));
    }

    #[test]
    fn modulus_is_refused() {
        let a = usd(dec!(100));
        assert_eq!(a.checked_rem(4), Err(Error::InvalidOperation("modulus not supported for monetary quantities")));
        assert_eq!(a.checked_rem(usd(dec!(4))), Err(Error::InvalidOperation("modulus not supported for monetary quantities")));
    }

    #[test]
    fn scalar_operators() {
        let a = usd(dec!(100));
        assert_eq!(a + dec!(0.5), usd(dec!(100.5)));
        assert_eq!(dec!(0.5) + a, usd(dec!(100.5)));
        assert_eq!(a - 100, usd(dec!(0)));
        assert_eq!(a * 4, usd(dec!(400)));
        assert_eq!(dec!(4) * a, usd(dec!(400)));
        assert_eq!(a / dec!(4), usd(dec!(25)));
    }

    #[test]
    fn negation() {
        let a = usd(dec!(100.12));
        assert_eq!(-a, usd(dec!(-100.12)));
        assert_eq!(-(-a), a);
    }

    #[test]
    fn equality() {
        let ten_bucks = usd(dec!(10));
        let a_hamilton = usd(dec!(10));
        let juu_en = jpy(dec!(10));

        assert_eq!(ten_bucks, a_hamilton);
        assert_ne!(ten_bucks, juu_en);

        // scale-insensitive amount equality
        assert_eq!(usd(dec!(10.50)), usd(dec!(10.5000)));
    }

    #[test]
    fn zero_equality_special_case() {
        assert!(usd(dec!(0)) == dec!(0));
        assert!(Money::zero(lookup("EUR").unwrap()) == 0);
        assert!(usd(dec!(5)) != dec!(0));
        // a nonzero scalar never equals a money value
        assert!(usd(dec!(5)) != dec!(5));
        assert!(5 != usd(dec!(5)));
        assert!(dec!(0) == usd(dec!(0)));
    }

    #[test]
    fn ordering() {
        assert!(usd(dec!(5)) < usd(dec!(6)));
        assert!(usd(dec!(6)) >= usd(dec!(6)));
        assert_eq!(usd(dec!(5)).partial_cmp(&jpy(dec!(5))), None);
        assert_eq!(usd(dec!(5)).checked_cmp(&usd(dec!(7))).unwrap(), Ordering::Less);
        assert_eq!(usd(dec!(5)).checked_cmp(&jpy(dec!(5))), Err(Error::CurrencyMismatch("USD".into(), "JPY".into())));
    }

    #[test]
    fn scalar_ordering_goes_through_cmp_amount() {
        assert_eq!(usd(dec!(5)).cmp_amount(6), Ordering::Less);
        assert_eq!(usd(dec!(5)).cmp_amount(dec!(5)), Ordering::Equal);
        assert_eq!(jpy(dec!(5)).cmp_amount(4), Ordering::Greater);
    }

    #[test]
    fn truthiness() {
        assert!(usd(dec!(0)).is_zero());
        assert!(!usd(dec!(0.01)).is_zero());
        assert!(usd(dec!(0.01)).is_positive());
        assert!(usd(dec!(-3)).is_negative());
        assert!(!usd(dec!(0)).is_positive());
        assert!(!usd(dec!(0)).is_negative());
    }

    #[test]
    fn numeric_casts() {
        assert_eq!(usd(dec!(100)).to_f64(), Some(100.0));
        assert_eq!(usd(dec!(100.75)).to_i64(), Some(100));
    }

    #[test]
    fn arithmetic_identities() {
        let a = usd(dec!(12.34));
        let b = usd(dec!(56.78));
        assert_eq!(a.checked_add(Money::zero(a.currency())).unwrap(), a);
        assert_eq!(a.checked_sub(a).unwrap(), Money::zero(a.currency()));
        assert_eq!(a.checked_add(b).unwrap(), b.checked_add(a).unwrap());
        assert_eq!(a.checked_add(b).unwrap().checked_sub(b).unwrap(), a);
    }

    #[test]
    fn parse_then_subtract_scenario() {
        let result = "USD 123".parse::<Money>().unwrap().checked_sub(usd(dec!(3))).unwrap();
        assert_eq!(result, usd(dec!(120)));
        assert_eq!(result.to_string(), "USD 120");
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serde_round_trip() {
        let price = usd(dec!(10.50));
        assert_eq!(serde_json::to_string(&price).unwrap(), r#""USD 10.50""#);
        let back: Money = serde_json::from_str(r#""USD 10.50""#).unwrap();
        assert_eq!(back, price);
        let res: std::result::Result<Money, _> = serde_json::from_str(r#""USD 123 USD""#);
        assert!(res.is_err());
    }
}
