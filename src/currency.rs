//! The currency registry: an immutable catalogue of ISO 4217 currency
//! descriptors, keyed by 3-letter alphabetic code.
//!
//! The registry is seeded once from the fixed table in [`crate::iso4217`] and
//! is read-only afterwards, apart from [`register`], which lets an
//! application install custom currencies during its init phase. Descriptors
//! are handed out as `&'static Currency` references, which is what
//! [`Money`][crate::money::Money] stores, so lookups after construction are
//! never needed.

use crate::{
    error::{Error, Result},
    iso4217,
};
use getset::{CopyGetters, Getters};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::RwLock;

/// The reserved "no currency" code, used whenever a caller does not supply a
/// currency.
pub const NO_CURRENCY: &str = "XXX";

/// An immutable descriptor for a single currency.
///
/// The 3-letter uppercase code is the identity: two descriptors are equal iff
/// their codes are equal, and every other field is informational only. In
/// particular `minor_unit_digits` is display metadata; it never constrains
/// how many fractional digits an amount may carry.
#[derive(Clone, Debug, Getters, CopyGetters)]
pub struct Currency {
    /// The 3-letter uppercase alphabetic code (e.g. `"USD"`).
    #[getset(get = "pub")]
    code: String,
    /// The 3-digit ISO numeric code, where the standard assigns one.
    #[getset(get = "pub")]
    numeric_code: Option<String>,
    /// The display name (e.g. `"US Dollar"`).
    #[getset(get = "pub")]
    name: String,
    /// The display symbol (e.g. `"$"`). Often empty.
    #[getset(get = "pub")]
    symbol: String,
    /// How many fractional digits this currency conventionally uses.
    #[getset(get_copy = "pub")]
    minor_unit_digits: u32,
    /// The territories this currency is used in.
    #[getset(get = "pub")]
    territories: Vec<String>,
}

impl Currency {
    /// Create a new descriptor. The code is normalized to uppercase.
    pub fn new<T: Into<String>>(code: T, numeric_code: Option<&str>, name: &str, symbol: &str, minor_unit_digits: u32, territories: &[&str]) -> Self {
        Self {
            code: code.into().to_uppercase(),
            numeric_code: numeric_code.map(|x| x.to_string()),
            name: name.to_string(),
            symbol: symbol.to_string(),
            minor_unit_digits,
            territories: territories.iter().map(|x| x.to_string()).collect(),
        }
    }

    /// Whether this is the reserved "no currency" sentinel.
    pub fn is_no_currency(&self) -> bool {
        self.code == NO_CURRENCY
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.code == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.code == *other
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)
    }
}

struct Registry {
    by_code: RwLock<HashMap<String, &'static Currency>>,
    default: &'static Currency,
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    let mut by_code = HashMap::new();
    for currency in iso4217::table() {
        let currency: &'static Currency = Box::leak(Box::new(currency));
        by_code.insert(currency.code().clone(), currency);
    }
    let default = *by_code.get(NO_CURRENCY).expect("ISO 4217 table includes the XXX sentinel");
    Registry {
        by_code: RwLock::new(by_code),
        default,
    }
});

/// Resolve a currency code to its descriptor. The code is trimmed and
/// matched case-insensitively.
pub fn lookup(code: &str) -> Result<&'static Currency> {
    let normalized = code.trim().to_uppercase();
    let by_code = REGISTRY.by_code.read().expect("currency registry lock");
    by_code.get(&normalized).copied().ok_or(Error::UnknownCurrency(normalized))
}

/// The `XXX` no-currency sentinel, used whenever no currency is supplied.
pub fn default_currency() -> &'static Currency {
    REGISTRY.default
}

/// Install a custom currency, keyed by its code. Re-registering an existing
/// code replaces the registry entry (last write wins); values constructed
/// from the old descriptor keep it. Each registration leaks its descriptor
/// so it can be handed out as a `'static` reference.
///
/// Intended for application init; the registry lock makes it safe to call
/// concurrently with lookups regardless.
pub fn register(currency: Currency) -> &'static Currency {
    let entry: &'static Currency = Box::leak(Box::new(currency));
    let mut by_code = REGISTRY.by_code.write().expect("currency registry lock");
    by_code.insert(entry.code().clone(), entry);
    entry
}

#[cfg(feature = "with_serde")]
mod ser {
    use super::{lookup, Currency};
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    /// Currencies serialize as their bare alphabetic code and deserialize
    /// through the registry.
    impl Serialize for Currency {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.code())
        }
    }

    impl<'de> Deserialize<'de> for &'static Currency {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let code = String::deserialize(deserializer)?;
            lookup(&code).map_err(de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let usd = lookup("USD").unwrap();
        assert_eq!(usd.code(), "USD");
        assert_eq!(lookup("usd").unwrap(), usd);
        assert_eq!(lookup(" eur ").unwrap().code(), "EUR");
    }

    #[test]
    fn lookup_unknown_code() {
        assert_eq!(lookup("ZZZ"), Err(Error::UnknownCurrency("ZZZ".into())));
        assert_eq!(lookup("dollars"), Err(Error::UnknownCurrency("DOLLARS".into())));
    }

    #[test]
    fn default_is_the_no_currency_sentinel() {
        let default = default_currency();
        assert_eq!(default.code(), "XXX");
        assert!(default.is_no_currency());
        assert_eq!(default, lookup("xxx").unwrap());
        assert!(!lookup("USD").unwrap().is_no_currency());
    }

    #[test]
    fn descriptor_metadata() {
        let usd = lookup("USD").unwrap();
        assert_eq!(usd.numeric_code().as_deref(), Some("840"));
        assert_eq!(usd.name(), "US Dollar");
        assert_eq!(usd.symbol(), "$");
        assert_eq!(usd.minor_unit_digits(), 2);
        assert!(usd.territories().iter().any(|x| x == "UNITED STATES"));

        // a whole-unit currency, a three-digit one, and a blank numeric code
        assert_eq!(lookup("JPY").unwrap().minor_unit_digits(), 0);
        assert_eq!(lookup("BHD").unwrap().minor_unit_digits(), 3);
        assert_eq!(lookup("XFU").unwrap().numeric_code(), &None);
    }

    #[test]
    fn equality_is_code_only() {
        let a = Currency::new("ABC", Some("990"), "ABC Currency", "$", 2, &["My Country"]);
        let b = Currency::new("abc", Some("991"), "Same code, other fields differ", "#", 1, &[]);
        let c = Currency::new("BCD", Some("990"), "ABC Currency", "$", 2, &["My Country"]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_against_strings() {
        let usd = lookup("USD").unwrap();
        assert_eq!(*usd, *"USD");
        assert_ne!(*usd, *"JPY");
        assert_eq!(usd, &"USD");
    }

    #[test]
    fn register_custom_currency() {
        let registered = register(Currency::new("fak", Some("000"), "Fake Money", "", 2, &[]));
        assert_eq!(registered.code(), "FAK");
        assert_eq!(lookup("fak").unwrap(), registered);

        // last write wins
        let replaced = register(Currency::new("FAK", Some("001"), "Faker Money", "", 0, &[]));
        let resolved = lookup("FAK").unwrap();
        assert_eq!(resolved.name(), "Faker Money");
        assert_eq!(resolved.minor_unit_digits(), 0);
        assert_eq!(registered, replaced);
    }

    #[cfg(feature = "with_serde")]
    #[test]
    fn serializes_as_code() {
        let usd = lookup("USD").unwrap();
        assert_eq!(serde_json::to_string(usd).unwrap(), r#""USD""#);
        let back: &'static Currency = serde_json::from_str(r#""jpy""#).unwrap();
        assert_eq!(back.code(), "JPY");
        let res: std::result::Result<&'static Currency, _> = serde_json::from_str(r#""ZZZ""#);
        assert!(res.is_err());
    }
}
