//! Item names and stock quantities.
//!
//! Both types are the boundary between raw text typed by a user and the
//! inventory: once a value exists it has already been validated.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Exact-match, case-sensitive name of a stocked item.
///
/// Whitespace is significant: `"bolt"` and `"bolt "` are different items.
/// Line breaks are not allowed; listings and exports are one item per line.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if name.contains(['\n', '\r']) {
            return Err(DomainError::validation("item name cannot contain line breaks"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

/// Units held for an item.
///
/// Any integer is accepted, zero and negatives included; the inventory only
/// compares quantities against a low-stock threshold and never enforces a floor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i64);

impl Quantity {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Parse user input (surrounding whitespace ignored).
    pub fn parse(input: &str) -> DomainResult<Self> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::parse("quantity", input))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for Quantity {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            ItemName::new("").unwrap_err(),
            DomainError::validation("item name cannot be empty")
        );
    }

    #[test]
    fn line_breaks_are_rejected() {
        for raw in ["a\nb", "bolt\r", "\n"] {
            assert_eq!(
                ItemName::new(raw).unwrap_err(),
                DomainError::validation("item name cannot contain line breaks"),
                "name {raw:?}"
            );
        }
    }

    #[test]
    fn names_are_case_and_whitespace_sensitive() {
        let lower = ItemName::new("bolt").unwrap();
        assert_ne!(lower, ItemName::new("Bolt").unwrap());
        assert_ne!(lower, ItemName::new("bolt ").unwrap());
        assert_eq!(ItemName::new(" ").unwrap().as_str(), " ");
    }

    #[test]
    fn quantity_accepts_zero_negatives_and_padding() {
        assert_eq!(Quantity::parse("0").unwrap(), Quantity::new(0));
        assert_eq!(Quantity::parse("-7").unwrap(), Quantity::new(-7));
        assert_eq!(Quantity::parse("  12\t").unwrap(), Quantity::new(12));
    }

    #[test]
    fn non_numeric_quantity_is_a_parse_error() {
        for input in ["abc", "", "1.5", "3 apples", "99999999999999999999"] {
            assert_eq!(
                Quantity::parse(input).unwrap_err(),
                DomainError::parse("quantity", input),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn serde_keeps_plain_shapes_and_validates_names() {
        let name = ItemName::new("widget").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"widget\"");
        assert_eq!(serde_json::to_string(&Quantity::new(4)).unwrap(), "4");
        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn any_i64_survives_display_then_parse(n in any::<i64>()) {
            let q = Quantity::new(n);
            prop_assert_eq!(Quantity::parse(&q.to_string()).unwrap(), q);
        }
    }
}
