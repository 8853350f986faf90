//! Name-based identifiers used across the domain.
//!
//! Items and warehouses are identified by caller-supplied names. Names are
//! compared verbatim (case and whitespace are significant).

use core::borrow::Borrow;
use core::convert::Infallible;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Identifier of a stocked/ordered item (e.g. `"apple"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemName(String);

/// Identifier of a warehouse (e.g. `"owd"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WarehouseName(String);

macro_rules! impl_name_newtype {
    ($t:ty) => {
        impl $t {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&$t> for $t {
            fn from(value: &$t) -> Self {
                value.clone()
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl Borrow<str> for $t {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $t {
            type Err = Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_name_newtype!(ItemName);
impl_name_newtype!(WarehouseName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_display_verbatim() {
        assert_eq!(ItemName::from("soccer ball").to_string(), "soccer ball");
        assert_eq!(WarehouseName::new("real madrid").as_str(), "real madrid");
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(ItemName::from("Apple"), ItemName::from("apple"));
    }

    #[test]
    fn names_serialize_as_plain_strings() {
        let json = serde_json::to_string(&WarehouseName::from("owd")).unwrap();
        assert_eq!(json, "\"owd\"");

        let back: ItemName = serde_json::from_str("\"pikachu\"").unwrap();
        assert_eq!(back.as_str(), "pikachu");
    }
}
