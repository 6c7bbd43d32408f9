//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Integer-backed identifier.
///
/// `0` marks an entity that has not been assigned an identity by a store yet.
pub trait IntegerId: Copy + Ord + core::hash::Hash + core::fmt::Debug + Send + Sync + 'static {
    const UNASSIGNED: Self;

    fn from_raw(raw: i32) -> Self;

    fn get(self) -> i32;

    fn is_unassigned(self) -> bool {
        self == Self::UNASSIGNED
    }
}

/// Identifier of a product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i32);

/// Identifier of a category.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(i32);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(raw: i32) -> Self {
                Self(raw)
            }
        }

        impl IntegerId for $t {
            const UNASSIGNED: Self = Self(0);

            fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            fn get(self) -> i32 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i32> for $t {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let raw = s
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(raw))
            }
        }
    };
}

impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(CategoryId, "CategoryId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integer_ids() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::new(42));
        assert_eq!(" 7 ".parse::<CategoryId>().unwrap().get(), 7);
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "abc".parse::<CategoryId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidId(ref m) if m.starts_with("CategoryId:")));
    }

    #[test]
    fn zero_is_unassigned() {
        assert!(ProductId::default().is_unassigned());
        assert!(!ProductId::new(1).is_unassigned());
        assert_eq!(ProductId::UNASSIGNED.get(), 0);
    }
}
