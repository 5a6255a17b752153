//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `u32` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`
/// - Conversion methods: `new()`, `as_u32()`, `is_valid()`, `next()`
/// - `From<u32>` and `Into<u32>` implementations
/// - `FromStr` accepting a plain base-10 integer (surrounding whitespace allowed)
///
/// IDs start at 1. Zero is representable so that user input can be carried
/// around before validation, but `is_valid()` reports it as invalid.
///
/// # Example
///
/// ```rust
/// # use shopcart_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new(1);
/// let order_id = OrderId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// The first ID handed out by a counter.
            pub const FIRST: Self = Self(1);

            /// Create a new ID from a u32 value.
            #[must_use]
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            /// Get the underlying u32 value.
            #[must_use]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }

            /// Whether this ID is a positive integer.
            #[must_use]
            pub const fn is_valid(&self) -> bool {
                self.0 > 0
            }

            /// The ID following this one, or `None` after `u32::MAX`.
            #[must_use]
            pub const fn next(self) -> Option<Self> {
                match self.0.checked_add(1) {
                    Some(id) => Some(Self(id)),
                    None => None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::num::ParseIntError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                s.trim().parse::<u32>().map(Self)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(ProductId);
define_id!(OrderId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let id: ProductId = " 3 ".parse().unwrap();
        assert_eq!(id, ProductId::new(3));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
        assert!("1.5".parse::<ProductId>().is_err());
        assert!("".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_zero_is_not_valid() {
        assert!(!ProductId::new(0).is_valid());
        assert!(ProductId::FIRST.is_valid());
    }

    #[test]
    fn test_next_increments() {
        assert_eq!(OrderId::FIRST.next(), Some(OrderId::new(2)));
        assert_eq!(OrderId::new(u32::MAX - 1).next(), Some(OrderId::new(u32::MAX)));
    }

    #[test]
    fn test_next_stops_at_max() {
        assert_eq!(OrderId::new(u32::MAX).next(), None);
        assert_eq!(ProductId::new(u32::MAX).next(), None);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ProductId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
