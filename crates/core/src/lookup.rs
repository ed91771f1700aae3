//! Find-by-id-or-alternate-key requests.
//!
//! Each entity can be fetched by its primary key, and most of them also by a
//! unique alternate key (a username, a text title, an activity name). A
//! [`Lookup`] carries either or both; an absent half is `None` rather than a
//! zero id or an empty string, so id `0` is never mistaken for "no id".

use std::fmt;

use crate::types::DbId;

/// Criteria for a single-row lookup: `id = lookup.id OR key = lookup.key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lookup {
    pub id: Option<DbId>,
    pub key: Option<String>,
}

impl Lookup {
    pub fn by_id(id: DbId) -> Self {
        Self {
            id: Some(id),
            key: None,
        }
    }

    pub fn by_key(key: impl Into<String>) -> Self {
        Self {
            id: None,
            key: Some(key.into()),
        }
    }

    /// Interpret a raw path segment.
    ///
    /// A segment that is exactly an integer is treated as a primary key;
    /// everything else, including a number with surrounding whitespace,
    /// falls back to an alternate-key lookup instead of being rejected.
    ///
    /// ```
    /// use typewriter_core::lookup::Lookup;
    ///
    /// assert_eq!(Lookup::parse("12"), Lookup::by_id(12));
    /// assert_eq!(Lookup::parse("alice"), Lookup::by_key("alice"));
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.parse::<DbId>() {
            Ok(id) => Self::by_id(id),
            Err(_) => Self::by_key(raw),
        }
    }

    /// True when neither an id nor a key was supplied.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.key.is_none()
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.id, self.key.as_deref()) {
            (Some(id), Some(key)) => write!(f, "with id {id} or key '{key}'"),
            (Some(id), None) => write!(f, "with id {id}"),
            (None, Some(key)) => write!(f, "'{key}'"),
            (None, None) => f.write_str("(empty lookup)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_segment_is_an_id() {
        let lookup = Lookup::parse("42");
        assert_eq!(lookup.id, Some(42));
        assert_eq!(lookup.key, None);
    }

    #[test]
    fn non_numeric_segment_falls_back_to_key() {
        let lookup = Lookup::parse("speed drill");
        assert_eq!(lookup.id, None);
        assert_eq!(lookup.key.as_deref(), Some("speed drill"));
    }

    #[test]
    fn overflowing_number_falls_back_to_key() {
        let lookup = Lookup::parse("99999999999999999999999");
        assert_eq!(lookup.id, None);
        assert_eq!(lookup.key.as_deref(), Some("99999999999999999999999"));
    }

    #[test]
    fn padded_number_is_a_key_not_an_id() {
        let lookup = Lookup::parse(" 12");
        assert_eq!(lookup.id, None);
        assert_eq!(lookup.key.as_deref(), Some(" 12"));
    }

    #[test]
    fn zero_is_a_real_id_not_a_sentinel() {
        let lookup = Lookup::parse("0");
        assert_eq!(lookup.id, Some(0));
        assert!(!lookup.is_empty());
    }

    #[test]
    fn default_lookup_is_empty() {
        assert!(Lookup::default().is_empty());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Lookup::by_id(7).to_string(), "with id 7");
        assert_eq!(Lookup::by_key("alice").to_string(), "'alice'");
        let both = Lookup {
            id: Some(3),
            key: Some("bob".into()),
        };
        assert_eq!(both.to_string(), "with id 3 or key 'bob'");
    }
}
