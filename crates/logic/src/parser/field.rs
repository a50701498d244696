//! Field-level parsing. Each parser reports the kind of its failure; the
//! caller attaches the usage of the command being parsed.

use std::collections::BTreeSet;
use std::num::NonZeroUsize;

use larder_core::ValueObject;
use larder_inventory::{ItemId, Name, Tag};

use super::error::{FieldResult, ParseErrorKind};

/// One-based position in the item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(NonZeroUsize);

impl Index {
    pub fn from_one_based(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    pub fn one_based(self) -> usize {
        self.0.get()
    }

    pub fn zero_based(self) -> usize {
        self.0.get() - 1
    }
}

impl core::fmt::Display for Index {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn parse_name(raw: &str) -> FieldResult<Name> {
    Name::parse(raw).map_err(|_| ParseErrorKind::InvalidName)
}

/// An id must be written as an integer; its value must be in `1..=999999`.
pub fn parse_id(raw: &str) -> FieldResult<ItemId> {
    let raw = raw.trim();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseErrorKind::InvalidIdFormat);
    }

    let significant = digits.trim_start_matches('0');
    if negative || significant.is_empty() || significant.len() > 6 {
        return Err(ParseErrorKind::InvalidIdRange);
    }
    significant
        .parse::<u32>()
        .ok()
        .and_then(|value| ItemId::new(value).ok())
        .ok_or(ParseErrorKind::InvalidIdRange)
}

/// A count must fit a signed 32-bit integer and be positive.
pub fn parse_count(raw: &str) -> FieldResult<u32> {
    let value: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ParseErrorKind::InvalidCountFormat)?;
    u32::try_from(value)
        .ok()
        .filter(|count| *count > 0)
        .ok_or(ParseErrorKind::InvalidCountValue)
}

pub fn parse_tag(raw: &str) -> FieldResult<Tag> {
    Tag::parse(raw).map_err(|_| ParseErrorKind::InvalidTag)
}

/// Duplicates are merged.
pub fn parse_tags<'a>(raw: impl IntoIterator<Item = &'a str>) -> FieldResult<BTreeSet<Tag>> {
    raw.into_iter().map(parse_tag).collect()
}

pub fn parse_index(raw: &str) -> FieldResult<Index> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseErrorKind::InvalidIndex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn id_boundaries() {
        assert_eq!(parse_id("1").map(ItemId::value), Ok(1));
        assert_eq!(parse_id("999999").map(ItemId::value), Ok(999_999));
        assert_eq!(parse_id("000100").map(ItemId::value), Ok(100));
        assert_eq!(parse_id("0"), Err(ParseErrorKind::InvalidIdRange));
        assert_eq!(parse_id("1000000"), Err(ParseErrorKind::InvalidIdRange));
        assert_eq!(parse_id("-1"), Err(ParseErrorKind::InvalidIdRange));
        assert_eq!(parse_id("99999999999999999999"), Err(ParseErrorKind::InvalidIdRange));
    }

    #[test]
    fn id_must_be_an_integer_literal() {
        for raw in ["abc", "12a", "1.5", "#100", "", "-", "1 2"] {
            assert_eq!(parse_id(raw), Err(ParseErrorKind::InvalidIdFormat), "{raw:?}");
        }
    }

    #[test]
    fn count_boundaries() {
        assert_eq!(parse_count("1"), Ok(1));
        assert_eq!(parse_count("2147483647"), Ok(2_147_483_647));
        assert_eq!(parse_count("0"), Err(ParseErrorKind::InvalidCountValue));
        assert_eq!(parse_count("-1"), Err(ParseErrorKind::InvalidCountValue));
        assert_eq!(parse_count("2147483648"), Err(ParseErrorKind::InvalidCountFormat));
        assert_eq!(parse_count("five"), Err(ParseErrorKind::InvalidCountFormat));
    }

    #[test]
    fn names_and_tags_use_their_constraints() {
        assert!(parse_name("Oreo Cheesecake").is_ok());
        assert_eq!(parse_name("cake$"), Err(ParseErrorKind::InvalidName));
        assert_eq!(parse_name("  "), Err(ParseErrorKind::InvalidName));
        assert_eq!(parse_tag("best seller"), Err(ParseErrorKind::InvalidTag));
    }

    #[test]
    fn duplicate_tags_merge() {
        let tags = parse_tags(["baked", "popular", "baked"]).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn index_is_one_based() {
        assert_eq!(parse_index("1").map(Index::zero_based), Ok(0));
        assert_eq!(parse_index("0"), Err(ParseErrorKind::InvalidIndex));
        assert_eq!(parse_index("-3"), Err(ParseErrorKind::InvalidIndex));
    }

    proptest! {
        #[test]
        fn non_positive_counts_are_rejected_as_such(count in i32::MIN..=0) {
            prop_assert_eq!(parse_count(&count.to_string()), Err(ParseErrorKind::InvalidCountValue));
        }

        #[test]
        fn counts_beyond_i32_are_not_integers(count in (i64::from(i32::MAX) + 1)..i64::MAX) {
            prop_assert_eq!(parse_count(&count.to_string()), Err(ParseErrorKind::InvalidCountFormat));
        }

        #[test]
        fn positive_i32_counts_parse(count in 1i32..=i32::MAX) {
            prop_assert_eq!(parse_count(&count.to_string()), Ok(count.unsigned_abs()));
        }

        #[test]
        fn ids_past_six_digits_are_out_of_range(id in 1_000_000u64..u64::MAX) {
            prop_assert_eq!(parse_id(&id.to_string()), Err(ParseErrorKind::InvalidIdRange));
        }

        #[test]
        fn negative_ids_are_out_of_range(id in i64::MIN..0) {
            prop_assert_eq!(parse_id(&id.to_string()), Err(ParseErrorKind::InvalidIdRange));
        }

        #[test]
        fn six_digit_ids_parse(id in 1u32..=999_999) {
            prop_assert_eq!(parse_id(&id.to_string()).map(ItemId::value), Ok(id));
        }
    }
}
