//! Descriptor resolution against a collection of items.
//!
//! Resolution is a pure query: it never touches the collection it reads.

use larder_core::DomainError;

use crate::descriptor::ItemDescriptor;
use crate::item::Item;

/// Which records a lookup may see.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Scope {
    /// Only items with a positive count.
    #[default]
    InStock,
    /// Zero-count records as well.
    IncludeEmpty,
}

impl Scope {
    pub fn admits(self, item: &Item) -> bool {
        match self {
            Scope::InStock => item.is_in_stock(),
            Scope::IncludeEmpty => true,
        }
    }
}

/// Returns a self-contained predicate equivalent to the lookup, for building
/// a filtered view of the matches.
pub fn predicate(descriptor: &ItemDescriptor, scope: Scope) -> impl Fn(&Item) -> bool + 'static {
    let descriptor = descriptor.clone();
    move |item| scope.admits(item) && descriptor.matches(item)
}

/// All items matching the descriptor, in collection order.
pub fn matching<'a>(descriptor: &ItemDescriptor, items: &'a [Item], scope: Scope) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| scope.admits(item) && descriptor.matches(item))
        .collect()
}

/// The single item matching the descriptor.
///
/// Fails with [`DomainError::NotFound`] when nothing matches and with
/// [`DomainError::MultipleMatches`] when more than one item does.
pub fn resolve<'a>(
    descriptor: &ItemDescriptor,
    items: &'a [Item],
    scope: Scope,
) -> Result<&'a Item, DomainError> {
    let found = matching(descriptor, items, scope);
    match found.as_slice() {
        [] => Err(DomainError::not_found()),
        [only] => Ok(*only),
        many => Err(DomainError::MultipleMatches(many.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemId, Name};
    use larder_core::ValueObject;
    use proptest::prelude::*;

    fn item(name: &str, id: u32, count: u32) -> Item {
        Item::new(Name::parse(name).unwrap(), ItemId::new(id).unwrap(), count, [])
    }

    fn by_name(name: &str) -> ItemDescriptor {
        ItemDescriptor::new().with_name(Name::parse(name).unwrap())
    }

    fn by_id(id: u32) -> ItemDescriptor {
        ItemDescriptor::new().with_id(ItemId::new(id).unwrap())
    }

    #[test]
    fn resolves_single_match() {
        let items = vec![item("Bagel", 100, 5), item("Donut", 200, 3)];
        let found = resolve(&by_name("Donut"), &items, Scope::InStock).unwrap();
        assert_eq!(found, &items[1]);
    }

    #[test]
    fn reports_not_found() {
        let items = vec![item("Bagel", 100, 5)];
        let err = resolve(&by_id(300), &items, Scope::InStock).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn reports_multiple_matches() {
        let items = vec![item("Bagel", 100, 5), item("Bagel", 200, 3)];
        let err = resolve(&by_name("Bagel"), &items, Scope::InStock).unwrap_err();
        assert_eq!(err, DomainError::MultipleMatches(2));
    }

    #[test]
    fn name_and_id_of_different_items_is_ambiguous() {
        let items = vec![item("Bagel", 100, 5), item("Donut", 200, 3), item("Scone", 300, 1)];
        let descriptor = by_name("Bagel").with_id(ItemId::new(200).unwrap());

        let err = resolve(&descriptor, &items, Scope::InStock).unwrap_err();

        assert_eq!(err, DomainError::MultipleMatches(2));
        assert_eq!(matching(&descriptor, &items, Scope::InStock), vec![&items[0], &items[1]]);
    }

    #[test]
    fn name_and_id_of_the_same_item_resolve() {
        let items = vec![item("Bagel", 100, 5), item("Donut", 200, 3)];
        let descriptor = by_name("Bagel").with_id(ItemId::new(100).unwrap());
        assert_eq!(resolve(&descriptor, &items, Scope::InStock).unwrap(), &items[0]);
    }

    #[test]
    fn empty_records_are_skipped_unless_included() {
        let items = vec![item("Bagel", 100, 0)];
        assert_eq!(
            resolve(&by_name("Bagel"), &items, Scope::InStock).unwrap_err(),
            DomainError::NotFound
        );
        assert!(resolve(&by_name("Bagel"), &items, Scope::IncludeEmpty).is_ok());
    }

    #[test]
    fn empty_record_does_not_make_a_lookup_ambiguous() {
        let items = vec![item("Bagel", 100, 0), item("Bagel", 101, 2)];
        let found = resolve(&by_name("Bagel"), &items, Scope::InStock).unwrap();
        assert_eq!(found.id().value(), 101);
    }

    #[test]
    fn predicate_agrees_with_matching() {
        let items = vec![item("Bagel", 100, 5), item("Bagel", 200, 0), item("Donut", 300, 1)];
        let descriptor = by_name("Bagel").with_id(ItemId::new(300).unwrap());
        let keep = predicate(&descriptor, Scope::InStock);
        let filtered: Vec<&Item> = items.iter().filter(|&i| keep(i)).collect();
        assert_eq!(filtered, matching(&descriptor, &items, Scope::InStock));
    }

    proptest! {
        /// resolve succeeds iff exactly one item matches, reports
        /// MultipleMatches iff two or more do and NotFound iff none do.
        #[test]
        fn resolution_outcome_follows_match_count(
            specs in prop::collection::vec((0usize..3, 1u32..6, 0u32..3), 0..8),
            query_name in prop::option::of(0usize..3),
            query_id in prop::option::of(1u32..6),
        ) {
            let names = ["Bagel", "Donut", "Scone"];
            let items: Vec<Item> = specs
                .iter()
                .map(|(n, id, count)| item(names[*n], *id, *count))
                .collect();

            let mut descriptor = ItemDescriptor::new();
            if let Some(n) = query_name {
                descriptor = descriptor.with_name(Name::parse(names[n]).unwrap());
            }
            if let Some(id) = query_id {
                descriptor = descriptor.with_id(ItemId::new(id).unwrap());
            }

            let expected = items
                .iter()
                .filter(|i| i.count() > 0)
                .filter(|i| {
                    let name_hit = query_name.map(|n| i.name().as_str() == names[n]);
                    let id_hit = query_id.map(|id| i.id().value() == id);
                    match (name_hit, id_hit) {
                        (Some(a), Some(b)) => a || b,
                        (Some(hit), None) | (None, Some(hit)) => hit,
                        (None, None) => true,
                    }
                })
                .count();

            match resolve(&descriptor, &items, Scope::InStock) {
                Ok(found) => {
                    prop_assert_eq!(expected, 1);
                    prop_assert!(descriptor.matches(found));
                }
                Err(DomainError::NotFound) => prop_assert_eq!(expected, 0),
                Err(DomainError::MultipleMatches(n)) => {
                    prop_assert!(expected >= 2);
                    prop_assert_eq!(n, expected);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
        }
    }
}
