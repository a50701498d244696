use std::collections::BTreeSet;

use crate::item::{Item, ItemId, Name, Tag};

/// A partially specified item, as written in a command.
///
/// Name and id identify the item; `count` is a quantity and never takes part
/// in matching. Build it with the `with_*` methods; once handed to a command it
/// is not changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDescriptor {
    name: Option<Name>,
    id: Option<ItemId>,
    count: Option<u32>,
    tags: Option<BTreeSet<Tag>>,
}

impl ItemDescriptor {
    /// Quantity assumed when a quantity-bearing command omits `c/`.
    pub const DEFAULT_COUNT: u32 = 1;

    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: ItemId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = Some(tags.into_iter().collect());
        self
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn count_or_default(&self) -> u32 {
        self.count.unwrap_or(Self::DEFAULT_COUNT)
    }

    /// True if a name or an id is present, i.e. the descriptor can be resolved.
    pub fn has_identity(&self) -> bool {
        self.name.is_some() || self.id.is_some()
    }

    /// The item's name or id equals one given in the descriptor, and it carries
    /// every listed tag. With only one identity field given, that field must
    /// match; absent fields are wildcards.
    ///
    /// A name pointing at one item and an id pointing at another therefore
    /// match both, which resolution reports as ambiguous.
    pub fn matches(&self, item: &Item) -> bool {
        let identity = match (&self.name, self.id) {
            (Some(name), Some(id)) => name == item.name() || id == item.id(),
            (Some(name), None) => name == item.name(),
            (None, Some(id)) => id == item.id(),
            (None, None) => true,
        };
        identity
            && self
                .tags
                .as_ref()
                .is_none_or(|tags| tags.is_subset(item.tags()))
    }
}

impl core::fmt::Display for ItemDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut parts = Vec::new();
        if let Some(name) = &self.name {
            parts.push(format!("name {name}"));
        }
        if let Some(id) = self.id {
            parts.push(format!("id {id}"));
        }
        if let Some(count) = self.count {
            parts.push(format!("count {count}"));
        }
        if let Some(tags) = &self.tags {
            for tag in tags {
                parts.push(tag.to_string());
            }
        }
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::ValueObject;

    fn bagel() -> Item {
        Item::new(
            Name::parse("Bagel").unwrap(),
            ItemId::new(100).unwrap(),
            5,
            [Tag::parse("baked").unwrap(), Tag::parse("popular").unwrap()],
        )
    }

    #[test]
    fn empty_descriptor_matches_everything_but_has_no_identity() {
        let descriptor = ItemDescriptor::new();
        assert!(descriptor.matches(&bagel()));
        assert!(!descriptor.has_identity());
    }

    #[test]
    fn single_identity_field_must_match() {
        let name = Name::parse("Bagel").unwrap();
        let id = ItemId::new(100).unwrap();

        assert!(ItemDescriptor::new().with_name(name).matches(&bagel()));
        assert!(ItemDescriptor::new().with_id(id).matches(&bagel()));
        assert!(!ItemDescriptor::new().with_id(ItemId::new(200).unwrap()).matches(&bagel()));
        assert!(!ItemDescriptor::new().with_name(Name::parse("Donut").unwrap()).matches(&bagel()));
    }

    #[test]
    fn name_or_id_is_enough_when_both_are_given() {
        let bagel_name = Name::parse("Bagel").unwrap();
        let donut_name = Name::parse("Donut").unwrap();
        let bagel_id = ItemId::new(100).unwrap();
        let donut_id = ItemId::new(200).unwrap();

        let both = |name: &Name, id| ItemDescriptor::new().with_name(name.clone()).with_id(id);
        assert!(both(&bagel_name, bagel_id).matches(&bagel()));
        assert!(both(&bagel_name, donut_id).matches(&bagel()));
        assert!(both(&donut_name, bagel_id).matches(&bagel()));
        assert!(!both(&donut_name, donut_id).matches(&bagel()));
    }

    #[test]
    fn tags_narrow_an_identity_match() {
        let descriptor = ItemDescriptor::new()
            .with_name(Name::parse("Bagel").unwrap())
            .with_id(ItemId::new(200).unwrap())
            .with_tags([Tag::parse("frozen").unwrap()]);
        assert!(!descriptor.matches(&bagel()));
    }

    #[test]
    fn count_is_not_a_match_criterion() {
        let descriptor = ItemDescriptor::new()
            .with_id(ItemId::new(100).unwrap())
            .with_count(999);
        assert!(descriptor.matches(&bagel()));
    }

    #[test]
    fn tags_match_as_subset() {
        let baked = ItemDescriptor::new().with_tags([Tag::parse("baked").unwrap()]);
        let frozen = ItemDescriptor::new().with_tags([Tag::parse("frozen").unwrap()]);
        assert!(baked.matches(&bagel()));
        assert!(!frozen.matches(&bagel()));
    }

    #[test]
    fn count_defaults_to_one() {
        assert_eq!(ItemDescriptor::new().count_or_default(), 1);
        assert_eq!(ItemDescriptor::new().with_count(4).count_or_default(), 4);
    }
}
