use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use larder_core::{DomainError, Entity, ValueObject};

/// Display name of an item: alphanumeric characters and spaces, not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Name {
    const CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    fn is_valid(raw: &str) -> bool {
        raw.chars().next().is_some_and(|c| c.is_ascii_alphanumeric())
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
    }

    fn from_valid(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl TryFrom<String> for Name {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Name> for String {
    fn from(value: Name) -> Self {
        value.0
    }
}

impl core::fmt::Display for Name {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Short alphanumeric label attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Tag {
    const CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    fn is_valid(raw: &str) -> bool {
        !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric())
    }

    fn from_valid(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl TryFrom<String> for Tag {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> Self {
        value.0
    }
}

impl core::fmt::Display for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Numeric item id: positive, at most six digits.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ItemId(u32);

impl ItemId {
    pub const MAX: u32 = 999_999;

    pub const CONSTRAINTS: &'static str = "The id provided must be positive and at most 6 digits!";

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if (1..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(Self::CONSTRAINTS))
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for ItemId {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemId> for u32 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{:06}", self.0)
    }
}

/// Identity of an item: name and id together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey {
    pub name: Name,
    pub id: ItemId,
}

impl ItemKey {
    pub fn new(name: Name, id: ItemId) -> Self {
        Self { name, id }
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// A stock item.
///
/// An item whose count dropped to zero stays in the inventory as a record but
/// is skipped by ordinary lookups (see [`crate::resolve::Scope`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: Name,
    id: ItemId,
    count: u32,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Item {
    pub fn new(name: Name, id: ItemId, count: u32, tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            name,
            id,
            count,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn is_in_stock(&self) -> bool {
        self.count > 0
    }

    /// Returns a copy of this item with a different count.
    pub fn with_count(&self, count: u32) -> Self {
        Self {
            count,
            ..self.clone()
        }
    }

    /// Returns a copy of this item with a different tag set.
    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Self {
        Self {
            tags,
            ..self.clone()
        }
    }
}

impl Entity for Item {
    type Identity = ItemKey;

    fn identity(&self) -> ItemKey {
        ItemKey::new(self.name.clone(), self.id)
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} x{}", self.name, self.id, self.count)?;
        for tag in &self.tags {
            write!(f, " {tag}")?;
        }
        Ok(())
    }
}
