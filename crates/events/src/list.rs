//! Observable ordered collection.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::bus::{EventBus, Subscription};
use crate::event::Event;
use crate::in_memory_bus::InMemoryEventBus;

static NEXT_SOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an [`ObservableList`].
///
/// Clones of a list get a fresh id: they are different sources.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SourceId(u64);

impl SourceId {
    fn next() -> Self {
        Self(NEXT_SOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single structural change to an [`ObservableList`].
///
/// Replaying the changes, in order, onto the snapshot taken at subscription
/// time reproduces the list exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChange<T> {
    Inserted { index: usize, item: T },
    Replaced { index: usize, item: T },
    Removed { index: usize },
    Reset(Vec<T>),
}

impl<T> ListChange<T> {
    /// Replays this change onto a mirror of the source.
    pub fn apply_to(self, mirror: &mut Vec<T>) {
        match self {
            ListChange::Inserted { index, item } => mirror.insert(index, item),
            ListChange::Replaced { index, item } => mirror[index] = item,
            ListChange::Removed { index } => {
                mirror.remove(index);
            }
            ListChange::Reset(items) => *mirror = items,
        }
    }
}

impl<T> Event for ListChange<T>
where
    T: Clone + core::fmt::Debug + Send + Sync + 'static,
{
    fn event_type(&self) -> &'static str {
        match self {
            ListChange::Inserted { .. } => "list.inserted",
            ListChange::Replaced { .. } => "list.replaced",
            ListChange::Removed { .. } => "list.removed",
            ListChange::Reset(_) => "list.reset",
        }
    }
}

/// An ordered collection that publishes a [`ListChange`] on every mutation.
pub struct ObservableList<T> {
    id: SourceId,
    items: Vec<T>,
    changes: InMemoryEventBus<ListChange<T>>,
}

impl<T> ObservableList<T>
where
    T: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    pub fn from_vec(items: Vec<T>) -> Self {
        Self {
            id: SourceId::next(),
            items,
            changes: InMemoryEventBus::new(),
        }
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    pub fn push(&mut self, item: T) {
        let index = self.items.len();
        self.insert(index, item);
    }

    /// Panics if `index > len`, like [`Vec::insert`].
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item.clone());
        self.notify(ListChange::Inserted { index, item });
    }

    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, item: T) -> T {
        let old = std::mem::replace(&mut self.items[index], item.clone());
        self.notify(ListChange::Replaced { index, item });
        old
    }

    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        let old = self.items.remove(index);
        self.notify(ListChange::Removed { index });
        old
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items.clone();
        self.notify(ListChange::Reset(items));
    }

    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Subscribes to future changes.
    ///
    /// Returns the current contents together with the subscription, so the
    /// observer starts from a consistent snapshot.
    pub fn observe(&self) -> (Vec<T>, Subscription<ListChange<T>>) {
        (self.items.clone(), self.changes.subscribe())
    }

    /// Number of observers still attached (dropped ones are pruned on the
    /// next mutation).
    pub fn observer_count(&self) -> usize {
        self.changes.subscriber_count()
    }

    fn notify(&self, change: ListChange<T>) {
        if let Err(err) = self.changes.publish(change) {
            tracing::warn!(?err, "failed to notify list observers");
        }
    }
}

impl<T: Clone + Send + 'static> Default for ObservableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + 'static> Clone for ObservableList<T> {
    fn clone(&self) -> Self {
        Self::from_vec(self.items.clone())
    }
}

/// Lists compare by contents; the source identity is not part of equality.
impl<T: PartialEq> PartialEq for ObservableList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for ObservableList<T> {}

impl<T: core::fmt::Debug> core::fmt::Debug for ObservableList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObservableList")
            .field("id", &self.id)
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Clone + Send + 'static> From<Vec<T>> for ObservableList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_vec(items)
    }
}
