//! Live filtered view over an [`ObservableList`].

use std::rc::Rc;

use larder_events::{ListChange, ObservableList, SourceId, Subscription};

/// Shared filter predicate.
pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// Predicate that keeps everything.
pub fn show_all<T: 'static>() -> Predicate<T> {
    Rc::new(|_: &T| true)
}

/// A filtered, live view bound to one source at a time.
///
/// The view keeps a mirror of its source, rebuilt from the change events the
/// source pushes into the view's subscription; [`sync`] folds pending changes
/// in. Rebinding drops the old subscription, so a replaced source can no
/// longer reach the view.
///
/// [`sync`]: FilteredList::sync
pub struct FilteredList<T> {
    source: SourceId,
    changes: Subscription<ListChange<T>>,
    mirror: Vec<T>,
    predicate: Predicate<T>,
    visible: Vec<T>,
}

impl<T> FilteredList<T>
where
    T: Clone + Send + 'static,
{
    /// A view of `source` showing everything.
    pub fn new(source: &ObservableList<T>) -> Self {
        Self::with_predicate(source, show_all())
    }

    pub fn with_predicate(source: &ObservableList<T>, predicate: Predicate<T>) -> Self {
        let (mirror, changes) = source.observe();
        let mut view = Self {
            source: source.id(),
            changes,
            mirror,
            predicate,
            visible: Vec::new(),
        };
        view.refilter();
        view
    }

    pub fn source_id(&self) -> SourceId {
        self.source
    }

    pub fn is_bound_to(&self, source: &ObservableList<T>) -> bool {
        self.source == source.id()
    }

    /// Binds the view to `source`, keeping the current predicate.
    ///
    /// Binding the same source again simply starts over from its current
    /// contents.
    pub fn set_source(&mut self, source: &ObservableList<T>) {
        let (mirror, changes) = source.observe();
        // Replacing the subscription drops the old one: the old source prunes
        // it on its next mutation and nothing it publishes reaches us again.
        self.changes = changes;
        self.source = source.id();
        self.mirror = mirror;
        self.refilter();
    }

    pub fn set_predicate(&mut self, predicate: Predicate<T>) {
        self.predicate = predicate;
        self.sync();
        self.refilter();
    }

    /// Folds pending source changes into the view.
    ///
    /// Returns true if anything changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        for change in self.changes.drain() {
            change.apply_to(&mut self.mirror);
            changed = true;
        }
        if changed {
            self.refilter();
        }
        changed
    }

    /// Visible items, as of the last [`sync`](FilteredList::sync).
    pub fn items(&self) -> &[T] {
        &self.visible
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.visible.get(index)
    }

    fn refilter(&mut self) {
        let predicate = &self.predicate;
        self.visible = self.mirror.iter().filter(|item| predicate(item)).cloned().collect();
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for FilteredList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilteredList")
            .field("source", &self.source)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
