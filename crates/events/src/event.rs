/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - named by a stable type identifier, used for logging
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.item.added").
    fn event_type(&self) -> &'static str;
}
