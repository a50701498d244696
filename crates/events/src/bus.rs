//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus is a pub/sub mechanism for distributing change events from a
//! source collection to the views observing it. Delivery is synchronous: a
//! message is queued on every live subscription before `publish` returns, so
//! a subscriber that drains after a mutation always sees it.
//!
//! A subscriber detaches simply by dropping its [`Subscription`]; the bus
//! prunes dead subscribers on the next publish.

use std::sync::mpsc::{Receiver, TryRecvError};

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics), in publish order.
///
/// ```ignore
/// let subscription = bus.subscribe();
/// bus.publish(change)?;
/// for change in subscription.drain() {
///     view.apply(change);
/// }
/// ```
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, TryRecvError> {
        self.receiver.try_recv()
    }

    /// Iterate over every message queued so far, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = M> + '_ {
        self.receiver.try_iter()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// ```text
/// Source mutation → Event Bus (publish) → Subscriptions
///                                            ├─ filtered item view
///                                            └─ display view
/// ```
///
/// `publish()` can fail (e.g. poisoned lock). Failures are surfaced to the
/// caller, which decides whether a lost notification matters.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;

    /// Number of subscriptions still registered (dead ones are pruned lazily).
    fn subscriber_count(&self) -> usize;
}
