//! Domain events and change notification.
//!
//! - [`Event`]: facts emitted by aggregates.
//! - [`EventBus`] / [`InMemoryEventBus`]: synchronous pub/sub fan-out.
//! - [`ObservableList`]: an ordered collection that publishes a [`ListChange`]
//!   for every mutation, the source side of every live view.
//! - [`execute`]: decide-then-apply for aggregates.

pub mod bus;
pub mod event;
pub mod handler;
pub mod in_memory_bus;
pub mod list;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use handler::execute;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use list::{ListChange, ObservableList, SourceId};
