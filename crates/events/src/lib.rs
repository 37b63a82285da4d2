//! `tracelot-events` — outbound notification plumbing.
//!
//! Domain-agnostic event trait and bus mechanics. The concrete
//! notification types live next to the service that emits them; this
//! crate only knows how to fan messages out.

pub mod bus;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
