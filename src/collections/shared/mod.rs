//! Containers with reference semantics.
//!
//! Cloning a handle shares the storage: a push through one handle is visible
//! through every other. `duplicate` makes an independent copy. The handles are
//! `Rc`-based and therefore confined to one thread.

pub mod bounded_queue;
pub mod stack;

pub use bounded_queue::{BoundedQueue, CapacityError, DEFAULT_CAPACITY};
pub use stack::SharedStack;
