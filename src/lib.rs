#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "collections")]
pub mod slice;

#[cfg(feature = "collections")]
pub use collections::{
    Ascending, Comparator, ContainerCommon, Deque, Descending, PriorityQueue, Queue, Snapshot,
    Stack,
};
#[cfg(feature = "collections")]
pub use slice::RangeError;

#[cfg(feature = "collections_shared")]
pub use collections::{BoundedQueue, CapacityError, SharedStack, shared::DEFAULT_CAPACITY};
