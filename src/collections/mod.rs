pub mod adapter;
pub use adapter::{
    Ascending, Comparator, ContainerCommon, Deque, Descending, PriorityQueue, Queue, Snapshot,
    Stack,
};

#[cfg(feature = "collections_shared")]
pub mod shared;
#[cfg(feature = "collections_shared")]
pub use shared::{BoundedQueue, CapacityError, SharedStack};
