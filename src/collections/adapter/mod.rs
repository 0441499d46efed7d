pub mod container_common;
pub mod deque;
pub mod priority_queue;
pub mod queue;
pub mod snapshot;
pub mod stack;

pub(crate) mod ordering;

pub use container_common::ContainerCommon;
pub use deque::Deque;
pub use priority_queue::{Ascending, Comparator, Descending, PriorityQueue};
pub use queue::Queue;
pub use snapshot::Snapshot;
pub use stack::Stack;
