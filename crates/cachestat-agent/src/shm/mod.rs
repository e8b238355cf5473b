//! In-process shared-memory cache runtime.
//!
//! One segment allocator backs two keyed caches: the opcode (`system`) cache
//! and the `user` key/value cache. Both report counters in the field naming
//! monitoring agents already understand (`num_hits`, `mem_size`, ...).

pub mod allocator;
pub mod entry_cache;
pub mod runtime;

pub use allocator::{Allocation, SegmentAllocator};
pub use entry_cache::EntryCache;
pub use runtime::SharedMemoryRuntime;
