//! Output cache implementations.

mod memory;

pub use memory::InMemoryCache;
