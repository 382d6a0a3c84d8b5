//! Upload storage.

mod local;

pub use local::LocalFileStore;
