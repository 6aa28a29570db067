//! Filesystem adapters: `std::fs` for real runs, in-memory for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
