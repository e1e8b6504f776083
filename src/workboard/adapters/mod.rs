//! Adapter implementations of the work task ports.

pub mod memory;

pub use memory::InMemoryWorkTaskRepository;
