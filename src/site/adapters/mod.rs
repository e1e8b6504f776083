//! Adapter implementations of the site ports.

pub mod memory;

pub use memory::InMemorySiteRepository;
