//! Adapter implementations of the request ports.

pub mod memory;

pub use memory::InMemoryRequestRepository;
