//! Post API implementations.

mod memory;

pub use memory::InMemoryPostApi;
