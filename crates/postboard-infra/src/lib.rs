//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.

pub mod store;

pub use store::InMemoryPostStore;
