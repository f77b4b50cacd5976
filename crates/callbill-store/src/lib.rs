//! Storage layer for CallBill
//!
//! Provides the in-memory implementation of the `CallStore` trait used by
//! the command-line binary and the service tests.

pub mod memory;

pub use memory::InMemoryCallStore;
