//! Outbound adapters implementing domain ports.
//!
//! - **memory**: immutable in-memory fixture tables standing in for a data
//!   store.
//!
//! Adapters are thin translators that evaluate domain filters against their
//! storage. They contain no business logic.

pub mod memory;
