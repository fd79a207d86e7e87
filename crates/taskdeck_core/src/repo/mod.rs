//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable key-value slot contract used by the task store.
//! - Isolate SQLite details from store/business logic.
//!
//! # Invariants
//! - Repositories store opaque text blobs; they never interpret task data.

pub mod state_repo;
