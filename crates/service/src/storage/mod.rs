//! Storage abstractions for service layer
//!
//! Process-memory containers shared by the recipe collections. Nothing here
//! touches the filesystem; state lives until the process exits.

pub mod vec_store;
