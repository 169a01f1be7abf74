//! Service layer for the brewhouse backend.
//! - Recipe collections (mash and boil) held in process memory.
//! - The shared-secret access guard.
//! - Static telemetry readings.

pub mod auth;
pub mod errors;
pub mod payload;
pub mod recipes;
pub mod storage;
pub mod telemetry;
