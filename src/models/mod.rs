//! Data models and serialization helpers.
//!
//! This module contains the data structures used to represent registry
//! package records and search results, the serializable report types, and
//! the custom deserializers that absorb the registry's loosely shaped JSON.
pub mod package;
pub mod report;
pub mod serde_helpers;
