//! Infrastructure layer: AWS-backed implementations of the domain contracts.

pub mod object_store;
pub mod persistence;
