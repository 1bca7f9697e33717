//! Application layer: orchestration services over the domain contracts.

pub mod services;
