//! Task persistence and retrieval for Taskdeck.
//!
//! This module implements the task API core: creating tasks with validated
//! titles, listing the most recently created incomplete tasks, and marking
//! tasks complete. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
