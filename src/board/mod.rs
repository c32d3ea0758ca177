//! Three-stage task board.
//!
//! A board keeps an in-memory task collection, a persisted snapshot and a
//! rendered view consistent under interleaved user actions. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Read-side projection and markup in [`view`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod view;

#[cfg(test)]
mod tests;
