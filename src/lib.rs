//! Placard: a three-stage task board.
//!
//! This crate keeps a task collection, its persisted snapshot and its
//! rendered view in step under interleaved user actions: form submissions,
//! arrow buttons, drag and drop, deletes and board clears.
//!
//! # Architecture
//!
//! Placard follows hexagonal architecture principles:
//!
//! - **Domain**: Tasks, stages and snapshots with no infrastructure
//!   dependencies
//! - **Ports**: The key-value storage contract
//! - **Adapters**: In-memory and directory-backed storage
//!
//! # Modules
//!
//! - [`board`]: Task store, drag session, persistence and view projection
//! - [`config`]: Storage location and key

pub mod board;
pub mod config;
