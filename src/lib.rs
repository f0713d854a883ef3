//! Headless HR core: geofenced attendance, leave accounting, and a month
//! calendar over one persisted state snapshot.
//!
//! Hosts embed [`store::HrStore`] with a [`storage::StoragePort`] of their
//! choosing; every command validates, mutates, persists the whole snapshot
//! and reports failures as [`error::HrError`] values the UI can render
//! inline. Nothing in here aborts the process.

pub mod auth;
pub mod calendar;
pub mod config;
pub mod error;
pub mod geo;
pub mod model;
pub mod seed;
pub mod storage;
pub mod store;
pub mod utils;
