//! Read-only query API over a directory tree of timestamped JSON cost
//! reports.
//!
//! Account directories sit directly under a configured data root; the report
//! files inside are named `<type>_<YYYYMMDD_HHMMSS>.json` by an external
//! ingestion process. This crate serves HTTP endpoints for discovering
//! accounts, listing and searching files, fetching the latest report of a
//! kind, and aggregating cost metrics.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod store;
