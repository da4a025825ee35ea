//! report-client
//!
//! Trade report viewer: loads each account's broker log, derives the
//! `{ summary, series }` report and renders it as JSON or CSV.

pub mod types;
pub mod network;
pub mod app;
pub mod export;
