//! # FanSEO SERP
//!
//! DataForSEO client for live Google organic results.
//!
//! Searches run as a task: submit with `task_post`, wait, then collect with
//! `task_get`. Failures never escape through [`SearchProvider`]; they are
//! logged and reported as "no data".
//!
//! [`SearchProvider`]: fanseo_core::SearchProvider

pub mod client;
pub mod error;
pub mod types;

pub use client::DataForSeoClient;
pub use error::{SerpError, SerpResult};
