//! FanSEO Core Library
//!
//! Domain models and business logic for sports-team keyword opportunity analysis.

pub mod analysis;
pub mod config;
pub mod error;
pub mod keyword;
pub mod matcher;
pub mod provider;
pub mod scorer;
pub mod simulation;
pub mod strategy;

pub use analysis::Analyzer;
pub use config::{Credentials, SerpSettings, Settings};
pub use error::{SeoError, SeoResult};
pub use provider::{SearchProvider, SearchResultItem, SerpListing};
