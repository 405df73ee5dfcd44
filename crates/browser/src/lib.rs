//! `storefront-browser`
//!
//! **Responsibility:** the presentation shell around the catalog.
//!
//! This crate provides:
//! - Settings (defaults, environment, CLI overrides)
//! - Dataset loading from a JSON array of product records
//! - A browser session owning the current criteria and derived view
//! - Text/JSON rendering of the view and the selector options
//!
//! All filtering and ordering lives in `storefront-catalog`; this crate only
//! feeds it criteria and prints what comes back.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod render;
pub mod session;

pub use cli::CliArgs;
pub use config::Settings;
pub use dataset::{DatasetError, load_catalog, parse_products};
pub use session::BrowserSession;
