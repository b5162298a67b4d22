//! Utility functions and helpers

pub mod settings;

pub use settings::{resolve_api_url, Settings, API_URL_ENV};
