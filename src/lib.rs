//! moments - typed site settings for the Open-Moments blog.
//!
//! Loads `moments.toml`, fills in the published defaults for every missing
//! key and validates the result. A site generator embeds [`SiteConfig`] and
//! reads it by shared reference; nothing changes after loading.

pub mod cli;
pub mod config;
pub mod logger;
pub mod scheme;

pub use config::{ConfigError, SiteConfig};
pub use scheme::{ContentKind, UrlScheme, UrlTemplate};
