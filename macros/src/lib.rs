//! Proc macros for moments.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "site")]
//! /// Site identity.
//! pub struct SiteSectionConfig {
//!     /// Name shown in the page header.
//!     pub site_name: String,
//!
//!     /// Default content language.
//!     #[config(inline_doc = "BCP 47 language tag.")]
//!     pub default_language: String,
//!
//!     /// Favicon paths.
//!     #[config(sub)]
//!     pub icons: IconsConfig,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - SiteSectionConfig::FIELDS.site_name -> FieldPath("site.site_name")
//! // - SiteSectionConfig::template() -> TOML string with comments
//! // - SiteSectionConfig::template_with_header() -> with [section] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(inline_doc = "x")]` - Trailing comment in template
//! - `#[config(sub)]` - Nested section, rendered with its own header
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `MarkdownConfig` → `markdown`
//! - `IconsConfig` → `icons`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
