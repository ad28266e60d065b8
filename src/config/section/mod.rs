//! Configuration section definitions.
//!
//! Each module corresponds to a section in `moments.toml`:
//!
//! | Module     | TOML Section   | Purpose                                |
//! |------------|----------------|----------------------------------------|
//! | `site`     | `[site]`       | Identity, social links, icons, comments|
//! | `content`  | `[content]`    | Source/theme/output paths, pagination  |
//! | `markdown` | `[markdown]`   | Highlight style, renderer extensions   |
//! | `feed`     | `[feed]`       | Feed output paths (absent = disabled)  |
//! | `display`  | `[display]`    | Menu and sidebar toggles               |
//! | `urls`     | `[urls]`       | URL / save-as templates                |

mod content;
mod display;
mod feed;
mod markdown;
pub mod site;
mod urls;

pub use content::ContentConfig;
pub use display::DisplayConfig;
pub use feed::FeedConfig;
pub use markdown::{ExtensionError, MarkdownConfig, MarkdownExtension};
pub use site::{CommentsConfig, IconsConfig, SiteSectionConfig, SocialLink};
pub use urls::UrlsConfig;
