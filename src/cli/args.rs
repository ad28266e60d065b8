//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Site settings for the Open-Moments blog
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: moments.toml, searched upward from cwd)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "moments.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a moments.toml with every setting at its default
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the file instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the settings, then print a summary
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: LoadArgs,
    },

    /// Print the resolved settings
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: LoadArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Toml)]
        format: OutputFormat,
    },

    /// Print one resolved setting by dotted key, e.g. `site.site_name`
    #[command(visible_alias = "g")]
    Get {
        /// Dotted key; list items are addressed by index (`site.social.0`)
        key: String,

        #[command(flatten)]
        args: LoadArgs,
    },
}

/// Options shared by every command that loads the config.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LoadArgs {
    /// Treat unknown config keys as errors
    #[arg(long)]
    pub strict: bool,

    /// Override `site.site_url`.
    ///
    /// Useful for CI deployments where the production URL differs from the
    /// one used while writing.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

/// Output format for `show`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Toml,
    Json,
}

impl Cli {
    /// Loading options of the current command, `None` for `init`.
    pub fn load_args(&self) -> Option<&LoadArgs> {
        match &self.command {
            Commands::Init { .. } => None,
            Commands::Check { args } | Commands::Show { args, .. } | Commands::Get { args, .. } => {
                Some(args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["moments", "check"]);
        assert_eq!(cli.config, PathBuf::from("moments.toml"));
        assert!(!cli.verbose);
        let args = cli.load_args().unwrap();
        assert!(!args.strict);
        assert!(args.site_url.is_none());
    }

    #[test]
    fn test_show_options() {
        let cli = Cli::parse_from([
            "moments", "show", "-f", "json", "-U", "https://example.com", "-C", "site.toml",
        ]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        match &cli.command {
            Commands::Show { format, args } => {
                assert_eq!(*format, OutputFormat::Json);
                assert_eq!(args.site_url.as_deref(), Some("https://example.com"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_init_has_no_load_args() {
        let cli = Cli::parse_from(["moments", "init", "blog", "--dry"]);
        assert!(cli.load_args().is_none());
        match &cli.command {
            Commands::Init { name, dry } => {
                assert!(*dry);
                assert_eq!(name.as_deref(), Some(std::path::Path::new("blog")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
