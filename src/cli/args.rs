//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Petrify static site prerenderer CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: petrify.toml)
    #[arg(short = 'C', long, default_value = "petrify.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render all component routes to static HTML files
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// List route mappings without writing files
    #[command(visible_alias = "r")]
    Routes {
        #[command(flatten)]
        args: RoutesArgs,
    },
}

/// Shared build arguments for the Build command
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Routes command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RoutesArgs {
    /// Output route mappings as JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_routes(&self) -> bool {
        matches!(self.command, Commands::Routes { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_asserts() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_build_flags() {
        let cli = Cli::parse_from(["petrify", "build", "--clean", "-V"]);
        assert!(cli.is_build());

        let Commands::Build { build_args } = &cli.command else {
            panic!("expected build command");
        };
        assert!(build_args.clean);
        assert!(build_args.verbose);
    }

    #[test]
    fn test_output_override() {
        let cli = Cli::parse_from(["petrify", "-o", "dist", "build"]);
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
    }

    // `output` is global, so it parses in either position
    #[test]
    fn test_output_after_subcommand() {
        let cli = Cli::parse_from(["petrify", "build", "-o", "dist"]);
        assert_eq!(cli.output, Some(PathBuf::from("dist")));
    }

    #[test]
    fn test_routes_alias() {
        let cli = Cli::parse_from(["petrify", "r", "--json"]);
        assert!(cli.is_routes());

        let Commands::Routes { args } = &cli.command else {
            panic!("expected routes command");
        };
        assert!(args.json);
        assert!(!args.pretty);
    }
}
