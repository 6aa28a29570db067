//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name     = "serve",
    bin_name = "serve",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold Serve/Rack prototype sites",
    long_about = "serve lays out a Rack-ready prototype site: views, Sass sources, \
                  public assets, config.ru, Compass config, README and LICENSE. \
                  It can also convert an existing Compass project in place.",
    after_help = "EXAMPLES:\n\
        \x20 serve create blog-site\n\
        \x20 serve create \"My Site\" -d ~/sites --framework jquery\n\
        \x20 serve convert old_site --yes\n\
        \x20 serve completions bash > /usr/share/bash-completion/completions/serve",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new project.
    #[command(
        visible_alias = "new",
        about = "Create a new project",
        after_help = "EXAMPLES:\n\
            \x20 serve create blog-site                 # ./blog_site\n\
            \x20 serve create blog-site -d ../sites     # ../sites/blog_site\n\
            \x20 serve create app --framework jquery --author \"Ada Lovelace\""
    )]
    Create(ProjectArgs),

    /// Convert an existing Compass project to the standard layout.
    #[command(
        about = "Convert a Compass project",
        after_help = "Moves images/, stylesheets/ and javascripts/ into public/ and \
            renames src/ to sass/, then adds any missing boilerplate.\n\n\
            EXAMPLES:\n\
            \x20 serve convert old_site\n\
            \x20 serve convert old_site -d ~/sites --yes"
    )]
    Convert(ConvertArgs),

    /// Show the project templates and whether each can be loaded.
    #[command(visible_alias = "ls", about = "List project templates")]
    Templates,

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 serve init                     # default location\n\
            \x20 serve init --config ./serve.toml\n\
            \x20 serve init --force             # overwrite"
    )]
    Init(InitArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 serve config get installer.program\n\
            \x20 serve config list\n\
            \x20 serve config path"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 serve completions bash > ~/.local/share/bash-completion/completions/serve\n\
            \x20 serve completions zsh  > ~/.zfunc/_serve\n\
            \x20 serve completions fish > ~/.config/fish/completions/serve.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create / convert ──────────────────────────────────────────────────────────

/// Options shared by `create` and `convert`.
#[derive(Debug, Clone, Args)]
pub struct ProjectArgs {
    /// Spaces and hyphens become underscores in the directory name.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    #[arg(
        short = 'd',
        long = "directory",
        value_name = "DIR",
        help = "Parent directory (default: config project.directory, then '.')"
    )]
    pub directory: Option<PathBuf>,

    #[arg(
        short = 'f',
        long = "framework",
        value_name = "FRAMEWORK",
        help = "JavaScript framework to install (e.g. jquery, prototype)"
    )]
    pub framework: Option<String>,

    #[arg(
        long = "author",
        value_name = "NAME",
        help = "Author for LICENSE and README (default: git user.name)"
    )]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Moves cannot be undone, so convert asks first.
    #[arg(short = 'y', long = "yes", help = "Skip the confirmation prompt")]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `installer.program`.
        key: String,
    },
    /// Print all configuration values as TOML.
    List,
    /// Print the path of the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
