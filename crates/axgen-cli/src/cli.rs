//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.
//!
//! There are deliberately no subcommands and no flags that alter the
//! generated layout: the scaffold itself is fixed (edit the constants in
//! `axgen-adapters::builtin` to change it).  Everything below is ambient —
//! verbosity, color, and output format.

use clap::Parser;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "axgen",
    bin_name = "axgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold the axon_backend project skeleton",
    long_about = "Axgen creates the fixed axon_backend directory tree with \
                  package markers and one-line placeholder files. Running it \
                  again is safe: existing directories and files are never \
                  overwritten.",
    after_help = "EXAMPLES:\n\
        \x20 axgen                         # scaffold into ./axon_backend\n\
        \x20 axgen -v                      # with progress logging\n\
        \x20 axgen --output-format json    # machine-readable report"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,
}

// ── Global flags ──────────────────────────────────────────────────────────────

/// Global arguments.
#[derive(Debug, clap::Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (progress messages)
    -vv     - Debug level (detailed diagnostics)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Output format.
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// JSON report.
    Json,
}

// ── tests ─────────────────────────────────────────────────────────────────────
