//! Command-line arguments

use a2ui_core::GatePolicy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Protocol validation and variety checks for A2UI dashboards
#[derive(Parser, Debug)]
#[command(name = "a2ui-check", version)]
#[command(about = "Validate A2UI component trees and check dashboard variety")]
pub struct Cli {
    /// Gate config file (TOML); flags override its values
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Emit JSON instead of a text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Print only status lines and statistics
    #[arg(long, global = true)]
    pub summary: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a component tree, or an array of sibling trees
    Validate {
        /// JSON file, `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        validation: ValidationArgs,
    },

    /// Analyze the type sequence of a dashboard
    Variety {
        /// JSON array of components or type names, `-` for stdin
        file: PathBuf,

        #[command(flatten)]
        variety: VarietyArgs,
    },

    /// Run both analyses and merge them into a verdict
    Check {
        /// JSON arrays of top-level sections, one candidate dashboard each
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Merge policy: strict, advisory or permissive
        #[arg(long, short = 'p')]
        policy: Option<GatePolicy>,

        #[command(flatten)]
        validation: ValidationArgs,

        #[command(flatten)]
        variety: VarietyArgs,
    },

    /// Run the built-in variety scenarios
    Demo,
}

/// Validator overrides
#[derive(Args, Debug, Default, Clone)]
pub struct ValidationArgs {
    /// Deepest allowed nesting (root is 0)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Report unregistered types as warnings
    #[arg(long)]
    pub allow_unregistered: bool,

    /// Skip the registration check entirely
    #[arg(long)]
    pub no_registration: bool,

    /// Skip the self-containment check
    #[arg(long)]
    pub no_circular: bool,

    /// Require each type's declared props
    #[arg(long)]
    pub required_props: bool,

    /// Required type namespace, e.g. `a2ui`
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Variety overrides
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct VarietyArgs {
    /// Minimum distinct types
    #[arg(long)]
    pub min_types: Option<usize>,

    /// Longest allowed run of one type
    #[arg(long)]
    pub max_run: Option<usize>,
}
