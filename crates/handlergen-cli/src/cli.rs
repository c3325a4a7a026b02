//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use handlergen_registry::ToolCategory;
use handlergen_template::DEFAULT_INDENT;

/// Upper bound for `--indent`.
pub const MAX_INDENT: i64 = 120;

const DEFAULT_INDENT_ARG: u16 = DEFAULT_INDENT as u16;

/// handlergen - Generate tool-call handlers for the Stellar message renderer
#[derive(Parser, Debug)]
#[command(name = "handlergen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Tool manifest (TOML). Built-in tables are used when absent.
    #[arg(long, global = true, env = "HANDLERGEN_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Selection and layout options shared by `generate` and `check`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct LayoutArgs {
    /// Only these tools, in this order
    #[arg(short = 't', long = "tool", conflicts_with = "category")]
    pub tools: Vec<String>,

    /// Only render tools of this category (write, read, factory, utility)
    #[arg(short, long)]
    pub category: Option<ToolCategory>,

    /// Spaces prefixed to every generated line (0-120)
    #[arg(
        long,
        default_value_t = DEFAULT_INDENT_ARG,
        value_parser = clap::value_parser!(u16).range(0..=MAX_INDENT)
    )]
    pub indent: u16,

    /// Omit the section banner comments
    #[arg(long)]
    pub no_banners: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List registered tools grouped by category
    List {
        /// Only list this category
        #[arg(short, long)]
        category: Option<ToolCategory>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Print per-category tool counts
    Summary,

    /// Generate handler code
    ///
    /// Writes to stdout unless --output or --splice is given.
    ///
    /// Examples:
    ///   handlergen generate                          # All handlers to stdout
    ///   handlergen generate -t tokenMint -t nftMint  # Selected tools
    ///   handlergen generate --output handlers.tsx    # Standalone file
    ///   handlergen generate --splice components/message.tsx --block stellar-tools
    Generate {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Write the generated text to this file
        #[arg(short, long, conflicts_with = "splice")]
        output: Option<PathBuf>,

        /// Replace a managed block in this file
        #[arg(long, requires = "block")]
        splice: Option<PathBuf>,

        /// Managed block id used with --splice
        #[arg(long, requires = "splice")]
        block: Option<String>,

        /// Show what would be written without touching any file
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that a managed block matches freshly generated handlers
    Check {
        /// File containing the managed block
        #[arg(long)]
        target: PathBuf,

        /// Managed block id
        #[arg(long)]
        block: String,

        #[command(flatten)]
        layout: LayoutArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["handlergen", "generate"]).unwrap();
        match cli.command {
            Some(Commands::Generate {
                layout,
                output,
                splice,
                block,
                dry_run,
            }) => {
                assert!(layout.tools.is_empty());
                assert_eq!(usize::from(layout.indent), DEFAULT_INDENT);
                assert_eq!(layout.category, None);
                assert!(!layout.no_banners);
                assert!(output.is_none() && splice.is_none() && block.is_none());
                assert!(!dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_category() {
        let cli = Cli::try_parse_from(["handlergen", "list", "--category", "factory"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::List {
                category: Some(ToolCategory::Factory),
                json: false
            })
        );
        assert!(Cli::try_parse_from(["handlergen", "list", "--category", "registry"]).is_err());
    }

    #[test]
    fn test_splice_requires_block() {
        assert!(Cli::try_parse_from(["handlergen", "generate", "--splice", "m.tsx"]).is_err());
        assert!(
            Cli::try_parse_from([
                "handlergen",
                "generate",
                "--splice",
                "m.tsx",
                "--block",
                "tools"
            ])
            .is_ok()
        );
    }

    #[test]
    fn test_output_conflicts_with_splice() {
        let result = Cli::try_parse_from([
            "handlergen",
            "generate",
            "--output",
            "out.tsx",
            "--splice",
            "m.tsx",
            "--block",
            "tools",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tool_conflicts_with_category() {
        let result = Cli::try_parse_from([
            "handlergen",
            "generate",
            "-t",
            "tokenMint",
            "--category",
            "read",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_accepts_tool_selection() {
        let cli = Cli::try_parse_from([
            "handlergen", "check", "--target", "m.tsx", "--block", "t", "-t", "tokenMint",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Check { layout, .. }) => assert_eq!(layout.tools, vec!["tokenMint"]),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_indent_is_bounded() {
        assert!(Cli::try_parse_from(["handlergen", "generate", "--indent", "120"]).is_ok());
        assert!(Cli::try_parse_from(["handlergen", "generate", "--indent", "121"]).is_err());
        assert!(
            Cli::try_parse_from(["handlergen", "generate", "--indent", "18446744073709551615"])
                .is_err()
        );
    }

    #[test]
    fn test_global_manifest_flag() {
        let cli =
            Cli::try_parse_from(["handlergen", "summary", "--manifest", "tools.toml"]).unwrap();
        assert_eq!(cli.manifest, Some(PathBuf::from("tools.toml")));
    }
}
