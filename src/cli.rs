//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgGroup, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::timeline::DEFAULT_FPS;

/// article-merge - blog article publisher
///
/// Merge YAML article metadata with Markdown bodies into platform-ready posts.
#[derive(Parser, Debug)]
#[command(
    name = "article-merge",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge article metadata and Markdown bodies into publishable posts",
    long_about = "article-merge reads <slug>.yaml from the metadata directory and <slug>.md \
                  from the articles directory, and writes <slug>.md with YAML front matter \
                  (title, emoji, type, topics, published) to the output directory.",
    after_help = "Examples:\n    \
                  article-merge merge jj-rebase-vs-merge\n    \
                  article-merge merge --all\n    \
                  article-merge timeline video/sections.yaml"
)]
pub struct Cli {
    /// Workspace directory (defaults to current directory)
    #[arg(long, short = 'w', global = true)]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only report failures and the final summary
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge one article, or all of them
    Merge(MergeArgs),

    /// Show the frame timeline of a slide deck
    Timeline(TimelineArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(
    group(ArgGroup::new("target").required(true).args(["slug", "all"])),
    after_help = "EXAMPLES:\n  \
                  Merge one article:\n    article-merge merge jj-rebase-vs-merge\n\n\
                  Merge every article with a metadata file:\n    article-merge merge --all\n\n\
                  Fail the run when any article is skipped:\n    article-merge merge --all --strict\n\n\
                  Use another output directory:\n    article-merge merge --all --output-dir publish/articles"
)]
pub struct MergeArgs {
    /// Article slug (file stem shared by the metadata and body files)
    pub slug: Option<String>,

    /// Merge every article found in the metadata directory
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Exit with status 1 if any article could not be merged
    #[arg(long)]
    pub strict: bool,

    /// Directory holding <slug>.yaml metadata files
    #[arg(long, value_name = "DIR", env = "ARTICLE_MERGE_METADATA_DIR")]
    pub metadata_dir: Option<PathBuf>,

    /// Directory holding <slug>.md article bodies
    #[arg(long, value_name = "DIR", env = "ARTICLE_MERGE_ARTICLES_DIR")]
    pub articles_dir: Option<PathBuf>,

    /// Directory receiving merged articles
    #[arg(long, value_name = "DIR", env = "ARTICLE_MERGE_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,
}

/// Arguments for the timeline command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show a deck timeline:\n    article-merge timeline video/sections.yaml\n\n\
                  Machine-readable output at 60 fps:\n    article-merge timeline video/sections.json --fps 60 --json")]
pub struct TimelineArgs {
    /// Section file (YAML or JSON list of {title, content, duration})
    pub file: PathBuf,

    /// Frames per second
    #[arg(long, default_value_t = DEFAULT_FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Print the timeline as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    article-merge completions --shell bash > ~/.bash_completion.d/article-merge\n\n\
                  Generate zsh completions:\n    article-merge completions --shell zsh > ~/.zfunc/_article-merge")]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(long, value_enum, ignore_case = true)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing_no_arguments() {
        let cli = Cli::try_parse_from(["article-merge"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parsing_merge_slug() {
        let cli = Cli::try_parse_from(["article-merge", "merge", "jj-intro"]).unwrap();
        match cli.command {
            Some(Commands::Merge(args)) => {
                assert_eq!(args.slug, Some("jj-intro".to_string()));
                assert!(!args.all);
                assert!(!args.strict);
            }
            _ => panic!("Expected Merge command"),
        }
    }

    #[test]
    fn test_cli_parsing_merge_all() {
        let cli = Cli::try_parse_from(["article-merge", "merge", "--all", "--strict"]).unwrap();
        match cli.command {
            Some(Commands::Merge(args)) => {
                assert_eq!(args.slug, None);
                assert!(args.all);
                assert!(args.strict);
            }
            _ => panic!("Expected Merge command"),
        }
    }

    #[test]
    fn test_cli_merge_requires_target() {
        assert!(Cli::try_parse_from(["article-merge", "merge"]).is_err());
    }

    #[test]
    fn test_cli_merge_slug_conflicts_with_all() {
        assert!(Cli::try_parse_from(["article-merge", "merge", "post", "--all"]).is_err());
    }

    #[test]
    fn test_cli_merge_directory_overrides() {
        let cli = Cli::try_parse_from([
            "article-merge",
            "merge",
            "--all",
            "--metadata-dir",
            "meta",
            "--output-dir",
            "out",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Merge(args)) => {
                assert_eq!(args.metadata_dir, Some(PathBuf::from("meta")));
                assert_eq!(args.output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected Merge command"),
        }
    }

    #[test]
    fn test_cli_parsing_timeline() {
        let cli = Cli::try_parse_from(["article-merge", "timeline", "deck.yaml"]).unwrap();
        match cli.command {
            Some(Commands::Timeline(args)) => {
                assert_eq!(args.file, PathBuf::from("deck.yaml"));
                assert_eq!(args.fps, DEFAULT_FPS);
                assert!(!args.json);
            }
            _ => panic!("Expected Timeline command"),
        }
    }

    #[test]
    fn test_cli_timeline_rejects_zero_fps() {
        assert!(Cli::try_parse_from(["article-merge", "timeline", "d.yaml", "--fps", "0"]).is_err());
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["article-merge", "-v", "-w", "/tmp/blog", "merge", "--all"])
                .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/blog")));
    }

    #[test]
    fn test_cli_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["article-merge", "-q", "-v", "merge", "--all"]).is_err());
    }

    #[test]
    fn test_cli_completions_shell_is_case_insensitive() {
        let cli = Cli::try_parse_from(["article-merge", "completions", "--shell", "Zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, Shell::Zsh),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_completions_rejects_unknown_shell() {
        let err = Cli::try_parse_from(["article-merge", "completions", "--shell", "tcsh"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["article-merge", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }
}
