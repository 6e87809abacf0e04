//! article-merge - blog article publisher
//!
//! Merges per-article YAML metadata with Markdown bodies into posts carrying
//! platform front matter, and lays out slide-deck timelines for the
//! accompanying explainer videos.

use clap::{CommandFactory, Parser};

mod article;
mod cli;
mod commands;
mod config;
mod error;
mod merger;
mod timeline;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    // Bare invocation is a usage error: help goes to stdout, exit 1
    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_long_help() {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    };

    let result = match command {
        Commands::Merge(args) => commands::merge::run(cli.workspace, cli.verbose, cli.quiet, args),
        Commands::Timeline(args) => commands::timeline::run(cli.workspace, args).map(|()| 0),
        Commands::Version => commands::version::run().map(|()| 0),
        Commands::Completions(args) => commands::completions::run(args).map(|()| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
