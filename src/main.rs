#![allow(dead_code)]
mod cli;
mod commands;
mod config;
mod context;
mod embedding;
mod error;
mod retrieval;
mod trends;

use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;

use commands::core::{cmd_add, cmd_ask, cmd_search, cmd_status, cmd_trends};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.data_dir)?;

    match cli.command {
        Commands::Add {
            content,
            score,
            emotions,
            keywords,
            answer_to,
        } => cmd_add(
            &config, &cli.user, &content, score, emotions, keywords, answer_to,
        ),
        Commands::Search { query, limit } => cmd_search(&config, &cli.user, &query, limit),
        Commands::Ask { query } => cmd_ask(&config, &cli.user, &query),
        Commands::Trends => cmd_trends(&config, &cli.user),
        Commands::Status => cmd_status(&config),
    }
}
