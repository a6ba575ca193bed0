use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "kokoro",
    about = "Context-aware retrieval for an AI-assisted diary",
    version
)]
pub struct Cli {
    /// User whose context collection is addressed
    #[arg(global = true, long, default_value = crate::config::DEMO_USER)]
    pub user: String,

    /// Data directory override (default: ~/.kokoro, or KOKORO_DATA_DIR)
    #[arg(global = true, long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Record a diary entry (emotions and keywords come precomputed)
    Add {
        /// Entry text
        content: String,

        /// Overall emotion score, 1 (very negative) to 5 (very positive)
        #[arg(long, default_value = "3.0")]
        score: f32,

        /// Comma-separated dominant emotion labels (up to three)
        #[arg(long)]
        emotions: Option<String>,

        /// Comma-separated extracted keywords
        #[arg(long)]
        keywords: Option<String>,

        /// Record the entry as an answer to this question id
        #[arg(long)]
        answer_to: Option<String>,
    },

    /// Rank past entries against a query
    Search {
        /// Search query
        query: String,

        /// Maximum results
        #[arg(short, long, default_value = "5")]
        limit: usize,
    },

    /// Output an LLM-ready prompt enriched with relevant history (for piping)
    Ask {
        /// The question to wrap
        query: String,
    },

    /// Summarize themes, emotional pattern, and suggestions
    Trends,

    /// Show store statistics
    Status,
}
