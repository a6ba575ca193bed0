pub mod prompt;
pub mod ranker;

pub use ranker::{RagEngine, SearchResult};
