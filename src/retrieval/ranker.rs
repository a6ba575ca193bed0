use std::collections::HashSet;

use chrono::Utc;
use rayon::prelude::*;

use crate::config::PROMPT_CONTEXT_LIMIT;
use crate::context::{
    generate_record_id, ContextRecord, ContextStore, EmotionProfile, RecordKind,
};
use crate::embedding::{cosine_similarity, embed};
use crate::retrieval::prompt;
use crate::trends::{self, TrendReport};

/// Words whose presence in a query signals the writer's mood. Matched as
/// substrings of the lower-cased query, so inflected forms still hit.
const POSITIVE_WORDS: &[&str] = &["嬉しい", "楽しい", "happy", "良い", "素晴らしい"];
const NEGATIVE_WORDS: &[&str] = &["悲しい", "辛い", "sad", "大変", "疲れ"];

/// Score bump per record keyword found among the query's tokens
const KEYWORD_BOOST: f32 = 0.1;
/// Ceiling of the emotion-alignment bonus
const EMOTION_BOOST_WEIGHT: f32 = 0.2;

/// One ranked retrieval hit. Ephemeral; never persisted.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub record: ContextRecord,
    pub relevance_score: f32,
}

/// Relevance engine over per-user context collections.
///
/// Owns its store so tests can build fully isolated engines; callers that
/// persist between runs hand it a `ContextStore::load_or_create` store and
/// `save` through `store()` after mutating.
pub struct RagEngine {
    store: ContextStore,
}

impl RagEngine {
    pub fn new(store: ContextStore) -> Self {
        RagEngine { store }
    }

    pub fn store(&self) -> &ContextStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ContextStore {
        &mut self.store
    }

    /// Rank the user's history against a free-text query and return the top
    /// `limit` records, highest relevance first. Ties keep collection order.
    /// A blank query carries no signal and returns nothing.
    pub fn search_relevant_context(
        &mut self,
        query: &str,
        user_id: &str,
        limit: usize,
    ) -> Vec<SearchResult> {
        if query.split_whitespace().next().is_none() {
            return Vec::new();
        }

        let records = self.store.get_or_seed(user_id);

        let query_embedding = embed(query);
        let query_lower = query.to_lowercase();
        let query_words: HashSet<&str> = query_lower.split_whitespace().collect();
        let query_mood = query_mood_score(&query_lower);

        // Per-record scoring is pure, so records are scored in parallel and
        // collected back in collection order.
        let mut results: Vec<SearchResult> = records
            .par_iter()
            .map(|record| {
                let similarity = match &record.embedding {
                    Some(embedding) => cosine_similarity(&query_embedding, embedding),
                    None => cosine_similarity(&query_embedding, &embed(&record.content)),
                };

                let keyword_boost = record
                    .keywords
                    .iter()
                    .filter(|keyword| query_words.contains(keyword.to_lowercase().as_str()))
                    .count() as f32
                    * KEYWORD_BOOST;

                let emotion_boost = emotion_alignment_boost(query_mood, &record.emotions);

                SearchResult {
                    record: record.clone(),
                    relevance_score: similarity + keyword_boost + emotion_boost,
                }
            })
            .collect();

        results.sort_by(|a, b| {
            b.relevance_score
                .partial_cmp(&a.relevance_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(limit);
        results
    }

    /// Wrap `query` into an LLM-ready prompt carrying the top-ranked context
    /// blocks. With nothing relevant the query comes back untouched.
    pub fn enhance_prompt_with_context(&mut self, query: &str, user_id: &str) -> String {
        let results = self.search_relevant_context(query, user_id, PROMPT_CONTEXT_LIMIT);
        prompt::build_enhanced_prompt(query, &results)
    }

    /// Append new content as retrievable context, with its embedding
    /// precomputed. Emotions and keywords come from the upstream analysis
    /// collaborator.
    pub fn add_context(
        &mut self,
        user_id: &str,
        kind: RecordKind,
        content: &str,
        emotions: EmotionProfile,
        keywords: Vec<String>,
        parent_id: Option<String>,
    ) -> ContextRecord {
        let date = Utc::now();
        let record = ContextRecord {
            id: generate_record_id(kind, content, date),
            content: content.to_string(),
            date,
            emotions,
            keywords,
            embedding: Some(embed(content)),
            kind,
            parent_id,
        };

        self.store.append(user_id, record.clone());
        record
    }

    /// Record an answer to a reflective question as retrievable context
    pub fn add_answer_context(
        &mut self,
        user_id: &str,
        answer: &str,
        emotions: EmotionProfile,
        keywords: Vec<String>,
        parent_id: Option<String>,
    ) -> ContextRecord {
        self.add_context(user_id, RecordKind::Answer, answer, emotions, keywords, parent_id)
    }

    /// Aggregate trend signals over the user's full history
    pub fn analyze_user_trends(&mut self, user_id: &str) -> TrendReport {
        let records = self.store.get_or_seed(user_id);
        trends::analyze_records(records)
    }
}

/// Net mood of a query: +1 per positive word present, -1 per negative word,
/// with the practical -2..=2 range mapped onto 0..=1. Values outside that
/// range stay unclamped.
fn query_mood_score(query_lower: &str) -> f32 {
    let mut mood = 0i32;
    for word in POSITIVE_WORDS {
        if query_lower.contains(word) {
            mood += 1;
        }
    }
    for word in NEGATIVE_WORDS {
        if query_lower.contains(word) {
            mood -= 1;
        }
    }

    (mood as f32 + 2.0) / 4.0
}

/// Full bonus when the record's stored emotion score sits exactly where the
/// query's mood points, decaying linearly to zero at maximum divergence and
/// never going negative.
fn emotion_alignment_boost(query_mood: f32, emotions: &EmotionProfile) -> f32 {
    let emotion_score = emotions.overall_score / 5.0;
    (1.0 - (emotion_score - query_mood).abs()).max(0.0) * EMOTION_BOOST_WEIGHT
}
