use colored::Colorize;

use crate::config::Config;
use crate::context::{ContextStore, EmotionProfile, RecordKind};
use crate::error::Result;
use crate::retrieval::RagEngine;
use crate::trends;

// ── Core commands ───────────────────────────────────────────────────────

fn open_engine(config: &Config) -> RagEngine {
    RagEngine::new(ContextStore::load_or_create(config.contexts_path()))
}

pub fn cmd_add(
    config: &Config,
    user: &str,
    content: &str,
    score: f32,
    emotions: Option<String>,
    keywords: Option<String>,
    answer_to: Option<String>,
) -> Result<()> {
    let mut dominant = split_csv(emotions);
    dominant.truncate(3);

    let profile = EmotionProfile {
        overall_score: score,
        dominant_emotions: dominant,
        emotion_scores: None,
    };

    let kind = if answer_to.is_some() {
        RecordKind::Answer
    } else {
        RecordKind::Diary
    };

    let mut engine = open_engine(config);
    let record = engine.add_context(user, kind, content, profile, split_csv(keywords), answer_to);
    engine.store().save()?;

    println!("{} {}", "Recorded".green(), record.id);
    Ok(())
}

pub fn cmd_search(config: &Config, user: &str, query: &str, limit: usize) -> Result<()> {
    let mut engine = open_engine(config);
    let results = engine.search_relevant_context(query, user, limit);

    if results.is_empty() {
        println!("{}", "No matching records.".yellow());
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        let record = &result.record;
        println!(
            "{} {} {}",
            format!("{}.", i + 1).bold(),
            format!("[{:.3}]", result.relevance_score).cyan(),
            record.date.format("%Y-%m-%d").to_string().dimmed()
        );
        println!("   {}", preview_line(&record.content));
        if !record.keywords.is_empty() {
            println!("   {}", record.keywords.join(", ").dimmed());
        }
    }

    Ok(())
}

pub fn cmd_ask(config: &Config, user: &str, query: &str) -> Result<()> {
    let mut engine = open_engine(config);
    println!("{}", engine.enhance_prompt_with_context(query, user));
    Ok(())
}

pub fn cmd_trends(config: &Config, user: &str) -> Result<()> {
    let mut engine = open_engine(config);
    let report = engine.analyze_user_trends(user);
    print!("{}", trends::format_trends(&report));
    Ok(())
}

pub fn cmd_status(config: &Config) -> Result<()> {
    let store = ContextStore::load_or_create(config.contexts_path());
    let stats = store.stats();

    println!("{}", "Store status".bold());
    println!("  Users:   {}", stats.total_users);
    println!("  Records: {}", stats.total_records);
    for (kind, count) in &stats.by_kind {
        println!("    {:<10} {}", kind, count);
    }

    Ok(())
}

fn split_csv(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(|item| item.trim().to_string())
                .filter(|item| !item.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

fn preview_line(content: &str) -> String {
    let mut line = content.lines().next().unwrap_or("").to_string();
    if line.chars().count() > 80 {
        line = line.chars().take(80).collect::<String>() + "…";
    }
    line
}
