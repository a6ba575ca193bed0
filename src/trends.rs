use std::fmt;

use crate::context::ContextRecord;

/// Keywords reported as common themes
const THEME_LIMIT: usize = 5;

/// Theme that pairs with a low mean score for the work-stress suggestion
const WORK_THEME: &str = "仕事";
/// Theme that pairs with a high mean score for the family-happiness note
const FAMILY_THEME: &str = "家族";
/// Themes whose absence triggers the healthy-habit suggestion
const HEALTH_THEMES: &[&str] = &["運動", "健康"];

/// Three-way label over the mean emotion score of a user's history
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionalPattern {
    Positive,
    Stable,
    NeedsSupport,
}

impl fmt::Display for EmotionalPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmotionalPattern::Positive => "positive",
            EmotionalPattern::Stable => "stable",
            EmotionalPattern::NeedsSupport => "needs-support",
        };
        write!(f, "{}", label)
    }
}

/// Aggregate signals over a user's stored history, independent of any query
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TrendReport {
    pub common_themes: Vec<String>,
    pub emotional_pattern: EmotionalPattern,
    pub suggestions: Vec<String>,
}

/// Summarize keyword frequency and average emotion score across `records`.
///
/// Themes are the top keywords by count, ties kept in first-seen order.
/// Every matching suggestion rule contributes, not just the first.
pub fn analyze_records(records: &[ContextRecord]) -> TrendReport {
    // Count keywords in first-seen order so the stable sort keeps ties there
    let mut theme_counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        for keyword in &record.keywords {
            match theme_counts.iter_mut().find(|(theme, _)| theme == keyword) {
                Some((_, count)) => *count += 1,
                None => theme_counts.push((keyword.clone(), 1)),
            }
        }
    }
    theme_counts.sort_by(|a, b| b.1.cmp(&a.1));

    let common_themes: Vec<String> = theme_counts
        .into_iter()
        .take(THEME_LIMIT)
        .map(|(theme, _)| theme)
        .collect();

    let mean_score = if records.is_empty() {
        0.0
    } else {
        records
            .iter()
            .map(|r| r.emotions.overall_score)
            .sum::<f32>()
            / records.len() as f32
    };

    let emotional_pattern = if records.is_empty() {
        EmotionalPattern::Stable
    } else if mean_score > 4.0 {
        EmotionalPattern::Positive
    } else if mean_score < 2.5 {
        EmotionalPattern::NeedsSupport
    } else {
        EmotionalPattern::Stable
    };

    let has_theme = |theme: &str| common_themes.iter().any(|t| t == theme);

    let mut suggestions = Vec::new();
    if has_theme(WORK_THEME) && mean_score < 3.0 {
        suggestions.push("仕事のストレス管理について考えてみましょう".to_string());
    }
    if has_theme(FAMILY_THEME) && mean_score > 4.0 {
        suggestions.push("家族との時間が幸せの源になっているようです".to_string());
    }
    if !HEALTH_THEMES.iter().any(|theme| has_theme(theme)) {
        suggestions.push("健康的な習慣を取り入れることを検討してみては？".to_string());
    }

    TrendReport {
        common_themes,
        emotional_pattern,
        suggestions,
    }
}

/// Render a trend report for terminal display
pub fn format_trends(report: &TrendReport) -> String {
    let mut output = String::new();

    output.push_str("📈 Diary Trends\n");
    output.push_str("============================================================\n\n");

    output.push_str(&format!("Emotional pattern: {}\n", report.emotional_pattern));

    if !report.common_themes.is_empty() {
        output.push_str("\n🔑 Common themes:\n");
        for (i, theme) in report.common_themes.iter().enumerate() {
            output.push_str(&format!("  {}. {}\n", i + 1, theme));
        }
    }

    if !report.suggestions.is_empty() {
        output.push_str("\n💡 Suggestions:\n");
        for suggestion in &report.suggestions {
            output.push_str(&format!("  - {}\n", suggestion));
        }
    }

    output
}
