use super::SearchResult;
use crate::config::PREVIEW_MAX_CHARS;

/// Render ranked context into the instruction template handed to the LLM
/// provider. The original query appears verbatim, followed by the context
/// blocks in ranked order. Zero results return the query untouched.
pub fn build_enhanced_prompt(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return query.to_string();
    }

    let context_summary = results
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let date = result.record.date.format("%Y/%m/%d");
            let emotions = result.record.emotions.dominant_emotions.join("、");
            format!(
                "[過去の記録{}] {}\n感情: {}\n内容: {}...",
                idx + 1,
                date,
                emotions,
                truncate_chars(&result.record.content, PREVIEW_MAX_CHARS)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"
ユーザーの質問: {}

以下は関連する過去の日記記録です：
{}

これらの過去の記録を参考にしながら、ユーザーの現在の状況に寄り添った返答をしてください。
過去の経験や感情のパターンを踏まえて、より深い洞察を提供してください。
"#,
        query, context_summary
    )
}

/// First `max` characters of `text`, cut on a char boundary
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
