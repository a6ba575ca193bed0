use std::collections::BTreeMap;

use chrono::{TimeZone, Utc};

use super::{ContextRecord, EmotionProfile, RecordKind};
use crate::embedding;

/// Fixed corpus seeded into a fresh user's collection so retrieval always has
/// something to rank. Five entries spanning work, family, friendship, and
/// health, with emotion scores on both ends of the scale.
pub fn demo_contexts() -> Vec<ContextRecord> {
    vec![
        demo_record(
            "1",
            (2024, 8, 1),
            "今日は新しいプロジェクトが始まって緊張したけど、チームメンバーが優しくて安心した。初日は色々覚えることが多くて大変だったが、やりがいを感じる。",
            3.5,
            &["緊張", "期待", "安心"],
            &[("緊張", 0.4), ("期待", 0.3), ("安心", 0.3)],
            &["プロジェクト", "チーム", "仕事", "新しい"],
        ),
        demo_record(
            "2",
            (2024, 8, 10),
            "週末に家族と過ごした時間が本当に幸せだった。子供の成長を感じて、時間の大切さを改めて実感した。",
            4.8,
            &["幸せ", "感動", "充実"],
            &[("幸せ", 0.6), ("感動", 0.3), ("充実", 0.1)],
            &["家族", "週末", "子供", "幸せ"],
        ),
        demo_record(
            "3",
            (2024, 8, 15),
            "プレゼンテーションがうまくいかなくて落ち込んだ。準備不足を痛感した。次はもっとしっかり準備しよう。",
            2.0,
            &["落胆", "反省", "決意"],
            &[("落胆", 0.5), ("反省", 0.3), ("決意", 0.2)],
            &["プレゼン", "仕事", "失敗", "学び"],
        ),
        demo_record(
            "4",
            (2024, 8, 20),
            "友人と久しぶりに会って、昔話に花が咲いた。学生時代を思い出して懐かしかった。",
            4.2,
            &["懐かしさ", "楽しさ", "友情"],
            &[("懐かしさ", 0.4), ("楽しさ", 0.4), ("友情", 0.2)],
            &["友人", "思い出", "懐かしい", "楽しい"],
        ),
        demo_record(
            "5",
            (2024, 8, 25),
            "運動を始めて1ヶ月。体調が良くなってきた気がする。習慣化することの大切さを実感。",
            4.0,
            &["達成感", "健康", "前向き"],
            &[("達成感", 0.5), ("健康", 0.3), ("前向き", 0.2)],
            &["運動", "健康", "習慣", "成長"],
        ),
    ]
}

fn demo_record(
    id: &str,
    (year, month, day): (i32, u32, u32),
    content: &str,
    overall_score: f32,
    dominant: &[&str],
    scores: &[(&str, f32)],
    keywords: &[&str],
) -> ContextRecord {
    let emotion_scores: BTreeMap<String, f32> = scores
        .iter()
        .map(|(label, value)| (label.to_string(), *value))
        .collect();

    ContextRecord {
        id: id.to_string(),
        content: content.to_string(),
        date: Utc
            .with_ymd_and_hms(year, month, day, 0, 0, 0)
            .single()
            .unwrap_or_default(),
        emotions: EmotionProfile {
            overall_score,
            dominant_emotions: dominant.iter().map(|s| s.to_string()).collect(),
            emotion_scores: Some(emotion_scores),
        },
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        embedding: Some(embedding::embed(content)),
        kind: RecordKind::Diary,
        parent_id: None,
    }
}
