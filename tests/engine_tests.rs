//! 引擎集成测试
//!
//! 覆盖匹配、检测、主题提取、逐步输出和各生成器的端到端行为。

use std::sync::Arc;

use parking_lot::Mutex;
use rstest::rstest;
use tokio_util::sync::CancellationToken;
use toolhub::config::GenerationConfig;
use toolhub::engine::{
    ContentGenerator, Pacing, PostTone, SequenceRandom, detect_category, detect_tone,
    emit_progressively, extract_topic, find_best_match, pick_seeded,
};
use toolhub::error::AppError;
use toolhub::models::catalog::{MatchableRecord, NO_MATCH_VIDEO_TITLE};
use toolhub::models::category::Category;
use toolhub::models::result::{Progress, ToolKind};

struct Record {
    name: &'static str,
    keywords: Vec<&'static str>,
}

impl MatchableRecord for Record {
    type Keyword = &'static str;

    fn keywords(&self) -> &[&'static str] {
        &self.keywords
    }
}

fn record(name: &'static str, keywords: &[&'static str]) -> Record {
    Record {
        name,
        keywords: keywords.to_vec(),
    }
}

fn test_generator() -> ContentGenerator {
    ContentGenerator::new(GenerationConfig::instant())
        .with_random(Arc::new(SequenceRandom::constant(0.0)))
}

#[rstest]
#[case("", &["a", "b", "c"])]
#[case("tech startup", &["one", "two"])]
#[case("日本語の入力", &["x", "y", "z", "w"])]
fn test_seeded_pick_is_stable(#[case] seed: &str, #[case] options: &[&str]) {
    assert_eq!(pick_seeded(options, seed), pick_seeded(options, seed));
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("start a business")]
#[case("!!! ??? ...")]
fn test_best_match_never_panics(#[case] query: &str) {
    let records = vec![
        record("art", &["art"]),
        record("business", &["business"]),
    ];
    let empty: Vec<Record> = Vec::new();

    if let Some(found) = find_best_match(&records, query) {
        assert!(records.iter().any(|r| r.name == found.name));
    }
    assert!(find_best_match(&empty, query).is_none());
}

#[test]
fn test_word_match_outranks_substring_match() {
    let records = vec![
        record("art", &["art"]),
        record("business", &["business"]),
    ];

    let found = find_best_match(&records, "start a business").unwrap();
    assert_eq!(found.name, "business");
}

#[test]
fn test_no_overlap_returns_none() {
    let records = vec![record("foo", &["foo"])];
    assert!(find_best_match(&records, "completely unrelated text").is_none());
}

#[rstest]
#[case("")]
#[case("xyzzy plugh")]
fn test_category_falls_back_to_default(#[case] input: &str) {
    assert_eq!(detect_category(input), Category::Default);
}

#[test]
fn test_topic_strips_instruction_and_filler() {
    let topic = extract_topic("Write a post about team leadership");

    assert!(!topic.is_empty());
    assert!(topic.chars().next().unwrap().is_uppercase());
    assert!(!topic.contains("Write"));
    assert!(!topic.split_whitespace().any(|word| word == "about"));
}

#[tokio::test]
async fn test_emission_yields_every_prefix_in_order() {
    let seen = Mutex::new(Vec::new());
    let random = SequenceRandom::constant(0.0);
    let cancel = CancellationToken::new();

    emit_progressively("a b c", Pacing::new(0, 0), &random, &cancel, |partial, _| {
        seen.lock().push(partial.to_string())
    })
    .await
    .unwrap();

    assert_eq!(seen.into_inner(), vec!["a", "a b", "a b c"]);
}

#[tokio::test]
async fn test_motivational_post_end_to_end() {
    let input = "Write a motivational LinkedIn post about resilience";
    assert_eq!(detect_tone(input), PostTone::Motivational);

    let percents = Mutex::new(Vec::new());
    let on_progress = |progress: Progress| percents.lock().push(progress.percent);
    let cancel = CancellationToken::new();

    let text = test_generator()
        .generate_post(input, Some(&on_progress), &cancel)
        .await
        .unwrap();

    assert!(text.to_lowercase().contains("resilience"));
    assert!(text.contains('#'));
    assert_eq!(percents.into_inner().last(), Some(&100));
}

#[tokio::test]
async fn test_video_without_match_reports_no_match() {
    let cancel = CancellationToken::new();
    let result = test_generator()
        .generate_video("qwertyuiop asdfghjkl", None, &cancel)
        .await
        .unwrap();

    assert!(result.no_match);
    assert!(result.video_url.is_none());
    assert_eq!(result.title, NO_MATCH_VIDEO_TITLE);
}

#[tokio::test]
async fn test_business_caption_is_professional() {
    let cancel = CancellationToken::new();
    let result = test_generator()
        .generate_caption("business marketing strategy", None, &cancel)
        .await
        .unwrap();

    assert_eq!(result.tone, "Professional");
    assert!(!result.hashtags.is_empty());
}

#[rstest]
#[case(ToolKind::Video, "")]
#[case(ToolKind::Avatar, "   ")]
#[case(ToolKind::Post, "")]
#[case(ToolKind::Message, "  ")]
#[case(ToolKind::ImagePrompt, "")]
#[case(ToolKind::Caption, "\t")]
#[case(ToolKind::Thumbnail, "")]
#[case(ToolKind::Script, "   ")]
#[tokio::test]
async fn test_blank_input_is_rejected_without_progress(#[case] tool: ToolKind, #[case] input: &str) {
    let calls = Mutex::new(0usize);
    let on_progress = |_: Progress| *calls.lock() += 1;
    let cancel = CancellationToken::new();

    let outcome = test_generator()
        .generate(tool, input, Some(&on_progress), &cancel)
        .await;

    assert!(matches!(outcome, Err(AppError::Validation(_))));
    assert_eq!(calls.into_inner(), 0);
}
