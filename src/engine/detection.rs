//! 类别与语气检测
//!
//! 类别检测按固定优先级逐个测试词边界正则，取第一个命中的类别，
//! 不做计数比较。语气/风格检测是简单的子串包含判断。

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::category::Category;

static CATEGORY_PATTERNS: Lazy<Vec<(Category, Regex)>> = Lazy::new(|| {
    [
        (
            Category::Business,
            "business|corporate|professional|office|meeting|finance|marketing|sales|entrepreneur|startup|investment|commerce|trade|industry|economy",
        ),
        (
            Category::Technology,
            "tech|technology|software|coding|programming|digital|app|web|mobile|data|ai|artificial|intelligence|machine|learning|cyber|cloud|internet|developer|engineer|algorithm",
        ),
        (
            Category::Creative,
            "creative|art|design|music|artist|painting|craft|imagination|advertising|visual|graphic|illustration|animation|artistic|culture|entertainment",
        ),
        (
            Category::Lifestyle,
            "lifestyle|health|fitness|wellness|yoga|meditation|food|cooking|travel|vlog|personal|home|family|hobby|leisure|exercise|nutrition|workout|gym|sport",
        ),
        (
            Category::Nature,
            "nature|environment|green|eco|sustainable|outdoor|landscape|wildlife|natural|earth|planet|conservation|climate|ecology|forest|ocean|tree|plant|animal",
        ),
        (
            Category::Education,
            "education|learning|tutorial|teaching|course|lesson|training|study|school|university|knowledge|skill|guide|how-to|instruction|academic",
        ),
        (
            Category::Gaming,
            "gaming|game|gamer|esports|stream|streaming|play|player|console|video-game|multiplayer|competitive|tournament",
        ),
    ]
    .into_iter()
    .map(|(category, terms)| {
        let pattern = format!(r"(?i)\b(?:{})\b", terms);
        (
            category,
            Regex::new(&pattern).expect("category pattern is a fixed literal"),
        )
    })
    .collect()
});

/// 检测输入文本的语义类别
///
/// 按 business、technology、creative、lifestyle、nature、education、gaming
/// 的顺序返回第一个命中的类别，全部未命中时返回 [`Category::Default`]。
pub fn detect_category(text: &str) -> Category {
    CATEGORY_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(category, _)| *category)
        .unwrap_or_default()
}

/// 帖子语气
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostTone {
    Motivational,
    Professional,
    Casual,
    Educational,
}

/// 消息类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Greeting,
    Followup,
    Announcement,
    Professional,
}

/// 图像提示词风格
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ImagePromptStyle {
    Futuristic,
    Minimalist,
    Artistic,
    Natural,
    Professional,
}

/// 配文语气
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CaptionTone {
    Professional,
    Casual,
    Inspirational,
}

/// 脚本风格
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ScriptStyle {
    Informative,
    Entertaining,
    Tutorial,
}

const POST_TONE_RULES: &[(PostTone, &[&str])] = &[
    (PostTone::Motivational, &["motivat", "inspir", "encourag"]),
    (
        PostTone::Professional,
        &["profession", "business", "corporate", "industry"],
    ),
    (
        PostTone::Educational,
        &["learn", "educat", "teach", "explain"],
    ),
];

const MESSAGE_TYPE_RULES: &[(MessageType, &[&str])] = &[
    (MessageType::Followup, &["follow", "follow-up", "followup"]),
    (MessageType::Announcement, &["announc", "update", "news"]),
    (
        MessageType::Greeting,
        &["greet", "hello", "introduction", "introduce"],
    ),
];

const IMAGE_STYLE_RULES: &[(ImagePromptStyle, &[&str])] = &[
    (
        ImagePromptStyle::Futuristic,
        &["futur", "sci-fi", "cyberpunk", "tech"],
    ),
    (ImagePromptStyle::Minimalist, &["minimal", "simple", "clean"]),
    (
        ImagePromptStyle::Artistic,
        &["art", "paint", "abstract", "creative"],
    ),
    (
        ImagePromptStyle::Natural,
        &["nature", "natural", "outdoor", "landscape"],
    ),
];

const CAPTION_TONE_RULES: &[(CaptionTone, &[&str])] = &[
    (
        CaptionTone::Professional,
        &["profession", "business", "corporate"],
    ),
    (CaptionTone::Inspirational, &["inspir", "motivat", "uplift"]),
];

const SCRIPT_STYLE_RULES: &[(ScriptStyle, &[&str])] = &[
    (ScriptStyle::Entertaining, &["entertain", "fun", "engaging"]),
    (
        ScriptStyle::Tutorial,
        &["tutorial", "how to", "guide", "step"],
    ),
];

/// 按规则顺序返回第一个包含任一关键片段的分组
fn classify<T: Copy>(text: &str, rules: &[(T, &[&str])], fallback: T) -> T {
    let text_lower = text.to_lowercase();
    rules
        .iter()
        .find(|(_, needles)| needles.iter().any(|needle| text_lower.contains(needle)))
        .map(|(bucket, _)| *bucket)
        .unwrap_or(fallback)
}

pub fn detect_tone(text: &str) -> PostTone {
    classify(text, POST_TONE_RULES, PostTone::Casual)
}

pub fn detect_message_type(text: &str) -> MessageType {
    classify(text, MESSAGE_TYPE_RULES, MessageType::Professional)
}

pub fn detect_image_prompt_style(text: &str) -> ImagePromptStyle {
    classify(text, IMAGE_STYLE_RULES, ImagePromptStyle::Professional)
}

pub fn detect_caption_tone(text: &str) -> CaptionTone {
    classify(text, CAPTION_TONE_RULES, CaptionTone::Casual)
}

pub fn detect_script_style(text: &str) -> ScriptStyle {
    classify(text, SCRIPT_STYLE_RULES, ScriptStyle::Informative)
}
