//! 主题与 URL 上下文提取

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// 提取结果为空时使用的主题
pub const FALLBACK_TOPIC: &str = "Exploring new ideas and opportunities";

static LEADING_INSTRUCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:write|create|generate|compose|make|draft)\s+(?:(?:a|an|the)\s+)?")
        .expect("instruction pattern is a fixed literal")
});

static CONTENT_CONNECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:^|\s+)(?:post|message|email|content|text|video)(?:\s+(?:about|on|regarding))?(?:\s+|$)",
    )
        .expect("connector pattern is a fixed literal")
});

static LEADING_CONNECTOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:about|on|regarding)\s+").expect("connector pattern is a fixed literal")
});

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern is a fixed literal"));

/// 从原始输入中提取主题
///
/// 去掉开头的指令动词和冠词（"write a"、"create the" ...）以及
/// "post about" 之类的连接短语，首字母大写。结果为空时返回 [`FALLBACK_TOPIC`]。
pub fn extract_topic(raw_input: &str) -> String {
    let without_verb = LEADING_INSTRUCTION.replace(raw_input.trim(), "");
    let without_connector = CONTENT_CONNECTOR.replace(&without_verb, " ");
    let trimmed = without_connector.trim();
    let cleaned = LEADING_CONNECTOR.replace(trimmed, "");
    let cleaned = cleaned.trim();

    if cleaned.is_empty() {
        return FALLBACK_TOPIC.to_string();
    }

    capitalize_first(cleaned)
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 输入中是否包含 http(s) URL
pub fn is_url(input: &str) -> bool {
    URL_PATTERN.is_match(input)
}

/// 提取用于类别检测和目录匹配的上下文
///
/// 包含 URL 时返回 `"<去掉 www. 的主机名> <路径>"`（小写），
/// URL 无法解析或不包含 URL 时返回整个输入的小写形式。
pub fn extract_url_context(input: &str) -> String {
    let Some(found) = URL_PATTERN.find(input) else {
        return input.to_lowercase();
    };

    match Url::parse(found.as_str()) {
        Ok(url) => {
            let host = url.host_str().unwrap_or_default().replacen("www.", "", 1);
            format!("{} {}", host, url.path()).to_lowercase()
        }
        Err(_) => input.to_lowercase(),
    }
}
