use serde::{Deserialize, Serialize};
use std::fmt;

/// 内容语义类别
///
/// 每次检测恰好得到一个类别，没有命中任何关键词时为 [`Category::Default`]。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Business,
    Technology,
    Creative,
    Lifestyle,
    Nature,
    Education,
    Gaming,
    #[default]
    Default,
}

impl Category {
    /// 检测优先级顺序（不含 Default）
    pub const PRIORITY: [Category; 7] = [
        Category::Business,
        Category::Technology,
        Category::Creative,
        Category::Lifestyle,
        Category::Nature,
        Category::Education,
        Category::Gaming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Technology => "technology",
            Category::Creative => "creative",
            Category::Lifestyle => "lifestyle",
            Category::Nature => "nature",
            Category::Education => "education",
            Category::Gaming => "gaming",
            Category::Default => "default",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "business" => Ok(Category::Business),
            "technology" => Ok(Category::Technology),
            "creative" => Ok(Category::Creative),
            "lifestyle" => Ok(Category::Lifestyle),
            "nature" => Ok(Category::Nature),
            "education" => Ok(Category::Education),
            "gaming" => Ok(Category::Gaming),
            "default" => Ok(Category::Default),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip_names() {
        for category in Category::PRIORITY {
            assert_eq!(Category::try_from(category.as_str()), Ok(category));
        }
        assert!(Category::try_from("cooking").is_err());
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Technology).unwrap();
        assert_eq!(json, "\"technology\"");
    }
}
