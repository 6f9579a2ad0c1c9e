//! 静态记录目录
//!
//! 视频、头像、缩略图三类目录共享 [`MatchableRecord`] 形状，
//! 由关键词打分器检索。目录在进程内只读，无需加锁。

use serde::Serialize;

use crate::models::category::Category;

/// 可按关键词匹配的记录
///
/// 约束：`keywords` 非空；匹配时大小写不敏感。
pub trait MatchableRecord {
    type Keyword: AsRef<str>;

    fn keywords(&self) -> &[Self::Keyword];
}

/// 视频目录记录
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub keywords: &'static [&'static str],
    pub video_url: &'static str,
    pub thumbnail: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

/// 头像目录记录
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvatarRecord {
    pub keywords: &'static [&'static str],
    pub image: &'static str,
    pub style: &'static str,
}

/// 缩略图目录记录
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ThumbnailRecord {
    pub keywords: &'static [&'static str],
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: Category,
}

impl MatchableRecord for VideoRecord {
    type Keyword = &'static str;

    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

impl MatchableRecord for AvatarRecord {
    type Keyword = &'static str;

    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

impl MatchableRecord for ThumbnailRecord {
    type Keyword = &'static str;

    fn keywords(&self) -> &[&'static str] {
        self.keywords
    }
}

// ============================================================================
// VIDEO CATALOG
// ============================================================================

pub static VIDEO_CATALOG: &[VideoRecord] = &[
    VideoRecord {
        keywords: &[
            "business", "corporate", "professional", "office", "meeting", "team", "success",
            "growth", "pitch", "presentation", "conference", "executive", "leadership",
            "strategy", "enterprise", "company", "work", "career", "sales", "marketing",
            "finance", "management", "entrepreneur", "startup", "investment", "profit",
            "revenue", "commerce", "trade", "industry", "economy",
        ],
        video_url: "/assets/generated/video-business.mp4",
        thumbnail: "/assets/generated/video-thumb-business.png",
        title: "Business Success Story",
        description: "Professional business content highlighting teamwork and corporate achievement.",
        category: Category::Business,
    },
    VideoRecord {
        keywords: &[
            "tech", "technology", "software", "coding", "programming", "digital", "innovation",
            "startup", "demo", "app", "platform", "system", "computer", "data", "ai",
            "artificial", "intelligence", "machine", "learning", "automation", "cyber", "cloud",
            "internet", "web", "mobile", "device", "gadget", "electronic", "robot", "algorithm",
            "code", "developer", "engineer", "hardware", "network", "database", "api",
        ],
        video_url: "/assets/generated/video-tech.mp4",
        thumbnail: "/assets/generated/video-thumb-tech.png",
        title: "Tech Innovation Showcase",
        description: "A dynamic video featuring cutting-edge technology and digital innovation themes.",
        category: Category::Technology,
    },
    VideoRecord {
        keywords: &[
            "nature", "environment", "environmental", "green", "eco", "eco-friendly",
            "sustainable", "sustainability", "earth", "planet", "wildlife", "natural", "organic",
            "renewable", "conservation", "climate", "ecology", "biodiversity", "forest", "ocean",
            "clean", "energy", "outdoor", "landscape", "tree", "plant", "water", "sky",
            "mountain", "river", "garden", "park", "animal", "bird", "wilderness", "ecosystem",
        ],
        video_url: "/assets/generated/video-nature.mp4",
        thumbnail: "/assets/generated/video-thumb-nature.png",
        title: "Nature & Sustainability",
        description: "Beautiful natural landscapes showcasing environmental themes and sustainability.",
        category: Category::Nature,
    },
    VideoRecord {
        keywords: &[
            "lifestyle", "health", "fitness", "wellness", "yoga", "meditation", "balance",
            "living", "vlog", "daily", "routine", "personal", "life", "wellbeing",
            "mindfulness", "exercise", "nutrition", "self-care", "hobby", "leisure", "relax",
            "home", "family", "travel", "food", "cooking", "recipe", "workout", "gym", "sport",
            "healthy", "diet", "beauty", "fashion",
        ],
        video_url: "/assets/generated/video-lifestyle.mp4",
        thumbnail: "/assets/generated/video-thumb-lifestyle.png",
        title: "Lifestyle & Wellness",
        description: "Inspiring lifestyle content focused on health, wellness, and balanced living.",
        category: Category::Lifestyle,
    },
    VideoRecord {
        keywords: &[
            "creative", "art", "design", "music", "artist", "painting", "craft", "imagination",
            "ad", "advertisement", "advertising", "marketing", "campaign", "visual", "graphic",
            "illustration", "animation", "artistic", "expression", "color", "style",
            "aesthetic", "beauty", "fashion", "photo", "photography", "video", "film", "media",
            "content", "brand", "inspire", "inspiration", "culture", "entertainment",
        ],
        video_url: "/assets/generated/video-creative.mp4",
        thumbnail: "/assets/generated/video-thumb-creative.png",
        title: "Creative Expression",
        description: "Artistic and creative content showcasing imagination and artistic expression.",
        category: Category::Creative,
    },
];

/// 视频无匹配时的标题
pub const NO_MATCH_VIDEO_TITLE: &str = "No Matching Video Found";

/// 视频无匹配时的提示
pub const NO_MATCH_VIDEO_DESCRIPTION: &str = "We couldn't find a video matching your prompt. Please try keywords like: business, tech, nature, lifestyle, or creative.";

// ============================================================================
// AVATAR CATALOG
// ============================================================================

pub static AVATAR_CATALOG: &[AvatarRecord] = &[
    AvatarRecord {
        keywords: &["professional", "business", "corporate", "formal", "suit", "male", "man"],
        image: "/assets/generated/avatar-male-professional.png",
        style: "Professional Male",
    },
    AvatarRecord {
        keywords: &["professional", "business", "corporate", "formal", "suit", "female", "woman"],
        image: "/assets/generated/avatar-female-professional.png",
        style: "Professional Female",
    },
    AvatarRecord {
        keywords: &["casual", "friendly", "relaxed", "informal", "male", "man"],
        image: "/assets/generated/avatar-male-casual.png",
        style: "Casual Male",
    },
    AvatarRecord {
        keywords: &["casual", "friendly", "relaxed", "informal", "female", "woman"],
        image: "/assets/generated/avatar-female-casual.png",
        style: "Casual Female",
    },
    AvatarRecord {
        keywords: &["creative", "artist", "artistic", "colorful", "unique", "expressive"],
        image: "/assets/generated/avatar-artist-creative.png",
        style: "Creative Artist",
    },
    AvatarRecord {
        keywords: &["tech", "modern", "futuristic", "digital", "innovative", "contemporary"],
        image: "/assets/generated/avatar-tech-modern.png",
        style: "Tech Modern",
    },
];

// ============================================================================
// THUMBNAIL CATALOG
// ============================================================================

pub static THUMBNAIL_CATALOG: &[ThumbnailRecord] = &[
    ThumbnailRecord {
        keywords: &[
            "business", "professional", "corporate", "work", "office", "meeting",
            "presentation", "finance", "marketing", "sales", "strategy", "leadership",
            "management", "entrepreneur", "startup", "investment", "commerce", "trade",
            "industry", "economy",
        ],
        image: "/assets/generated/sample-thumbnail-2.png",
        title: "Professional Business Thumbnail",
        description: "Clean, professional thumbnail design perfect for business and corporate content.",
        category: Category::Business,
    },
    ThumbnailRecord {
        keywords: &[
            "creative", "art", "design", "colorful", "vibrant", "artistic", "visual", "graphic",
            "illustration", "style", "aesthetic", "beauty", "fashion", "inspiration", "culture",
            "entertainment", "music", "painting", "craft", "imagination",
        ],
        image: "/assets/generated/sample-thumbnail-3.png",
        title: "Creative Content Thumbnail",
        description: "Artistic thumbnail with creative elements and engaging visuals for creative content.",
        category: Category::Creative,
    },
    ThumbnailRecord {
        keywords: &[
            "tech", "technology", "digital", "innovation", "software", "coding", "programming",
            "app", "web", "mobile", "data", "ai", "computer", "internet", "cyber", "developer",
            "engineer", "hardware", "network", "database", "api", "algorithm", "machine",
            "learning",
        ],
        image: "/assets/generated/sample-thumbnail-1.png",
        title: "Dynamic Tech Thumbnail",
        description: "Eye-catching thumbnail with bold text and vibrant colors for tech content.",
        category: Category::Technology,
    },
    ThumbnailRecord {
        keywords: &[
            "lifestyle", "health", "fitness", "wellness", "yoga", "food", "cooking", "travel",
            "vlog", "daily", "personal", "home", "family", "hobby", "leisure", "relax",
            "meditation", "exercise", "nutrition", "self-care", "workout", "gym", "sport",
            "healthy", "diet",
        ],
        image: "/assets/generated/sample-thumbnail-1.png",
        title: "Lifestyle Content Thumbnail",
        description: "Engaging thumbnail design for lifestyle, wellness, and personal content.",
        category: Category::Lifestyle,
    },
    ThumbnailRecord {
        keywords: &[
            "nature", "environment", "green", "eco", "sustainable", "outdoor", "landscape",
            "wildlife", "natural", "earth", "planet", "conservation", "climate", "ecology",
            "forest", "ocean", "tree", "plant", "water", "mountain", "river", "garden",
            "animal", "bird",
        ],
        image: "/assets/generated/sample-thumbnail-3.png",
        title: "Nature & Environment Thumbnail",
        description: "Beautiful thumbnail showcasing natural themes and environmental content.",
        category: Category::Nature,
    },
    ThumbnailRecord {
        keywords: &[
            "education", "learning", "tutorial", "teaching", "course", "lesson", "training",
            "study", "school", "university", "knowledge", "skill", "guide", "how-to",
            "instruction", "academic", "student", "teacher", "professor", "lecture",
        ],
        image: "/assets/generated/sample-thumbnail-2.png",
        title: "Educational Content Thumbnail",
        description: "Professional thumbnail design for educational and tutorial content.",
        category: Category::Education,
    },
    ThumbnailRecord {
        keywords: &[
            "gaming", "game", "gamer", "esports", "stream", "streaming", "play", "player",
            "console", "pc", "video-game", "multiplayer", "online", "competitive", "tournament",
            "twitch", "youtube-gaming",
        ],
        image: "/assets/generated/sample-thumbnail-1.png",
        title: "Gaming Content Thumbnail",
        description: "Dynamic thumbnail design for gaming and streaming content.",
        category: Category::Gaming,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_record_has_keywords() {
        assert!(VIDEO_CATALOG.iter().all(|r| !r.keywords().is_empty()));
        assert!(AVATAR_CATALOG.iter().all(|r| !r.keywords().is_empty()));
        assert!(THUMBNAIL_CATALOG.iter().all(|r| !r.keywords().is_empty()));
    }

    #[test]
    fn test_keywords_are_lowercase() {
        let all = VIDEO_CATALOG
            .iter()
            .flat_map(|r| r.keywords.iter())
            .chain(AVATAR_CATALOG.iter().flat_map(|r| r.keywords.iter()))
            .chain(THUMBNAIL_CATALOG.iter().flat_map(|r| r.keywords.iter()));
        for keyword in all {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn test_thumbnail_catalog_covers_every_category() {
        for category in Category::PRIORITY {
            assert!(THUMBNAIL_CATALOG.iter().any(|r| r.category == category));
        }
    }
}
