//! 模板数据
//!
//! 模板是静态配置数据而非逻辑：每个语气分组至少有一个变体，
//! 渲染只做 `{topic}` 占位符替换。

use crate::engine::detection::{CaptionTone, ImagePromptStyle, MessageType, PostTone, ScriptStyle};
use crate::models::category::Category;
use crate::models::result::{CaptionResult, ScriptResult};

const PLACEHOLDER: &str = "{topic}";

/// 文本模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTemplate(pub &'static str);

impl TextTemplate {
    pub fn render(&self, topic: &str) -> String {
        self.0.replace(PLACEHOLDER, topic)
    }
}

/// 配文模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptionTemplate {
    pub caption: &'static str,
    pub hashtags: &'static [&'static str],
    pub tone: &'static str,
}

impl CaptionTemplate {
    pub fn render(&self, keywords: &str) -> CaptionResult {
        CaptionResult {
            caption: self.caption.replace(PLACEHOLDER, keywords),
            hashtags: self.hashtags.iter().map(|tag| tag.to_string()).collect(),
            tone: self.tone.to_string(),
        }
    }
}

/// 脚本模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptTemplate {
    pub intro: &'static str,
    pub body: &'static str,
    pub outro: &'static str,
}

impl ScriptTemplate {
    pub fn render(&self, topic: &str) -> ScriptResult {
        ScriptResult {
            intro: self.intro.replace(PLACEHOLDER, topic),
            body: self.body.replace(PLACEHOLDER, topic),
            outro: self.outro.replace(PLACEHOLDER, topic),
            topic: topic.to_string(),
        }
    }
}

pub fn post_templates(tone: PostTone) -> &'static [TextTemplate] {
    match tone {
        PostTone::Motivational => POST_MOTIVATIONAL,
        PostTone::Professional => POST_PROFESSIONAL,
        PostTone::Casual => POST_CASUAL,
        PostTone::Educational => POST_EDUCATIONAL,
    }
}

pub fn message_templates(kind: MessageType) -> &'static [TextTemplate] {
    match kind {
        MessageType::Greeting => MESSAGE_GREETING,
        MessageType::Followup => MESSAGE_FOLLOWUP,
        MessageType::Announcement => MESSAGE_ANNOUNCEMENT,
        MessageType::Professional => MESSAGE_PROFESSIONAL,
    }
}

pub fn image_prompt_templates(style: ImagePromptStyle) -> &'static [TextTemplate] {
    match style {
        ImagePromptStyle::Futuristic => IMAGE_FUTURISTIC,
        ImagePromptStyle::Minimalist => IMAGE_MINIMALIST,
        ImagePromptStyle::Artistic => IMAGE_ARTISTIC,
        ImagePromptStyle::Natural => IMAGE_NATURAL,
        ImagePromptStyle::Professional => IMAGE_PROFESSIONAL,
    }
}

pub fn caption_templates(tone: CaptionTone) -> &'static [CaptionTemplate] {
    match tone {
        CaptionTone::Professional => CAPTION_PROFESSIONAL,
        CaptionTone::Casual => CAPTION_CASUAL,
        CaptionTone::Inspirational => CAPTION_INSPIRATIONAL,
    }
}

pub fn script_templates(style: ScriptStyle) -> &'static [ScriptTemplate] {
    match style {
        ScriptStyle::Informative => SCRIPT_INFORMATIVE,
        ScriptStyle::Entertaining => SCRIPT_ENTERTAINING,
        ScriptStyle::Tutorial => SCRIPT_TUTORIAL,
    }
}

pub fn thumbnail_hooks(category: Category) -> &'static [&'static str] {
    match category {
        Category::Business => &[
            "The Secret to",
            "How to Master",
            "The Ultimate Guide to",
            "Everything You Need About",
            "The Truth About",
            "The Best Way to",
            "Unlock the Power of",
            "Transform Your",
            "Boost Your",
            "Maximize Your",
        ],
        Category::Technology => &[
            "You Won't Believe",
            "The Future of",
            "How to Master",
            "The Complete Guide to",
            "Discover the Power of",
            "Unlock the Secrets of",
            "The Hidden Benefits of",
            "What Nobody Tells You About",
            "Revolutionary",
            "Next-Level",
        ],
        Category::Creative => &[
            "The Art of",
            "Discover the Magic of",
            "Unlock Your",
            "Transform Your",
            "The Creative Guide to",
            "Master the Art of",
            "Unleash Your",
            "The Secret to",
            "Inspiring",
            "Amazing",
        ],
        Category::Lifestyle => &[
            "Why You Should",
            "The Best Way to",
            "Transform Your",
            "The Complete Guide to",
            "Discover the Joy of",
            "Everything About",
            "The Truth About",
            "How to Master",
            "Perfect",
            "Ultimate",
        ],
        Category::Nature => &[
            "Explore the Beauty of",
            "Discover",
            "The Wonders of",
            "Amazing",
            "Breathtaking",
            "The Secret World of",
            "Journey Through",
            "Experience",
        ],
        Category::Education => &[
            "Learn",
            "Master",
            "The Complete Guide to",
            "Everything You Need About",
            "How to",
            "The Ultimate Tutorial on",
            "Step-by-Step Guide to",
            "Beginner's Guide to",
            "Pro Tips for",
            "Essential",
        ],
        Category::Gaming => &[
            "Epic",
            "Ultimate",
            "Pro Guide to",
            "Master",
            "Dominate",
            "Win at",
            "The Best",
            "Insane",
            "Legendary",
            "Top Secrets of",
        ],
        Category::Default => &[
            "You Won't Believe",
            "The Secret to",
            "How to Master",
            "The Ultimate Guide to",
            "Everything You Need About",
            "The Truth About",
            "Why You Should",
            "The Best Way to",
            "Discover the Power of",
            "Unlock the Secrets of",
        ],
    }
}

pub fn thumbnail_styles(category: Category) -> &'static [&'static str] {
    match category {
        Category::Business => &[
            "Professional & Sleek",
            "Minimalist Clean",
            "Elegant & Sophisticated",
            "Modern Gradient",
            "High Contrast",
            "Bold & Vibrant",
            "Corporate Blue",
            "Executive Style",
        ],
        Category::Technology => &[
            "Futuristic Tech",
            "Neon Glow",
            "High Contrast",
            "Modern Gradient",
            "Bold & Vibrant",
            "Dark & Dramatic",
            "Cyber Style",
            "Digital Matrix",
        ],
        Category::Creative => &[
            "Colorful Pop Art",
            "Bold & Vibrant",
            "Bright & Energetic",
            "Retro Vintage",
            "Dynamic Action",
            "Artistic Expression",
            "Rainbow Burst",
            "Abstract Modern",
        ],
        Category::Lifestyle => &[
            "Warm & Inviting",
            "Bright & Energetic",
            "Cool & Calm",
            "Minimalist Clean",
            "Elegant & Sophisticated",
            "Natural & Organic",
            "Cozy Aesthetic",
            "Fresh & Light",
        ],
        Category::Nature => &[
            "Natural & Organic",
            "Earth Tones",
            "Fresh & Green",
            "Serene & Peaceful",
            "Vibrant Nature",
            "Sunset Glow",
            "Ocean Blue",
            "Forest Green",
        ],
        Category::Education => &[
            "Professional & Sleek",
            "Minimalist Clean",
            "High Contrast",
            "Bold & Vibrant",
            "Modern Gradient",
            "Clear & Focused",
            "Academic Style",
            "Smart Design",
        ],
        Category::Gaming => &[
            "Dark & Dramatic",
            "Neon Glow",
            "High Contrast",
            "Bold & Vibrant",
            "Epic Style",
            "Action Packed",
            "Intense Colors",
            "Gamer Aesthetic",
        ],
        Category::Default => &[
            "Bold & Vibrant",
            "Minimalist Clean",
            "Dark & Dramatic",
            "Bright & Energetic",
            "Professional & Sleek",
            "Colorful Pop Art",
            "Elegant & Sophisticated",
            "Modern Gradient",
            "High Contrast",
            "Neon Glow",
        ],
    }
}

// ============================================================================
// POSTS
// ============================================================================

const POST_MOTIVATIONAL: &[TextTemplate] = &[
    TextTemplate(
        "🚀 Ready to level up?\n\n{topic}\n\nSuccess isn't just about what you accomplish—it's about what you inspire others to do. Every challenge is an opportunity in disguise.\n\n💡 Key takeaways:\n• Embrace the journey, not just the destination\n• Learn from setbacks and grow stronger\n• Surround yourself with positive energy\n\nWhat's your biggest win this week? Share below! 👇\n\n#Motivation #Success #Growth #Inspiration",
    ),
    TextTemplate(
        "✨ Transform Your Mindset\n\n{topic}\n\nThe difference between where you are and where you want to be is the action you take today. Don't wait for the perfect moment—create it.\n\n🎯 Remember:\n• Small steps lead to big changes\n• Your potential is limitless\n• Believe in your journey\n\nTag someone who needs to see this! 💪\n\n#Mindset #Transformation #DreamBig #Hustle",
    ),
    TextTemplate(
        "🌟 Your Daily Dose of Inspiration\n\n{topic}\n\nGreat things never come from comfort zones. Push yourself, challenge your limits, and watch yourself grow beyond what you thought possible.\n\n💫 Today's mantra:\n• Progress over perfection\n• Consistency beats intensity\n• You are capable of amazing things\n\nDrop a 🔥 if you're ready to conquer today!\n\n#Inspiration #Motivation #GrowthMindset #SuccessMindset",
    ),
];

const POST_PROFESSIONAL: &[TextTemplate] = &[
    TextTemplate(
        "📊 Industry Insights\n\n{topic}\n\nIn today's rapidly evolving landscape, staying ahead requires continuous adaptation and strategic thinking. Here are three critical considerations:\n\n1️⃣ Innovation drives competitive advantage\n2️⃣ Data-informed decisions yield better outcomes\n3️⃣ Collaboration amplifies individual expertise\n\nThe organizations that thrive are those that embrace change while maintaining their core values.\n\nWhat trends are you seeing in your industry? Let's discuss.\n\n#Business #Leadership #Strategy #Innovation",
    ),
    TextTemplate(
        "💼 Professional Perspective\n\n{topic}\n\nNavigating today's business environment demands both agility and foresight. Success comes from balancing immediate execution with long-term vision.\n\n🎯 Key focus areas:\n• Strategic planning and execution\n• Building high-performing teams\n• Leveraging technology for growth\n• Maintaining competitive edge\n\nHow is your organization adapting to change? I'd love to hear your insights.\n\n#BusinessStrategy #Leadership #ProfessionalDevelopment #Innovation",
    ),
    TextTemplate(
        "🚀 Driving Business Excellence\n\n{topic}\n\nThe future belongs to organizations that can anticipate change and act decisively. Excellence isn't a destination—it's a continuous journey of improvement and innovation.\n\n📈 Essential elements:\n• Clear vision and mission alignment\n• Empowered and engaged teams\n• Customer-centric approach\n• Sustainable growth strategies\n\nWhat's your approach to driving excellence? Share your thoughts below.\n\n#BusinessExcellence #CorporateStrategy #Leadership #Growth",
    ),
];

const POST_CASUAL: &[TextTemplate] = &[
    TextTemplate(
        "Hey everyone! 👋\n\n{topic}\n\nJust wanted to share some thoughts on this. It's been on my mind lately and I think it's worth talking about.\n\nHere's what I've learned:\n✨ Keep it simple\n✨ Stay authentic\n✨ Have fun with it\n\nLife's too short to overthink everything, right? Sometimes the best approach is just to dive in and see what happens.\n\nWhat do you think? Drop your thoughts in the comments! 💬\n\n#JustSharing #Thoughts #Community",
    ),
    TextTemplate(
        "So here's the thing... 🤔\n\n{topic}\n\nI've been thinking about this a lot lately, and honestly, it's pretty interesting when you really dig into it.\n\n💭 Quick thoughts:\n• It's all about perspective\n• Everyone's experience is different\n• There's no one-size-fits-all answer\n\nAnyone else feel the same way? Let me know! 👇\n\n#RealTalk #Thoughts #Community #Authentic",
    ),
    TextTemplate(
        "Random thought of the day 💡\n\n{topic}\n\nYou know what? Sometimes the simplest things make the biggest difference. Just wanted to put this out there and see what you all think.\n\n🌈 My take:\n• Keep it real\n• Stay curious\n• Enjoy the process\n\nWhat's your hot take on this? Comment below! 🙌\n\n#Thoughts #Community #KeepItReal #DailyVibes",
    ),
];

const POST_EDUCATIONAL: &[TextTemplate] = &[
    TextTemplate(
        "📚 Learning Moment\n\n{topic}\n\nLet's break this down into digestible insights:\n\n🔍 The Context:\nUnderstanding the fundamentals is crucial for mastery. This concept has far-reaching implications across multiple domains.\n\n💡 Key Principles:\n• Foundation before complexity\n• Practice reinforces understanding\n• Application solidifies knowledge\n\n🎯 Practical Application:\nStart small, build consistently, and measure your progress. The compound effect of daily learning is remarkable.\n\nWhat's one thing you learned recently? Share your knowledge!\n\n#Learning #Education #Knowledge #Growth",
    ),
    TextTemplate(
        "🎓 Knowledge Share\n\n{topic}\n\nEducation is a journey, not a destination. Today, let's explore this concept together and uncover valuable insights.\n\n📖 Core Concepts:\n• Understanding the why behind the what\n• Connecting theory to practice\n• Building on existing knowledge\n• Continuous improvement mindset\n\n✅ Action Steps:\nTake what you learn and apply it immediately. Real learning happens through doing.\n\nWhat's your learning goal this week? Let's support each other!\n\n#Education #Learning #PersonalGrowth #KnowledgeSharing",
    ),
    TextTemplate(
        "💡 Educational Insight\n\n{topic}\n\nDeep understanding comes from asking the right questions and seeking meaningful answers. Let's explore this together.\n\n🔑 Essential Elements:\n• Critical thinking over memorization\n• Practical application of concepts\n• Learning from both success and failure\n• Sharing knowledge with others\n\n🌱 Growth Mindset:\nEvery expert was once a beginner. Embrace the learning process and celebrate progress.\n\nWhat's the most valuable lesson you've learned recently?\n\n#LifelongLearning #Education #Growth #Knowledge",
    ),
];

// ============================================================================
// MESSAGES
// ============================================================================

const MESSAGE_GREETING: &[TextTemplate] = &[
    TextTemplate(
        "Subject: Greetings and Introduction\n\nDear [Recipient],\n\nI hope this message finds you well. {topic}\n\nI wanted to reach out and introduce myself. I'm excited about the possibility of connecting and exploring potential opportunities for collaboration.\n\nI'd love to learn more about your work and share some insights from my own experience. Would you be open to a brief conversation in the coming weeks?\n\nLooking forward to hearing from you.\n\nWarm regards,\n[Your Name]",
    ),
    TextTemplate(
        "Subject: Hello and Introduction\n\nHi [Recipient],\n\nI hope you're having a great day! {topic}\n\nI came across your profile and was impressed by your work. I believe there could be some interesting synergies between what we're both doing.\n\nWould you be interested in connecting for a quick chat? I'd love to learn more about your projects and share some ideas.\n\nBest wishes,\n[Your Name]",
    ),
];

const MESSAGE_FOLLOWUP: &[TextTemplate] = &[
    TextTemplate(
        "Subject: Following Up on Our Recent Discussion\n\nHi [Recipient],\n\nThank you for taking the time to speak with me recently. {topic}\n\nI've been reflecting on our conversation and wanted to follow up on a few key points we discussed:\n\n• [Point 1]: I believe there's significant potential here\n• [Point 2]: This aligns well with our mutual goals\n• [Point 3]: Next steps could include...\n\nWould you be available for a quick call next week to explore these ideas further? I'm flexible with timing and happy to work around your schedule.\n\nBest regards,\n[Your Name]",
    ),
    TextTemplate(
        "Subject: Quick Follow-Up\n\nHello [Recipient],\n\nI wanted to circle back on our recent conversation. {topic}\n\nA few thoughts have been percolating since we last spoke:\n\n→ The opportunity we discussed has even more potential than I initially thought\n→ I've identified some additional resources that could be valuable\n→ I'd love to move forward with the next steps we outlined\n\nDo you have 15 minutes this week for a quick sync? Let me know what works for you.\n\nThanks,\n[Your Name]",
    ),
];

const MESSAGE_ANNOUNCEMENT: &[TextTemplate] = &[
    TextTemplate(
        "Subject: Important Update\n\nDear Team,\n\n{topic}\n\nI'm pleased to share some exciting news with you all. After careful consideration and planning, we're moving forward with an initiative that will benefit everyone involved.\n\nKey highlights:\n✓ Enhanced collaboration opportunities\n✓ Streamlined processes\n✓ Improved outcomes for all stakeholders\n\nWe'll be sharing more details in the coming days. In the meantime, please don't hesitate to reach out if you have any questions or concerns.\n\nThank you for your continued dedication and support.\n\nBest,\n[Your Name]",
    ),
    TextTemplate(
        "Subject: Exciting News to Share\n\nHello Everyone,\n\n{topic}\n\nI'm thrilled to announce some developments that I believe will make a positive impact on our work together.\n\n🎯 What's happening:\n• New opportunities for growth and development\n• Enhanced tools and resources\n• Stronger support systems\n• Improved communication channels\n\nMore information will follow soon. I'm excited about what's ahead and grateful for your ongoing commitment.\n\nWarm regards,\n[Your Name]",
    ),
];

const MESSAGE_PROFESSIONAL: &[TextTemplate] = &[
    TextTemplate(
        "Subject: Professional Inquiry\n\nDear [Recipient],\n\n{topic}\n\nI am writing to express my interest in discussing potential collaboration opportunities. Your expertise in this field is well-recognized, and I believe there may be mutual benefits to exploring how we might work together.\n\nSpecifically, I am interested in:\n\n1. Understanding your current initiatives\n2. Exploring areas of alignment\n3. Discussing potential next steps\n\nWould you be available for a brief introductory call? I'm happy to accommodate your schedule and can be flexible with timing.\n\nI look forward to the possibility of connecting.\n\nSincerely,\n[Your Name]\n[Your Title]\n[Contact Information]",
    ),
    TextTemplate(
        "Subject: Collaboration Opportunity\n\nDear [Recipient],\n\n{topic}\n\nI'm reaching out to explore potential partnership opportunities that could be mutually beneficial. Your work in this space has caught my attention, and I see several areas where our efforts might align.\n\nI'd appreciate the opportunity to:\n• Share insights about my current projects\n• Learn more about your initiatives\n• Identify potential synergies\n• Discuss ways we might collaborate\n\nWould you have time for a brief conversation in the coming weeks? I'm flexible and happy to work around your availability.\n\nThank you for considering this.\n\nBest regards,\n[Your Name]",
    ),
];

// ============================================================================
// IMAGE PROMPTS
// ============================================================================

const IMAGE_FUTURISTIC: &[TextTemplate] = &[
    TextTemplate(
        "A stunning futuristic scene featuring {topic}, rendered in ultra-high definition with dramatic lighting. Cyberpunk aesthetic with neon accents, holographic elements, and sleek metallic surfaces. Advanced technology seamlessly integrated into the environment. Cinematic composition with depth of field, volumetric lighting, and rich color grading. 8K resolution, photorealistic detail.",
    ),
    TextTemplate(
        "Sci-fi inspired visualization of {topic} in a dystopian future setting. Neon-lit cityscape with flying vehicles, holographic advertisements, and advanced robotics. Dark atmosphere with vibrant color pops. Ray-traced reflections, atmospheric fog, and dramatic shadows. Ultra-detailed, cinematic quality, 8K resolution.",
    ),
    TextTemplate(
        "Futuristic concept art depicting {topic} with cutting-edge technology. Sleek chrome surfaces, glowing blue accents, and transparent holographic displays. Advanced AI interfaces and quantum computing elements. Professional CGI quality with perfect lighting and composition. Photorealistic rendering, 8K detail.",
    ),
];

const IMAGE_MINIMALIST: &[TextTemplate] = &[
    TextTemplate(
        "Minimalist composition showcasing {topic} with clean lines and negative space. Soft, natural lighting with subtle shadows. Muted color palette featuring whites, beiges, and gentle pastels. Simple geometric shapes and uncluttered design. Scandinavian aesthetic with emphasis on functionality and elegance. High-key lighting, serene atmosphere.",
    ),
    TextTemplate(
        "Ultra-minimalist interpretation of {topic} with maximum negative space. Monochromatic color scheme with single accent color. Clean typography, geometric precision, and perfect balance. Japanese-inspired simplicity meets modern design. Soft diffused lighting, peaceful mood, high-end photography quality.",
    ),
    TextTemplate(
        "Minimalist design featuring {topic} in a zen-like composition. Neutral tones, natural materials, and organic textures. Emphasis on empty space and visual breathing room. Subtle gradients and soft shadows. Contemporary minimalism with timeless appeal. Professional studio lighting, 4K clarity.",
    ),
];

const IMAGE_ARTISTIC: &[TextTemplate] = &[
    TextTemplate(
        "Artistic interpretation of {topic} in the style of contemporary digital art. Bold brushstrokes, vibrant colors, and dynamic composition. Abstract elements blended with realistic details. Expressive use of light and shadow. Inspired by modern impressionism with a touch of surrealism. Rich textures and layered depth.",
    ),
    TextTemplate(
        "Creative artistic rendering of {topic} with painterly effects. Vivid color palette, expressive brushwork, and emotional depth. Mix of abstract and figurative elements. Inspired by post-impressionism and modern art movements. Dramatic lighting, rich textures, gallery-quality finish.",
    ),
    TextTemplate(
        "Abstract artistic vision of {topic} with bold creative choices. Experimental color combinations, dynamic shapes, and fluid forms. Contemporary art style with digital painting techniques. Emotional and evocative composition. Museum-quality artwork with stunning visual impact.",
    ),
];

const IMAGE_NATURAL: &[TextTemplate] = &[
    TextTemplate(
        "Beautiful natural scene featuring {topic} in golden hour lighting. Lush organic elements with rich earth tones and vibrant greens. Soft, warm sunlight filtering through the environment. Photorealistic detail with emphasis on natural textures. Serene and peaceful atmosphere. Professional nature photography style with shallow depth of field.",
    ),
    TextTemplate(
        "Breathtaking nature photography of {topic} during magic hour. Dramatic sky with warm sunset colors. Rich natural details, organic textures, and vibrant flora. Misty atmosphere with rays of light. National Geographic quality, perfect composition, stunning clarity.",
    ),
    TextTemplate(
        "Pristine natural landscape showcasing {topic} in perfect lighting conditions. Crystal clear details, vivid natural colors, and perfect exposure. Morning dew, soft mist, and gentle sunlight. Wildlife photography quality with professional equipment. 8K resolution, award-winning composition.",
    ),
];

const IMAGE_PROFESSIONAL: &[TextTemplate] = &[
    TextTemplate(
        "Professional, high-quality image of {topic} suitable for corporate use. Clean, modern aesthetic with balanced composition. Neutral color palette with strategic accent colors. Sharp focus and excellent lighting. Business-appropriate styling with attention to detail. Studio-quality production values.",
    ),
    TextTemplate(
        "Corporate photography featuring {topic} with professional polish. Clean background, perfect lighting, and sharp focus. Business-appropriate color scheme and composition. High-end commercial photography quality. Suitable for marketing materials and presentations. 4K resolution, flawless execution.",
    ),
    TextTemplate(
        "Premium business imagery of {topic} with executive appeal. Sophisticated styling, professional lighting setup, and perfect composition. Neutral tones with subtle brand colors. Commercial photography quality suitable for annual reports and corporate communications. Impeccable detail and clarity.",
    ),
];

// ============================================================================
// CAPTIONS
// ============================================================================

const CAPTION_PROFESSIONAL: &[CaptionTemplate] = &[
    CaptionTemplate {
        caption: "Excited to share insights on {topic}. In today's dynamic landscape, staying informed and adaptable is key to success. Let's continue pushing boundaries and creating meaningful impact together. 💼✨",
        hashtags: &[
            "#Professional", "#Business", "#Growth", "#Success", "#Leadership", "#Innovation",
            "#Networking", "#CareerDevelopment",
        ],
        tone: "Professional",
    },
    CaptionTemplate {
        caption: "Reflecting on {topic} and its impact on our industry. Strategic thinking and continuous learning drive excellence. Proud to be part of a community that values innovation and collaboration. 🚀",
        hashtags: &[
            "#BusinessLeadership", "#ProfessionalGrowth", "#Innovation", "#Strategy",
            "#Excellence", "#Networking", "#CareerSuccess", "#Industry",
        ],
        tone: "Professional",
    },
    CaptionTemplate {
        caption: "Diving deep into {topic} today. The intersection of strategy and execution is where real value is created. Grateful for the opportunity to learn and grow with amazing professionals. 💡",
        hashtags: &[
            "#ProfessionalDevelopment", "#BusinessStrategy", "#Leadership", "#Growth",
            "#Innovation", "#Success", "#Networking", "#Excellence",
        ],
        tone: "Professional",
    },
];

const CAPTION_CASUAL: &[CaptionTemplate] = &[
    CaptionTemplate {
        caption: "Just vibing with {topic} today! 🌟 Life's all about finding those little moments that make you smile. Who else is feeling the good energy? Drop a ❤️ if you're with me!",
        hashtags: &[
            "#Vibes", "#GoodEnergy", "#DailyLife", "#Mood", "#Lifestyle", "#Authentic",
            "#RealTalk", "#Community",
        ],
        tone: "Casual",
    },
    CaptionTemplate {
        caption: "{topic} hitting different today 😊 Sometimes you just gotta appreciate the simple things, you know? Living my best life one moment at a time. What's making you happy today? 💫",
        hashtags: &[
            "#GoodVibes", "#DailyMood", "#LifeStyle", "#Authentic", "#RealLife", "#Community",
            "#Blessed", "#Grateful",
        ],
        tone: "Casual",
    },
    CaptionTemplate {
        caption: "Can we talk about {topic} for a sec? 🤔 This is exactly what I needed today. Keeping it real and staying positive. Tag someone who gets it! ✨",
        hashtags: &[
            "#KeepItReal", "#Vibes", "#DailyLife", "#Mood", "#Authentic", "#Community",
            "#PositiveEnergy", "#Life",
        ],
        tone: "Casual",
    },
];

const CAPTION_INSPIRATIONAL: &[CaptionTemplate] = &[
    CaptionTemplate {
        caption: "{topic} reminds us that every journey begins with a single step. 🚀 Embrace the challenges, celebrate the victories, and never stop believing in your potential. Your story matters. Keep shining! ✨",
        hashtags: &[
            "#Inspiration", "#Motivation", "#BelieveInYourself", "#DreamBig", "#PositiveVibes",
            "#Mindset", "#Goals", "#YouGotThis",
        ],
        tone: "Inspirational",
    },
    CaptionTemplate {
        caption: "Let {topic} be your reminder that greatness lives within you. 💫 Every setback is a setup for a comeback. Stay focused, stay hungry, and watch yourself transform. You're capable of amazing things! 🌟",
        hashtags: &[
            "#Motivation", "#Inspiration", "#Mindset", "#Success", "#DreamBig",
            "#BelieveInYourself", "#PositiveVibes", "#Growth",
        ],
        tone: "Inspirational",
    },
    CaptionTemplate {
        caption: "{topic} is proof that when you align your actions with your dreams, magic happens. ✨ Don't wait for permission to be great. Start today, start now. Your future self will thank you! 🚀",
        hashtags: &[
            "#Inspiration", "#Motivation", "#DreamBig", "#Success", "#Mindset", "#Goals",
            "#BelieveInYourself", "#Transformation",
        ],
        tone: "Inspirational",
    },
];

// ============================================================================
// SCRIPTS
// ============================================================================

const SCRIPT_INFORMATIVE: &[ScriptTemplate] = &[
    ScriptTemplate {
        intro: "Hey everyone, welcome back to the channel! Today, we're diving deep into {topic}. This is a topic that's been getting a lot of attention lately, and for good reason. By the end of this video, you'll have a comprehensive understanding of the key concepts and practical applications. So let's get started!",
        body: "Let's break this down into three main points. First, we need to understand the fundamentals of {topic}. This forms the foundation of everything we'll discuss. Second, let's explore the real-world applications and why this matters to you. The impact is more significant than you might think. Third, we'll look at best practices and actionable steps you can take right away. These strategies have been proven effective by industry experts and everyday practitioners alike.",
        outro: "And that's a wrap on {topic}! I hope you found this information valuable and actionable. If you enjoyed this video, don't forget to hit that like button and subscribe for more content like this. Drop a comment below with your thoughts or questions—I love hearing from you! Thanks for watching, and I'll see you in the next one!",
    },
    ScriptTemplate {
        intro: "Welcome back! In today's video, we're exploring {topic} in detail. Whether you're new to this or looking to deepen your understanding, this video has something for everyone. I've done extensive research to bring you the most accurate and useful information. Let's jump right in!",
        body: "Now, let's examine {topic} from multiple angles. The first thing you need to know is the core concept and why it matters. Understanding this foundation is crucial. Next, we'll look at how this applies in different scenarios and contexts. You'll see that the principles remain consistent even as the applications vary. Finally, I'll share some expert insights and data-backed recommendations that you can implement immediately.",
        outro: "That wraps up our deep dive into {topic}. I hope this gave you valuable insights and practical knowledge you can use. If you found this helpful, please like and subscribe—it really helps the channel grow. Have questions or want me to cover something specific? Leave a comment below! See you in the next video!",
    },
];

const SCRIPT_ENTERTAINING: &[ScriptTemplate] = &[
    ScriptTemplate {
        intro: "What's up, awesome people! You clicked on this video about {topic}, and trust me, you're in for a treat! We're about to have some fun while learning something cool. Buckle up, because this is going to be entertaining AND educational. Let's jump right in!",
        body: "Okay, so here's the deal with {topic}—it's actually way more interesting than it sounds! Let me tell you a quick story that'll blow your mind. [Insert engaging anecdote]. But wait, there's more! The really cool part is how this applies to everyday life. You've probably experienced this without even realizing it. And here's the kicker—you can actually use this knowledge to impress your friends or make your life easier. How awesome is that?",
        outro: "Alright, that's all for today's adventure into {topic}! If you had as much fun as I did, smash that like button and subscribe so you don't miss out on more awesome content. Got any wild stories or experiences related to this? Share them in the comments—I read every single one! Until next time, stay awesome!",
    },
    ScriptTemplate {
        intro: "Hey hey hey! Welcome to the most entertaining video about {topic} you'll watch today! I promise this won't be boring—we're going to make learning fun. Grab your snacks, get comfortable, and let's have a blast exploring this together!",
        body: "So {topic}... sounds serious, right? WRONG! This is actually super fascinating when you look at it the right way. Picture this: [engaging scenario]. Mind = blown, right? But it gets even better. The way this connects to your daily life is honestly hilarious when you think about it. I've got some stories that'll make you laugh and learn at the same time. Trust me, you'll never look at this the same way again!",
        outro: "And scene! That's our fun-filled journey through {topic}. If you enjoyed this rollercoaster of knowledge and entertainment, hit that like button with the force of a thousand suns! Subscribe for more content that makes learning actually enjoyable. Drop your funniest related story in the comments—let's keep the good vibes going! Catch you in the next one!",
    },
];

const SCRIPT_TUTORIAL: &[ScriptTemplate] = &[
    ScriptTemplate {
        intro: "Hello and welcome! In this tutorial, we're going to learn about {topic} step by step. Whether you're a complete beginner or looking to refine your skills, this guide will walk you through everything you need to know. I'll be showing you exactly how to do this, so feel free to follow along. Let's begin!",
        body: "Step one: Let's start with the basics of {topic}. Make sure you have everything ready before we proceed. Step two: Now we're going to implement the core concepts. Pay close attention to this part, as it's crucial for success. I'll demonstrate each step clearly. Step three: Here's where we put it all together. This is the most exciting part where you'll see real results. Don't worry if it takes a few tries—practice makes perfect!",
        outro: "Congratulations! You've just learned {topic} from start to finish. Remember, the key is practice and patience. If you found this tutorial helpful, please like and subscribe for more step-by-step guides. Have questions or need clarification on any step? Leave a comment below, and I'll help you out. Happy learning, and see you in the next tutorial!",
    },
    ScriptTemplate {
        intro: "Welcome to this comprehensive tutorial on {topic}! Today, I'm going to show you exactly how to master this skill from scratch. No prior experience needed—just follow along with me. By the end of this video, you'll be confident in your abilities. Let's get started with step one!",
        body: "First, we'll cover the essential setup for {topic}. This foundation is critical, so don't skip this part. Next, I'll walk you through the main process, breaking it down into manageable chunks. Watch carefully as I demonstrate each technique. Then, we'll tackle some common challenges you might face and how to overcome them. I'll show you pro tips that will save you time and frustration.",
        outro: "Excellent work! You've now completed the full tutorial on {topic}. Practice these steps regularly to build your confidence and skill. If this tutorial was helpful, please give it a thumbs up and subscribe for more detailed guides. Got stuck on something? Comment below with your question and I'll personally help you troubleshoot. Keep practicing, and I'll see you in the next tutorial!",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bucket_is_non_empty() {
        for tone in [
            PostTone::Motivational,
            PostTone::Professional,
            PostTone::Casual,
            PostTone::Educational,
        ] {
            assert!(!post_templates(tone).is_empty());
        }
        for kind in [
            MessageType::Greeting,
            MessageType::Followup,
            MessageType::Announcement,
            MessageType::Professional,
        ] {
            assert!(!message_templates(kind).is_empty());
        }
        for style in [
            ImagePromptStyle::Futuristic,
            ImagePromptStyle::Minimalist,
            ImagePromptStyle::Artistic,
            ImagePromptStyle::Natural,
            ImagePromptStyle::Professional,
        ] {
            assert!(!image_prompt_templates(style).is_empty());
        }
        for tone in [
            CaptionTone::Professional,
            CaptionTone::Casual,
            CaptionTone::Inspirational,
        ] {
            assert!(!caption_templates(tone).is_empty());
        }
        for style in [
            ScriptStyle::Informative,
            ScriptStyle::Entertaining,
            ScriptStyle::Tutorial,
        ] {
            assert!(!script_templates(style).is_empty());
        }
        for category in Category::PRIORITY.into_iter().chain([Category::Default]) {
            assert!(!thumbnail_hooks(category).is_empty());
            assert!(!thumbnail_styles(category).is_empty());
        }
    }

    #[test]
    fn test_every_template_uses_placeholder() {
        let text_buckets = [
            POST_MOTIVATIONAL,
            POST_PROFESSIONAL,
            POST_CASUAL,
            POST_EDUCATIONAL,
            MESSAGE_GREETING,
            MESSAGE_FOLLOWUP,
            MESSAGE_ANNOUNCEMENT,
            MESSAGE_PROFESSIONAL,
            IMAGE_FUTURISTIC,
            IMAGE_MINIMALIST,
            IMAGE_ARTISTIC,
            IMAGE_NATURAL,
            IMAGE_PROFESSIONAL,
        ];
        for template in text_buckets.iter().flat_map(|bucket| bucket.iter()) {
            assert!(template.0.contains(PLACEHOLDER));
        }
    }

    #[test]
    fn test_render_does_not_expand_placeholder_in_topic() {
        let rendered = TextTemplate("[{topic}]").render("{topic}");
        assert_eq!(rendered, "[{topic}]");
    }

    #[test]
    fn test_script_render_keeps_topic() {
        let script = SCRIPT_TUTORIAL[0].render("Sourdough");
        assert_eq!(script.topic, "Sourdough");
        assert!(script.intro.contains("Sourdough"));
        assert!(script.body.contains("Sourdough"));
        assert!(script.outro.contains("Sourdough"));
    }

    #[test]
    fn test_posts_carry_hashtags() {
        for bucket in [POST_MOTIVATIONAL, POST_PROFESSIONAL, POST_CASUAL, POST_EDUCATIONAL] {
            assert!(bucket.iter().all(|t| t.0.contains('#')));
        }
    }
}
