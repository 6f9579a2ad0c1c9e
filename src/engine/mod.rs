//! 内容匹配与模板选择引擎

pub mod detection;
pub mod emitter;
pub mod generator;
pub mod matcher;
pub mod picker;
pub mod templates;
pub mod topic;

pub use detection::{
    CaptionTone, ImagePromptStyle, MessageType, PostTone, ScriptStyle, detect_caption_tone,
    detect_category, detect_image_prompt_style, detect_message_type, detect_script_style,
    detect_tone,
};
pub use emitter::{Pacing, emit_percent_steps, emit_progressively, sleep_or_cancel};
pub use generator::ContentGenerator;
pub use matcher::{find_best_match, score_record};
pub use picker::{RandomSource, SequenceRandom, ThreadRandom, pick_random, pick_seeded, seed_hash};
pub use topic::{FALLBACK_TOPIC, extract_topic, extract_url_context, is_url};
