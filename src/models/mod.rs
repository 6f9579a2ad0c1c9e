//! 数据模型模块
//!
//! 所有实体均为内存中的不可变数据，引擎不做任何持久化。

pub mod catalog;
pub mod category;
pub mod result;
pub mod session;

pub use catalog::{
    AVATAR_CATALOG, AvatarRecord, MatchableRecord, THUMBNAIL_CATALOG, ThumbnailRecord,
    VIDEO_CATALOG, VideoRecord,
};
pub use category::Category;
pub use result::{
    AvatarResult, CaptionResult, GenerationResult, ImageResult, Partial, Progress,
    ProgressCallback, ScriptResult, TextResult, ThumbnailResult, ToolKind, VideoResult,
};
pub use session::{GenerationSession, GenerationStatus, RunHandle, SessionError};
