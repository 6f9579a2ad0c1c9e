//! 服务模块

pub mod backend;
pub mod session;

pub use backend::{
    AssetEntry, AssetRegistry, BackendActor, GeneratedImage, GeneratedVideo, TextImagePrompt,
    UnavailableBackend, VideoPrompt,
};
pub use session::{SessionService, SessionServiceImpl, create_session_service};
