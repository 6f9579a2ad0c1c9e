//! ToolHub - 内容匹配与模板选择引擎
//!
//! 为每个内容生成工具（视频、头像、帖子、消息、图像提示词、配文、缩略图、脚本）
//! 提供关键词匹配、语气检测、模板渲染和逐步输出，并以生成会话的形式对外提供服务。

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod observability;
pub mod services;
