//! Routes 模块
//!
//! 定义 API 路由。

pub mod asset_routes;
pub mod generation_routes;
pub mod session_routes;
