//! Handlers 模块
//!
//! HTTP 请求处理程序。

pub mod asset_handler;
pub mod generation_handler;
pub mod session_handler;

pub use asset_handler::*;
pub use generation_handler::*;
pub use session_handler::*;

use crate::api::app_state::AppState;
use crate::error::AppError;

/// 输入长度上限由 API 层校验，引擎本身不限制
pub(crate) fn ensure_input_within_limit(state: &AppState, input: &str) -> Result<(), AppError> {
    let limit = state.generation_config().max_input_chars;
    let length = input.chars().count();
    if length > limit {
        return Err(AppError::Validation(format!(
            "Input is too long: {} characters (limit {})",
            length, limit
        )));
    }
    Ok(())
}
