//! 逐步输出控制
//!
//! 把已经完整生成的结果按词（或按百分比步）逐步交给调用方，
//! 每次继续之前都检查取消令牌，等待期间与令牌竞争。

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::engine::picker::RandomSource;
use crate::error::{AppError, Result};

/// 逐词输出节奏
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    /// 每个词之后的基础延迟
    pub per_word: Duration,
    /// 额外随机延迟上限（毫秒）
    pub jitter_ms: u64,
}

impl Pacing {
    pub fn new(per_word_ms: u64, jitter_ms: u64) -> Self {
        Self {
            per_word: Duration::from_millis(per_word_ms),
            jitter_ms,
        }
    }

    fn delay(&self, random: &dyn RandomSource) -> Duration {
        if self.jitter_ms == 0 {
            return self.per_word;
        }
        let jitter = (random.next_f64() * self.jitter_ms as f64) as u64;
        self.per_word + Duration::from_millis(jitter)
    }
}

/// 等待指定时间，期间被取消则返回 [`AppError::Cancelled`]
pub async fn sleep_or_cancel(duration: Duration, cancel: &CancellationToken) -> Result<()> {
    if cancel.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    if duration.is_zero() {
        return Ok(());
    }

    tokio::select! {
        _ = cancel.cancelled() => Err(AppError::Cancelled),
        _ = tokio::time::sleep(duration) => Ok(()),
    }
}

/// 按空格逐词输出文本
///
/// 每个词追加到累积串后调用一次 `on_partial(累积串, 百分比)`，然后等待
/// `per_word + random(0..jitter)`。按单个空格切分，因此每个部分结果都是
/// 完整文本的前缀，换行符原样保留。最后一次回调的百分比为 100。
pub async fn emit_progressively<F>(
    full_text: &str,
    pacing: Pacing,
    random: &dyn RandomSource,
    cancel: &CancellationToken,
    mut on_partial: F,
) -> Result<()>
where
    F: FnMut(&str, u8) + Send,
{
    let words: Vec<&str> = full_text.split(' ').collect();
    let total = words.len();
    let mut accumulated = String::with_capacity(full_text.len());

    for (index, word) in words.into_iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        if index > 0 {
            accumulated.push(' ');
        }
        accumulated.push_str(word);

        let percent = ((index + 1) * 100 / total) as u8;
        on_partial(&accumulated, percent);

        sleep_or_cancel(pacing.delay(random), cancel).await?;
    }

    Ok(())
}

/// 按固定步数输出百分比：0, 100/steps, ..., 100，共 `steps + 1` 次
///
/// `steps` 为 0 时只输出一次 100。
pub async fn emit_percent_steps<F>(
    steps: u32,
    step_delay: Duration,
    cancel: &CancellationToken,
    mut on_progress: F,
) -> Result<()>
where
    F: FnMut(u8) + Send,
{
    if steps == 0 {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        on_progress(100);
        return Ok(());
    }

    for step in 0..=steps {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        on_progress((step * 100 / steps) as u8);
        sleep_or_cancel(step_delay, cancel).await?;
    }

    Ok(())
}
