//! 选择器
//!
//! 种子选择对同一输入总是返回同一项；随机选择通过可注入的
//! [`RandomSource`] 取值，测试时可替换为固定序列。

use parking_lot::Mutex;
use rand::Rng;
use std::sync::Arc;

/// 随机数来源，返回 [0, 1) 区间的值
pub trait RandomSource: Send + Sync {
    fn next_f64(&self) -> f64;
}

/// 线程本地随机数
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// 循环返回固定序列
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: Mutex<usize>,
}

impl SequenceRandom {
    /// 序列为空时恒返回 0.0；超出 [0, 1) 的值会被夹紧
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: Mutex::new(0),
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandom {
    fn next_f64(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut cursor = self.cursor.lock();
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// 默认随机源
pub fn default_random() -> Arc<dyn RandomSource> {
    Arc::new(ThreadRandom)
}

/// 经典字符串哈希：`hash = hash * 31 + code_unit`，按 32 位有符号整数回绕
///
/// 逐个处理 UTF-16 码元，与浏览器端 `charCodeAt` 的结果一致。
pub fn seed_hash(seed: &str) -> i32 {
    seed.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// 由种子确定性地选择一项；列表为空时返回 `None`
pub fn pick_seeded<'a, T>(options: &'a [T], seed: &str) -> Option<&'a T> {
    if options.is_empty() {
        return None;
    }
    let index = seed_hash(seed).unsigned_abs() as usize % options.len();
    options.get(index)
}

/// 均匀随机选择一项；列表为空时返回 `None`
pub fn pick_random<'a, T>(options: &'a [T], random: &dyn RandomSource) -> Option<&'a T> {
    if options.is_empty() {
        return None;
    }
    let index = (random.next_f64() * options.len() as f64).floor() as usize;
    options.get(index.min(options.len() - 1))
}
