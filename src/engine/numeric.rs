// ==========================================
// 成衣产线跟踪系统 - 数值安全换算
// ==========================================
// 职责: 把任意输入换算为有限数值或回退值
// 红线: 永不 panic；下游所有计算只经此入口取数
// ==========================================

use crate::domain::number::NumberLike;
use serde_json::Value;

// ==========================================
// Trait: NumericInput
// ==========================================
// 实现者只负责"尽力换算"，有限性检查由 safe_num 统一处理
pub trait NumericInput {
    fn to_number(&self) -> Option<f64>;
}

fn parse_text(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

impl NumericInput for f64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumericInput for f32 {
    fn to_number(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl NumericInput for i32 {
    fn to_number(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl NumericInput for u32 {
    fn to_number(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl NumericInput for i64 {
    fn to_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl NumericInput for usize {
    fn to_number(&self) -> Option<f64> {
        Some(*self as f64)
    }
}

impl NumericInput for str {
    fn to_number(&self) -> Option<f64> {
        parse_text(self)
    }
}

impl NumericInput for String {
    fn to_number(&self) -> Option<f64> {
        parse_text(self)
    }
}

impl NumericInput for NumberLike {
    fn to_number(&self) -> Option<f64> {
        match self {
            NumberLike::Number(n) => Some(*n),
            NumberLike::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            NumberLike::Text(s) => parse_text(s),
            NumberLike::Missing => None,
        }
    }
}

impl NumericInput for Value {
    fn to_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => parse_text(s),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_number(&self) -> Option<f64> {
        self.as_ref().and_then(NumericInput::to_number)
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_number(&self) -> Option<f64> {
        (**self).to_number()
    }
}

// ==========================================
// 公共函数
// ==========================================

/// 安全换算为有限数值
///
/// # 参数
/// - `value`: 任意数值型输入（数字、文本、NumberLike、JSON 值、Option）
/// - `fallback`: 换算失败或结果非有限（NaN/±∞/空白/非数字文本）时的回退值
///
/// # 示例
/// ```
/// use garment_line_tracker::engine::numeric::safe_num;
/// assert_eq!(safe_num(" 12.5 ", 0.0), 12.5);
/// assert_eq!(safe_num("abc", 7.0), 7.0);
/// assert_eq!(safe_num(&f64::NAN, 0.0), 0.0);
/// ```
pub fn safe_num<T: NumericInput + ?Sized>(value: &T, fallback: f64) -> f64 {
    match value.to_number() {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// 四舍五入到两位小数（远离零方向）
///
/// 非有限输入返回 0。
pub fn round2(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    (x * 100.0).round() / 100.0
}
