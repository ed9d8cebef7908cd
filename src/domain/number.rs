// ==========================================
// 成衣产线跟踪系统 - 数值型输入
// ==========================================
// 职责: 承载表单/接口中"像数字"的原始值（数字、文本、缺失）
// 红线: 不做任何换算，换算统一走 engine::numeric::safe_num
// ==========================================

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

// ==========================================
// NumberLike - 原始数值
// ==========================================
// JSON 映射: 数字 → Number, 字符串 → Text, 布尔 → Flag, null/缺失 → Missing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberLike {
    Number(f64),
    Flag(bool),
    Text(String),
    #[default]
    Missing,
}

impl NumberLike {
    /// 是否为空白输入（缺失或空白文本）
    pub fn is_blank(&self) -> bool {
        match self {
            NumberLike::Missing => true,
            NumberLike::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<f64> for NumberLike {
    fn from(v: f64) -> Self {
        NumberLike::Number(v)
    }
}

impl From<i32> for NumberLike {
    fn from(v: i32) -> Self {
        NumberLike::Number(f64::from(v))
    }
}

impl From<u32> for NumberLike {
    fn from(v: u32) -> Self {
        NumberLike::Number(f64::from(v))
    }
}

impl From<&str> for NumberLike {
    fn from(v: &str) -> Self {
        NumberLike::Text(v.to_string())
    }
}

impl From<String> for NumberLike {
    fn from(v: String) -> Self {
        NumberLike::Text(v)
    }
}

impl<T: Into<NumberLike>> From<Option<T>> for NumberLike {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(NumberLike::Missing)
    }
}

// ==========================================
// 标识符宽松反序列化
// ==========================================
// 后端可能返回数字或字符串形式的 ID，统一转为 String

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
    Null,
    // 对象/数组/布尔等无法作为 ID 的值
    #[allow(dead_code)]
    Other(IgnoredAny),
}

impl RawId {
    fn into_string(self) -> Option<String> {
        match self {
            RawId::Text(s) => {
                let s = s.trim().to_string();
                if s.is_empty() {
                    None
                } else {
                    Some(s)
                }
            }
            RawId::Int(i) => Some(i.to_string()),
            RawId::Float(f) if f.is_finite() => Some(f.to_string()),
            RawId::Float(_) | RawId::Null | RawId::Other(_) => None,
        }
    }
}

/// 必填 ID：缺失时为空字符串
pub fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(deserializer)?
        .into_string()
        .unwrap_or_default())
}

/// 可选 ID
pub fn flexible_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(RawId::deserialize(deserializer)?.into_string())
}
