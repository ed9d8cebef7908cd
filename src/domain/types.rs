// ==========================================
// 成衣产线跟踪系统 - 领域类型定义
// ==========================================
// 职责: 告警等级、告警类型、产能缺口状态、用户角色
// 序列化格式: SCREAMING_SNAKE_CASE (与后端接口一致)
// ==========================================

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ==========================================
// 告警严重程度 (Severity)
// ==========================================
// 顺序: High < Medium < Low (排序时 High 排在最前)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    High,   // 高
    Medium, // 中
    Low,    // 低
}

impl Severity {
    /// 排序权重（数值越小越靠前）
    pub fn rank(&self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::High => write!(f, "HIGH"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::Low => write!(f, "LOW"),
        }
    }
}

// ==========================================
// 告警类型 (Alert Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    CriticalVariance, // 严重欠产 (> 50%)
    Variance,         // 欠产 (> 10%)
    Efficiency,       // 效率偏低
    NoProduction,     // 零产出
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertType::CriticalVariance => write!(f, "CRITICAL_VARIANCE"),
            AlertType::Variance => write!(f, "VARIANCE"),
            AlertType::Efficiency => write!(f, "EFFICIENCY"),
            AlertType::NoProduction => write!(f, "NO_PRODUCTION"),
        }
    }
}

// ==========================================
// 产能缺口状态 (Gap Status)
// ==========================================
// 仅用于展示；分配算法本身不使用容差
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GapStatus {
    Bottleneck, // 低于每小时目标
    Surplus,    // 高于每小时目标
    Balanced,   // |gap| <= 容差
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GapStatus::Bottleneck => write!(f, "BOTTLENECK"),
            GapStatus::Surplus => write!(f, "SURPLUS"),
            GapStatus::Balanced => write!(f, "BALANCED"),
        }
    }
}

// ==========================================
// 用户角色 (Role)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Planner,    // 计划员
    Engineer,   // 工程师（线平衡）
    Supervisor, // 主管（驾驶舱）
    LineLeader, // 线长
}

impl Role {
    /// 宽松解析角色字符串
    ///
    /// 忽略大小写，去掉空格、下划线、连字符后匹配；
    /// 无法识别的角色返回 None。
    pub fn parse(raw: &str) -> Option<Self> {
        let norm: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();

        match norm.as_str() {
            "planner" => Some(Role::Planner),
            "engineer" => Some(Role::Engineer),
            "supervisor" => Some(Role::Supervisor),
            "lineleader" => Some(Role::LineLeader),
            _ => None,
        }
    }
}

// 登录返回的角色字符串写法不一，反序列化统一走宽松解析
impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Role::parse(&raw).ok_or_else(|| {
            de::Error::unknown_variant(&raw, &["planner", "engineer", "supervisor", "line_leader"])
        })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Planner => write!(f, "planner"),
            Role::Engineer => write!(f, "engineer"),
            Role::Supervisor => write!(f, "supervisor"),
            Role::LineLeader => write!(f, "line_leader"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_role_parse_lenient() {
        assert_eq!(Role::parse("Supervisor"), Some(Role::Supervisor));
        assert_eq!(Role::parse(" line_leader "), Some(Role::LineLeader));
        assert_eq!(Role::parse("Line-Leader"), Some(Role::LineLeader));
        assert_eq!(Role::parse("ENGINEER"), Some(Role::Engineer));
        assert_eq!(Role::parse("admin"), None);
    }

    #[test]
    fn test_role_deserialize_lenient() {
        let role: Role = serde_json::from_str("\"Line Leader\"").unwrap();
        assert_eq!(role, Role::LineLeader);
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"line_leader\"");
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_alert_type_serde() {
        let json = serde_json::to_string(&AlertType::CriticalVariance).unwrap();
        assert_eq!(json, "\"CRITICAL_VARIANCE\"");
    }
}
