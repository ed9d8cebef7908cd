// ==========================================
// 成衣产线跟踪系统 - 产线表头
// ==========================================
// 职责: 一次产线运行（line-run）的配置输入
// 生命周期: 表单填写时创建；保存后不可变，再编辑视为新的本地状态
// ==========================================

use crate::domain::number::NumberLike;
use serde::{Deserialize, Serialize};

// ==========================================
// HeaderInput - 产线表头
// ==========================================
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInput {
    // ===== 运行标识 =====
    #[serde(default)]
    pub line: String, // 产线号
    #[serde(default)]
    pub date: String, // 运行日期 (YYYY-MM-DD)
    #[serde(default)]
    pub style: String, // 款式

    // ===== 目标计算输入 =====
    #[serde(default)]
    pub operators: NumberLike, // 操作工人数
    #[serde(default)]
    pub working_hours: NumberLike, // 工作小时数
    #[serde(default)]
    pub sam: NumberLike, // 标准工时 (分钟/件)
    #[serde(default)]
    pub efficiency: NumberLike, // 效率 (0,1]
}

impl HeaderInput {
    /// 构造仅含计算字段的表头
    pub fn new(
        operators: impl Into<NumberLike>,
        working_hours: impl Into<NumberLike>,
        sam: impl Into<NumberLike>,
        efficiency: impl Into<NumberLike>,
    ) -> Self {
        Self {
            operators: operators.into(),
            working_hours: working_hours.into(),
            sam: sam.into(),
            efficiency: efficiency.into(),
            ..Default::default()
        }
    }

    /// 设置运行标识
    pub fn with_run(mut self, line: &str, date: &str, style: &str) -> Self {
        self.line = line.to_string();
        self.date = date.to_string();
        self.style = style.to_string();
        self
    }

    /// 产线号与日期是否已填写（保存前置条件）
    pub fn has_run_identity(&self) -> bool {
        !self.line.trim().is_empty() && !self.date.trim().is_empty()
    }
}
