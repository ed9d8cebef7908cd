// ==========================================
// 成衣产线跟踪系统 - 效率预设
// ==========================================
// 表头效率下拉框的候选值（按款式复杂度）
// ==========================================

use crate::i18n::t;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EfficiencyPreset {
    pub value: f64,
    pub label_key: &'static str,
}

impl EfficiencyPreset {
    /// 当前语言下的展示文本
    pub fn label(&self) -> String {
        format!("{} ({:.0}%)", t(self.label_key), self.value * 100.0)
    }
}

pub const EFFICIENCY_PRESETS: &[EfficiencyPreset] = &[
    EfficiencyPreset { value: 0.50, label_key: "efficiency.very_complex" },
    EfficiencyPreset { value: 0.55, label_key: "efficiency.complex" },
    EfficiencyPreset { value: 0.60, label_key: "efficiency.medium_complex" },
    EfficiencyPreset { value: 0.65, label_key: "efficiency.medium" },
    EfficiencyPreset { value: 0.70, label_key: "efficiency.standard" },
    EfficiencyPreset { value: 0.75, label_key: "efficiency.simple" },
    EfficiencyPreset { value: 0.80, label_key: "efficiency.very_simple" },
    EfficiencyPreset { value: 0.85, label_key: "efficiency.basic" },
];
