// ==========================================
// 成衣产线跟踪系统 - 班次时段
// ==========================================
// 不变量: 时段按时间先后排列，互不重叠；
//         所有时段 hours 之和 == 请求的工作小时数（可用跨度内）
// ==========================================

use serde::{Deserialize, Serialize};

/// 班次时段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSlot {
    pub id: String,    // 稳定、按时间有序的标识 (如 "H09")
    pub label: String, // 展示用区间文本 (如 "9-10", "17-17:36")
    pub hours: f64,    // 时段时长 (小时, >= 0)
}

impl ShiftSlot {
    /// 是否为不足一小时的时段
    pub fn is_partial(&self) -> bool {
        self.hours < 1.0
    }
}

// ==========================================
// ShiftLayout - 班次布局
// ==========================================
// 候选时段: start_hour <= h < end_hour 且 h != lunch_hour，每段 60 分钟；
// last_slot_minutes = Some(m) 时，end_hour 再开一段 m 分钟（班次结束于 end_hour:m）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftLayout {
    pub start_hour: u32,
    pub end_hour: u32,
    pub lunch_hour: Option<u32>,
    pub last_slot_minutes: Option<u32>,
}

impl Default for ShiftLayout {
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
            lunch_hour: Some(13),
            last_slot_minutes: Some(36),
        }
    }
}

impl ShiftLayout {
    /// 候选时段列表: (起始整点, 容量小时数)，按时间排序
    pub fn blocks(&self) -> Vec<(u32, f64)> {
        if self.start_hour > self.end_hour {
            return Vec::new();
        }

        let mut blocks: Vec<(u32, f64)> = (self.start_hour..self.end_hour)
            .filter(|h| Some(*h) != self.lunch_hour)
            .map(|h| (h, 1.0))
            .collect();

        if let Some(minutes) = self.last_slot_minutes {
            let minutes = minutes.min(60);
            if minutes > 0 && Some(self.end_hour) != self.lunch_hour {
                blocks.push((self.end_hour, f64::from(minutes) / 60.0));
            }
        }

        blocks
    }

    /// 可用工作小时数（不含午休）
    pub fn available_hours(&self) -> f64 {
        self.blocks().iter().map(|(_, capacity)| capacity).sum()
    }
}
