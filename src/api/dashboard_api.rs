// ==========================================
// 成衣产线跟踪系统 - 看板 API
// ==========================================
// 职责: 运行汇总卡片 + 告警列表
// 权限: 仅 Supervisor
// 说明: 告警每次请求重新生成，不持久化
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::api::error::ApiResult;
use crate::api::validator::require_role;
use crate::domain::alert::Alert;
use crate::domain::run::{RunListing, RunRecord};
use crate::domain::session::Session;
use crate::domain::types::{Role, Severity};
use crate::engine::alert::{AlertContext, AlertGenerator, AlertThresholds};
use crate::engine::dashboard::{summarize_run, RunSummary};
use crate::gateway::ProductionGateway;

/// 单次运行的看板数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDashboard {
    pub run: RunRecord,
    pub summary: RunSummary,
    pub alerts: Vec<Alert>,
}

impl RunDashboard {
    /// 指定严重程度的告警数
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.alerts.iter().filter(|a| a.severity == severity).count()
    }
}

// ==========================================
// DashboardApi - 看板 API
// ==========================================
pub struct DashboardApi {
    gateway: Arc<dyn ProductionGateway>,
    generator: AlertGenerator,
}

impl DashboardApi {
    pub fn new(gateway: Arc<dyn ProductionGateway>, thresholds: AlertThresholds) -> Self {
        Self {
            gateway,
            generator: AlertGenerator::new(thresholds),
        }
    }

    /// 运行看板
    #[instrument(skip(self, session), fields(user = %session.username))]
    pub async fn run_dashboard(&self, session: &Session, run_id: &str) -> ApiResult<RunDashboard> {
        require_role(session, Role::Supervisor)?;

        let detail = self.gateway.load_run_detail(run_id).await?;
        let summary = summarize_run(&detail);
        let ctx = AlertContext {
            line: detail.run.line_no.clone(),
            date: Some(detail.run.run_date.clone()).filter(|d| !d.is_empty()),
        };
        let alerts = self.generator.generate(&summary.performances, &ctx);

        info!(
            run_id,
            alert_count = alerts.len(),
            achievement_pct = summary.achievement_pct,
            "看板生成完成"
        );

        Ok(RunDashboard {
            run: detail.run,
            summary,
            alerts,
        })
    }

    /// 按产线号与日期查找运行（取最近保存的一次）
    pub async fn find_run(
        &self,
        session: &Session,
        line: &str,
        date: &str,
    ) -> ApiResult<Option<RunListing>> {
        require_role(session, Role::Supervisor)?;

        let runs = self.gateway.list_runs().await?;
        Ok(runs.into_iter().find(|r| {
            r.line_no.as_deref().map(str::trim) == Some(line.trim()) && r.run_date == date.trim()
        }))
    }

    /// 产线/日期对应运行的看板；无匹配运行时为 None
    pub async fn dashboard_for(
        &self,
        session: &Session,
        line: &str,
        date: &str,
    ) -> ApiResult<Option<RunDashboard>> {
        match self.find_run(session, line, date).await? {
            Some(listing) => Ok(Some(self.run_dashboard(session, &listing.id).await?)),
            None => Ok(None),
        }
    }
}
