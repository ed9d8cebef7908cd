// ==========================================
// 成衣产线跟踪系统 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{BalancingApi, DashboardApi, PlannerApi};
use crate::config::{ConfigError, ConfigManager, PlannerConfig, PlannerConfigReader};
use crate::gateway::{InMemoryGateway, ProductionGateway};
use crate::i18n;

/// 应用状态
///
/// 所有 API 共享同一个后端网关与一份配置
pub struct AppState {
    /// 生效的计划参数
    pub config: PlannerConfig,

    /// 后端网关
    pub gateway: Arc<dyn ProductionGateway>,

    /// 计划录入API
    pub planner_api: Arc<PlannerApi>,

    /// 线平衡API
    pub balancing_api: Arc<BalancingApi>,

    /// 看板API
    pub dashboard_api: Arc<DashboardApi>,
}

impl AppState {
    /// 由配置读取器与网关创建应用状态
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 读取班次布局、默认效率、告警阈值、平衡容差、语言
    /// 2. 设置界面语言
    /// 3. 创建所有API实例
    pub async fn new(
        reader: &dyn PlannerConfigReader,
        gateway: Arc<dyn ProductionGateway>,
    ) -> Result<Self, ConfigError> {
        let config = PlannerConfig {
            shift: reader.get_shift_layout().await?,
            default_efficiency: reader.get_default_efficiency().await?,
            alert_thresholds: reader.get_alert_thresholds().await?,
            balanced_tolerance: reader.get_balanced_tolerance().await?,
            locale: reader.get_locale().await?,
        };
        config.validate()?;

        tracing::info!(
            locale = %config.locale,
            start_hour = config.shift.start_hour,
            end_hour = config.shift.end_hour,
            "初始化AppState"
        );

        Ok(Self::with_config(config, gateway))
    }

    /// 使用已解析的配置创建（不再校验）
    pub fn with_config(config: PlannerConfig, gateway: Arc<dyn ProductionGateway>) -> Self {
        i18n::set_locale(&config.locale);

        let planner_api = Arc::new(PlannerApi::new(
            gateway.clone(),
            config.shift,
            config.default_efficiency,
        ));
        let balancing_api = Arc::new(BalancingApi::new(gateway.clone(), config.balanced_tolerance));
        let dashboard_api = Arc::new(DashboardApi::new(gateway.clone(), config.alert_thresholds));

        Self {
            config,
            gateway,
            planner_api,
            balancing_api,
            dashboard_api,
        }
    }

    /// 默认配置 + 内存网关（演示与测试）
    pub fn in_memory() -> Self {
        Self::with_config(PlannerConfig::default(), Arc::new(InMemoryGateway::new()))
    }

    /// 从文件/环境变量加载配置，使用内存网关
    pub async fn load_in_memory() -> Result<Self, ConfigError> {
        let manager = ConfigManager::load()?;
        Self::new(&manager, Arc::new(InMemoryGateway::new())).await
    }
}
