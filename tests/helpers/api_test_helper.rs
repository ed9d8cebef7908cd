// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用环境与断言
// ==========================================

use std::sync::Arc;

use garment_line_tracker::api::ApiError;
use garment_line_tracker::app::AppState;
use garment_line_tracker::config::PlannerConfig;
use garment_line_tracker::domain::{HeaderInput, OperationRow, Role, Session};
use garment_line_tracker::gateway::InMemoryGateway;
use garment_line_tracker::logging;

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 内存网关 + 默认配置；保留网关具体类型以便模拟下线与检查存储
pub struct ApiTestEnv {
    pub state: AppState,
    pub gateway: Arc<InMemoryGateway>,
}

impl ApiTestEnv {
    pub fn new() -> Self {
        Self::with_config(PlannerConfig::default())
    }

    pub fn with_config(config: PlannerConfig) -> Self {
        logging::init_test();
        let gateway = Arc::new(InMemoryGateway::new());
        let state = AppState::with_config(config, gateway.clone());
        Self { state, gateway }
    }

    /// 保存运行并写入每小时录入
    pub async fn seed_run(&self, header: &HeaderInput, rows: &[OperationRow]) -> String {
        let session = planner();
        let run_id = self
            .state
            .planner_api
            .save_run(&session, header)
            .await
            .expect("保存运行失败");
        self.state
            .planner_api
            .save_hourly(&session, &run_id, rows)
            .await
            .expect("保存每小时录入失败");
        run_id
    }
}

// ==========================================
// 会话
// ==========================================

pub fn planner() -> Session {
    Session::new("u-planner", "planner", Role::Planner)
}

pub fn engineer() -> Session {
    Session::new("u-engineer", "engineer", Role::Engineer)
}

pub fn supervisor() -> Session {
    Session::new("u-supervisor", "supervisor", Role::Supervisor)
}

// ==========================================
// 错误断言
// ==========================================

pub fn assert_permission_denied(result: Result<impl std::fmt::Debug, ApiError>) {
    match result {
        Err(ApiError::PermissionDenied { .. }) => {}
        Ok(val) => panic!("预期PermissionDenied错误，但操作成功: {:?}", val),
        Err(e) => panic!("预期PermissionDenied错误，但得到: {:?}", e),
    }
}

pub fn assert_insufficient_input(result: Result<impl std::fmt::Debug, ApiError>) {
    match result {
        Err(ApiError::InsufficientInput(_)) => {}
        Ok(val) => panic!("预期InsufficientInput错误，但操作成功: {:?}", val),
        Err(e) => panic!("预期InsufficientInput错误，但得到: {:?}", e),
    }
}

pub fn assert_invalid_input(result: Result<impl std::fmt::Debug, ApiError>) {
    match result {
        Err(ApiError::InvalidInput(_)) => {}
        Ok(val) => panic!("预期InvalidInput错误，但操作成功: {:?}", val),
        Err(e) => panic!("预期InvalidInput错误，但得到: {:?}", e),
    }
}

pub fn assert_not_found(result: Result<impl std::fmt::Debug, ApiError>) {
    match result {
        Err(ApiError::NotFound(_)) => {}
        Ok(val) => panic!("预期NotFound错误，但操作成功: {:?}", val),
        Err(e) => panic!("预期NotFound错误，但得到: {:?}", e),
    }
}
