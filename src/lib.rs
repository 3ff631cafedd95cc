// ==========================================
// 保温参考与估算引擎 - 核心库
// ==========================================
// 气候区 / IECC R 值要求 / 材料成本 / 厚度 / 节能回报 / 材料推荐
// 系统定位: 纯计算库,参考数据编译期嵌入,运行期只读
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "en");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 参考数据层 - 静态表加载与校验
pub mod reference;

// 引擎层 - 计算规则
pub mod engine;

// 配置层 - 计算器假设参数
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 输入校验与调用入口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    BudgetPriority, InstallLocation, InstallMethod, Material, MaterialForm, ProjectType,
    QuizAnswers, QuizLocation, SavingsLocation, ValueRange, ZoneNumber, ZoneRecord,
};

// 参考数据
pub use reference::{ReferenceData, ReferenceDataError};

// 引擎
pub use engine::{
    CostEstimator, QuizSession, RecommendationEngine, SavingsProjector, ThicknessSolver,
    ZoneResolver,
};

// 配置
pub use config::{CalculatorConfig, ConfigManager};

// API
pub use api::{ApiError, ApiResult, InsulationApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Insulation Advisor";
