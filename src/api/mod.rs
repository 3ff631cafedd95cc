// ==========================================
// 保温参考与估算引擎 - API 层
// ==========================================
// 职责: 提供计算器接口,供 CLI 及其他宿主调用
// ==========================================

pub mod calculator_api;
pub mod error;

// 重导出核心类型
pub use calculator_api::{parse_input, InsulationApi, RequirementRow, SavingsRequest, ZoneInput};
pub use error::{ApiError, ApiResult};
