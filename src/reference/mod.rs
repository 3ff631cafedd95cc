// ==========================================
// 保温参考与估算引擎 - 参考数据层
// ==========================================
// 职责: 气候区表、IECC 要求表、材料目录、ZIP 前缀表、州表
// 红线: 启动时加载一次,运行期不可变
// ==========================================

pub mod error;
pub mod tables;
pub mod validation;

pub use error::ReferenceDataError;
pub use tables::{embedded, ReferenceData, ReferenceSources};
pub use validation::{catalog_invariant_violations, energy_star_violations};
