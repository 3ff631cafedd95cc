// ==========================================
// 保温参考与估算引擎 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据加载逻辑,不含引擎逻辑
// ==========================================

pub mod material;
pub mod quiz;
pub mod types;
pub mod zone;

// 重导出核心类型
pub use material::Material;
pub use quiz::{BudgetPriority, ProjectType, QuizAnswers, QuizLocation};
pub use types::{
    InstallLocation, InstallMethod, MaterialForm, PrimaryConcern, RequirementLocation,
    SavingsLocation, ValueRange, ZoneNumber,
};
pub use zone::{
    ClimateZone, DegreeDayRange, EnergyStarRecommended, RValueRequirements, StateZones,
    ZoneCharacteristics, ZoneRecord,
};
