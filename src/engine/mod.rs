// ==========================================
// 保温参考与估算引擎 - 引擎层
// ==========================================
// 职责: 气候区解析、要求串格式化、成本/厚度/节能测算、材料推荐
// 红线: 纯函数,只读参考数据,同输入同输出
// ==========================================

pub mod cost;
pub mod recommendation;
pub mod requirement;
pub mod savings;
pub mod thickness;
pub mod zone_resolver;

// 重导出核心引擎
pub use cost::{CostEstimator, CostResult};
pub use recommendation::{
    QuizAnswer, QuizError, QuizSession, QuizStep, Recommendation, RecommendationEngine,
    ScoreReason, ScoredMaterial,
};
pub use requirement::{format_location_label, format_requirement, parse_requirement, ParsedRequirement};
pub use savings::{SavingsInputs, SavingsMilestone, SavingsProjector, SavingsResult, YearlySavings, PRESETS};
pub use thickness::{FramingCavity, MaterialSelection, ThicknessResult, ThicknessSolver};
pub use zone_resolver::{is_valid_zip, normalize_zip, ZoneResolver};
