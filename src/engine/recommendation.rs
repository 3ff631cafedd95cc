// ==========================================
// 保温参考与估算引擎 - 材料推荐引擎
// ==========================================
// 输入: 问卷五项答案(部位/项目类型/气候区/预算/安装方式)
// 输出: 主推荐 + 最多 3 个备选 + 最多 3 条理由
// 红线: 过滤后无候选时返回 None,由调用方展示"无匹配"
// ==========================================

mod core;
pub mod quiz;
pub mod rules;

#[cfg(test)]
mod tests;

pub use core::{
    score_material, Recommendation, RecommendationEngine, ScoreReason, ScoredMaterial,
    MAX_ALTERNATIVES, MAX_REASONS,
};
pub use quiz::{QuizAnswer, QuizError, QuizSession, QuizStep};
pub use rules::{r_value_target, ScoringRule, RULES};
