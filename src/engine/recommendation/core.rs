use super::rules::{budget_score, is_candidate, r_value_target, RuleContext, RULES};
use crate::config::CalculatorConfig;
use crate::domain::material::Material;
use crate::domain::quiz::QuizAnswers;
use crate::domain::types::InstallMethod;
use crate::engine::cost::{estimate_material, CostResult};
use crate::i18n::t;
use crate::reference::ReferenceData;
use serde::Serialize;
use tracing::instrument;

/// 主推荐最多展示的理由条数
pub const MAX_REASONS: usize = 3;

/// 备选方案条数
pub const MAX_ALTERNATIVES: usize = 3;

/// 推荐理由
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReason {
    pub code: &'static str,
    pub message: String,
}

/// 候选材料评分
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMaterial {
    pub material_id: String,
    pub material_name: String,
    pub short_name: String,
    pub score: f64,
    /// 命中的全部理由(按评估顺序)
    pub reasons: Vec<ScoreReason>,
}

/// 问卷推荐结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub answers: QuizAnswers,
    pub primary: ScoredMaterial,
    pub alternatives: Vec<ScoredMaterial>,
    /// 主推荐理由(最多 3 条)
    pub reasons: Vec<ScoreReason>,
    /// 该气候区与部位的推荐 R 值
    pub r_value_target: u32,
    /// 主推荐按默认项目面积的估价
    pub cost_estimate: Option<CostResult>,
}

// ==========================================
// RecommendationEngine - 材料推荐引擎
// ==========================================
pub struct RecommendationEngine<'a> {
    materials: &'a [Material],
    project_sq_ft: f64,
}

impl<'a> RecommendationEngine<'a> {
    pub fn new(data: &'a ReferenceData, config: &CalculatorConfig) -> Self {
        Self::with_materials(data.materials(), config.quiz_project_sq_ft)
    }

    pub fn with_materials(materials: &'a [Material], project_sq_ft: f64) -> Self {
        Self {
            materials,
            project_sq_ft,
        }
    }

    /// 对全部候选材料评分,按分数降序(同分保持目录顺序)
    pub fn score_candidates(&self, answers: &QuizAnswers) -> Vec<ScoredMaterial> {
        let mut scored: Vec<ScoredMaterial> = self
            .materials
            .iter()
            .filter(|m| is_candidate(answers, m))
            .map(|m| score_material(answers, m))
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored
    }

    /// 生成推荐;过滤后无候选返回 None
    #[instrument(skip(self, answers), fields(
        location = %answers.location,
        zone = %answers.zone,
        budget = %answers.budget,
        install = %answers.install
    ))]
    pub fn recommend(&self, answers: &QuizAnswers) -> Option<Recommendation> {
        let mut ranked = self.score_candidates(answers).into_iter();
        let Some(primary) = ranked.next() else {
            tracing::debug!("无匹配材料");
            return None;
        };
        let alternatives: Vec<ScoredMaterial> = ranked.take(MAX_ALTERNATIVES).collect();

        let reasons = primary.reasons.iter().take(MAX_REASONS).cloned().collect();
        let cost_estimate = self
            .materials
            .iter()
            .find(|m| m.id == primary.material_id)
            .and_then(|m| self.estimate_project(answers, m));

        tracing::debug!(primary = %primary.material_id, score = primary.score, "推荐完成");

        Some(Recommendation {
            answers: *answers,
            r_value_target: r_value_target(answers.zone, answers.location),
            primary,
            alternatives,
            reasons,
            cost_estimate,
        })
    }

    /// DIY 且有 DIY 定价时按 DIY 估价,否则按专业施工
    fn estimate_project(&self, answers: &QuizAnswers, material: &Material) -> Option<CostResult> {
        let location = answers
            .location
            .install_locations()
            .iter()
            .copied()
            .find(|loc| material.applies_to(*loc))?;
        let method = if answers.is_diy() && material.cost_per_sq_ft_diy.is_some() {
            InstallMethod::Diy
        } else {
            InstallMethod::Pro
        };
        estimate_material(material, self.project_sq_ft, location, method)
    }
}

/// 单个材料评分: 预算基础分 + 规则表加减分
pub fn score_material(answers: &QuizAnswers, material: &Material) -> ScoredMaterial {
    let ctx = RuleContext::new(answers, material);
    let mut score = budget_score(&ctx);
    let mut reasons = Vec::new();

    for rule in RULES {
        if !(rule.predicate)(&ctx) {
            continue;
        }
        score += rule.weight;
        if rule.explains {
            reasons.push(ScoreReason {
                code: rule.code,
                message: t(&rule.reason_key()),
            });
        }
    }

    ScoredMaterial {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        short_name: material.short_name.clone(),
        score,
        reasons,
    }
}
