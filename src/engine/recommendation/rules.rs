// ==========================================
// 推荐评分规则表
// ==========================================
// 每条规则: (编码, 条件, 加减分, 推荐理由)
// 按表内顺序逐条评估;理由顺序即评估顺序
// ==========================================

use crate::domain::material::Material;
use crate::domain::quiz::{BudgetPriority, ProjectType, QuizAnswers, QuizLocation};
use crate::domain::types::{MaterialForm, ZoneNumber};

/// 单个候选材料的评分上下文
pub struct RuleContext<'a> {
    pub answers: &'a QuizAnswers,
    pub material: &'a Material,
    /// R 值/英寸中点,反射型为 0
    pub avg_r: f64,
    /// 所选安装方式下单价中点
    pub avg_cost: f64,
}

impl<'a> RuleContext<'a> {
    pub fn new(answers: &'a QuizAnswers, material: &'a Material) -> Self {
        let avg_r = material.avg_r_per_inch().unwrap_or(0.0);
        let unit_cost = match material.cost_per_sq_ft_diy {
            Some(diy) if answers.is_diy() => diy,
            _ => material.cost_per_sq_ft_installed,
        };
        Self {
            answers,
            material,
            avg_r,
            avg_cost: unit_cost.avg(),
        }
    }

    fn zone(&self) -> u8 {
        self.answers.zone.get()
    }

    fn id_is(&self, id: &str) -> bool {
        self.material.id == id
    }
}

/// 预算优先级基础分
pub fn budget_score(ctx: &RuleContext<'_>) -> f64 {
    match ctx.answers.budget {
        BudgetPriority::Cheapest => (5.0 - ctx.avg_cost) * 30.0,
        BudgetPriority::BestPerformance => ctx.avg_r * 10.0,
        BudgetPriority::Balanced => ctx.avg_r * 5.0 + (5.0 - ctx.avg_cost) * 15.0,
    }
}

/// 评分规则
pub struct ScoringRule {
    pub code: &'static str,
    pub predicate: fn(&RuleContext<'_>) -> bool,
    pub weight: f64,
    /// 命中时给出理由(quiz.reason.<code>)
    pub explains: bool,
}

impl ScoringRule {
    pub fn reason_key(&self) -> String {
        format!("quiz.reason.{}", self.code)
    }
}

// ===== 条件 =====

fn cheapest_and_affordable(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.budget == BudgetPriority::Cheapest && ctx.avg_cost < 1.0
}

fn performance_and_dense(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.budget == BudgetPriority::BestPerformance && ctx.avg_r >= 5.0
}

fn diy_priced(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.is_diy() && ctx.material.diy_friendly && ctx.material.cost_per_sq_ft_diy.is_some()
}

fn attic_blown(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.location == QuizLocation::Attic && ctx.material.form == MaterialForm::Blown
}

fn attic_blown_retrofit(ctx: &RuleContext<'_>) -> bool {
    attic_blown(ctx) && ctx.answers.project_type == ProjectType::Retrofit
}

fn attic_radiant_hot(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.location == QuizLocation::Attic && ctx.zone() <= 3 && ctx.id_is("radiant-barrier")
}

fn below_grade_moisture(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.location.is_below_grade()
        && (ctx.id_is("xps") || ctx.id_is("closed-cell-spray-foam"))
}

fn new_wall_batt(ctx: &RuleContext<'_>) -> bool {
    ctx.answers.location == QuizLocation::Walls
        && ctx.answers.project_type == ProjectType::NewConstruction
        && ctx.material.form == MaterialForm::Batt
}

fn cold_closed_cell(ctx: &RuleContext<'_>) -> bool {
    ctx.zone() >= 5 && ctx.id_is("closed-cell-spray-foam")
}

fn cold_xps(ctx: &RuleContext<'_>) -> bool {
    ctx.zone() >= 5 && ctx.id_is("xps")
}

fn cold_polyiso(ctx: &RuleContext<'_>) -> bool {
    ctx.zone() >= 5 && ctx.id_is("polyiso")
}

fn warm_polyiso(ctx: &RuleContext<'_>) -> bool {
    ctx.zone() <= 3 && ctx.id_is("polyiso")
}

/// 规则表(有序)
pub const RULES: &[ScoringRule] = &[
    // 预算项理由,分值已计入基础分
    ScoringRule {
        code: "most_affordable",
        predicate: cheapest_and_affordable,
        weight: 0.0,
        explains: true,
    },
    ScoringRule {
        code: "excellent_r_per_inch",
        predicate: performance_and_dense,
        weight: 0.0,
        explains: true,
    },
    ScoringRule {
        code: "diy_savings",
        predicate: diy_priced,
        weight: 10.0,
        explains: true,
    },
    ScoringRule {
        code: "attic_blown",
        predicate: attic_blown,
        weight: 15.0,
        explains: false,
    },
    ScoringRule {
        code: "attic_retrofit_blown",
        predicate: attic_blown_retrofit,
        weight: 0.0,
        explains: true,
    },
    ScoringRule {
        code: "radiant_hot_climate",
        predicate: attic_radiant_hot,
        weight: 20.0,
        explains: true,
    },
    ScoringRule {
        code: "below_grade_moisture",
        predicate: below_grade_moisture,
        weight: 15.0,
        explains: true,
    },
    ScoringRule {
        code: "new_construction_batt",
        predicate: new_wall_batt,
        weight: 10.0,
        explains: true,
    },
    ScoringRule {
        code: "cold_air_sealing",
        predicate: cold_closed_cell,
        weight: 10.0,
        explains: true,
    },
    ScoringRule {
        code: "cold_stable_r",
        predicate: cold_xps,
        weight: 5.0,
        explains: true,
    },
    ScoringRule {
        code: "cold_polyiso_penalty",
        predicate: cold_polyiso,
        weight: -10.0,
        explains: false,
    },
    ScoringRule {
        code: "warm_polyiso",
        predicate: warm_polyiso,
        weight: 5.0,
        explains: true,
    },
];

/// 候选过滤: 部位适用、DIY 可行、既有墙体改造的施工形态
pub fn is_candidate(answers: &QuizAnswers, material: &Material) -> bool {
    if !material.applies_to_any(answers.location.install_locations()) {
        return false;
    }
    if answers.is_diy() && !material.diy_friendly {
        return false;
    }
    if answers.project_type == ProjectType::Retrofit && answers.location == QuizLocation::Walls {
        return match material.form {
            MaterialForm::Blown | MaterialForm::Spray => true,
            MaterialForm::Batt => answers.is_diy(),
            _ => false,
        };
    }
    true
}

/// 气候区 × 问卷部位 的推荐 R 值
pub fn r_value_target(zone: ZoneNumber, location: QuizLocation) -> u32 {
    // [attic, walls, basement, crawl-space, garage]
    const TARGETS: [[u32; 5]; 8] = [
        [30, 13, 0, 0, 13],
        [38, 13, 0, 0, 13],
        [38, 13, 5, 5, 13],
        [49, 13, 10, 10, 13],
        [49, 20, 10, 10, 20],
        [49, 20, 15, 15, 20],
        [60, 21, 15, 15, 21],
        [60, 21, 15, 15, 21],
    ];
    let column = match location {
        QuizLocation::Attic => 0,
        QuizLocation::Walls => 1,
        QuizLocation::Basement => 2,
        QuizLocation::CrawlSpace => 3,
        QuizLocation::Garage => 4,
    };
    TARGETS[zone.index()][column]
}
