use super::*;
use crate::config::CalculatorConfig;
use crate::domain::material::Material;
use crate::domain::quiz::{BudgetPriority, ProjectType, QuizAnswers, QuizLocation};
use crate::domain::types::{InstallLocation, InstallMethod, MaterialForm, ValueRange, ZoneNumber};
use crate::engine::zone_resolver::ZoneResolver;
use crate::reference::embedded;
use std::collections::BTreeMap;

// ==========================================
// 测试辅助函数
// ==========================================

fn answers(
    location: QuizLocation,
    project_type: ProjectType,
    zone: u8,
    budget: BudgetPriority,
    install: InstallMethod,
) -> QuizAnswers {
    QuizAnswers {
        location,
        project_type,
        zone: ZoneNumber::new(zone).unwrap(),
        budget,
        install,
    }
}

fn engine() -> RecommendationEngine<'static> {
    RecommendationEngine::new(embedded(), &CalculatorConfig::default())
}

fn reason_codes(scored: &ScoredMaterial) -> Vec<&'static str> {
    scored.reasons.iter().map(|r| r.code).collect()
}

fn spray_only_catalog() -> Vec<Material> {
    vec![Material {
        id: "spray".to_string(),
        name: "Spray".to_string(),
        short_name: "Spray".to_string(),
        r_value_per_inch: Some(ValueRange::new(6.0, 7.0)),
        cost_per_sq_ft_installed: ValueRange::new(3.0, 5.0),
        cost_per_sq_ft_diy: None,
        diy_friendly: false,
        form: MaterialForm::Spray,
        best_for: vec![],
        applicable_locations: vec![InstallLocation::Walls],
        insights: BTreeMap::new(),
    }]
}

// ==========================================
// 评分与过滤
// ==========================================

#[test]
fn test_hot_attic_diy_best_performance() {
    let a = answers(
        QuizLocation::Attic,
        ProjectType::Retrofit,
        1,
        BudgetPriority::BestPerformance,
        InstallMethod::Diy,
    );
    let engine = engine();
    let candidates = engine.score_candidates(&a);

    // DIY 模式排除非 DIY 材料
    for c in &candidates {
        assert!(embedded().material(&c.material_id).unwrap().diy_friendly);
    }
    assert!(!candidates.iter().any(|c| c.material_id.contains("spray-foam")));

    // 辐射屏障在炎热气候区阁楼获得加分与理由
    let radiant = candidates
        .iter()
        .find(|c| c.material_id == "radiant-barrier")
        .unwrap();
    assert!(reason_codes(radiant).contains(&"radiant_hot_climate"));
    assert!((radiant.score - 30.0).abs() < 1e-9);

    let rec = engine.recommend(&a).unwrap();
    assert_eq!(rec.primary.material_id, "polyiso");
    assert_eq!(
        reason_codes(&rec.primary),
        vec!["excellent_r_per_inch", "diy_savings", "warm_polyiso"]
    );
    assert_eq!(rec.alternatives.len(), 3);
    assert_eq!(rec.alternatives[0].material_id, "cellulose-blown");
    assert_eq!(rec.r_value_target, 30);

    let estimate = rec.cost_estimate.unwrap();
    assert_eq!(estimate.install_method, InstallMethod::Diy);
    assert_eq!(estimate.area_sq_ft, 500.0);
    assert!((estimate.cost.min - 400.0).abs() < 1e-9);
    assert!((estimate.cost.max - 700.0).abs() < 1e-9);
}

#[test]
fn test_retrofit_walls_pro_restricts_forms() {
    let a = answers(
        QuizLocation::Walls,
        ProjectType::Retrofit,
        5,
        BudgetPriority::Balanced,
        InstallMethod::Pro,
    );
    let candidates = engine().score_candidates(&a);
    let ids: Vec<&str> = candidates.iter().map(|c| c.material_id.as_str()).collect();

    assert_eq!(ids.len(), 4);
    assert_eq!(ids[0], "cellulose-blown");
    assert!(!ids.contains(&"fiberglass-batts"));
    assert!(!ids.contains(&"xps"));

    let closed = candidates
        .iter()
        .find(|c| c.material_id == "closed-cell-spray-foam")
        .unwrap();
    assert_eq!(reason_codes(closed), vec!["cold_air_sealing"]);
    assert!((closed.score - 57.5).abs() < 1e-9);
}

#[test]
fn test_retrofit_walls_diy_allows_batts() {
    let a = answers(
        QuizLocation::Walls,
        ProjectType::Retrofit,
        4,
        BudgetPriority::Cheapest,
        InstallMethod::Diy,
    );
    let ids: Vec<String> = engine()
        .score_candidates(&a)
        .into_iter()
        .map(|c| c.material_id)
        .collect();
    assert!(ids.contains(&"fiberglass-batts".to_string()));
    assert!(ids.contains(&"mineral-wool-batts".to_string()));
    assert!(!ids.contains(&"xps".to_string()));
}

#[test]
fn test_cold_zone_polyiso_penalty_has_no_reason() {
    let a = answers(
        QuizLocation::Basement,
        ProjectType::NewConstruction,
        6,
        BudgetPriority::BestPerformance,
        InstallMethod::Pro,
    );
    let candidates = engine().score_candidates(&a);
    let polyiso = candidates.iter().find(|c| c.material_id == "polyiso").unwrap();
    // 6.25 × 10 - 10
    assert!((polyiso.score - 52.5).abs() < 1e-9);
    assert_eq!(reason_codes(polyiso), vec!["excellent_r_per_inch"]);

    let xps = candidates.iter().find(|c| c.material_id == "xps").unwrap();
    assert_eq!(
        reason_codes(xps),
        vec!["excellent_r_per_inch", "below_grade_moisture", "cold_stable_r"]
    );
}

#[test]
fn test_reasons_capped_in_evaluation_order() {
    let a = answers(
        QuizLocation::CrawlSpace,
        ProjectType::Retrofit,
        7,
        BudgetPriority::BestPerformance,
        InstallMethod::Diy,
    );
    let rec = engine().recommend(&a).unwrap();
    // xps: excellent_r_per_inch, diy_savings, below_grade_moisture, cold_stable_r
    assert_eq!(rec.primary.material_id, "xps");
    assert_eq!(rec.primary.reasons.len(), 4);
    assert_eq!(rec.reasons.len(), MAX_REASONS);
    assert_eq!(rec.reasons[..], rec.primary.reasons[..MAX_REASONS]);
}

#[test]
fn test_cheapest_attic_prefers_affordable() {
    let a = answers(
        QuizLocation::Attic,
        ProjectType::NewConstruction,
        4,
        BudgetPriority::Cheapest,
        InstallMethod::Pro,
    );
    let rec = engine().recommend(&a).unwrap();
    assert_eq!(rec.primary.material_id, "radiant-barrier");
    assert_eq!(reason_codes(&rec.primary), vec!["most_affordable"]);
    assert_eq!(rec.cost_estimate.unwrap().install_method, InstallMethod::Pro);
}

#[test]
fn test_empty_candidate_set_yields_none() {
    let catalog = spray_only_catalog();
    let engine = RecommendationEngine::with_materials(&catalog, 500.0);
    let a = answers(
        QuizLocation::Walls,
        ProjectType::NewConstruction,
        3,
        BudgetPriority::Balanced,
        InstallMethod::Diy,
    );
    assert!(engine.score_candidates(&a).is_empty());
    assert!(engine.recommend(&a).is_none());
}

#[test]
fn test_recommend_is_idempotent() {
    let a = answers(
        QuizLocation::Garage,
        ProjectType::Retrofit,
        5,
        BudgetPriority::Balanced,
        InstallMethod::Pro,
    );
    let engine = engine();
    assert_eq!(engine.recommend(&a), engine.recommend(&a));
}

#[test]
fn test_r_value_target_table() {
    let z = |n| ZoneNumber::new(n).unwrap();
    assert_eq!(r_value_target(z(1), QuizLocation::Attic), 30);
    assert_eq!(r_value_target(z(3), QuizLocation::Basement), 5);
    assert_eq!(r_value_target(z(5), QuizLocation::Garage), 20);
    assert_eq!(r_value_target(z(8), QuizLocation::Walls), 21);
}

// ==========================================
// 问卷状态机
// ==========================================

#[test]
fn test_quiz_happy_path() {
    let mut session = QuizSession::new();
    assert_eq!(session.step(), QuizStep::Location);

    assert_eq!(
        session.answer(QuizAnswer::Location(QuizLocation::Attic)),
        Ok(QuizStep::ProjectType)
    );
    assert_eq!(
        session.answer(QuizAnswer::ProjectType(ProjectType::Retrofit)),
        Ok(QuizStep::ClimateZone)
    );
    assert_eq!(
        session.answer(QuizAnswer::ClimateZone(ZoneNumber::new(1).unwrap())),
        Ok(QuizStep::Budget)
    );
    assert_eq!(
        session.answer(QuizAnswer::Budget(BudgetPriority::BestPerformance)),
        Ok(QuizStep::Installation)
    );
    assert_eq!(
        session.answer(QuizAnswer::Installation(InstallMethod::Diy)),
        Ok(QuizStep::Complete)
    );
    assert!(session.is_complete());

    let a = session.answers().unwrap();
    assert_eq!(a.zone.get(), 1);
    assert!(a.is_diy());
    assert_eq!(
        session.answer(QuizAnswer::Installation(InstallMethod::Pro)),
        Err(QuizError::AlreadyComplete)
    );
}

#[test]
fn test_quiz_rejects_skipping() {
    let mut session = QuizSession::new();
    match session.answer(QuizAnswer::Budget(BudgetPriority::Cheapest)) {
        Err(QuizError::UnexpectedAnswer { expected, got }) => {
            assert_eq!(expected, QuizStep::Location);
            assert_eq!(got, QuizStep::Budget);
        }
        other => panic!("Expected UnexpectedAnswer, got {:?}", other),
    }
    assert_eq!(session.step(), QuizStep::Location);
    assert_eq!(session.answers(), Err(QuizError::Incomplete(QuizStep::Location)));
}

#[test]
fn test_quiz_go_back_clears_only_that_step() {
    let mut session = QuizSession::new();
    session.answer(QuizAnswer::Location(QuizLocation::Walls)).unwrap();
    session
        .answer(QuizAnswer::ProjectType(ProjectType::NewConstruction))
        .unwrap();
    assert_eq!(session.step(), QuizStep::ClimateZone);

    assert_eq!(session.go_back(), Ok(QuizStep::ProjectType));
    assert_eq!(session.step(), QuizStep::ProjectType);
    assert_eq!(session.answered_count(), 1);

    // 重新作答后继续
    session.answer(QuizAnswer::ProjectType(ProjectType::Retrofit)).unwrap();
    assert_eq!(session.step(), QuizStep::ClimateZone);

    assert_eq!(session.go_back(), Ok(QuizStep::ProjectType));
    assert_eq!(session.go_back(), Ok(QuizStep::Location));
    assert_eq!(session.go_back(), Err(QuizError::NoPreviousStep));
}

#[test]
fn test_quiz_go_back_from_complete() {
    let mut session = QuizSession::new();
    session.answer(QuizAnswer::Location(QuizLocation::Basement)).unwrap();
    session.answer(QuizAnswer::ProjectType(ProjectType::Retrofit)).unwrap();
    session
        .answer(QuizAnswer::ClimateZone(ZoneNumber::new(6).unwrap()))
        .unwrap();
    session.answer(QuizAnswer::Budget(BudgetPriority::Balanced)).unwrap();
    session.answer(QuizAnswer::Installation(InstallMethod::Pro)).unwrap();

    assert_eq!(session.go_back(), Ok(QuizStep::Installation));
    assert_eq!(session.answered_count(), 4);
    session.reset();
    assert_eq!(session, QuizSession::new());
}

#[test]
fn test_quiz_zip_answer() {
    let resolver = ZoneResolver::new(embedded());
    let mut session = QuizSession::new();

    assert!(matches!(
        session.answer_zip(&resolver, "60614"),
        Err(QuizError::UnexpectedAnswer { .. })
    ));

    session.answer(QuizAnswer::Location(QuizLocation::Attic)).unwrap();
    session.answer(QuizAnswer::ProjectType(ProjectType::Retrofit)).unwrap();

    assert_eq!(
        session.answer_zip(&resolver, "00000"),
        Err(QuizError::ZoneNotFound {
            zip: "00000".to_string()
        })
    );
    assert_eq!(session.step(), QuizStep::ClimateZone);

    assert_eq!(session.answer_zip(&resolver, "60614"), Ok(QuizStep::Budget));
}
