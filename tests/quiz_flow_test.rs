// ==========================================
// 问卷流程集成测试
// ==========================================
// 测试目标: 通过 API 完整走完问卷 → 推荐
// ==========================================


use insulation_advisor::api::{parse_input, ApiError};
use insulation_advisor::domain::{
    BudgetPriority, InstallMethod, ProjectType, QuizLocation,
};
use insulation_advisor::engine::{QuizAnswer, QuizError, QuizSession, QuizStep};
use test_helpers::{default_api, quiz_answers, zone};

fn answer_through_project(session: &mut QuizSession) {
    session
        .answer(QuizAnswer::Location(QuizLocation::Attic))
        .unwrap();
    session
        .answer(QuizAnswer::ProjectType(ProjectType::Retrofit))
        .unwrap();
}

#[test]
fn test_full_flow_with_zip_answer() {
    let api = default_api();
    let mut session = QuizSession::new();
    answer_through_project(&mut session);

    // 33101 → 1 区
    let step = api.quiz_answer_zip(&mut session, "33101").unwrap();
    assert_eq!(step, QuizStep::Budget);

    session
        .answer(QuizAnswer::Budget(BudgetPriority::BestPerformance))
        .unwrap();
    let step = session
        .answer(QuizAnswer::Installation(InstallMethod::Diy))
        .unwrap();
    assert_eq!(step, QuizStep::Complete);
    assert_eq!(session.answered_count(), 5);

    let from_session = api.recommend_session(&session).unwrap().unwrap();
    let direct = api
        .recommend(&quiz_answers(
            QuizLocation::Attic,
            ProjectType::Retrofit,
            1,
            BudgetPriority::BestPerformance,
            InstallMethod::Diy,
        ))
        .unwrap()
        .unwrap();
    assert_eq!(from_session, direct);

    assert_eq!(direct.answers.zone, zone(1));
    assert_eq!(direct.primary.material_id, "polyiso");
    assert!(direct.alternatives.len() <= 3);
    assert!(!direct.reasons.is_empty() && direct.reasons.len() <= 3);
    assert!(direct.reasons.iter().all(|r| !r.message.is_empty()));
    assert_eq!(direct.r_value_target, 30);
}

#[test]
fn test_unknown_zip_keeps_zone_step() {
    let api = default_api();
    let mut session = QuizSession::new();
    answer_through_project(&mut session);

    match api.quiz_answer_zip(&mut session, "00000") {
        Err(ApiError::NotFound(msg)) => assert!(msg.contains("00000")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
    assert_eq!(session.step(), QuizStep::ClimateZone);

    assert!(matches!(
        api.quiz_answer_zip(&mut session, "12"),
        Err(ApiError::InvalidInput(_))
    ));
    assert_eq!(session.step(), QuizStep::ClimateZone);

    // 手选区号仍可继续
    let step = session.answer(QuizAnswer::ClimateZone(zone(4))).unwrap();
    assert_eq!(step, QuizStep::Budget);
}

#[test]
fn test_zip_answer_out_of_order() {
    let api = default_api();
    let mut session = QuizSession::new();
    match api.quiz_answer_zip(&mut session, "60614") {
        Err(ApiError::Quiz(QuizError::UnexpectedAnswer { expected, got })) => {
            assert_eq!(expected, QuizStep::Location);
            assert_eq!(got, QuizStep::ClimateZone);
        }
        other => panic!("Expected UnexpectedAnswer, got {:?}", other),
    }
}

#[test]
fn test_incomplete_session_cannot_recommend() {
    let api = default_api();
    let mut session = QuizSession::new();
    answer_through_project(&mut session);

    match api.recommend_session(&session) {
        Err(ApiError::Quiz(QuizError::Incomplete(step))) => {
            assert_eq!(step, QuizStep::ClimateZone)
        }
        other => panic!("Expected Incomplete, got {:?}", other.map(|r| r.is_some())),
    }
}

#[test]
fn test_back_then_change_answer() {
    let api = default_api();
    let mut session = QuizSession::new();
    answer_through_project(&mut session);
    api.quiz_answer_zip(&mut session, "60614").unwrap();

    // 回到气候区步骤,已答的前两步保留
    assert_eq!(session.go_back().unwrap(), QuizStep::ClimateZone);
    assert_eq!(session.answered_count(), 2);
    api.quiz_answer_zip(&mut session, "90210").unwrap();

    session
        .answer(QuizAnswer::Budget(BudgetPriority::Cheapest))
        .unwrap();
    session
        .answer(QuizAnswer::Installation(InstallMethod::Pro))
        .unwrap();

    let answers = session.answers().unwrap();
    assert_eq!(answers.zone, zone(3));
    assert_eq!(answers.budget, BudgetPriority::Cheapest);

    session.reset();
    assert_eq!(session, QuizSession::default());
}

#[test]
fn test_raw_answers_parse() {
    let location: QuizLocation = parse_input("location", "crawl_space").unwrap();
    assert_eq!(location, QuizLocation::CrawlSpace);
    let project: ProjectType = parse_input("project", "new").unwrap();
    assert_eq!(project, ProjectType::NewConstruction);
    let budget: BudgetPriority = parse_input("budget", "Best-Performance").unwrap();
    assert_eq!(budget, BudgetPriority::BestPerformance);

    assert!(matches!(
        parse_input::<BudgetPriority>("budget", "free"),
        Err(ApiError::InvalidInput(_))
    ));
}

#[test]
fn test_every_zone_produces_attic_recommendation() {
    let api = default_api();
    for n in 1..=8 {
        for install in [InstallMethod::Diy, InstallMethod::Pro] {
            let rec = api
                .recommend(&quiz_answers(
                    QuizLocation::Attic,
                    ProjectType::NewConstruction,
                    n,
                    BudgetPriority::Balanced,
                    install,
                ))
                .unwrap();
            let rec = rec.unwrap_or_else(|| panic!("zone {} {:?} 无推荐", n, install));
            assert!(rec
                .alternatives
                .iter()
                .all(|alt| alt.material_id != rec.primary.material_id));
            assert!(rec.cost_estimate.is_some());
        }
    }
}
