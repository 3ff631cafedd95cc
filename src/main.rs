// ==========================================
// 保温参考与估算引擎 - 命令行入口
// ==========================================
// 职责: 解析参数 → 调用 InsulationApi → 输出文本或 JSON
// ==========================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use cli::{Cli, Commands, ZoneArgs};
use insulation_advisor::api::{InsulationApi, SavingsRequest, ZoneInput};
use insulation_advisor::config::ConfigManager;
use insulation_advisor::domain::{
    BudgetPriority, InstallMethod, ProjectType, QuizLocation, ZoneRecord,
};
use insulation_advisor::engine::recommendation::{QuizAnswer, QuizSession};
use insulation_advisor::engine::requirement::format_requirement;
use insulation_advisor::engine::savings::PRESETS;
use insulation_advisor::engine::thickness::inches_to_cm;
use insulation_advisor::engine::{CostResult, Recommendation, SavingsResult, ThicknessResult};
use insulation_advisor::{i18n, logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }
    i18n::set_locale(&cli.locale);

    tracing::debug!("{} v{}", insulation_advisor::APP_NAME, insulation_advisor::VERSION);

    let manager =
        ConfigManager::load_or_default(cli.config.as_deref()).context("加载计算器配置失败")?;
    let api = InsulationApi::from_config(manager.config().clone())?;

    run(&api, cli.command, cli.json)
}

fn zone_input(args: &ZoneArgs) -> Result<ZoneInput> {
    match (&args.zip, args.zone) {
        (Some(zip), _) => Ok(ZoneInput::Zip(zip.clone())),
        (None, Some(n)) => Ok(ZoneInput::Number(n)),
        (None, None) => anyhow::bail!("需要 --zip 或 --zone"),
    }
}

fn emit<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run(api: &InsulationApi, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Zone { zone } => {
            let record = api.resolve_zone(&zone_input(&zone)?)?;
            if json {
                return emit(record);
            }
            print_zone(api, record);
        }

        Commands::Zones => {
            if json {
                return emit(&api.all_zones());
            }
            for record in api.all_zones() {
                println!(
                    "Zone {}  {:<14} {}",
                    record.number(),
                    record.zone.name,
                    record.zone.primary_concern
                );
            }
        }

        Commands::State { code } => {
            let state = api.state_zones(&code)?;
            if json {
                return emit(state);
            }
            let zones: Vec<String> = state.zones.iter().map(|z| z.to_string()).collect();
            println!(
                "{}: zones {} (primary {})",
                code.to_uppercase(),
                zones.join(", "),
                state.primary_zone
            );
        }

        Commands::Cost {
            area,
            location,
            method,
        } => {
            let results = api.estimate_cost(area, location, method)?;
            if json {
                return emit(&results);
            }
            print_costs(&results);
        }

        Commands::Thickness { r_value, material } => {
            let results = api.solve_thickness(r_value, material.as_deref())?;
            if json {
                return emit(&results);
            }
            print_thickness(&results);
        }

        Commands::Savings {
            current,
            target,
            zone,
            sq_ft,
            bill,
            location,
            upgrade_cost,
        } => {
            let request = SavingsRequest {
                current_r_value: current,
                target_r_value: target,
                zone: zone_input(&zone)?,
                home_sq_ft: sq_ft,
                annual_energy_bill: bill,
                location,
                upgrade_cost,
            };
            let result = api.project_savings(&request)?;
            if json {
                return emit(&result);
            }
            print_savings(&result);
        }

        Commands::Presets => {
            if json {
                return emit(&PRESETS);
            }
            for preset in PRESETS {
                println!("{}", preset.label);
            }
        }

        Commands::Quiz {
            location,
            project,
            zone,
            budget,
            install,
        } => {
            let recommendation = run_quiz(api, location, project, &zone, budget, install)?;
            if json {
                return emit(&recommendation);
            }
            match recommendation {
                Some(rec) => print_recommendation(&rec),
                None => println!("No materials match these answers."),
            }
        }
    }
    Ok(())
}

fn run_quiz(
    api: &InsulationApi,
    location: QuizLocation,
    project: ProjectType,
    zone: &ZoneArgs,
    budget: BudgetPriority,
    install: InstallMethod,
) -> Result<Option<Recommendation>> {
    let mut session = QuizSession::new();
    session.answer(QuizAnswer::Location(location))?;
    session.answer(QuizAnswer::ProjectType(project))?;
    match zone_input(zone)? {
        ZoneInput::Zip(zip) => {
            api.quiz_answer_zip(&mut session, &zip)?;
        }
        ZoneInput::Number(n) => {
            let zone = api.zone(n)?.number();
            session.answer(QuizAnswer::ClimateZone(zone))?;
        }
    }
    session.answer(QuizAnswer::Budget(budget))?;
    session.answer(QuizAnswer::Installation(install))?;

    Ok(api.recommend_session(&session)?)
}

// ==========================================
// 文本输出
// ==========================================

fn print_zone(api: &InsulationApi, record: &ZoneRecord) {
    let zone = &record.zone;
    println!("Climate Zone {}: {}", zone.zone, zone.name);
    println!("  {}", zone.description);
    println!(
        "  HDD {}-{}, CDD {}-{}, primary concern: {}",
        zone.heating_degree_days.min,
        zone.heating_degree_days.max,
        zone.cooling_degree_days.min,
        zone.cooling_degree_days.max,
        zone.primary_concern
    );
    println!();
    println!("IECC minimum R-values:");
    for row in api.requirement_rows(record.number()) {
        println!("  {:<34} {:<10} {}", row.label, row.raw, row.display);
    }
    println!();
    println!("ENERGY STAR recommended:");
    println!("  attic  {}", format_requirement(&record.energy_star.attic));
    println!("  walls  {}", format_requirement(&record.energy_star.walls));
    println!("  floor  {}", format_requirement(&record.energy_star.floor));
    println!("  {}", record.energy_star.notes);
    println!();
    println!("Radiant barrier: {}", zone.radiant_barrier_benefit);
    for tip in &record.characteristics.recommendations {
        println!("  - {}", tip);
    }
}

fn print_costs(results: &[CostResult]) {
    if results.is_empty() {
        println!("No materials match this location and install method.");
        return;
    }
    for r in results {
        let cost = r.cost.rounded();
        print!("{:<28} ${:>7} - ${:>7}", r.material_name, cost.min, cost.max);
        if let Some(savings) = r.diy_savings {
            print!("   DIY saves at least ${:.0}", savings);
        }
        println!();
        println!("    {}", r.insight);
    }
}

fn print_thickness(results: &[ThicknessResult]) {
    for r in results {
        let framing = r
            .framing
            .map(|f| f.label())
            .unwrap_or_else(|| "Exceeds 2×12 depth".to_string());
        println!(
            "{:<28} {:>5.2}\" - {:>5.2}\" (avg {:.2}\" / {:.1} cm)  {}{}",
            r.material_name,
            r.thickness_min,
            r.thickness_max,
            r.thickness_avg,
            inches_to_cm(r.thickness_avg),
            framing,
            if r.most_efficient { "  [most efficient]" } else { "" }
        );
    }
}

fn print_savings(result: &SavingsResult) {
    println!("Annual savings:   ${:.0}", result.annual_savings);
    println!("Savings percent:  {:.1}%", result.savings_percent);
    match &result.cost_description {
        Some(desc) => println!("Upgrade cost:     ${:.0} (estimated: {})", result.upgrade_cost, desc),
        None => println!("Upgrade cost:     ${:.0}", result.upgrade_cost),
    }
    println!("Payback:          {:.1} years", result.payback_years);
    for m in &result.milestones {
        println!(
            "  {:>2} years: ${:.0} saved, ROI {:.0}%",
            m.year, m.cumulative_savings, m.roi_percent
        );
    }
}

fn print_recommendation(rec: &Recommendation) {
    println!("Recommended: {} (score {:.1})", rec.primary.material_name, rec.primary.score);
    for reason in &rec.reasons {
        println!("  - {}", reason.message);
    }
    println!("Target: R-{}", rec.r_value_target);
    if let Some(estimate) = &rec.cost_estimate {
        let cost = estimate.cost.rounded();
        println!(
            "Estimated cost for {:.0} sq ft ({}): ${} - ${}",
            estimate.area_sq_ft, estimate.install_method, cost.min, cost.max
        );
    }
    if !rec.alternatives.is_empty() {
        println!("Alternatives:");
        for alt in &rec.alternatives {
            println!("  {} (score {:.1})", alt.material_name, alt.score);
        }
    }
}
