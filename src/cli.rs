// ==========================================
// 保温参考与估算引擎 - 命令行参数
// ==========================================

use clap::{Args, Parser, Subcommand};
use insulation_advisor::domain::{
    BudgetPriority, InstallLocation, InstallMethod, ProjectType, QuizLocation, SavingsLocation,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "insulation-advisor")]
#[command(about = "Insulation climate-zone, R-value, cost and savings calculators", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Calculator config override (JSON)
    #[arg(long, global = true, env = "INSULATION_ADVISOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output locale (en, zh-CN)
    #[arg(long, global = true, default_value = "en", env = "INSULATION_ADVISOR_LOCALE")]
    pub locale: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// 气候区来源: 区号或 ZIP(二选一)
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ZoneArgs {
    /// ZIP code (5 digits)
    #[arg(long)]
    pub zip: Option<String>,

    /// Climate zone number (1-8)
    #[arg(long)]
    pub zone: Option<u8>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up a climate zone and its code requirements
    Zone {
        #[command(flatten)]
        zone: ZoneArgs,
    },

    /// List all eight climate zones
    Zones,

    /// Climate zones present in a US state
    State {
        /// Two-letter state code
        code: String,
    },

    /// Estimate installed cost for every applicable material
    Cost {
        /// Area in square feet
        #[arg(long)]
        area: f64,

        /// Install location (attic-floor, walls, crawl-space, ...)
        #[arg(long)]
        location: InstallLocation,

        /// Install method (diy, pro)
        #[arg(long, default_value = "pro")]
        method: InstallMethod,
    },

    /// Thickness needed to reach a target R-value
    Thickness {
        /// Target R-value
        #[arg(long = "r-value")]
        r_value: f64,

        /// Restrict to one material id
        #[arg(long)]
        material: Option<String>,
    },

    /// Annual savings, payback and ROI of an R-value upgrade
    Savings {
        /// Current R-value (0 for uninsulated)
        #[arg(long)]
        current: f64,

        /// Target R-value
        #[arg(long)]
        target: f64,

        #[command(flatten)]
        zone: ZoneArgs,

        /// Home size in square feet
        #[arg(long = "sq-ft")]
        sq_ft: f64,

        /// Annual energy bill in dollars
        #[arg(long)]
        bill: f64,

        /// attic, walls, basement, crawl-space, whole-house
        #[arg(long)]
        location: SavingsLocation,

        /// Upgrade cost in dollars (0 uses a per-square-foot estimate)
        #[arg(long = "upgrade-cost", default_value = "0")]
        upgrade_cost: f64,
    },

    /// List common upgrade presets
    Presets,

    /// Run the five-question material recommendation quiz
    Quiz {
        /// attic, walls, basement, crawl-space, garage
        #[arg(long)]
        location: QuizLocation,

        /// new-construction, retrofit
        #[arg(long)]
        project: ProjectType,

        #[command(flatten)]
        zone: ZoneArgs,

        /// cheapest, balanced, best-performance
        #[arg(long)]
        budget: BudgetPriority,

        /// diy, pro
        #[arg(long)]
        install: InstallMethod,
    },
}
