// ==========================================
// 保温参考与估算引擎 - 推荐问卷答案类型
// ==========================================
// 职责: 问卷五个问题的答案枚举
// ==========================================

use crate::domain::types::{InstallLocation, InstallMethod, SavingsLocation, ZoneNumber};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 问卷部位 (Quiz Location)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizLocation {
    Attic,
    Walls,
    Basement,
    CrawlSpace,
    Garage,
}

impl QuizLocation {
    pub const ALL: [QuizLocation; 5] = [
        QuizLocation::Attic,
        QuizLocation::Walls,
        QuizLocation::Basement,
        QuizLocation::CrawlSpace,
        QuizLocation::Garage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizLocation::Attic => "attic",
            QuizLocation::Walls => "walls",
            QuizLocation::Basement => "basement",
            QuizLocation::CrawlSpace => "crawl-space",
            QuizLocation::Garage => "garage",
        }
    }

    /// 问卷部位 → 材料目录部位
    pub fn install_locations(&self) -> &'static [InstallLocation] {
        match self {
            QuizLocation::Attic => &[InstallLocation::AtticFloor, InstallLocation::AtticRoofDeck],
            QuizLocation::Walls => &[InstallLocation::Walls, InstallLocation::WallsExterior],
            QuizLocation::Basement => &[InstallLocation::Basement],
            QuizLocation::CrawlSpace => &[InstallLocation::CrawlSpace],
            QuizLocation::Garage => &[InstallLocation::Garage, InstallLocation::Walls],
        }
    }

    /// 对应的节能测算部位(车库无对应项)
    pub fn savings_location(&self) -> Option<SavingsLocation> {
        match self {
            QuizLocation::Attic => Some(SavingsLocation::Attic),
            QuizLocation::Walls => Some(SavingsLocation::Walls),
            QuizLocation::Basement => Some(SavingsLocation::Basement),
            QuizLocation::CrawlSpace => Some(SavingsLocation::CrawlSpace),
            QuizLocation::Garage => None,
        }
    }

    pub fn is_below_grade(&self) -> bool {
        matches!(self, QuizLocation::Basement | QuizLocation::CrawlSpace)
    }
}

impl fmt::Display for QuizLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        QuizLocation::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == key)
            .ok_or_else(|| format!("未知问卷部位: {}", s))
    }
}

// ==========================================
// 项目类型 (Project Type)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    NewConstruction, // 新建/全面翻修
    Retrofit,        // 既有建筑改造
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::NewConstruction => write!(f, "new-construction"),
            ProjectType::Retrofit => write!(f, "retrofit"),
        }
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "new-construction" | "new" => Ok(ProjectType::NewConstruction),
            "retrofit" | "existing" => Ok(ProjectType::Retrofit),
            other => Err(format!("未知项目类型: {}", other)),
        }
    }
}

// ==========================================
// 预算优先级 (Budget Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetPriority {
    Cheapest,        // 最低成本
    Balanced,        // 性价比
    BestPerformance, // 最佳性能
}

impl fmt::Display for BudgetPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BudgetPriority::Cheapest => write!(f, "cheapest"),
            BudgetPriority::Balanced => write!(f, "balanced"),
            BudgetPriority::BestPerformance => write!(f, "best-performance"),
        }
    }
}

impl FromStr for BudgetPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "cheapest" => Ok(BudgetPriority::Cheapest),
            "balanced" => Ok(BudgetPriority::Balanced),
            "best-performance" => Ok(BudgetPriority::BestPerformance),
            other => Err(format!("未知预算优先级: {}", other)),
        }
    }
}

// ==========================================
// QuizAnswers - 完整问卷答案
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswers {
    pub location: QuizLocation,
    pub project_type: ProjectType,
    pub zone: ZoneNumber,
    pub budget: BudgetPriority,
    pub install: InstallMethod,
}

impl QuizAnswers {
    pub fn is_diy(&self) -> bool {
        self.install == InstallMethod::Diy
    }
}
