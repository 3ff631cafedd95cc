use crate::domain::types::{SavingsLocation, ZoneNumber};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 默认能源价格年涨幅
pub const DEFAULT_ESCALATION_RATE: f64 = 0.02;

/// 默认测算年限
pub const DEFAULT_PROJECTION_YEARS: u32 = 30;

/// 推荐问卷成本估算的默认项目面积(平方英尺)
pub const DEFAULT_QUIZ_PROJECT_SQ_FT: f64 = 500.0;

/// 各部位占围护结构热损失的比例
pub fn default_location_share(location: SavingsLocation) -> f64 {
    match location {
        SavingsLocation::Attic => 0.25,
        SavingsLocation::Walls => 0.35,
        SavingsLocation::Basement => 0.10,
        SavingsLocation::CrawlSpace => 0.10,
        SavingsLocation::WholeHouse => 0.70,
    }
}

/// 暖通支出占能源账单比例,按气候区 1..=8
pub const DEFAULT_HVAC_PORTION: [f64; 8] = [0.55, 0.50, 0.45, 0.45, 0.50, 0.55, 0.60, 0.65];

/// 未填写改造费用时使用的单位面积估价
pub fn default_upgrade_cost(location: SavingsLocation) -> UpgradeCostEstimate {
    let (per_sq_ft, description) = match location {
        SavingsLocation::Attic => (1.50, "Blown-in insulation to R-49"),
        SavingsLocation::Walls => (2.50, "Dense-pack cellulose retrofit"),
        SavingsLocation::Basement => (2.00, "Rigid foam on walls"),
        SavingsLocation::CrawlSpace => (3.00, "Encapsulation with insulation"),
        SavingsLocation::WholeHouse => (2.00, "Full envelope upgrade"),
    };
    UpgradeCostEstimate {
        per_sq_ft,
        description: description.to_string(),
    }
}

/// 单位面积改造估价
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeCostEstimate {
    pub per_sq_ft: f64,
    #[serde(default)]
    pub description: String,
}

/// 计算器假设参数
///
/// 所有字段均可在 JSON 覆写文件中省略,缺省取内置值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// 能源价格年涨幅(0.02 = 2%)
    pub energy_escalation_rate: f64,

    /// 逐年测算的总年数
    pub projection_years: u32,

    /// 输出累计节省/ROI 的年份节点
    pub projection_milestones: Vec<u32>,

    /// 部位热损失占比;缺项回退到内置值
    pub location_energy_share: BTreeMap<SavingsLocation, f64>,

    /// 暖通支出占比,下标 = 气候区 - 1
    pub hvac_energy_portion: [f64; 8],

    /// 部位默认改造估价;缺项回退到内置值
    pub typical_upgrade_costs: BTreeMap<SavingsLocation, UpgradeCostEstimate>,

    /// 推荐问卷成本估算面积
    pub quiz_project_sq_ft: f64,

    /// 材料目录 DIY 一致性校验: true 时违规即加载失败,false 时仅告警
    pub strict_catalog: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            energy_escalation_rate: DEFAULT_ESCALATION_RATE,
            projection_years: DEFAULT_PROJECTION_YEARS,
            projection_milestones: vec![10, 20, 30],
            location_energy_share: SavingsLocation::ALL
                .iter()
                .map(|loc| (*loc, default_location_share(*loc)))
                .collect(),
            hvac_energy_portion: DEFAULT_HVAC_PORTION,
            typical_upgrade_costs: SavingsLocation::ALL
                .iter()
                .map(|loc| (*loc, default_upgrade_cost(*loc)))
                .collect(),
            quiz_project_sq_ft: DEFAULT_QUIZ_PROJECT_SQ_FT,
            strict_catalog: false,
        }
    }
}

impl CalculatorConfig {
    pub fn location_share(&self, location: SavingsLocation) -> f64 {
        self.location_energy_share
            .get(&location)
            .copied()
            .unwrap_or_else(|| default_location_share(location))
    }

    pub fn hvac_portion(&self, zone: ZoneNumber) -> f64 {
        self.hvac_energy_portion[zone.index()]
    }

    pub fn upgrade_cost(&self, location: SavingsLocation) -> UpgradeCostEstimate {
        self.typical_upgrade_costs
            .get(&location)
            .cloned()
            .unwrap_or_else(|| default_upgrade_cost(location))
    }

    /// 参数合法性检查,返回全部问题描述
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if !self.energy_escalation_rate.is_finite() || self.energy_escalation_rate < 0.0 {
            problems.push(format!(
                "energy_escalation_rate 必须为非负数: {}",
                self.energy_escalation_rate
            ));
        }
        if self.projection_years == 0 {
            problems.push("projection_years 至少为 1".to_string());
        }
        for year in &self.projection_milestones {
            if *year == 0 || *year > self.projection_years {
                problems.push(format!(
                    "projection_milestones 超出范围: {} (1..={})",
                    year, self.projection_years
                ));
            }
        }
        for (location, share) in &self.location_energy_share {
            if !(*share > 0.0 && *share <= 1.0) {
                problems.push(format!("location_energy_share[{}] 超出 (0,1]: {}", location, share));
            }
        }
        for (i, portion) in self.hvac_energy_portion.iter().enumerate() {
            if !(*portion > 0.0 && *portion <= 1.0) {
                problems.push(format!("hvac_energy_portion[zone {}] 超出 (0,1]: {}", i + 1, portion));
            }
        }
        for (location, estimate) in &self.typical_upgrade_costs {
            if !estimate.per_sq_ft.is_finite() || estimate.per_sq_ft <= 0.0 {
                problems.push(format!(
                    "typical_upgrade_costs[{}] 必须为正数: {}",
                    location, estimate.per_sq_ft
                ));
            }
        }
        if !self.quiz_project_sq_ft.is_finite() || self.quiz_project_sq_ft <= 0.0 {
            problems.push(format!("quiz_project_sq_ft 必须为正数: {}", self.quiz_project_sq_ft));
        }

        problems
    }
}
