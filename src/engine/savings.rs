// ==========================================
// 保温参考与估算引擎 - 节能/投资回报测算
// ==========================================
// R 值提升比例 = 1 - 当前R / 目标R
// 年节省 = 年能源账单 × 暖通占比(气候区) × R 值提升比例 × 部位占比
// 第 y 年节省 = 年节省 × (1 + 涨幅)^(y-1)
// 前置条件: 目标R > 当前R,否则不计算
// ==========================================

use crate::config::CalculatorConfig;
use crate::domain::types::{SavingsLocation, ZoneNumber};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// 测算输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsInputs {
    pub current_r_value: f64,
    pub target_r_value: f64,
    pub zone: ZoneNumber,
    pub home_sq_ft: f64,
    pub annual_energy_bill: f64,
    pub location: SavingsLocation,
    /// 0 表示按部位默认单价估算
    pub upgrade_cost: f64,
}

/// 逐年节省
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearlySavings {
    pub year: u32,
    pub savings: f64,
    pub cumulative: f64,
}

/// 年份节点的累计节省与 ROI
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsMilestone {
    pub year: u32,
    pub cumulative_savings: f64,
    /// (累计节省 - 投入) / 投入 × 100
    pub roi_percent: f64,
}

/// 测算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsResult {
    pub r_improvement: f64,
    pub annual_savings: f64,
    /// 该部位暖通支出的节省百分比
    pub savings_percent: f64,
    pub upgrade_cost: f64,
    pub cost_is_estimate: bool,
    pub cost_description: Option<String>,
    pub payback_years: f64,
    pub milestones: Vec<SavingsMilestone>,
    pub yearly: Vec<YearlySavings>,
}

impl SavingsResult {
    pub fn milestone(&self, year: u32) -> Option<&SavingsMilestone> {
        self.milestones.iter().find(|m| m.year == year)
    }
}

// ==========================================
// 常用升级方案
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SavingsPreset {
    pub label: &'static str,
    pub current_r_value: f64,
    pub target_r_value: f64,
    pub location: SavingsLocation,
}

pub const PRESETS: [SavingsPreset; 6] = [
    SavingsPreset {
        label: "R-11 → R-38 (Attic)",
        current_r_value: 11.0,
        target_r_value: 38.0,
        location: SavingsLocation::Attic,
    },
    SavingsPreset {
        label: "R-19 → R-49 (Attic)",
        current_r_value: 19.0,
        target_r_value: 49.0,
        location: SavingsLocation::Attic,
    },
    SavingsPreset {
        label: "None → R-38 (Attic)",
        current_r_value: 0.0,
        target_r_value: 38.0,
        location: SavingsLocation::Attic,
    },
    SavingsPreset {
        label: "R-11 → R-21 (Walls)",
        current_r_value: 11.0,
        target_r_value: 21.0,
        location: SavingsLocation::Walls,
    },
    SavingsPreset {
        label: "None → R-13 (Walls)",
        current_r_value: 0.0,
        target_r_value: 13.0,
        location: SavingsLocation::Walls,
    },
    SavingsPreset {
        label: "None → R-15 (Basement)",
        current_r_value: 0.0,
        target_r_value: 15.0,
        location: SavingsLocation::Basement,
    },
];

/// 热损失降低比例;目标不高于当前时返回 None
pub fn r_improvement(current_r_value: f64, target_r_value: f64) -> Option<f64> {
    if !(current_r_value.is_finite() && target_r_value.is_finite()) {
        return None;
    }
    if current_r_value < 0.0 || target_r_value <= current_r_value {
        return None;
    }
    Some(1.0 - current_r_value / target_r_value)
}

// ==========================================
// SavingsProjector - 节能测算引擎
// ==========================================
pub struct SavingsProjector<'a> {
    config: &'a CalculatorConfig,
}

impl<'a> SavingsProjector<'a> {
    pub fn new(config: &'a CalculatorConfig) -> Self {
        Self { config }
    }

    /// 执行测算
    ///
    /// # 返回
    /// - None: 目标R ≤ 当前R,或节省额为 0(面积/账单非正)
    #[instrument(skip(self, inputs), fields(zone = %inputs.zone, location = %inputs.location))]
    pub fn project(&self, inputs: &SavingsInputs) -> Option<SavingsResult> {
        let r_improvement = r_improvement(inputs.current_r_value, inputs.target_r_value)?;

        let location_share = self.config.location_share(inputs.location);
        let hvac_portion = self.config.hvac_portion(inputs.zone);
        let annual_savings =
            inputs.annual_energy_bill * hvac_portion * r_improvement * location_share;
        if !annual_savings.is_finite() || annual_savings <= 0.0 {
            return None;
        }

        let (upgrade_cost, cost_is_estimate, cost_description) = if inputs.upgrade_cost > 0.0 {
            (inputs.upgrade_cost, false, None)
        } else {
            let estimate = self.config.upgrade_cost(inputs.location);
            (
                inputs.home_sq_ft * estimate.per_sq_ft,
                true,
                Some(estimate.description),
            )
        };

        let yearly = self.yearly_schedule(annual_savings);
        let milestones = self
            .config
            .projection_milestones
            .iter()
            .filter(|year| **year > 0)
            .filter_map(|year| yearly.get(*year as usize - 1))
            .map(|entry| SavingsMilestone {
                year: entry.year,
                cumulative_savings: entry.cumulative,
                roi_percent: roi_percent(entry.cumulative, upgrade_cost),
            })
            .collect();

        let result = SavingsResult {
            r_improvement,
            annual_savings,
            savings_percent: r_improvement * location_share * 100.0,
            upgrade_cost,
            cost_is_estimate,
            cost_description,
            payback_years: upgrade_cost / annual_savings,
            milestones,
            yearly,
        };

        tracing::debug!(
            annual_savings = result.annual_savings,
            payback_years = result.payback_years,
            "节能测算完成"
        );
        Some(result)
    }

    /// 逐年节省(含累计),第 1 年不含涨幅
    pub fn yearly_schedule(&self, annual_savings: f64) -> Vec<YearlySavings> {
        let growth = 1.0 + self.config.energy_escalation_rate;
        let mut cumulative = 0.0;
        (1..=self.config.projection_years)
            .map(|year| {
                let savings = annual_savings * growth.powi(year as i32 - 1);
                cumulative += savings;
                YearlySavings {
                    year,
                    savings,
                    cumulative,
                }
            })
            .collect()
    }
}

fn roi_percent(cumulative_savings: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (cumulative_savings - cost) / cost * 100.0
    } else {
        0.0
    }
}
