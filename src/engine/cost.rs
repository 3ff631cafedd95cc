// ==========================================
// 保温参考与估算引擎 - 成本估算
// ==========================================
// 输入: 面积(平方英尺) + 施工部位 + 安装方式
// 输出: 适用材料的成本区间,按下限升序
// 红线: 结果不取整(面积翻倍时上下限严格翻倍),取整只用于展示
// ==========================================

use crate::domain::material::Material;
use crate::domain::types::{InstallLocation, InstallMethod, MaterialForm, ValueRange};
use crate::i18n::t;
use crate::reference::ReferenceData;
use serde::Serialize;
use tracing::instrument;

/// 单个材料的成本估算结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    pub material_id: String,
    pub material_name: String,
    pub short_name: String,
    pub form: MaterialForm,
    pub area_sq_ft: f64,
    pub install_method: InstallMethod,

    /// 按所选安装方式的总价
    pub cost: ValueRange,
    /// 专业施工总价
    pub pro_cost: ValueRange,
    /// DIY 总价(材料有 DIY 定价时)
    pub diy_cost: Option<ValueRange>,

    pub r_value_per_inch: Option<ValueRange>,
    pub diy_friendly: bool,

    /// 保守 DIY 节省 = 专业下限 - DIY 上限
    pub diy_savings: Option<f64>,

    /// 部位施工说明
    pub insight: String,
}

/// 保守 DIY 节省: 专业施工最低价 - DIY 最高价
///
/// 仅对 diyFriendly 且有 DIY 定价的材料计算;结果可能为负。
pub fn conservative_diy_savings(material: &Material, area_sq_ft: f64) -> Option<f64> {
    if !material.diy_friendly {
        return None;
    }
    let diy = material.cost_per_sq_ft_diy?;
    let pro = material.cost_per_sq_ft_installed;
    Some(pro.min * area_sq_ft - diy.max * area_sq_ft)
}

/// 对单个材料估价;DIY 模式下材料无 DIY 定价返回 None
pub fn estimate_material(
    material: &Material,
    area_sq_ft: f64,
    location: InstallLocation,
    method: InstallMethod,
) -> Option<CostResult> {
    let unit = material.cost_for(method)?;
    let insight = material
        .insight_for(location)
        .map(str::to_string)
        .unwrap_or_else(|| t("cost.generic_insight"));

    Some(CostResult {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        short_name: material.short_name.clone(),
        form: material.form,
        area_sq_ft,
        install_method: method,
        cost: unit.scale(area_sq_ft),
        pro_cost: material.cost_per_sq_ft_installed.scale(area_sq_ft),
        diy_cost: material.cost_per_sq_ft_diy.map(|r| r.scale(area_sq_ft)),
        r_value_per_inch: material.r_value_per_inch,
        diy_friendly: material.diy_friendly,
        diy_savings: conservative_diy_savings(material, area_sq_ft),
        insight,
    })
}

// ==========================================
// CostEstimator - 成本估算引擎
// ==========================================
pub struct CostEstimator<'a> {
    materials: &'a [Material],
}

impl<'a> CostEstimator<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self::with_materials(data.materials())
    }

    pub fn with_materials(materials: &'a [Material]) -> Self {
        Self { materials }
    }

    /// 估算适用材料的总价
    ///
    /// # 返回
    /// - 按所选方式总价下限升序的结果;面积非正时为空
    #[instrument(skip(self), fields(location = %location, method = %method))]
    pub fn estimate(
        &self,
        area_sq_ft: f64,
        location: InstallLocation,
        method: InstallMethod,
    ) -> Vec<CostResult> {
        if !area_sq_ft.is_finite() || area_sq_ft <= 0.0 {
            return Vec::new();
        }

        let mut results: Vec<CostResult> = self
            .materials
            .iter()
            .filter(|m| m.applies_to(location))
            .filter_map(|m| estimate_material(m, area_sq_ft, location, method))
            .collect();

        results.sort_by(|a, b| a.cost.min.total_cmp(&b.cost.min));

        tracing::debug!(count = results.len(), "成本估算完成");
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::embedded;

    #[test]
    fn test_area_scaling_exact() {
        let estimator = CostEstimator::new(embedded());
        let base = estimator.estimate(750.0, InstallLocation::Walls, InstallMethod::Pro);
        let doubled = estimator.estimate(1500.0, InstallLocation::Walls, InstallMethod::Pro);
        assert_eq!(base.len(), doubled.len());
        for (a, b) in base.iter().zip(&doubled) {
            assert_eq!(a.material_id, b.material_id);
            assert_eq!(a.cost.min * 2.0, b.cost.min);
            assert_eq!(a.cost.max * 2.0, b.cost.max);
        }
    }

    #[test]
    fn test_sorted_by_lower_bound() {
        let results =
            CostEstimator::new(embedded()).estimate(1000.0, InstallLocation::AtticFloor, InstallMethod::Pro);
        assert!(!results.is_empty());
        for pair in results.windows(2) {
            assert!(pair[0].cost.min <= pair[1].cost.min);
        }
        assert!(results.iter().all(|r| r.cost == r.pro_cost));
    }

    #[test]
    fn test_diy_excludes_unpriced_materials() {
        let results =
            CostEstimator::new(embedded()).estimate(500.0, InstallLocation::Walls, InstallMethod::Diy);
        assert!(!results.is_empty());
        assert!(results.iter().all(|r| r.diy_cost.is_some()));
        assert!(results.iter().all(|r| Some(r.cost) == r.diy_cost));
        assert!(!results.iter().any(|r| r.material_id == "open-cell-spray-foam"));
        assert!(!results.iter().any(|r| r.material_id == "closed-cell-spray-foam"));
    }

    #[test]
    fn test_non_positive_area_yields_nothing() {
        let estimator = CostEstimator::new(embedded());
        assert!(estimator.estimate(0.0, InstallLocation::Walls, InstallMethod::Pro).is_empty());
        assert!(estimator.estimate(-10.0, InstallLocation::Walls, InstallMethod::Pro).is_empty());
        assert!(estimator.estimate(f64::NAN, InstallLocation::Walls, InstallMethod::Pro).is_empty());
    }

    #[test]
    fn test_conservative_diy_savings() {
        let batts = embedded().material("fiberglass-batts").unwrap();
        // 专业 0.9 - DIY 0.8 = 0.1/平方英尺
        let savings = conservative_diy_savings(batts, 1000.0).unwrap();
        assert!((savings - 100.0).abs() < 1e-9);

        let foam = embedded().material("closed-cell-spray-foam").unwrap();
        assert_eq!(conservative_diy_savings(foam, 1000.0), None);
    }

    #[test]
    fn test_insight_falls_back_to_material_default() {
        let results =
            CostEstimator::new(embedded()).estimate(100.0, InstallLocation::Garage, InstallMethod::Pro);
        let batts = results
            .iter()
            .find(|r| r.material_id == "fiberglass-batts")
            .unwrap();
        assert!(batts.insight.starts_with("Affordable and widely available"));
    }
}
