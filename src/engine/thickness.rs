// ==========================================
// 保温参考与估算引擎 - 厚度求解
// ==========================================
// 厚度下限 = 目标 R / (R/英寸 上限)
// 厚度上限 = 目标 R / (R/英寸 下限)
// 反射型材料(无 R/英寸)不参与计算
// ==========================================

use crate::domain::material::Material;
use crate::domain::types::{MaterialForm, ValueRange};
use crate::i18n::t;
use crate::reference::ReferenceData;
use serde::Serialize;
use tracing::instrument;

/// 英寸 → 厘米
pub const CM_PER_INCH: f64 = 2.54;

pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

// ==========================================
// 标准龙骨/格栅空腔深度
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FramingCavity {
    Stud2x4,
    Stud2x6,
    Joist2x8,
    Joist2x10,
    Joist2x12,
}

impl FramingCavity {
    /// 由浅到深
    pub const LADDER: [FramingCavity; 5] = [
        FramingCavity::Stud2x4,
        FramingCavity::Stud2x6,
        FramingCavity::Joist2x8,
        FramingCavity::Joist2x10,
        FramingCavity::Joist2x12,
    ];

    /// 实际空腔深度(英寸)
    pub fn depth_inches(&self) -> f64 {
        match self {
            FramingCavity::Stud2x4 => 3.5,
            FramingCavity::Stud2x6 => 5.5,
            FramingCavity::Joist2x8 => 7.25,
            FramingCavity::Joist2x10 => 9.25,
            FramingCavity::Joist2x12 => 11.25,
        }
    }

    pub fn nominal(&self) -> &'static str {
        match self {
            FramingCavity::Stud2x4 => "2x4",
            FramingCavity::Stud2x6 => "2x6",
            FramingCavity::Joist2x8 => "2x8",
            FramingCavity::Joist2x10 => "2x10",
            FramingCavity::Joist2x12 => "2x12",
        }
    }

    pub fn label(&self) -> String {
        let key = match self {
            FramingCavity::Stud2x4 => "framing.stud_2x4",
            FramingCavity::Stud2x6 => "framing.stud_2x6",
            FramingCavity::Joist2x8 => "framing.joist_2x8",
            FramingCavity::Joist2x10 => "framing.joist_2x10",
            FramingCavity::Joist2x12 => "framing.joist_2x12",
        };
        t(key)
    }

    /// 能容纳该厚度的最浅空腔;超出 2x12 返回 None
    pub fn smallest_fitting(thickness_inches: f64) -> Option<FramingCavity> {
        Self::LADDER
            .into_iter()
            .find(|cavity| thickness_inches <= cavity.depth_inches())
    }
}

/// 求解范围: 全部材料或指定一种
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialSelection<'s> {
    All,
    One(&'s str),
}

/// 单个材料的厚度结果(英寸)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThicknessResult {
    pub material_id: String,
    pub material_name: String,
    pub short_name: String,
    pub form: MaterialForm,
    pub target_r_value: f64,
    pub r_value_per_inch: ValueRange,
    pub thickness_min: f64,
    pub thickness_max: f64,
    pub thickness_avg: f64,
    pub framing: Option<FramingCavity>,
    /// 最薄(最省空间)的结果
    pub most_efficient: bool,
}

impl ThicknessResult {
    pub fn thickness_range(&self) -> ValueRange {
        ValueRange::new(self.thickness_min, self.thickness_max)
    }

    pub fn thickness_avg_cm(&self) -> f64 {
        inches_to_cm(self.thickness_avg)
    }
}

/// 单个材料的厚度;反射型或目标非正时返回 None
pub fn solve_material(material: &Material, target_r_value: f64) -> Option<ThicknessResult> {
    if !target_r_value.is_finite() || target_r_value <= 0.0 {
        return None;
    }
    let r = material.r_value_per_inch?;

    let thickness_min = target_r_value / r.max;
    let thickness_max = target_r_value / r.min;
    let thickness_avg = (thickness_min + thickness_max) / 2.0;

    Some(ThicknessResult {
        material_id: material.id.clone(),
        material_name: material.name.clone(),
        short_name: material.short_name.clone(),
        form: material.form,
        target_r_value,
        r_value_per_inch: r,
        thickness_min,
        thickness_max,
        thickness_avg,
        framing: FramingCavity::smallest_fitting(thickness_avg),
        most_efficient: false,
    })
}

// ==========================================
// ThicknessSolver - 厚度求解引擎
// ==========================================
pub struct ThicknessSolver<'a> {
    materials: &'a [Material],
}

impl<'a> ThicknessSolver<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self::with_materials(data.materials())
    }

    pub fn with_materials(materials: &'a [Material]) -> Self {
        Self { materials }
    }

    /// 求解目标 R 值所需厚度,按平均厚度升序,首项标记为最省空间
    #[instrument(skip(self))]
    pub fn solve(&self, target_r_value: f64, selection: MaterialSelection<'_>) -> Vec<ThicknessResult> {
        let mut results: Vec<ThicknessResult> = self
            .materials
            .iter()
            .filter(|m| match selection {
                MaterialSelection::All => true,
                MaterialSelection::One(id) => m.id == id,
            })
            .filter_map(|m| solve_material(m, target_r_value))
            .collect();

        results.sort_by(|a, b| a.thickness_avg.total_cmp(&b.thickness_avg));
        if let Some(first) = results.first_mut() {
            first.most_efficient = true;
        }

        tracing::debug!(count = results.len(), "厚度求解完成");
        results
    }
}
