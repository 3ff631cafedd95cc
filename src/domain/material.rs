// ==========================================
// 保温参考与估算引擎 - 材料目录实体
// ==========================================
// 职责: 定义保温材料目录条目
// 红线: 运行期只读,计算逻辑在引擎层
// ==========================================

use crate::domain::types::{InstallLocation, InstallMethod, MaterialForm, ValueRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Material - 材料目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    /// 材料 ID(目录内唯一)
    pub id: String,
    pub name: String,
    pub short_name: String,

    /// 每英寸 R 值;仅反射型产品为 None
    pub r_value_per_inch: Option<ValueRange>,

    /// 专业施工单价(美元/平方英尺)
    pub cost_per_sq_ft_installed: ValueRange,

    /// 自行安装单价(美元/平方英尺)
    #[serde(rename = "costPerSqFtDIY")]
    pub cost_per_sq_ft_diy: Option<ValueRange>,

    pub diy_friendly: bool,
    pub form: MaterialForm,

    #[serde(default)]
    pub best_for: Vec<String>,

    pub applicable_locations: Vec<InstallLocation>,

    /// 部位 → 施工说明,键 "default" 为通用说明
    #[serde(default)]
    pub insights: BTreeMap<String, String>,
}

impl Material {
    pub fn applies_to(&self, location: InstallLocation) -> bool {
        self.applicable_locations.contains(&location)
    }

    /// 任一部位匹配即适用
    pub fn applies_to_any(&self, locations: &[InstallLocation]) -> bool {
        locations.iter().any(|loc| self.applies_to(*loc))
    }

    /// 按安装方式取单价;DIY 无定价时返回 None
    pub fn cost_for(&self, method: InstallMethod) -> Option<ValueRange> {
        match method {
            InstallMethod::Pro => Some(self.cost_per_sq_ft_installed),
            InstallMethod::Diy => self.cost_per_sq_ft_diy,
        }
    }

    /// 每英寸 R 值中点,反射型返回 None
    pub fn avg_r_per_inch(&self) -> Option<f64> {
        self.r_value_per_inch.map(|r| r.avg())
    }

    /// 部位说明,缺失时回退到 "default"
    pub fn insight_for(&self, location: InstallLocation) -> Option<&str> {
        self.insights
            .get(location.as_str())
            .or_else(|| self.insights.get("default"))
            .map(String::as_str)
    }
}
