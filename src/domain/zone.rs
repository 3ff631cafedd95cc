// ==========================================
// 保温参考与估算引擎 - 气候区实体
// ==========================================
// 职责: 气候区信息、IECC 最低要求、ENERGY STAR 推荐值
// 生命周期: 启动时加载一次,运行期只读
// ==========================================

use crate::domain::types::{PrimaryConcern, RequirementLocation, ZoneNumber};
use serde::{Deserialize, Serialize};

/// 度日数区间 (HDD/CDD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeDayRange {
    pub min: u32,
    pub max: u32,
}

// ==========================================
// ClimateZone - 气候区基础信息
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClimateZone {
    pub zone: ZoneNumber,
    pub name: String,
    pub description: String,
    pub primary_concern: PrimaryConcern,
    pub heating_degree_days: DegreeDayRange,
    pub cooling_degree_days: DegreeDayRange,
    pub radiant_barrier_benefit: String,
}

// ==========================================
// RValueRequirements - IECC 最低 R 值要求
// ==========================================
// 要求串语法: "NR" | "R-<int>" | "R-<int>ci" | "R-<int>+<int>ci"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RValueRequirements {
    pub ceiling_attic: String,
    pub wood_frame_wall: String,
    pub mass_wall: String,
    pub floor: String,
    pub basement_wall: String,
    pub crawlspace_wall: String,
    pub slab_edge: String,
}

impl RValueRequirements {
    /// 按部位取要求串
    pub fn get(&self, location: RequirementLocation) -> &str {
        match location {
            RequirementLocation::CeilingAttic => &self.ceiling_attic,
            RequirementLocation::WoodFrameWall => &self.wood_frame_wall,
            RequirementLocation::MassWall => &self.mass_wall,
            RequirementLocation::Floor => &self.floor,
            RequirementLocation::BasementWall => &self.basement_wall,
            RequirementLocation::CrawlspaceWall => &self.crawlspace_wall,
            RequirementLocation::SlabEdge => &self.slab_edge,
        }
    }

    /// 按固定顺序列出 (部位, 要求串)
    pub fn entries(&self) -> impl Iterator<Item = (RequirementLocation, &str)> {
        RequirementLocation::ALL
            .into_iter()
            .map(move |loc| (loc, self.get(loc)))
    }
}

/// ENERGY STAR 推荐值(设计上不低于对应的规范最低值)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyStarRecommended {
    pub attic: String,
    pub walls: String,
    pub floor: String,
    pub notes: String,
}

/// 气候区特征与建议
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneCharacteristics {
    #[serde(rename = "type")]
    pub zone_type: PrimaryConcern,
    pub description: String,
    pub recommendations: Vec<String>,
}

// ==========================================
// ZoneRecord - 气候区完整记录
// ==========================================
// 区域解析器的输出单元: 基础信息 + 要求 + 推荐 + 特征
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneRecord {
    #[serde(flatten)]
    pub zone: ClimateZone,
    pub requirements: RValueRequirements,
    #[serde(rename = "energyStarRecommended")]
    pub energy_star: EnergyStarRecommended,
    pub characteristics: ZoneCharacteristics,
}

impl ZoneRecord {
    pub fn number(&self) -> ZoneNumber {
        self.zone.zone
    }
}

/// 州 → 气候区
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateZones {
    pub zones: Vec<ZoneNumber>,
    pub primary_zone: ZoneNumber,
}
