// ==========================================
// 保温参考与估算引擎 - 领域类型定义
// ==========================================
// 职责: 气候区编号、数值区间、位置/形态/安装方式等枚举
// 红线: 只定义类型与轻量访问器,不含计算逻辑
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ==========================================
// 气候区编号 (Zone Number)
// ==========================================
// 取值范围 1..=8,构造即校验;越界在类型层面不可表示
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ZoneNumber(u8);

impl ZoneNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// 从数字构造气候区编号,越界返回 None
    pub fn new(n: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Some(Self(n))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 在按区号排序的表中的下标
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }

    /// 全部 8 个气候区(升序)
    pub fn all() -> impl Iterator<Item = ZoneNumber> {
        (Self::MIN..=Self::MAX).map(ZoneNumber)
    }
}

impl TryFrom<u8> for ZoneNumber {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        ZoneNumber::new(n).ok_or_else(|| format!("气候区编号越界: {} (有效范围 1-8)", n))
    }
}

impl From<ZoneNumber> for u8 {
    fn from(zone: ZoneNumber) -> u8 {
        zone.0
    }
}

impl fmt::Display for ZoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 数值区间 (Value Range)
// ==========================================
// 用于 R 值/英寸、单位面积成本、总成本、厚度等 {min, max} 区间
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 区间中点
    pub fn avg(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// 两端同乘一个系数(面积 × 单价)
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }

    /// 四舍五入到整数(仅用于展示)
    pub fn rounded(&self) -> Self {
        Self {
            min: self.min.round(),
            max: self.max.round(),
        }
    }

    pub fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} - {:.2}", self.min, self.max)
    }
}

// ==========================================
// 气候主导负荷 (Primary Concern)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryConcern {
    Heating,
    Cooling,
    Mixed,
}

impl fmt::Display for PrimaryConcern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryConcern::Heating => write!(f, "heating"),
            PrimaryConcern::Cooling => write!(f, "cooling"),
            PrimaryConcern::Mixed => write!(f, "mixed"),
        }
    }
}

// ==========================================
// 材料形态 (Material Form)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialForm {
    Batt,       // 毡/卷材
    Blown,      // 吹填
    Spray,      // 喷涂发泡
    Rigid,      // 硬质板材
    Reflective, // 反射型(辐射屏障)
}

impl fmt::Display for MaterialForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialForm::Batt => write!(f, "batt"),
            MaterialForm::Blown => write!(f, "blown"),
            MaterialForm::Spray => write!(f, "spray"),
            MaterialForm::Rigid => write!(f, "rigid"),
            MaterialForm::Reflective => write!(f, "reflective"),
        }
    }
}

// ==========================================
// 安装方式 (Install Method)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallMethod {
    Diy, // 自行安装
    Pro, // 专业施工
}

impl Default for InstallMethod {
    fn default() -> Self {
        InstallMethod::Pro
    }
}

impl fmt::Display for InstallMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstallMethod::Diy => write!(f, "diy"),
            InstallMethod::Pro => write!(f, "pro"),
        }
    }
}

impl FromStr for InstallMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "diy" => Ok(InstallMethod::Diy),
            "pro" | "professional" => Ok(InstallMethod::Pro),
            other => Err(format!("未知安装方式: {}", other)),
        }
    }
}

// ==========================================
// 施工部位 (Install Location)
// ==========================================
// 材料目录 applicableLocations 与成本估算使用的部位键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallLocation {
    AtticFloor,
    AtticRoofDeck,
    Walls,
    WallsExterior,
    Basement,
    CrawlSpace,
    RimJoist,
    Garage,
    CathedralCeiling,
}

impl InstallLocation {
    pub const ALL: [InstallLocation; 9] = [
        InstallLocation::AtticFloor,
        InstallLocation::AtticRoofDeck,
        InstallLocation::Walls,
        InstallLocation::WallsExterior,
        InstallLocation::Basement,
        InstallLocation::CrawlSpace,
        InstallLocation::RimJoist,
        InstallLocation::Garage,
        InstallLocation::CathedralCeiling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstallLocation::AtticFloor => "attic-floor",
            InstallLocation::AtticRoofDeck => "attic-roof-deck",
            InstallLocation::Walls => "walls",
            InstallLocation::WallsExterior => "walls-exterior",
            InstallLocation::Basement => "basement",
            InstallLocation::CrawlSpace => "crawl-space",
            InstallLocation::RimJoist => "rim-joist",
            InstallLocation::Garage => "garage",
            InstallLocation::CathedralCeiling => "cathedral-ceiling",
        }
    }

    /// 国际化键 (install_location.*)
    pub fn i18n_key(&self) -> String {
        format!("install_location.{}", self.as_str().replace('-', "_"))
    }
}

impl fmt::Display for InstallLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InstallLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        InstallLocation::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == key)
            .ok_or_else(|| format!("未知施工部位: {}", s))
    }
}

// ==========================================
// 规范要求部位 (Requirement Location)
// ==========================================
// IECC 要求表的 7 个部位键
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementLocation {
    CeilingAttic,
    WoodFrameWall,
    MassWall,
    Floor,
    BasementWall,
    CrawlspaceWall,
    SlabEdge,
}

impl RequirementLocation {
    pub const ALL: [RequirementLocation; 7] = [
        RequirementLocation::CeilingAttic,
        RequirementLocation::WoodFrameWall,
        RequirementLocation::MassWall,
        RequirementLocation::Floor,
        RequirementLocation::BasementWall,
        RequirementLocation::CrawlspaceWall,
        RequirementLocation::SlabEdge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequirementLocation::CeilingAttic => "ceiling_attic",
            RequirementLocation::WoodFrameWall => "wood_frame_wall",
            RequirementLocation::MassWall => "mass_wall",
            RequirementLocation::Floor => "floor",
            RequirementLocation::BasementWall => "basement_wall",
            RequirementLocation::CrawlspaceWall => "crawlspace_wall",
            RequirementLocation::SlabEdge => "slab_edge",
        }
    }
}

impl fmt::Display for RequirementLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequirementLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RequirementLocation::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == s.trim())
            .ok_or_else(|| format!("未知要求部位: {}", s))
    }
}

// ==========================================
// 节能测算部位 (Savings Location)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SavingsLocation {
    Attic,
    Walls,
    Basement,
    CrawlSpace,
    WholeHouse,
}

impl SavingsLocation {
    pub const ALL: [SavingsLocation; 5] = [
        SavingsLocation::Attic,
        SavingsLocation::Walls,
        SavingsLocation::Basement,
        SavingsLocation::CrawlSpace,
        SavingsLocation::WholeHouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SavingsLocation::Attic => "attic",
            SavingsLocation::Walls => "walls",
            SavingsLocation::Basement => "basement",
            SavingsLocation::CrawlSpace => "crawl-space",
            SavingsLocation::WholeHouse => "whole-house",
        }
    }
}

impl fmt::Display for SavingsLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavingsLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        SavingsLocation::ALL
            .iter()
            .copied()
            .find(|loc| loc.as_str() == key)
            .ok_or_else(|| format!("未知测算部位: {}", s))
    }
}
