// ==========================================
// 保温参考与估算引擎 - 参考数据表
// ==========================================
// 职责: 解析编译期嵌入的四张静态表,构建只读索引
// 数据: data/iecc_zones.json / materials.json / zip_prefixes.csv / state_zones.json
// 生命周期: 进程内加载一次,之后不可变
// ==========================================

use crate::domain::material::Material;
use crate::domain::types::ZoneNumber;
use crate::domain::zone::{StateZones, ZoneRecord};
use crate::reference::error::ReferenceDataError;
use crate::reference::validation;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

const IECC_ZONES_JSON: &str = include_str!("../../data/iecc_zones.json");
const MATERIALS_JSON: &str = include_str!("../../data/materials.json");
const ZIP_PREFIXES_CSV: &str = include_str!("../../data/zip_prefixes.csv");
const STATE_ZONES_JSON: &str = include_str!("../../data/state_zones.json");

/// 嵌入数据的进程级实例
static EMBEDDED: OnceLock<ReferenceData> = OnceLock::new();

#[derive(Debug, Deserialize)]
struct IeccFile {
    #[serde(default)]
    source: String,
    #[serde(default)]
    notes: BTreeMap<String, String>,
    zones: Vec<ZoneRecord>,
}

#[derive(Debug, Deserialize)]
struct MaterialsFile {
    materials: Vec<Material>,
}

#[derive(Debug, Deserialize)]
struct ZipPrefixRow {
    prefix: String,
    zone: ZoneNumber,
}

/// 原始表内容(文本)
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSources<'a> {
    pub iecc_zones_json: &'a str,
    pub materials_json: &'a str,
    pub zip_prefixes_csv: &'a str,
    pub state_zones_json: &'a str,
}

impl ReferenceSources<'static> {
    /// 编译期嵌入的数据文件
    pub fn embedded() -> Self {
        Self {
            iecc_zones_json: IECC_ZONES_JSON,
            materials_json: MATERIALS_JSON,
            zip_prefixes_csv: ZIP_PREFIXES_CSV,
            state_zones_json: STATE_ZONES_JSON,
        }
    }
}

// ==========================================
// ReferenceData - 只读参考数据
// ==========================================
#[derive(Debug, Clone)]
pub struct ReferenceData {
    source: String,
    notes: BTreeMap<String, String>,
    /// 下标 = 气候区 - 1
    zones: Vec<ZoneRecord>,
    zip_prefixes: HashMap<String, ZoneNumber>,
    states: BTreeMap<String, StateZones>,
    materials: Vec<Material>,
}

impl ReferenceData {
    /// 解析并校验参考数据
    ///
    /// # 参数
    /// - sources: 四张表的原始文本
    /// - strict_catalog: true 时材料目录 DIY 约定不一致直接报错
    ///
    /// # 返回
    /// - Ok(ReferenceData): 结构校验通过
    /// - Err(ReferenceDataError): 数据编写缺陷
    pub fn from_sources(
        sources: ReferenceSources<'_>,
        strict_catalog: bool,
    ) -> Result<Self, ReferenceDataError> {
        let iecc: IeccFile = serde_json::from_str(sources.iecc_zones_json).map_err(|source| {
            ReferenceDataError::Json {
                table: "iecc_zones",
                source,
            }
        })?;

        let catalog: MaterialsFile =
            serde_json::from_str(sources.materials_json).map_err(|source| {
                ReferenceDataError::Json {
                    table: "materials",
                    source,
                }
            })?;

        let states: BTreeMap<String, StateZones> = serde_json::from_str(sources.state_zones_json)
            .map_err(|source| ReferenceDataError::Json {
                table: "state_zones",
                source,
            })?;

        let zip_prefixes = parse_zip_prefixes(sources.zip_prefixes_csv)?;

        let zones = validation::order_zones(iecc.zones)?;
        validation::check_materials(&catalog.materials)?;
        validation::check_catalog_invariant(&catalog.materials, strict_catalog)?;
        validation::check_energy_star(&zones);

        let data = Self {
            source: iecc.source,
            notes: iecc.notes,
            zones,
            zip_prefixes,
            states: states
                .into_iter()
                .map(|(code, zones)| (code.to_uppercase(), zones))
                .collect(),
            materials: catalog.materials,
        };

        tracing::debug!(
            zones = data.zones.len(),
            zip_prefixes = data.zip_prefixes.len(),
            states = data.states.len(),
            materials = data.materials.len(),
            "参考数据加载完成"
        );

        Ok(data)
    }

    /// 加载嵌入数据(每次调用重新解析)
    pub fn load_embedded(strict_catalog: bool) -> Result<Self, ReferenceDataError> {
        Self::from_sources(ReferenceSources::embedded(), strict_catalog)
    }

    // ==========================================
    // 查询方法
    // ==========================================

    /// 数据来源说明
    pub fn source(&self) -> &str {
        &self.source
    }

    /// 要求串注释(ci / NR / +)
    pub fn notes(&self) -> &BTreeMap<String, String> {
        &self.notes
    }

    /// 按区号取记录;加载时已保证 1..=8 齐全
    pub fn zone(&self, zone: ZoneNumber) -> &ZoneRecord {
        &self.zones[zone.index()]
    }

    /// 全部气候区(区号升序)
    pub fn zones(&self) -> &[ZoneRecord] {
        &self.zones
    }

    /// 3 位 ZIP 前缀 → 区号
    pub fn zone_for_prefix(&self, prefix: &str) -> Option<ZoneNumber> {
        self.zip_prefixes.get(prefix).copied()
    }

    pub fn zip_prefix_count(&self) -> usize {
        self.zip_prefixes.len()
    }

    /// 全部 ZIP 前缀(无序)
    pub fn zip_prefixes(&self) -> impl Iterator<Item = (&str, ZoneNumber)> {
        self.zip_prefixes.iter().map(|(p, z)| (p.as_str(), *z))
    }

    /// 州代码(大小写不敏感) → 气候区
    pub fn state(&self, code: &str) -> Option<&StateZones> {
        self.states.get(&code.trim().to_uppercase())
    }

    pub fn states(&self) -> &BTreeMap<String, StateZones> {
        &self.states
    }

    /// 材料目录(保持文件顺序)
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn material(&self, id: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }
}

/// 进程级嵌入参考数据(首次访问时加载,目录约定按告警处理)
///
/// 嵌入文件由 `tests/reference_data_test.rs` 覆盖,加载失败属于构建缺陷。
pub fn embedded() -> &'static ReferenceData {
    EMBEDDED.get_or_init(|| match ReferenceData::load_embedded(false) {
        Ok(data) => data,
        Err(e) => panic!("嵌入参考数据非法: {}", e),
    })
}

fn parse_zip_prefixes(raw: &str) -> Result<HashMap<String, ZoneNumber>, ReferenceDataError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());

    let mut prefixes = HashMap::new();
    for row in reader.deserialize::<ZipPrefixRow>() {
        let row = row.map_err(|source| ReferenceDataError::Csv {
            table: "zip_prefixes",
            source,
        })?;

        if row.prefix.len() != 3 || !row.prefix.chars().all(|c| c.is_ascii_digit()) {
            return Err(ReferenceDataError::InvalidZipPrefix { prefix: row.prefix });
        }
        if prefixes.insert(row.prefix.clone(), row.zone).is_some() {
            return Err(ReferenceDataError::DuplicateZipPrefix(row.prefix));
        }
    }

    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zip_prefixes_rejects_bad_rows() {
        assert!(matches!(
            parse_zip_prefixes("prefix,zone\n12,3\n"),
            Err(ReferenceDataError::InvalidZipPrefix { .. })
        ));
        assert!(matches!(
            parse_zip_prefixes("prefix,zone\n123,3\n123,4\n"),
            Err(ReferenceDataError::DuplicateZipPrefix(_))
        ));
        assert!(matches!(
            parse_zip_prefixes("prefix,zone\n123,9\n"),
            Err(ReferenceDataError::Csv { .. })
        ));
    }

    #[test]
    fn test_parse_zip_prefixes_keeps_leading_zeros() {
        let map = parse_zip_prefixes("prefix,zone\n005,5\n967,1\n").unwrap();
        assert_eq!(map.get("005").map(|z| z.get()), Some(5));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_embedded_instance_is_shared() {
        let a = embedded() as *const ReferenceData;
        let b = embedded() as *const ReferenceData;
        assert_eq!(a, b);
        assert_eq!(embedded().zones().len(), 8);
    }
}
