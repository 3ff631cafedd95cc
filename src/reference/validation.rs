// ==========================================
// 保温参考与估算引擎 - 参考数据校验
// ==========================================
// 结构错误(缺区、重复、区间倒置)一律拒绝加载;
// 设计约定(DIY 定价 ⇔ diyFriendly、ENERGY STAR ≥ 规范)按告警处理,
// DIY 约定在 strict 模式下升级为错误
// ==========================================

use crate::domain::material::Material;
use crate::domain::types::{MaterialForm, RequirementLocation, ZoneNumber};
use crate::domain::zone::ZoneRecord;
use crate::engine::requirement::parse_requirement;
use crate::reference::error::ReferenceDataError;
use std::collections::HashSet;

/// 按区号排序,并确认 1..=8 各出现一次
pub(crate) fn order_zones(mut zones: Vec<ZoneRecord>) -> Result<Vec<ZoneRecord>, ReferenceDataError> {
    zones.sort_by_key(|z| z.number());

    let mut seen = HashSet::new();
    for record in &zones {
        if !seen.insert(record.number()) {
            return Err(ReferenceDataError::DuplicateZone(record.number().get()));
        }
    }
    for zone in ZoneNumber::all() {
        if !seen.contains(&zone) {
            return Err(ReferenceDataError::MissingZone(zone.get()));
        }
    }

    Ok(zones)
}

/// 材料目录结构校验
pub(crate) fn check_materials(materials: &[Material]) -> Result<(), ReferenceDataError> {
    let mut ids = HashSet::new();
    for m in materials {
        if !ids.insert(m.id.as_str()) {
            return Err(ReferenceDataError::DuplicateMaterial(m.id.clone()));
        }

        match (m.r_value_per_inch, m.form) {
            (None, MaterialForm::Reflective) => {}
            (None, _) => return Err(ReferenceDataError::MissingRValue(m.id.clone())),
            (Some(r), _) if !r.is_ordered() || r.min <= 0.0 => {
                return Err(ReferenceDataError::InvalidRange {
                    material: m.id.clone(),
                    field: "rValuePerInch",
                })
            }
            _ => {}
        }

        if !m.cost_per_sq_ft_installed.is_ordered() {
            return Err(ReferenceDataError::InvalidRange {
                material: m.id.clone(),
                field: "costPerSqFtInstalled",
            });
        }
        if let Some(diy) = m.cost_per_sq_ft_diy {
            if !diy.is_ordered() {
                return Err(ReferenceDataError::InvalidRange {
                    material: m.id.clone(),
                    field: "costPerSqFtDIY",
                });
            }
        }
    }
    Ok(())
}

/// 列出违反 "有 DIY 定价 ⇔ diyFriendly" 约定的材料
pub fn catalog_invariant_violations(materials: &[Material]) -> Vec<String> {
    materials
        .iter()
        .filter_map(|m| match (m.cost_per_sq_ft_diy.is_some(), m.diy_friendly) {
            (true, false) => Some(format!("{}: 有 DIY 定价但 diyFriendly=false", m.id)),
            (false, true) => Some(format!("{}: diyFriendly=true 但缺少 DIY 定价", m.id)),
            _ => None,
        })
        .collect()
}

pub(crate) fn check_catalog_invariant(
    materials: &[Material],
    strict: bool,
) -> Result<(), ReferenceDataError> {
    let violations = catalog_invariant_violations(materials);
    if violations.is_empty() {
        return Ok(());
    }
    if strict {
        return Err(ReferenceDataError::CatalogInvariant(violations.join("; ")));
    }
    for v in &violations {
        tracing::warn!("材料目录 DIY 约定不一致: {}", v);
    }
    Ok(())
}

/// 列出 ENERGY STAR 推荐值低于规范最低值的条目
pub fn energy_star_violations(zones: &[ZoneRecord]) -> Vec<String> {
    let mut violations = Vec::new();
    for record in zones {
        let pairs = [
            ("attic", &record.energy_star.attic, RequirementLocation::CeilingAttic),
            ("walls", &record.energy_star.walls, RequirementLocation::WoodFrameWall),
            ("floor", &record.energy_star.floor, RequirementLocation::Floor),
        ];
        for (label, recommended, location) in pairs {
            let code = parse_requirement(record.requirements.get(location)).total();
            let star = parse_requirement(recommended).total();
            if let (Some(code), Some(star)) = (code, star) {
                if star < code {
                    violations.push(format!(
                        "zone {} {}: ENERGY STAR {} < 规范 {}",
                        record.number(),
                        label,
                        recommended,
                        record.requirements.get(location)
                    ));
                }
            }
        }
    }
    violations
}

pub(crate) fn check_energy_star(zones: &[ZoneRecord]) {
    for v in energy_star_violations(zones) {
        tracing::warn!("{}", v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{InstallLocation, ValueRange};
    use std::collections::BTreeMap;

    fn material(id: &str, diy: Option<ValueRange>, diy_friendly: bool) -> Material {
        Material {
            id: id.to_string(),
            name: id.to_string(),
            short_name: id.to_string(),
            r_value_per_inch: Some(ValueRange::new(3.0, 4.0)),
            cost_per_sq_ft_installed: ValueRange::new(1.0, 2.0),
            cost_per_sq_ft_diy: diy,
            diy_friendly,
            form: MaterialForm::Batt,
            best_for: vec![],
            applicable_locations: vec![InstallLocation::Walls],
            insights: BTreeMap::new(),
        }
    }

    #[test]
    fn test_catalog_invariant_both_directions() {
        let materials = vec![
            material("ok", Some(ValueRange::new(0.5, 1.0)), true),
            material("priced-not-friendly", Some(ValueRange::new(0.5, 1.0)), false),
            material("friendly-not-priced", None, true),
        ];
        let violations = catalog_invariant_violations(&materials);
        assert_eq!(violations.len(), 2);
        assert!(violations[0].starts_with("priced-not-friendly"));

        assert!(check_catalog_invariant(&materials, false).is_ok());
        assert!(matches!(
            check_catalog_invariant(&materials, true),
            Err(ReferenceDataError::CatalogInvariant(_))
        ));
    }

    #[test]
    fn test_check_materials_structure() {
        let dup = vec![material("a", None, false), material("a", None, false)];
        assert!(matches!(
            check_materials(&dup),
            Err(ReferenceDataError::DuplicateMaterial(_))
        ));

        let mut no_r = material("b", None, false);
        no_r.r_value_per_inch = None;
        assert!(matches!(
            check_materials(&[no_r.clone()]),
            Err(ReferenceDataError::MissingRValue(_))
        ));
        no_r.form = MaterialForm::Reflective;
        assert!(check_materials(&[no_r]).is_ok());

        let mut inverted = material("c", None, false);
        inverted.cost_per_sq_ft_installed = ValueRange::new(3.0, 1.0);
        assert!(matches!(
            check_materials(&[inverted]),
            Err(ReferenceDataError::InvalidRange { field: "costPerSqFtInstalled", .. })
        ));
    }
}
