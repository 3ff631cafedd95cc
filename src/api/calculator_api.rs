// ==========================================
// 保温参考与估算引擎 - 计算器 API
// ==========================================
// 职责: 校验原始输入 → 调用引擎 → 返回结果
// 约定: 输入非法返回 InvalidInput;查无结果返回 NotFound;
//       成本/厚度/推荐的空结果是合法结果,不是错误
// ==========================================

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::error::{
    validate_area, validate_positive, validate_r_upgrade, validate_r_value,
    validate_upgrade_cost, validate_zip, validate_zone_number, ApiError, ApiResult,
};
use crate::config::{CalculatorConfig, ConfigError};
use crate::domain::material::Material;
use crate::domain::quiz::QuizAnswers;
use crate::domain::types::{
    InstallLocation, InstallMethod, MaterialForm, RequirementLocation, SavingsLocation,
    ZoneNumber,
};
use crate::domain::zone::{StateZones, ZoneRecord};
use crate::engine::cost::{CostEstimator, CostResult};
use crate::engine::recommendation::{QuizSession, QuizStep, Recommendation, RecommendationEngine};
use crate::engine::requirement::{
    format_location_label, format_requirement, parse_requirement, ParsedRequirement,
};
use crate::engine::savings::{SavingsInputs, SavingsProjector, SavingsResult};
use crate::engine::thickness::{MaterialSelection, ThicknessResult, ThicknessSolver};
use crate::engine::zone_resolver::ZoneResolver;
use crate::i18n::t;
use crate::reference::ReferenceData;

/// 气候区输入: 手选区号或 ZIP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneInput {
    Number(u8),
    Zip(String),
}

/// 节能测算请求(原始输入)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRequest {
    pub current_r_value: f64,
    pub target_r_value: f64,
    pub zone: ZoneInput,
    pub home_sq_ft: f64,
    pub annual_energy_bill: f64,
    pub location: SavingsLocation,
    #[serde(default)]
    pub upgrade_cost: f64,
}

/// 要求表展示行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementRow {
    pub location: RequirementLocation,
    pub label: String,
    pub raw: String,
    pub display: String,
    pub parsed: ParsedRequirement,
}

// ==========================================
// InsulationApi - 计算器 API
// ==========================================

/// 计算器API
///
/// 职责：
/// 1. 气候区查询(ZIP / 区号 / 州)
/// 2. 成本、厚度、节能测算
/// 3. 材料推荐与问卷
pub struct InsulationApi {
    data: Arc<ReferenceData>,
    config: CalculatorConfig,
}

impl InsulationApi {
    /// 创建新的InsulationApi实例
    pub fn new(data: Arc<ReferenceData>, config: CalculatorConfig) -> Self {
        Self { data, config }
    }

    /// 按配置加载嵌入参考数据
    ///
    /// # 返回
    /// - Err(ApiError::Config): 配置参数非法
    /// - Err(ApiError::ReferenceData): 严格模式下材料目录约定不一致
    pub fn from_config(config: CalculatorConfig) -> ApiResult<Self> {
        let problems = config.validate();
        if !problems.is_empty() {
            return Err(ConfigError::Invalid(problems.join("; ")).into());
        }
        let data = ReferenceData::load_embedded(config.strict_catalog)?;
        Ok(Self::new(Arc::new(data), config))
    }

    pub fn with_defaults() -> ApiResult<Self> {
        Self::from_config(CalculatorConfig::default())
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn reference_data(&self) -> &ReferenceData {
        &self.data
    }

    fn resolver(&self) -> ZoneResolver<'_> {
        ZoneResolver::new(&self.data)
    }

    // ==========================================
    // 气候区查询
    // ==========================================

    /// ZIP → 气候区
    ///
    /// # 返回
    /// - Err(ApiError::InvalidInput): ZIP 不是 5 位数字
    /// - Err(ApiError::NotFound): 前缀未收录,调用方应提示手选
    pub fn zone_by_zip(&self, zip: &str) -> ApiResult<&ZoneRecord> {
        validate_zip(zip)?;
        self.resolver()
            .by_zip(zip)
            .ok_or_else(|| ApiError::NotFound(format!("{} (zip={})", t("zone.not_found"), zip)))
    }

    /// 区号 → 气候区
    pub fn zone(&self, zone: u8) -> ApiResult<&ZoneRecord> {
        let zone = validate_zone_number(zone)?;
        Ok(self.resolver().by_number(zone))
    }

    pub fn resolve_zone(&self, input: &ZoneInput) -> ApiResult<&ZoneRecord> {
        match input {
            ZoneInput::Number(n) => self.zone(*n),
            ZoneInput::Zip(zip) => self.zone_by_zip(zip),
        }
    }

    pub fn all_zones(&self) -> &[ZoneRecord] {
        self.resolver().all()
    }

    /// 州代码 → 气候区分布
    pub fn state_zones(&self, code: &str) -> ApiResult<&StateZones> {
        if code.trim().is_empty() {
            return Err(ApiError::InvalidInput("州代码不能为空".to_string()));
        }
        self.resolver()
            .state(code)
            .ok_or_else(|| ApiError::NotFound(format!("州代码不存在: {}", code)))
    }

    /// 气候区的 IECC 要求表(含展示文本)
    pub fn requirement_rows(&self, zone: ZoneNumber) -> Vec<RequirementRow> {
        self.resolver()
            .by_number(zone)
            .requirements
            .entries()
            .map(|(location, raw)| RequirementRow {
                location,
                label: format_location_label(location.as_str()),
                raw: raw.to_string(),
                display: format_requirement(raw),
                parsed: parse_requirement(raw),
            })
            .collect()
    }

    // ==========================================
    // 计算器
    // ==========================================

    pub fn materials(&self) -> &[Material] {
        self.data.materials()
    }

    /// 成本估算
    pub fn estimate_cost(
        &self,
        area_sq_ft: f64,
        location: InstallLocation,
        method: InstallMethod,
    ) -> ApiResult<Vec<CostResult>> {
        let area = validate_area(area_sq_ft)?;
        Ok(CostEstimator::new(&self.data).estimate(area, location, method))
    }

    /// 厚度求解
    ///
    /// # 参数
    /// - material_id: None 表示全部材料
    pub fn solve_thickness(
        &self,
        target_r_value: f64,
        material_id: Option<&str>,
    ) -> ApiResult<Vec<ThicknessResult>> {
        let target = validate_r_value(target_r_value)?;

        let selection = match material_id {
            None => MaterialSelection::All,
            Some(id) => {
                let material = self
                    .data
                    .material(id)
                    .ok_or_else(|| ApiError::NotFound(format!("材料不存在: {}", id)))?;
                if material.form == MaterialForm::Reflective {
                    return Err(ApiError::InvalidInput(format!(
                        "反射型材料没有 R 值/英寸,无法计算厚度: {}",
                        id
                    )));
                }
                MaterialSelection::One(id)
            }
        };

        Ok(ThicknessSolver::new(&self.data).solve(target, selection))
    }

    /// 节能/投资回报测算
    pub fn project_savings(&self, request: &SavingsRequest) -> ApiResult<SavingsResult> {
        validate_r_upgrade(request.current_r_value, request.target_r_value)?;
        validate_positive("房屋面积", request.home_sq_ft)?;
        validate_positive("年能源账单", request.annual_energy_bill)?;
        let upgrade_cost = validate_upgrade_cost(request.upgrade_cost)?;
        let zone = self.resolve_zone(&request.zone)?.number();

        let inputs = SavingsInputs {
            current_r_value: request.current_r_value,
            target_r_value: request.target_r_value,
            zone,
            home_sq_ft: request.home_sq_ft,
            annual_energy_bill: request.annual_energy_bill,
            location: request.location,
            upgrade_cost,
        };

        SavingsProjector::new(&self.config)
            .project(&inputs)
            .ok_or_else(|| ApiError::InternalError("校验通过但测算无结果".to_string()))
    }

    // ==========================================
    // 推荐
    // ==========================================

    /// 材料推荐;无匹配材料时返回 Ok(None)
    pub fn recommend(&self, answers: &QuizAnswers) -> ApiResult<Option<Recommendation>> {
        Ok(RecommendationEngine::new(&self.data, &self.config).recommend(answers))
    }

    /// 对已完成的问卷生成推荐
    pub fn recommend_session(&self, session: &QuizSession) -> ApiResult<Option<Recommendation>> {
        let answers = session.answers()?;
        self.recommend(&answers)
    }

    /// 问卷气候区步骤以 ZIP 作答
    pub fn quiz_answer_zip(&self, session: &mut QuizSession, zip: &str) -> ApiResult<QuizStep> {
        validate_zip(zip)?;
        Ok(session.answer_zip(&self.resolver(), zip)?)
    }
}

/// 解析枚举型原始输入(部位、安装方式、问卷答案)
pub fn parse_input<T>(field: &str, raw: &str) -> ApiResult<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>()
        .map_err(|e| ApiError::InvalidInput(format!("{}: {}", field, e)))
}
