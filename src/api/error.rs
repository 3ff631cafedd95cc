// ==========================================
// 保温参考与估算引擎 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,把各层错误转换为调用方可处理的分类
// 分类: InvalidInput(调用前拦截) / NotFound(可恢复,转手选) / 其余为缺陷
// ==========================================

use crate::config::ConfigError;
use crate::domain::types::ZoneNumber;
use crate::engine::recommendation::QuizError;
use crate::engine::zone_resolver::is_valid_zip;
use crate::i18n::t;
use crate::reference::ReferenceDataError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入与查询
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 问卷状态机
    // ==========================================
    #[error("问卷操作无效: {0}")]
    Quiz(QuizError),

    // ==========================================
    // 配置与参考数据
    // ==========================================
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("参考数据错误: {0}")]
    ReferenceData(#[from] ReferenceDataError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 QuizError 转换
// ZIP 未收录属于可恢复的 NotFound,其余为状态机使用错误
// ==========================================
impl From<QuizError> for ApiError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::ZoneNotFound { zip } => {
                ApiError::NotFound(format!("{} (zip={})", t("zone.not_found"), zip))
            }
            other => ApiError::Quiz(other),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 输入校验辅助函数
// ==========================================

/// 正数校验(面积、账单等)
pub fn validate_positive(field: &str, value: f64) -> ApiResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ApiError::InvalidInput(format!("{}必须为正数: {}", field, value)))
    }
}

/// 面积校验(平方英尺)
pub fn validate_area(area_sq_ft: f64) -> ApiResult<f64> {
    validate_positive("面积", area_sq_ft)
}

/// 目标 R 值校验
pub fn validate_r_value(r_value: f64) -> ApiResult<f64> {
    validate_positive("R值", r_value)
}

/// R 值升级校验: 当前 ≥ 0,目标 > 当前
///
/// 返回:
/// - Ok(()) 可以测算
/// - Err(ApiError::InvalidInput) 目标不高于当前,或数值非法
pub fn validate_r_upgrade(current_r_value: f64, target_r_value: f64) -> ApiResult<()> {
    if !current_r_value.is_finite() || current_r_value < 0.0 {
        return Err(ApiError::InvalidInput(format!(
            "当前R值必须为非负数: {}",
            current_r_value
        )));
    }
    validate_r_value(target_r_value)?;
    if target_r_value <= current_r_value {
        return Err(ApiError::InvalidInput(format!(
            "目标R值必须高于当前R值: current=R-{}, target=R-{}",
            current_r_value, target_r_value
        )));
    }
    Ok(())
}

/// 改造费用校验: 0 表示使用默认估价
pub fn validate_upgrade_cost(cost: f64) -> ApiResult<f64> {
    if cost.is_finite() && cost >= 0.0 {
        Ok(cost)
    } else {
        Err(ApiError::InvalidInput(format!("改造费用必须为非负数: {}", cost)))
    }
}

/// ZIP 校验: 去掉非数字后恰好 5 位
pub fn validate_zip(zip: &str) -> ApiResult<()> {
    if is_valid_zip(zip) {
        Ok(())
    } else {
        Err(ApiError::InvalidInput(format!("{}: {:?}", t("zone.invalid_zip"), zip)))
    }
}

/// 区号校验(1..=8)
pub fn validate_zone_number(n: u8) -> ApiResult<ZoneNumber> {
    ZoneNumber::try_from(n).map_err(ApiError::InvalidInput)
}
