// ==========================================
// 保温参考与估算引擎 - 参考数据错误类型
// ==========================================
// 说明: 参考数据来自编译期嵌入的可信文件,
//       此处错误意味着数据编写缺陷,而非运行期可恢复情况
// ==========================================

use thiserror::Error;

/// 参考数据加载/校验错误
#[derive(Error, Debug)]
pub enum ReferenceDataError {
    // ===== 解析错误 =====
    #[error("JSON 解析失败 ({table}): {source}")]
    Json {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("CSV 解析失败 ({table}): {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    // ===== 结构错误 =====
    #[error("气候区缺失: zone={0}")]
    MissingZone(u8),

    #[error("气候区重复: zone={0}")]
    DuplicateZone(u8),

    #[error("ZIP 前缀格式错误: {prefix}(必须为 3 位数字)")]
    InvalidZipPrefix { prefix: String },

    #[error("ZIP 前缀重复: {0}")]
    DuplicateZipPrefix(String),

    #[error("材料 ID 重复: {0}")]
    DuplicateMaterial(String),

    #[error("数值区间非法: material={material}, field={field}")]
    InvalidRange { material: String, field: &'static str },

    #[error("R 值/英寸缺失仅允许反射型材料: material={0}")]
    MissingRValue(String),

    // ===== 目录约定 =====
    #[error("材料目录 DIY 约定不一致: {0}")]
    CatalogInvariant(String),
}
