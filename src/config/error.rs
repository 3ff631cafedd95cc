// ==========================================
// 保温参考与估算引擎 - 配置层错误类型
// ==========================================

use thiserror::Error;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件解析失败: {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("配置参数非法: {0}")]
    Invalid(String),
}
