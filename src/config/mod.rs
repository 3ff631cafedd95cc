// ==========================================
// 保温参考与估算引擎 - 配置层
// ==========================================
// 职责: 计算器假设参数(权重表、涨幅、默认估价)
// 存储: 内置默认值 + 可选 JSON 覆写文件
// ==========================================

pub mod calculator_config;
pub mod config_manager;
pub mod error;

// 重导出核心配置类型
pub use calculator_config::{CalculatorConfig, UpgradeCostEstimate};
pub use config_manager::ConfigManager;
pub use error::ConfigError;
