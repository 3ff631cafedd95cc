// ==========================================
// 保温参考与估算引擎 - 配置管理器
// ==========================================
// 职责: 计算器假设参数的加载、校验、快照
// 存储: 可选 JSON 覆写文件(缺省使用内置值)
// ==========================================

use crate::config::calculator_config::CalculatorConfig;
use crate::config::error::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// 配置目录下的应用子目录名
const APP_DIR_NAME: &str = "insulation-advisor";

/// 配置文件名
const CONFIG_FILE_NAME: &str = "config.json";

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    source: Option<PathBuf>,
    config: CalculatorConfig,
}

impl ConfigManager {
    /// 使用内置默认值
    pub fn new() -> Self {
        Self::default()
    }

    /// 从已构造的配置创建(测试/嵌入场景)
    pub fn from_config(config: CalculatorConfig) -> Result<Self, ConfigError> {
        Self::check(&config)?;
        Ok(Self {
            source: None,
            config,
        })
    }

    /// 从 JSON 文件加载,文件必须存在
    ///
    /// # 参数
    /// - path: 配置文件路径
    ///
    /// # 返回
    /// - Ok(ConfigManager): 加载并校验通过
    /// - Err(ConfigError): 读取/解析/校验失败
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let config: CalculatorConfig =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        Self::check(&config)?;

        tracing::info!(path = %path.display(), "已加载计算器配置");
        Ok(Self {
            source: Some(path.to_path_buf()),
            config,
        })
    }

    /// 加载配置,文件不存在时回退到默认值
    ///
    /// # 参数
    /// - path: 显式路径;None 时使用 default_config_path()
    ///
    /// # 说明
    /// 文件存在但内容非法时返回错误,不静默回退
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => Self::default_config_path(),
        };

        match candidate {
            Some(p) if p.exists() => Self::load(&p),
            Some(p) => {
                tracing::debug!(path = %p.display(), "配置文件不存在,使用默认配置");
                Ok(Self::new())
            }
            None => {
                tracing::debug!("无法确定配置目录,使用默认配置");
                Ok(Self::new())
            }
        }
    }

    /// 默认配置文件路径: $CONFIG_DIR/insulation-advisor/config.json
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// 配置来源文件(默认配置时为 None)
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 当前配置快照(JSON)
    ///
    /// # 用途
    /// - 随测算结果输出,保证结果可复现
    pub fn snapshot(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(&self.config).map_err(ConfigError::Serialize)
    }

    fn check(config: &CalculatorConfig) -> Result<(), ConfigError> {
        let problems = config.validate();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems.join("; ")))
        }
    }
}
