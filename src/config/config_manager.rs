// ==========================================
// 钻井排程服务 - 配置管理器
// ==========================================
// 职责: 配置加载、覆写管理
// 优先级: 内置默认值 < JSON 配置文件 < 环境变量
// ==========================================

use crate::domain::types::AssignmentMode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const HOST: &str = "host";
    pub const PORT: &str = "port";
    pub const ASSIGNMENT_MODE: &str = "assignment_mode";
    pub const MAX_MODEL_VARIABLES: &str = "max_model_variables";

    /// 全部可覆写的键
    pub const ALL: [&str; 4] = [HOST, PORT, ASSIGNMENT_MODE, MAX_MODEL_VARIABLES];
}

// ==========================================
// 环境变量名
// ==========================================
pub mod env_keys {
    pub const CONFIG_PATH: &str = "WELL_SCHED_CONFIG";
    pub const HOST: &str = "WELL_SCHED_HOST";
    pub const PORT: &str = "WELL_SCHED_PORT";
    pub const ASSIGNMENT_MODE: &str = "WELL_SCHED_ASSIGNMENT_MODE";
    pub const MAX_MODEL_VARIABLES: &str = "WELL_SCHED_MAX_VARIABLES";

    /// 配置键 -> 环境变量名
    pub fn for_key(key: &str) -> Option<&'static str> {
        use super::config_keys;
        match key {
            config_keys::HOST => Some(HOST),
            config_keys::PORT => Some(PORT),
            config_keys::ASSIGNMENT_MODE => Some(ASSIGNMENT_MODE),
            config_keys::MAX_MODEL_VARIABLES => Some(MAX_MODEL_VARIABLES),
            _ => None,
        }
    }
}

// ==========================================
// ConfigError - 配置错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: path={path}, error={source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: path={path}, error={source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("配置项无效: key={key}, value={value}, reason={reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },
}

// ==========================================
// ServiceConfig - 服务配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// 请求未指定 assignment_mode 时使用的模式
    pub assignment_mode: AssignmentMode,
    /// 单次请求允许的最大决策变量数 (wells × timeframes)，0 表示不限制
    pub max_model_variables: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            assignment_mode: AssignmentMode::default(),
            max_model_variables: 100_000,
        }
    }
}

impl ServiceConfig {
    /// 监听地址 host:port
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
pub struct ConfigManager {
    file_path: Option<PathBuf>,
    overrides: HashMap<String, String>,
}

impl ConfigManager {
    /// 创建新的 ConfigManager 实例
    ///
    /// # 参数
    /// - file_path: 可选 JSON 配置文件路径
    /// - overrides: 配置键 -> 字符串值 的覆写表（优先级最高）
    pub fn new(file_path: Option<PathBuf>, overrides: HashMap<String, String>) -> Self {
        Self {
            file_path,
            overrides,
        }
    }

    /// 从进程环境变量创建 ConfigManager
    pub fn from_env() -> Self {
        let file_path = std::env::var(env_keys::CONFIG_PATH)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let overrides = config_keys::ALL
            .iter()
            .filter_map(|key| {
                let env_name = env_keys::for_key(key)?;
                std::env::var(env_name).ok().map(|v| (key.to_string(), v))
            })
            .collect();

        Self::new(file_path, overrides)
    }

    /// 解析最终配置
    pub fn load(&self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.file_path {
            Some(path) => Self::read_file(path)?,
            None => ServiceConfig::default(),
        };

        // 按固定顺序应用，保证错误信息稳定
        for key in config_keys::ALL {
            if let Some(value) = self.overrides.get(key) {
                Self::apply_override(&mut config, key, value)?;
            }
        }

        if config.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: config_keys::HOST.to_string(),
                value: config.host.clone(),
                reason: "监听地址不能为空".to_string(),
            });
        }

        tracing::debug!(
            host = %config.host,
            port = config.port,
            assignment_mode = %config.assignment_mode,
            max_model_variables = config.max_model_variables,
            "配置加载完成"
        );

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<ServiceConfig, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    fn apply_override(
        config: &mut ServiceConfig,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };
        let trimmed = value.trim();

        match key {
            config_keys::HOST => config.host = trimmed.to_string(),
            config_keys::PORT => {
                config.port = trimmed.parse::<u16>().map_err(|e| invalid(e.to_string()))?
            }
            config_keys::ASSIGNMENT_MODE => {
                config.assignment_mode = trimmed.parse::<AssignmentMode>().map_err(invalid)?
            }
            config_keys::MAX_MODEL_VARIABLES => {
                config.max_model_variables =
                    trimmed.parse::<u64>().map_err(|e| invalid(e.to_string()))?
            }
            _ => return Err(invalid("未知配置键".to_string())),
        }
        Ok(())
    }
}
