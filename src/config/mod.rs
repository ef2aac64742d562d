// ==========================================
// 钻井排程服务 - 配置层
// ==========================================
// 职责: 服务配置管理,支持配置文件 + 环境变量覆写
// ==========================================

pub mod config_manager;

// 重导出核心配置管理器
pub use config_manager::{config_keys, env_keys, ConfigError, ConfigManager, ServiceConfig};
