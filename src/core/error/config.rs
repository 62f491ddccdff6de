//! 配置错误类型

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("读取配置文件失败 {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("配置解析失败: {0}")]
    Parse(String),

    #[error("配置序列化失败: {0}")]
    Serialize(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err.to_string())
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
