use crate::core::error::{ConfigError, ConfigResult};
use crate::services::algorithm::PruneOrder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub solver: SolverConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// 为 false 时输出到 stderr，否则写入轮转日志文件
    pub to_file: bool,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            to_file: false,
            dir: "logs".to_string(),
            file: "steiner".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 求解器配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SolverConfig {
    /// 是否允许并行计算各终端的最短路径
    pub parallel: bool,
    /// 终端数量达到该阈值时才启用并行
    pub parallel_threshold: usize,
    pub prune_order: PruneOrder,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 16,
            prune_order: PruneOrder::Label,
        }
    }
}

impl SolverConfig {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn use_parallel(&self, terminals: usize) -> bool {
        self.parallel && terminals >= self.parallel_threshold
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.log.level, "info");
        assert!(!config.log.to_file);
        assert!(config.solver.parallel);
        assert_eq!(config.solver.prune_order, PruneOrder::Label);
    }

    #[test]
    fn test_config_load_save() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temporary file");

        let mut config = Config::default();
        config.solver.prune_order = PruneOrder::Insertion;
        config.solver.parallel_threshold = 4;
        let toml_content =
            toml::to_string_pretty(&config).expect("Failed to serialize config to TOML");
        temp_file
            .write_all(toml_content.as_bytes())
            .expect("Failed to write TOML content to temporary file");

        let loaded_config =
            Config::load(temp_file.path()).expect("Failed to load config from temporary file");
        assert_eq!(config, loaded_config);
    }

    #[test]
    fn test_config_save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temporary dir");
        let path = dir.path().join("steiner.toml");
        let config = Config::default();
        config.save(&path).expect("Failed to save config");
        assert_eq!(Config::load(&path).expect("Failed to load config"), config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_toml("[solver]\nparallel = false\n")
            .expect("Partial config should parse");
        assert!(!config.solver.parallel);
        assert_eq!(config.solver.parallel_threshold, 16);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml("[solver]\nprune_order = \"random\"\n"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            Config::load("/nonexistent/steiner.toml"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_use_parallel_threshold() {
        let solver = SolverConfig::default();
        assert!(!solver.use_parallel(3));
        assert!(solver.use_parallel(16));
        assert!(!SolverConfig::sequential().use_parallel(100));
    }
}
