//! CLI 配置
//!
//! `~/.config/arm-teach/config.toml`（平台相应的配置目录），命令行
//! 参数优先于配置文件，配置文件优先于内置默认值。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// 内置默认总线
pub const DEFAULT_BUS: &str = "sim0";

/// 内置默认采样频率（Hz）
pub const DEFAULT_FREQUENCY_HZ: f64 = 50.0;

/// 内置默认轨迹文件名
pub const DEFAULT_TRAJECTORY: &str = "joint_trajectory.txt";

/// 配置目录
fn config_dir() -> Result<PathBuf> {
    let mut path = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法确定配置目录"))?;
    path.push("arm-teach");
    Ok(path)
}

/// 配置文件路径
pub fn config_file() -> Result<PathBuf> {
    let mut path = config_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// CLI 配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// 默认总线标识
    pub bus: Option<String>,

    /// 默认采样频率（Hz）
    pub frequency_hz: Option<f64>,

    /// 默认轨迹文件路径
    pub trajectory: Option<PathBuf>,
}

impl CliConfig {
    /// 加载配置（文件不存在时返回默认值）
    pub fn load() -> Result<Self> {
        let path = config_file()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("读取配置文件失败: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("解析配置文件失败: {}", path.display()))
    }

    /// 保存配置
    pub fn save(&self) -> Result<()> {
        let dir = config_dir()?;
        fs::create_dir_all(&dir).context("创建配置目录失败")?;

        let path = config_file()?;
        let content = toml::to_string_pretty(self).context("序列化配置失败")?;
        fs::write(&path, content)
            .with_context(|| format!("写入配置文件失败: {}", path.display()))?;
        Ok(())
    }

    /// 解析总线标识：命令行 > 配置文件 > 默认值
    pub fn resolve_bus(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.bus.clone())
            .unwrap_or_else(|| DEFAULT_BUS.to_string())
    }

    /// 解析采样频率
    pub fn resolve_frequency(&self, flag: Option<f64>) -> f64 {
        flag.or(self.frequency_hz).unwrap_or(DEFAULT_FREQUENCY_HZ)
    }

    /// 解析轨迹文件路径
    pub fn resolve_trajectory(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.trajectory.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TRAJECTORY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_precedence() {
        let config = CliConfig {
            bus: Some("can1".to_string()),
            frequency_hz: Some(25.0),
            trajectory: None,
        };

        // 命令行参数优先
        assert_eq!(config.resolve_bus(Some("can0")), "can0");
        assert_eq!(config.resolve_frequency(Some(100.0)), 100.0);

        // 其次配置文件
        assert_eq!(config.resolve_bus(None), "can1");
        assert_eq!(config.resolve_frequency(None), 25.0);

        // 最后内置默认
        assert_eq!(
            config.resolve_trajectory(None),
            PathBuf::from(DEFAULT_TRAJECTORY)
        );

        let empty = CliConfig::default();
        assert_eq!(empty.resolve_bus(None), DEFAULT_BUS);
        assert_eq!(empty.resolve_frequency(None), DEFAULT_FREQUENCY_HZ);
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CliConfig {
            bus: Some("sim0".to_string()),
            frequency_hz: Some(50.0),
            trajectory: Some(PathBuf::from("/tmp/traj.txt")),
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let back: CliConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.bus.as_deref(), Some("sim0"));
        assert_eq!(back.frequency_hz, Some(50.0));
        assert_eq!(back.trajectory, Some(PathBuf::from("/tmp/traj.txt")));
    }
}
