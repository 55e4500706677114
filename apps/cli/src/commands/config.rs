//! config 命令
//!
//! 管理默认总线、采样频率与轨迹文件路径。

use crate::config::{config_file, CliConfig};
use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// 配置命令
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// 设置配置项
    Set {
        /// 默认总线标识
        #[arg(short, long)]
        bus: Option<String>,

        /// 默认采样频率（Hz）
        #[arg(short, long)]
        frequency: Option<f64>,

        /// 默认轨迹文件路径
        #[arg(short, long)]
        trajectory: Option<PathBuf>,
    },

    /// 显示当前配置
    Show,

    /// 打印配置文件路径
    Path,
}

impl ConfigCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            ConfigCommand::Set {
                bus,
                frequency,
                trajectory,
            } => {
                let mut config = CliConfig::load()?;

                if let Some(bus) = bus {
                    println!("✅ 默认总线: {bus}");
                    config.bus = Some(bus);
                }
                if let Some(frequency) = frequency {
                    println!("✅ 默认采样频率: {frequency} Hz");
                    config.frequency_hz = Some(frequency);
                }
                if let Some(trajectory) = trajectory {
                    println!("✅ 默认轨迹文件: {}", trajectory.display());
                    config.trajectory = Some(trajectory);
                }

                config.save()
            }

            ConfigCommand::Show => {
                let config = CliConfig::load()?;
                println!("bus        = {}", config.resolve_bus(None));
                println!("frequency  = {} Hz", config.resolve_frequency(None));
                println!(
                    "trajectory = {}",
                    config.resolve_trajectory(None).display()
                );
                Ok(())
            }

            ConfigCommand::Path => {
                println!("{}", config_file()?.display());
                Ok(())
            }
        }
    }
}
