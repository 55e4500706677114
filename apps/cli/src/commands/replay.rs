//! replay 命令
//!
//! 读入轨迹文件并按记录的时间间隔回放。回放前必须通过使能握手。

use crate::config::CliConfig;
use crate::utils::{connect_arm, enable_gate};
use anyhow::Result;
use arm_link::ArmLink;
use arm_motion::{Player, PlayerConfig};
use arm_trajectory::Trajectory;
use clap::Args;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

/// 建议的回放速度倍数上限，超过时提示
const RECOMMENDED_RATE: f64 = 2.0;

/// 回放命令参数
#[derive(Args, Debug)]
pub struct ReplayCommand {
    /// 轨迹文件路径（缺省用配置的轨迹文件）
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 回放速度倍数（1.0 = 原速，上限 5.0）
    #[arg(short, long, default_value_t = 1.0)]
    pub speed: f64,

    /// 运动模式速度百分比
    #[arg(long, default_value_t = 100)]
    pub motion_speed: u8,

    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl ReplayCommand {
    /// 执行回放
    pub fn execute(&self, config: &CliConfig, cancel: &AtomicBool) -> Result<()> {
        let input = config.resolve_trajectory(self.input.clone());

        if !input.exists() {
            anyhow::bail!("轨迹文件不存在: {}", input.display());
        }

        // 回放开始前整文件读入内存
        let trajectory = Trajectory::load(&input)?;
        if trajectory.is_empty() {
            anyhow::bail!("轨迹文件没有有效采样: {}", input.display());
        }

        println!("📁 轨迹: {}", input.display());
        println!(
            "   {} 个采样，时长 {:.1}s，速度 {:.2}x",
            trajectory.len(),
            trajectory.duration().unwrap_or_default(),
            self.speed
        );
        if self.speed > RECOMMENDED_RATE {
            println!("⚠️  速度超过建议值 {RECOMMENDED_RATE:.1}x，确认回放环境安全");
        }

        let bus = config.resolve_bus(self.bus.as_deref());
        let mut arm = connect_arm(&bus)?;
        enable_gate(&mut arm)?;

        println!("🔄 开始回放，按 Ctrl-C 停止");
        let player_config = PlayerConfig {
            rate: self.speed,
            speed_pct: self.motion_speed,
        };
        let mut player = Player::new(&mut arm, player_config)?;
        let stats = player.play(&trajectory, cancel)?;
        arm.disconnect();

        if stats.cancelled {
            println!(
                "⚠️  回放被中断：已发出 {}/{} 条指令",
                stats.commands,
                trajectory.len()
            );
        } else {
            println!(
                "✅ 回放完成：{} 条指令，时长 {:.1}s",
                stats.commands,
                stats.elapsed.as_secs_f64()
            );
        }
        Ok(())
    }
}
