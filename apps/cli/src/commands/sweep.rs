//! sweep 命令
//!
//! 两个位姿之间直线往复，带到位判定与端点停顿，运行到 Ctrl-C。

use crate::config::CliConfig;
use crate::utils::{connect_arm, enable_gate, parse_pose6};
use anyhow::Result;
use arm_link::ArmLink;
use arm_motion::patterns::{sweep, SweepConfig};
use clap::Args;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// 直线往复命令参数
#[derive(Args, Debug)]
pub struct SweepCommand {
    /// 端点 A：x,y,z,rx,ry,rz（mm / 度）
    #[arg(long, value_parser = parse_pose6, default_value = "100,-50,250,0,90,0")]
    pub from: [f64; 6],

    /// 端点 B：x,y,z,rx,ry,rz（mm / 度）
    #[arg(long, value_parser = parse_pose6, default_value = "100,50,250,0,90,0")]
    pub to: [f64; 6],

    /// 到位阈值（mm）
    #[arg(long, default_value_t = 5.0)]
    pub tolerance: f64,

    /// 端点停顿（毫秒）
    #[arg(long, default_value_t = 2000)]
    pub pause_ms: u64,

    /// 指令周期（毫秒）
    #[arg(long, default_value_t = 100)]
    pub period_ms: u64,

    /// 运动速度百分比
    #[arg(long, default_value_t = 100)]
    pub motion_speed: u8,

    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl SweepCommand {
    /// 执行直线往复
    pub fn execute(&self, config: &CliConfig, cancel: &AtomicBool) -> Result<()> {
        let bus = config.resolve_bus(self.bus.as_deref());
        let mut arm = connect_arm(&bus)?;
        enable_gate(&mut arm)?;

        let pattern = SweepConfig {
            pose_a: self.from,
            pose_b: self.to,
            tolerance_mm: self.tolerance,
            pause: Duration::from_millis(self.pause_ms),
            period: Duration::from_millis(self.period_ms),
            speed_pct: self.motion_speed,
        };

        println!("↔️  直线往复: A {:?} <-> B {:?}，按 Ctrl-C 停止", pattern.pose_a, pattern.pose_b);

        let stats = sweep::run(&mut arm, &pattern, cancel)?;
        arm.disconnect();

        println!(
            "✅ 已停止：{} 条位姿指令，时长 {:.1}s",
            stats.commands,
            stats.elapsed.as_secs_f64()
        );
        Ok(())
    }
}
