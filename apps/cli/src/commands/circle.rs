//! circle 命令
//!
//! 固定姿态在水平面画圆，运行到 Ctrl-C。

use crate::config::CliConfig;
use crate::utils::{connect_arm, enable_gate};
use anyhow::Result;
use arm_link::ArmLink;
use arm_motion::patterns::{circle, CircleConfig};
use clap::Args;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// 圆形轨迹命令参数
#[derive(Args, Debug)]
pub struct CircleCommand {
    /// 圆心 X（mm）
    #[arg(long, default_value_t = 156.0)]
    pub center_x: f64,

    /// 圆心 Y（mm）
    #[arg(long, default_value_t = 0.0)]
    pub center_y: f64,

    /// 平面高度 Z（mm）
    #[arg(long, default_value_t = 385.0)]
    pub height: f64,

    /// 半径（mm）
    #[arg(short, long, default_value_t = 50.0)]
    pub radius: f64,

    /// 每拍角度增量（度）
    #[arg(long, default_value_t = 1.0)]
    pub step: f64,

    /// 指令周期（毫秒）
    #[arg(long, default_value_t = 20)]
    pub period_ms: u64,

    /// 运动速度百分比
    #[arg(long, default_value_t = 100)]
    pub motion_speed: u8,

    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl CircleCommand {
    /// 执行圆形轨迹
    pub fn execute(&self, config: &CliConfig, cancel: &AtomicBool) -> Result<()> {
        let bus = config.resolve_bus(self.bus.as_deref());
        let mut arm = connect_arm(&bus)?;
        enable_gate(&mut arm)?;

        let pattern = CircleConfig {
            center_x_mm: self.center_x,
            center_y_mm: self.center_y,
            height_z_mm: self.height,
            radius_mm: self.radius,
            step_deg: self.step,
            period: Duration::from_millis(self.period_ms),
            speed_pct: self.motion_speed,
            ..CircleConfig::default()
        };

        println!(
            "⭕ 圆形轨迹: 圆心 ({}, {}, {})，半径 {}，按 Ctrl-C 停止",
            pattern.center_x_mm, pattern.center_y_mm, pattern.height_z_mm, pattern.radius_mm
        );

        let stats = circle::run(&mut arm, &pattern, cancel)?;
        arm.disconnect();

        println!(
            "✅ 已停止：{} 条位姿指令，时长 {:.1}s",
            stats.commands,
            stats.elapsed.as_secs_f64()
        );
        Ok(())
    }
}
