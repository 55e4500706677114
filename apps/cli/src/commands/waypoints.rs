//! waypoints 命令
//!
//! 依次走过一组空间点并循环，运行到 Ctrl-C。

use crate::config::CliConfig;
use crate::utils::{connect_arm, enable_gate, parse_point3};
use anyhow::Result;
use arm_link::ArmLink;
use arm_motion::patterns::{waypoints, WaypointConfig};
use clap::Args;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

/// 多点巡航命令参数
#[derive(Args, Debug)]
pub struct WaypointsCommand {
    /// 目标点 x,y,z（mm），可多次给出；缺省用内置示例点位
    #[arg(short, long = "point", value_parser = parse_point3)]
    pub points: Vec<[f64; 3]>,

    /// 固定姿态 rx,ry,rz（度）
    #[arg(long, value_parser = parse_point3, default_value = "0,0,0")]
    pub orientation: [f64; 3],

    /// 每个点的驻留时间（毫秒）
    #[arg(long, default_value_t = 1200)]
    pub dwell_ms: u64,

    /// 运动速度百分比
    #[arg(long, default_value_t = 100)]
    pub motion_speed: u8,

    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl WaypointsCommand {
    /// 执行多点巡航
    pub fn execute(&self, config: &CliConfig, cancel: &AtomicBool) -> Result<()> {
        let bus = config.resolve_bus(self.bus.as_deref());
        let mut arm = connect_arm(&bus)?;
        enable_gate(&mut arm)?;

        let mut pattern = WaypointConfig {
            orientation_deg: self.orientation,
            dwell: Duration::from_millis(self.dwell_ms),
            speed_pct: self.motion_speed,
            ..WaypointConfig::default()
        };
        if !self.points.is_empty() {
            pattern.points_mm = self.points.clone();
        }

        println!(
            "🧭 多点巡航: {} 个点位，驻留 {}ms，按 Ctrl-C 停止",
            pattern.points_mm.len(),
            self.dwell_ms
        );

        let stats = waypoints::run(&mut arm, &pattern, cancel)?;
        arm.disconnect();

        println!(
            "✅ 已停止：{} 条位姿指令，时长 {:.1}s",
            stats.commands,
            stats.elapsed.as_secs_f64()
        );
        Ok(())
    }
}
