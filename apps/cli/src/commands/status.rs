//! status 命令
//!
//! 一次性查询并打印驱动器使能状态、关节角与末端位姿。

use crate::config::CliConfig;
use crate::utils::connect_arm;
use anyhow::Result;
use arm_link::ArmLink;
use clap::Args;

/// 状态查询命令参数
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl StatusCommand {
    /// 执行状态查询
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let bus = config.resolve_bus(self.bus.as_deref());
        let mut arm = connect_arm(&bus)?;

        let drivers = arm.driver_enable_status()?;
        println!(
            "⚡ 驱动器使能: {}/6 {}",
            drivers.enabled_count(),
            if drivers.all_enabled() { "✅" } else { "❌" }
        );

        match arm.joint_angles()? {
            Some(joints) => println!("📐 关节角 (度): {joints}"),
            None => println!("📐 关节角: 本拍无数据"),
        }

        let pose = arm.end_pose()?;
        let [x, y, z] = pose.position_mm();
        println!(
            "📍 末端位姿: x={x:.1}mm y={y:.1}mm z={z:.1}mm rx={:.1} ry={:.1} rz={:.1}",
            pose.rx as f64 / 1000.0,
            pose.ry as f64 / 1000.0,
            pose.rz as f64 / 1000.0
        );

        arm.disconnect();
        Ok(())
    }
}
