//! record 命令
//!
//! 固定频率录制关节角轨迹到文本文件，Ctrl-C 停止并保存。

use crate::config::CliConfig;
use crate::utils::connect_arm;
use anyhow::Result;
use arm_link::ArmLink;
use arm_motion::Sampler;
use arm_trajectory::TrajectoryWriter;
use clap::Args;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

/// 录制命令参数
#[derive(Args, Debug)]
pub struct RecordCommand {
    /// 输出文件路径（覆盖配置）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 采样频率（Hz，覆盖配置）
    #[arg(short, long)]
    pub frequency: Option<f64>,

    /// 总线标识（覆盖配置）
    #[arg(short, long)]
    pub bus: Option<String>,
}

impl RecordCommand {
    /// 执行录制
    pub fn execute(&self, config: &CliConfig, cancel: &AtomicBool) -> Result<()> {
        let bus = config.resolve_bus(self.bus.as_deref());
        let output = config.resolve_trajectory(self.output.clone());
        let frequency = config.resolve_frequency(self.frequency);

        let mut arm = connect_arm(&bus)?;

        let writer = TrajectoryWriter::create(&output)?;
        println!("🔴 以 {frequency} Hz 录制到 {}", output.display());
        println!("💡 按 Ctrl-C 停止录制并保存");

        let sampler = Sampler::new(&mut arm, writer, frequency)?;
        let stats = sampler.run(cancel)?;
        arm.disconnect();

        println!(
            "✅ 已保存 {} 个采样到 {}（跳过 {} 拍，时长 {:.1}s）",
            stats.samples,
            output.display(),
            stats.skipped,
            stats.elapsed.as_secs_f64()
        );
        Ok(())
    }
}
