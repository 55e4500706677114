//! # arm-teach CLI
//!
//! 6 轴机械臂的示教-复现命令行工具。
//!
//! ```bash
//! # 配置默认总线与输出文件
//! arm-teach config set --bus sim0 --output joint_trajectory.txt
//!
//! # 录制关节轨迹（Ctrl-C 停止并保存）
//! arm-teach record --frequency 50
//!
//! # 按记录的时间间隔回放
//! arm-teach replay --input joint_trajectory.txt
//!
//! # 几何轨迹（运行到 Ctrl-C）
//! arm-teach circle --radius 50
//! arm-teach sweep --from 100,-50,250,0,90,0 --to 100,50,250,0,90,0
//! arm-teach waypoints --point 200,400,700 --point -200,0,700
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod commands;
mod config;
mod utils;

use commands::{
    CircleCommand, ConfigCommand, RecordCommand, ReplayCommand, StatusCommand, SweepCommand,
    WaypointsCommand,
};
use config::CliConfig;

/// arm-teach - 机械臂示教与轨迹工具
#[derive(Parser, Debug)]
#[command(name = "arm-teach")]
#[command(about = "Teach-and-replay tool for a 6-axis robot arm", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 配置管理
    #[command(subcommand)]
    Config(ConfigCommand),

    /// 录制关节角轨迹到文本文件
    Record {
        #[command(flatten)]
        args: RecordCommand,
    },

    /// 回放录制的关节角轨迹
    Replay {
        #[command(flatten)]
        args: ReplayCommand,
    },

    /// 查询机械臂状态
    Status {
        #[command(flatten)]
        args: StatusCommand,
    },

    /// 圆形轨迹
    Circle {
        #[command(flatten)]
        args: CircleCommand,
    },

    /// 直线往复
    Sweep {
        #[command(flatten)]
        args: SweepCommand,
    },

    /// 多点巡航
    Waypoints {
        #[command(flatten)]
        args: WaypointsCommand,
    },
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("arm_teach=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = CliConfig::load()?;

    // 中断信号只置位取消标志，各回路在拍边界检查
    let cancel = Arc::new(AtomicBool::new(false));
    {
        let flag = cancel.clone();
        ctrlc::set_handler(move || {
            println!();
            println!("🛑 收到中断信号，正在停止...");
            flag.store(true, Ordering::SeqCst);
        })
        .context("注册 Ctrl-C 处理器失败")?;
    }

    match cli.command {
        Commands::Config(cmd) => cmd.execute(),
        Commands::Record { args } => args.execute(&config, &cancel),
        Commands::Replay { args } => args.execute(&config, &cancel),
        Commands::Status { args } => args.execute(&config),
        Commands::Circle { args } => args.execute(&config, &cancel),
        Commands::Sweep { args } => args.execute(&config, &cancel),
        Commands::Waypoints { args } => args.execute(&config, &cancel),
    }
}
