//! 直线往复
//!
//! 在位姿 A、B 之间往复运动。每拍重发当前目标并查询末端位姿，
//! 进入到位阈值后切换目标并在端点停顿。
//!
//! 到位判定是轮询式的粗粒度启发：只比较 XYZ 的欧氏距离平方与
//! 固定阈值，不看速度和加速度。

use crate::error::MotionError;
use crate::patterns::{pose6_units, PatternStats};
use arm_link::{ArmLink, EndPose, MotionMode};
use spin_sleep::SpinSleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// 直线往复配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// 端点 A（x, y, z, rx, ry, rz；mm / 度）
    pub pose_a: [f64; 6],

    /// 端点 B
    pub pose_b: [f64; 6],

    /// 到位阈值（mm）
    pub tolerance_mm: f64,

    /// 到达端点后的停顿
    pub pause: Duration,

    /// 指令发送周期
    pub period: Duration,

    /// 运动模式速度百分比
    pub speed_pct: u8,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            pose_a: [100.0, -50.0, 250.0, 0.0, 90.0, 0.0],
            pose_b: [100.0, 50.0, 250.0, 0.0, 90.0, 0.0],
            tolerance_mm: 5.0,
            pause: Duration::from_secs(2),
            period: Duration::from_millis(100),
            speed_pct: 100,
        }
    }
}

/// 当前位姿是否进入目标的到位阈值
fn reached(current: &EndPose, target: &[f64; 6], tolerance_mm: f64) -> bool {
    let [x, y, z] = current.position_mm();
    let dx = x - target[0];
    let dy = y - target[1];
    let dz = z - target[2];
    dx * dx + dy * dy + dz * dz < tolerance_mm * tolerance_mm
}

/// 运行直线往复，直到取消标志被置位
pub fn run(
    link: &mut dyn ArmLink,
    config: &SweepConfig,
    cancel: &AtomicBool,
) -> Result<PatternStats, MotionError> {
    let start = Instant::now();
    let sleeper = SpinSleeper::default();
    let mode = MotionMode::can_pose(config.speed_pct);

    // 先朝 A 出发，到位后开始往 B
    let mut target = config.pose_a;
    let mut heading_to_b = false;
    let mut commands = 0usize;

    tracing::info!(a = ?config.pose_a, b = ?config.pose_b, "starting line sweep");

    while !cancel.load(Ordering::SeqCst) {
        let tick = Instant::now();

        link.set_motion_mode(mode)?;
        link.send_pose_command(pose6_units(target))?;
        commands += 1;

        let current = link.end_pose()?;
        if reached(&current, &target, config.tolerance_mm) {
            heading_to_b = !heading_to_b;
            target = if heading_to_b { config.pose_b } else { config.pose_a };
            tracing::info!(?target, "endpoint reached, reversing");
            std::thread::sleep(config.pause);
            continue;
        }

        if let Some(rest) = config.period.checked_sub(tick.elapsed()) {
            sleeper.sleep(rest);
        }
    }

    tracing::info!(commands, "line sweep cancelled");
    Ok(PatternStats {
        commands,
        elapsed: start.elapsed(),
    })
}
