//! 多点巡航
//!
//! 以固定姿态依次走过一组空间点，每个点驻留一段时间，列表走完后
//! 从头循环，直到取消。不做到位判定，靠驻留时间让机械臂跟上。

use crate::error::MotionError;
use crate::patterns::{pose_units, PatternStats};
use arm_link::{ArmLink, MotionMode};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// 多点巡航配置
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointConfig {
    /// 目标点列表（x, y, z；mm），按序循环
    pub points_mm: Vec<[f64; 3]>,

    /// 全程保持不变的末端姿态（rx, ry, rz，度）
    pub orientation_deg: [f64; 3],

    /// 每个点的驻留时间
    pub dwell: Duration,

    /// 移动到首个点后的额外等待
    pub settle: Duration,

    /// 运动模式速度百分比
    pub speed_pct: u8,
}

impl Default for WaypointConfig {
    fn default() -> Self {
        WaypointConfig {
            points_mm: vec![
                [200.0, 400.0, 700.0],
                [-200.0, 0.0, 700.0],
                [200.0, -400.0, 700.0],
                [-200.0, 0.0, 700.0],
            ],
            orientation_deg: [0.0, 0.0, 0.0],
            dwell: Duration::from_millis(1200),
            settle: Duration::from_secs(3),
            speed_pct: 100,
        }
    }
}

/// 运行多点巡航，直到取消标志被置位
pub fn run(
    link: &mut dyn ArmLink,
    config: &WaypointConfig,
    cancel: &AtomicBool,
) -> Result<PatternStats, MotionError> {
    let Some(&first) = config.points_mm.first() else {
        return Err(MotionError::NoWaypoints);
    };

    let start = Instant::now();
    let mode = MotionMode::can_pose(config.speed_pct);

    tracing::info!(points = config.points_mm.len(), "starting waypoint patrol");
    link.set_motion_mode(mode)?;
    link.send_pose_command(pose_units(first, config.orientation_deg))?;
    std::thread::sleep(config.settle);

    let mut commands = 1usize;
    let mut cycles = 0usize;

    'patrol: loop {
        for &point in &config.points_mm {
            if cancel.load(Ordering::SeqCst) {
                break 'patrol;
            }

            link.set_motion_mode(mode)?;
            link.send_pose_command(pose_units(point, config.orientation_deg))?;
            commands += 1;
            tracing::debug!(?point, "moving to waypoint");

            std::thread::sleep(config.dwell);
        }
        cycles += 1;
        tracing::info!(cycles, "waypoint cycle complete");
    }

    tracing::info!(commands, cycles, "waypoint patrol cancelled");
    Ok(PatternStats {
        commands,
        elapsed: start.elapsed(),
    })
}
