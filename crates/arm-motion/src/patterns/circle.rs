//! 圆形轨迹
//!
//! 固定姿态，在高度 z 的水平面内按参数方程画圆。先移动到圆上
//! 角度 0 的起始点并等待就位，然后每拍步进一个角度增量发送
//! 位姿指令，角度到 360 度回绕。

use crate::error::MotionError;
use crate::patterns::{pose_units, PatternStats};
use arm_link::{ArmLink, MotionMode};
use spin_sleep::SpinSleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// 圆形轨迹配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleConfig {
    /// 圆心 X（mm）
    pub center_x_mm: f64,

    /// 圆心 Y（mm）
    pub center_y_mm: f64,

    /// 圆所在平面的 Z 高度（mm）
    pub height_z_mm: f64,

    /// 半径（mm）
    pub radius_mm: f64,

    /// 全程保持不变的末端姿态（rx, ry, rz，度）
    pub orientation_deg: [f64; 3],

    /// 每拍的角度增量（度），决定速度与圆的平滑度
    pub step_deg: f64,

    /// 指令发送周期
    pub period: Duration,

    /// 移动到起始点后的等待时间
    pub settle: Duration,

    /// 运动模式速度百分比
    pub speed_pct: u8,
}

impl Default for CircleConfig {
    fn default() -> Self {
        CircleConfig {
            center_x_mm: 156.0,
            center_y_mm: 0.0,
            height_z_mm: 385.0,
            radius_mm: 50.0,
            orientation_deg: [0.0, 90.0, 0.0],
            step_deg: 1.0,
            period: Duration::from_millis(20),
            settle: Duration::from_secs(5),
            speed_pct: 100,
        }
    }
}

/// 运行圆形轨迹，直到取消标志被置位
pub fn run(
    link: &mut dyn ArmLink,
    config: &CircleConfig,
    cancel: &AtomicBool,
) -> Result<PatternStats, MotionError> {
    let start = Instant::now();
    let sleeper = SpinSleeper::default();
    let mode = MotionMode::can_pose(config.speed_pct);

    // 先到角度 0 的起始点
    let start_point = [
        config.center_x_mm + config.radius_mm,
        config.center_y_mm,
        config.height_z_mm,
    ];
    tracing::info!(?start_point, "moving to circle start point");
    link.set_motion_mode(mode)?;
    link.send_pose_command(pose_units(start_point, config.orientation_deg))?;
    std::thread::sleep(config.settle);

    let mut commands = 1usize;
    let mut angle_deg = 0.0f64;

    while !cancel.load(Ordering::SeqCst) {
        let tick = Instant::now();

        let angle_rad = angle_deg.to_radians();
        let target = [
            config.center_x_mm + config.radius_mm * angle_rad.cos(),
            config.center_y_mm + config.radius_mm * angle_rad.sin(),
            config.height_z_mm,
        ];

        link.set_motion_mode(mode)?;
        link.send_pose_command(pose_units(target, config.orientation_deg))?;
        commands += 1;
        tracing::trace!(angle_deg, ?target, "circle step");

        angle_deg += config.step_deg;
        if angle_deg >= 360.0 {
            angle_deg -= 360.0;
        }

        if let Some(rest) = config.period.checked_sub(tick.elapsed()) {
            sleeper.sleep(rest);
        }
    }

    tracing::info!(commands, "circle pattern cancelled");
    Ok(PatternStats {
        commands,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use arm_link::SimArm;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn fast_config() -> CircleConfig {
        CircleConfig {
            settle: Duration::from_millis(10),
            period: Duration::from_millis(2),
            ..CircleConfig::default()
        }
    }

    #[test]
    fn test_circle_points_stay_on_radius() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let config = fast_config();
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(120));
            flag.store(true, Ordering::SeqCst);
        });

        let stats = run(&mut sim, &config, &cancel).unwrap();
        assert!(stats.commands >= 10);

        // 全部目标点都落在圆上（指令单位下允许取整误差）
        for pose in sim.pose_commands() {
            let dx = pose[0] as f64 / 1000.0 - config.center_x_mm;
            let dy = pose[1] as f64 / 1000.0 - config.center_y_mm;
            let radius = (dx * dx + dy * dy).sqrt();
            assert!((radius - config.radius_mm).abs() < 0.01, "radius {radius}");
            assert_eq!(pose[2], 385_000);
            assert_eq!(pose[4], 90_000);
        }
    }

    #[test]
    fn test_circle_respects_cancel_before_loop() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let cancel = AtomicBool::new(true);
        let stats = run(&mut sim, &fast_config(), &cancel).unwrap();

        // 只发了移动到起始点的那一条
        assert_eq!(stats.commands, 1);
        assert_eq!(sim.pose_commands().len(), 1);
    }
}
