//! 轨迹回放器
//!
//! 开环时间回放：按记录的相邻时间戳差安排指令间隔，不做位置收敛
//! 校正。每个采样换算为整数指令单位后，先设运动模式再发关节指令。
//!
//! 空轨迹是前置条件违规，回放器在任何计时开始之前拒绝。

use crate::error::MotionError;
use arm_link::{ArmLink, MotionMode};
use arm_trajectory::Trajectory;
use spin_sleep::SpinSleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// 回放速度倍数上限
pub const MAX_REPLAY_RATE: f64 = 5.0;

/// 回放配置
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerConfig {
    /// 回放速度倍数：1.0 为原速，2.0 为两倍速（间隔减半）
    pub rate: f64,

    /// 运动模式中的速度百分比
    pub speed_pct: u8,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            rate: 1.0,
            speed_pct: 100,
        }
    }
}

/// 一次回放的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    /// 已发出的关节指令数
    pub commands: usize,

    /// 回放墙钟时长
    pub elapsed: Duration,

    /// 是否被取消标志提前终止
    pub cancelled: bool,
}

/// 轨迹回放器
pub struct Player<'a> {
    link: &'a mut dyn ArmLink,
    config: PlayerConfig,
    sleeper: SpinSleeper,
}

impl<'a> Player<'a> {
    /// 创建回放器
    ///
    /// 速度倍数必须落在 `(0, 5.0]`。
    pub fn new(link: &'a mut dyn ArmLink, config: PlayerConfig) -> Result<Self, MotionError> {
        if !(config.rate > 0.0) || config.rate > MAX_REPLAY_RATE {
            return Err(MotionError::InvalidRate(config.rate));
        }
        Ok(Player {
            link,
            config,
            sleeper: SpinSleeper::default(),
        })
    }

    /// 回放整条轨迹
    ///
    /// 对每个采样：先睡足与上一采样的时间差（除以速度倍数），再发
    /// 运动模式 + 关节指令。取消标志在每拍开头检查一次，命中后
    /// 干净返回（`cancelled = true`），已发出的指令不回收。
    pub fn play(
        &mut self,
        trajectory: &Trajectory,
        cancel: &AtomicBool,
    ) -> Result<ReplayStats, MotionError> {
        let Some(first) = trajectory.first() else {
            return Err(MotionError::EmptyTrajectory);
        };

        tracing::info!(
            samples = trajectory.len(),
            duration = trajectory.duration().unwrap_or_default(),
            rate = self.config.rate,
            "starting replay"
        );

        let start = Instant::now();
        let mut last_ts = first.timestamp;
        let mut commands = 0usize;

        for sample in trajectory {
            if cancel.load(Ordering::SeqCst) {
                tracing::info!(commands, "replay cancelled");
                return Ok(ReplayStats {
                    commands,
                    elapsed: start.elapsed(),
                    cancelled: true,
                });
            }

            // 乱序时间戳退化为零间隔，不回退
            let delay = (sample.timestamp - last_ts) / self.config.rate;
            if delay > 0.0 {
                self.sleeper.sleep(Duration::from_secs_f64(delay));
            }

            let units = sample.joints.to_command_units();
            self.link
                .set_motion_mode(MotionMode::can_joint(self.config.speed_pct))?;
            self.link.send_joint_command(units)?;
            commands += 1;
            last_ts = sample.timestamp;
        }

        let stats = ReplayStats {
            commands,
            elapsed: start.elapsed(),
            cancelled: false,
        };
        tracing::info!(commands = stats.commands, "replay finished");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arm_link::{JointDegrees, PathMode, SimArm};
    use arm_trajectory::Sample;

    fn trajectory(timestamps: &[f64]) -> Trajectory {
        let samples = timestamps
            .iter()
            .enumerate()
            .map(|(i, &ts)| Sample::new(ts, JointDegrees::new([i as f64; 6])))
            .collect();
        Trajectory::from_samples(samples)
    }

    fn no_cancel() -> AtomicBool {
        AtomicBool::new(false)
    }

    #[test]
    fn test_empty_trajectory_rejected_before_any_command() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let mut player = Player::new(&mut sim, PlayerConfig::default()).unwrap();
        let err = player.play(&Trajectory::default(), &no_cancel()).unwrap_err();
        assert!(matches!(err, MotionError::EmptyTrajectory));

        assert!(sim.joint_commands().is_empty());
        assert!(sim.motion_modes().is_empty());
    }

    #[test]
    fn test_rate_bounds() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        for rate in [0.0, -1.0, 5.1, f64::NAN] {
            let config = PlayerConfig { rate, speed_pct: 100 };
            assert!(
                matches!(Player::new(&mut sim, config), Err(MotionError::InvalidRate(_))),
                "rate {rate} accepted"
            );
        }

        let config = PlayerConfig { rate: 5.0, speed_pct: 100 };
        assert!(Player::new(&mut sim, config).is_ok());
    }

    #[test]
    fn test_replay_preserves_recorded_timing() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let traj = trajectory(&[0.0, 0.5, 1.3]);
        let mut player = Player::new(&mut sim, PlayerConfig::default()).unwrap();

        let start = Instant::now();
        let stats = player.play(&traj, &no_cancel()).unwrap();
        let elapsed = start.elapsed().as_secs_f64();

        assert_eq!(stats.commands, 3);
        assert!(!stats.cancelled);
        // 0.5s + 0.8s 的间隔，调度容差内
        assert!(elapsed >= 1.3, "elapsed {elapsed}");
        assert!(elapsed < 1.6, "elapsed {elapsed}");

        // 指令按记录顺序发出，角度 ×1000 取整
        let commands = sim.joint_commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], [0; 6]);
        assert_eq!(commands[1], [1_000; 6]);
        assert_eq!(commands[2], [2_000; 6]);

        // 每条关节指令前都设了关节插补模式
        assert_eq!(sim.motion_modes().len(), 3);
        assert!(sim.motion_modes().iter().all(|m| m.path == PathMode::Joint));
    }

    #[test]
    fn test_double_rate_halves_delays() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let traj = trajectory(&[0.0, 0.4, 0.8]);
        let config = PlayerConfig { rate: 2.0, speed_pct: 100 };
        let mut player = Player::new(&mut sim, config).unwrap();

        let start = Instant::now();
        let stats = player.play(&traj, &no_cancel()).unwrap();
        let elapsed = start.elapsed().as_secs_f64();

        assert_eq!(stats.commands, 3);
        assert!(elapsed >= 0.4, "elapsed {elapsed}");
        assert!(elapsed < 0.7, "elapsed {elapsed}");
    }

    #[test]
    fn test_tie_and_backward_timestamps_replay_without_delay() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let traj = trajectory(&[10.0, 10.0, 9.5]);
        let mut player = Player::new(&mut sim, PlayerConfig::default()).unwrap();

        let start = Instant::now();
        let stats = player.play(&traj, &no_cancel()).unwrap();

        assert_eq!(stats.commands, 3);
        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[test]
    fn test_cancel_stops_replay_cleanly() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let traj = trajectory(&[0.0, 10.0, 20.0]);
        let mut player = Player::new(&mut sim, PlayerConfig::default()).unwrap();

        // 第一拍之后置位取消
        let cancel = AtomicBool::new(false);
        cancel.store(true, Ordering::SeqCst);

        let stats = player.play(&traj, &cancel).unwrap();
        assert!(stats.cancelled);
        assert_eq!(stats.commands, 0);
    }
}
