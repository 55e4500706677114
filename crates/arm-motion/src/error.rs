//! 运动层错误类型定义

use arm_link::LinkError;
use std::time::Duration;
use thiserror::Error;

/// 运动层错误类型
#[derive(Error, Debug)]
pub enum MotionError {
    /// 链路错误
    #[error("Link error: {0}")]
    Link(#[from] LinkError),

    /// 使能握手超时（安全门，不可重试）
    #[error("Drivers not all enabled after {attempts} attempts within {timeout:?}")]
    EnableTimeout { attempts: u32, timeout: Duration },

    /// 空轨迹（回放前置条件被违反）
    #[error("Trajectory is empty, nothing to replay")]
    EmptyTrajectory,

    /// 回放速度倍数越界（上限见 `player::MAX_REPLAY_RATE`）
    #[error("Invalid replay rate {0} (expected 0 < rate <= 5.0)")]
    InvalidRate(f64),

    /// 采样频率越界
    #[error("Invalid sampling frequency {0} Hz (expected > 0)")]
    InvalidFrequency(f64),

    /// 航点列表为空
    #[error("Waypoint list is empty")]
    NoWaypoints,
}
