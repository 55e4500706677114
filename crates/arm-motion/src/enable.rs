//! 使能握手
//!
//! 在信任任何运动指令之前，必须确认 6 路关节驱动器全部上报使能。
//! 每个轮询拍重发一次使能请求（附带夹爪使能），直到全部使能或超时。
//! 超时是安全门：不可重试，进程应当携非零码退出。

use crate::error::MotionError;
use arm_link::{ArmLink, ENABLE_ALL};
use std::time::{Duration, Instant};

/// 夹爪使能指令参数：开口归零，力矩档 1000，使能码 0x01
const GRIPPER_OPEN: (i32, u16, u8, u8) = (0, 1000, 0x01, 0);

/// 使能握手策略
///
/// 默认 5 秒超时、1 秒轮询一次。所有入口共用同一个策略，
/// 测试可以换用缩短的时标。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnablePolicy {
    /// 总预算，超过即放弃
    pub timeout: Duration,

    /// 轮询间隔
    pub poll_interval: Duration,
}

impl Default for EnablePolicy {
    fn default() -> Self {
        EnablePolicy {
            timeout: Duration::from_secs(5),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// 等待全部驱动器使能
///
/// 每拍流程：查询 6 路使能状态；全部使能则成功返回。预算耗尽则
/// 返回 [`MotionError::EnableTimeout`]。否则重发使能与夹爪指令，
/// 睡一个轮询间隔再来。
///
/// 默认策略下驱动器始终不使能时，恰好发出 5 次使能请求，
/// 在 5 秒到达后的首次检查失败。
pub fn wait_until_enabled(
    link: &mut dyn ArmLink,
    policy: &EnablePolicy,
) -> Result<(), MotionError> {
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        let status = link.driver_enable_status()?;
        if status.all_enabled() {
            tracing::info!(attempts, "all joint drivers enabled");
            return Ok(());
        }

        if start.elapsed() >= policy.timeout {
            tracing::error!(
                attempts,
                enabled = status.enabled_count(),
                "enable handshake timed out"
            );
            return Err(MotionError::EnableTimeout {
                attempts,
                timeout: policy.timeout,
            });
        }

        tracing::info!(
            enabled = status.enabled_count(),
            "waiting for drivers, re-issuing enable"
        );
        link.enable(ENABLE_ALL)?;
        let (opening, effort, code, set_zero) = GRIPPER_OPEN;
        link.gripper_control(opening, effort, code, set_zero)?;
        attempts += 1;

        std::thread::sleep(policy.poll_interval);
    }
}
