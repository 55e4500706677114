//! 几何轨迹
//!
//! 末端位姿空间里的三种简单轨迹，全部运行到取消为止：
//!
//! - [`circle`] - 固定姿态下在水平面画圆
//! - [`sweep`] - 两点之间直线往复，带到位判定与端点停顿
//! - [`waypoints`] - 多点巡航，逐点驻留循环
//!
//! 运行前都要求先通过使能握手（见 [`crate::enable`]）。

pub mod circle;
pub mod sweep;
pub mod waypoints;

pub use circle::CircleConfig;
pub use sweep::SweepConfig;
pub use waypoints::WaypointConfig;

use arm_link::{UNITS_PER_DEGREE, UNITS_PER_MM};
use std::time::Duration;

/// 一次轨迹运行的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatternStats {
    /// 已发出的位姿指令数
    pub commands: usize,

    /// 运行墙钟时长
    pub elapsed: Duration,
}

/// 位置（mm）+ 姿态（度）→ 指令单位
pub(crate) fn pose_units(position_mm: [f64; 3], orientation_deg: [f64; 3]) -> [i32; 6] {
    [
        (position_mm[0] * UNITS_PER_MM).round() as i32,
        (position_mm[1] * UNITS_PER_MM).round() as i32,
        (position_mm[2] * UNITS_PER_MM).round() as i32,
        (orientation_deg[0] * UNITS_PER_DEGREE).round() as i32,
        (orientation_deg[1] * UNITS_PER_DEGREE).round() as i32,
        (orientation_deg[2] * UNITS_PER_DEGREE).round() as i32,
    ]
}

/// 六元组位姿（mm / 度）→ 指令单位
pub(crate) fn pose6_units(pose: [f64; 6]) -> [i32; 6] {
    pose_units(
        [pose[0], pose[1], pose[2]],
        [pose[3], pose[4], pose[5]],
    )
}
