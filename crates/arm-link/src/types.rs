//! 类型定义
//!
//! 关节角、末端位姿、驱动器状态与运动模式。固定 6 关节，
//! 指令单位与控制器一致（0.001 度 / 0.001 mm）。

use crate::error::LinkError;
use std::fmt;
use std::ops::Index;

/// 每度对应的指令单位数（毫度编码）
pub const UNITS_PER_DEGREE: f64 = 1000.0;

/// 每毫米对应的指令单位数
pub const UNITS_PER_MM: f64 = 1000.0;

/// 6 关节角度（度）
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct JointDegrees([f64; 6]);

impl JointDegrees {
    /// 创建关节角数组
    #[inline]
    pub const fn new(values: [f64; 6]) -> Self {
        JointDegrees(values)
    }

    /// 获取内部数组的引用
    #[inline]
    pub fn as_array(&self) -> &[f64; 6] {
        &self.0
    }

    /// 获取内部数组（消耗 self）
    #[inline]
    pub fn into_array(self) -> [f64; 6] {
        self.0
    }

    /// 迭代器
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// 转换为控制器指令单位（×1000，四舍五入）
    pub fn to_command_units(&self) -> [i32; 6] {
        self.0.map(|deg| (deg * UNITS_PER_DEGREE).round() as i32)
    }
}

impl From<[f64; 6]> for JointDegrees {
    #[inline]
    fn from(values: [f64; 6]) -> Self {
        JointDegrees(values)
    }
}

impl From<JointDegrees> for [f64; 6] {
    #[inline]
    fn from(joints: JointDegrees) -> Self {
        joints.0
    }
}

impl Index<usize> for JointDegrees {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

impl fmt::Display for JointDegrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:8.3}, {:8.3}, {:8.3}, {:8.3}, {:8.3}, {:8.3}]",
            self.0[0], self.0[1], self.0[2], self.0[3], self.0[4], self.0[5]
        )
    }
}

/// 末端位姿（指令单位：0.001 mm / 0.001 度）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EndPose {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub rx: i32,
    pub ry: i32,
    pub rz: i32,
}

impl EndPose {
    /// 从指令单位数组创建
    pub const fn from_units(units: [i32; 6]) -> Self {
        EndPose {
            x: units[0],
            y: units[1],
            z: units[2],
            rx: units[3],
            ry: units[4],
            rz: units[5],
        }
    }

    /// 转换为指令单位数组
    pub const fn to_units(&self) -> [i32; 6] {
        [self.x, self.y, self.z, self.rx, self.ry, self.rz]
    }

    /// 位置分量（mm）
    pub fn position_mm(&self) -> [f64; 3] {
        [
            self.x as f64 / UNITS_PER_MM,
            self.y as f64 / UNITS_PER_MM,
            self.z as f64 / UNITS_PER_MM,
        ]
    }
}

/// 6 路驱动器使能状态（每个关节执行器一个标志）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DriverEnableStatus(pub [bool; 6]);

impl DriverEnableStatus {
    /// 全部驱动器均已使能
    pub fn all_enabled(&self) -> bool {
        self.0.iter().all(|&flag| flag)
    }

    /// 已使能的驱动器数量
    pub fn enabled_count(&self) -> usize {
        self.0.iter().filter(|&&flag| flag).count()
    }
}

/// 控制模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CtrlMode {
    /// 待机
    #[default]
    Standby = 0x00,
    /// 总线指令控制
    CanCommand = 0x01,
}

impl TryFrom<u8> for CtrlMode {
    type Error = LinkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(CtrlMode::Standby),
            0x01 => Ok(CtrlMode::CanCommand),
            _ => Err(LinkError::InvalidValue {
                field: "CtrlMode",
                value,
            }),
        }
    }
}

/// 轨迹插补方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathMode {
    /// 末端位姿点到点
    #[default]
    Pose = 0x00,
    /// 关节空间
    Joint = 0x01,
    /// 直线插补
    Linear = 0x02,
}

impl TryFrom<u8> for PathMode {
    type Error = LinkError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(PathMode::Pose),
            0x01 => Ok(PathMode::Joint),
            0x02 => Ok(PathMode::Linear),
            _ => Err(LinkError::InvalidValue {
                field: "PathMode",
                value,
            }),
        }
    }
}

/// 运动模式（控制模式 + 插补方式 + 速度档 + 标志位）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotionMode {
    pub ctrl: CtrlMode,
    pub path: PathMode,
    /// 速度百分比，1..=100
    pub speed_pct: u8,
    /// 保留标志位（常规控制为 0）
    pub flag: u8,
}

impl MotionMode {
    /// 总线控制 + 末端位姿插补
    pub fn can_pose(speed_pct: u8) -> Self {
        MotionMode {
            ctrl: CtrlMode::CanCommand,
            path: PathMode::Pose,
            speed_pct: speed_pct.clamp(1, 100),
            flag: 0x00,
        }
    }

    /// 总线控制 + 关节空间插补
    pub fn can_joint(speed_pct: u8) -> Self {
        MotionMode {
            ctrl: CtrlMode::CanCommand,
            path: PathMode::Joint,
            speed_pct: speed_pct.clamp(1, 100),
            flag: 0x00,
        }
    }
}

impl Default for MotionMode {
    fn default() -> Self {
        MotionMode {
            ctrl: CtrlMode::Standby,
            path: PathMode::Pose,
            speed_pct: 100,
            flag: 0x00,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joint_degrees_to_command_units() {
        let joints = JointDegrees::new([0.0, 90.0, -45.5, 0.12345, -0.0004, 359.9999]);
        let units = joints.to_command_units();

        assert_eq!(units[0], 0);
        assert_eq!(units[1], 90_000);
        assert_eq!(units[2], -45_500);
        // 四舍五入到最近的指令单位
        assert_eq!(units[3], 123);
        assert_eq!(units[4], 0);
        assert_eq!(units[5], 360_000);
    }

    #[test]
    fn test_joint_degrees_indexing() {
        let joints = JointDegrees::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(joints[0], 1.0);
        assert_eq!(joints[5], 6.0);

        let back: [f64; 6] = joints.into();
        assert_eq!(back, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_end_pose_units_roundtrip() {
        let pose = EndPose::from_units([156_000, 0, 385_000, 0, 90_000, -1]);
        assert_eq!(pose.to_units(), [156_000, 0, 385_000, 0, 90_000, -1]);

        let [x, y, z] = pose.position_mm();
        assert!((x - 156.0).abs() < 1e-9);
        assert!((y - 0.0).abs() < 1e-9);
        assert!((z - 385.0).abs() < 1e-9);
    }

    #[test]
    fn test_driver_enable_status() {
        let none = DriverEnableStatus::default();
        assert!(!none.all_enabled());
        assert_eq!(none.enabled_count(), 0);

        let partial = DriverEnableStatus([true, true, false, true, true, true]);
        assert!(!partial.all_enabled());
        assert_eq!(partial.enabled_count(), 5);

        let all = DriverEnableStatus([true; 6]);
        assert!(all.all_enabled());
    }

    #[test]
    fn test_ctrl_mode_try_from() {
        assert_eq!(CtrlMode::try_from(0x00).unwrap(), CtrlMode::Standby);
        assert_eq!(CtrlMode::try_from(0x01).unwrap(), CtrlMode::CanCommand);
        assert!(CtrlMode::try_from(0x05).is_err());
    }

    #[test]
    fn test_path_mode_try_from() {
        assert_eq!(PathMode::try_from(0x01).unwrap(), PathMode::Joint);
        assert!(PathMode::try_from(0x09).is_err());
    }

    #[test]
    fn test_motion_mode_speed_clamped() {
        let mode = MotionMode::can_pose(250);
        assert_eq!(mode.speed_pct, 100);
        assert_eq!(mode.ctrl, CtrlMode::CanCommand);
        assert_eq!(mode.path, PathMode::Pose);

        let mode = MotionMode::can_joint(0);
        assert_eq!(mode.speed_pct, 1);
        assert_eq!(mode.path, PathMode::Joint);
    }
}
