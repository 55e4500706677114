//! # Arm Link - 机械臂能力接口层
//!
//! 对厂商机械臂 SDK 的统一抽象。上层（采样、回放、几何轨迹）只依赖
//! 这里定义的 [`ArmLink`] trait，不接触总线协议或具体 SDK 类型。
//!
//! ## 包含模块
//!
//! - `types` - 关节角、末端位姿、运动模式等类型定义
//! - `error` - 链路层错误类型
//! - `sim` - 仿真后端（无硬件开发与测试用）
//!
//! ## 单位约定
//!
//! 状态查询返回工程单位（度 / 指令单位），运动指令使用控制器的整数
//! 指令单位：0.001 度（关节）、0.001 mm（位置）。换算见
//! [`types::UNITS_PER_DEGREE`] 与 [`types::UNITS_PER_MM`]。

pub mod error;
pub mod sim;
pub mod types;

pub use error::LinkError;
pub use sim::SimArm;
pub use types::{
    CtrlMode, DriverEnableStatus, EndPose, JointDegrees, MotionMode, PathMode, UNITS_PER_DEGREE,
    UNITS_PER_MM,
};

/// 使能全部 6 个关节驱动器的掩码
pub const ENABLE_ALL: u8 = 0x07;

/// 机械臂能力接口
///
/// 每个进程恰好持有一个链路句柄，独占使用。所有方法都是阻塞调用，
/// 已发出的运动指令不可撤回。
///
/// 状态查询取 `&mut self`：真实后端在查询时推进内部接收状态，
/// 仿真后端在查询时推进仿真。
pub trait ArmLink {
    /// 建立到指定总线的连接
    fn connect(&mut self, bus: &str) -> Result<(), LinkError>;

    /// 释放连接（所有退出路径都应调用）
    fn disconnect(&mut self);

    /// 请求使能驱动器（掩码 [`ENABLE_ALL`] 表示全部关节）
    fn enable(&mut self, mask: u8) -> Result<(), LinkError>;

    /// 夹爪控制
    ///
    /// `opening_um` 为开口（微米），`effort` 为力矩档位，`code` 为
    /// 使能/失能码，`set_zero` 非零时标零。
    fn gripper_control(
        &mut self,
        opening_um: i32,
        effort: u16,
        code: u8,
        set_zero: u8,
    ) -> Result<(), LinkError>;

    /// 查询 6 路驱动器使能状态
    fn driver_enable_status(&mut self) -> Result<DriverEnableStatus, LinkError>;

    /// 查询当前关节角（度）
    ///
    /// 本个周期内拿不到完整的 6 元组时返回 `Ok(None)`，调用方跳过该拍。
    fn joint_angles(&mut self) -> Result<Option<JointDegrees>, LinkError>;

    /// 查询末端位姿（指令单位）
    fn end_pose(&mut self) -> Result<EndPose, LinkError>;

    /// 设置运动模式（后续运动指令按此模式解释）
    fn set_motion_mode(&mut self, mode: MotionMode) -> Result<(), LinkError>;

    /// 发送关节指令（6 个关节目标角，指令单位）
    fn send_joint_command(&mut self, joints: [i32; 6]) -> Result<(), LinkError>;

    /// 发送末端位姿指令（x, y, z, rx, ry, rz，指令单位）
    fn send_pose_command(&mut self, pose: [i32; 6]) -> Result<(), LinkError>;
}
