//! 仿真后端
//!
//! 在进程内模拟一台机械臂：使能状态按查询拍推进，末端位姿向最近一次
//! 位姿指令有界步进，关节角跟随关节指令。无硬件开发、CLI 演练与
//! 集成测试都走这个后端。
//!
//! 仿真可以被脚本化制造故障：拒绝使能（握手超时场景）、若干拍查不到
//! 关节角（采样跳拍场景）。所有收到的指令都会被记录，便于测试断言。

use crate::error::LinkError;
use crate::types::{DriverEnableStatus, EndPose, JointDegrees, MotionMode};
use crate::ArmLink;

/// 末端位姿每次查询的默认步进（指令单位，5 mm）
const DEFAULT_POSE_STEP: i32 = 5_000;

/// 进程内仿真机械臂
#[derive(Debug)]
pub struct SimArm {
    connected: bool,
    bus: String,

    // 使能模型
    enable_requested: bool,
    refuse_enable: bool,
    enable_latency_polls: u32,
    polls_since_enable: u32,
    drivers: DriverEnableStatus,

    // 运动模型
    joints: JointDegrees,
    pose: [i32; 6],
    pose_target: [i32; 6],
    pose_step: i32,

    // 故障注入
    absent_ticks: u32,

    // 指令记录（测试断言用）
    enable_calls: u32,
    gripper_calls: u32,
    joint_commands: Vec<[i32; 6]>,
    pose_commands: Vec<[i32; 6]>,
    motion_modes: Vec<MotionMode>,
}

impl SimArm {
    /// 创建仿真机械臂（初始位于零位，未连接）
    pub fn new() -> Self {
        SimArm {
            connected: false,
            bus: String::new(),
            enable_requested: false,
            refuse_enable: false,
            enable_latency_polls: 0,
            polls_since_enable: 0,
            drivers: DriverEnableStatus::default(),
            joints: JointDegrees::default(),
            pose: [0; 6],
            pose_target: [0; 6],
            pose_step: DEFAULT_POSE_STEP,
            absent_ticks: 0,
            enable_calls: 0,
            gripper_calls: 0,
            joint_commands: Vec::new(),
            pose_commands: Vec::new(),
            motion_modes: Vec::new(),
        }
    }

    /// 驱动器永不上报使能（握手超时测试）
    pub fn with_refusing_drivers(mut self) -> Self {
        self.refuse_enable = true;
        self
    }

    /// 使能请求后需要再经过 `polls` 次状态查询才上报使能
    pub fn with_enable_latency(mut self, polls: u32) -> Self {
        self.enable_latency_polls = polls;
        self
    }

    /// 接下来 `ticks` 次关节角查询返回 `None`
    pub fn with_absent_ticks(mut self, ticks: u32) -> Self {
        self.absent_ticks = ticks;
        self
    }

    /// 设置末端位姿每次查询的步进（指令单位）
    pub fn with_pose_step(mut self, units: i32) -> Self {
        self.pose_step = units.max(1);
        self
    }

    /// 设置当前关节角（度）
    pub fn set_joints(&mut self, joints: JointDegrees) {
        self.joints = joints;
    }

    /// 设置当前末端位姿（指令单位）
    pub fn set_pose(&mut self, pose: [i32; 6]) {
        self.pose = pose;
        self.pose_target = pose;
    }

    /// 收到的使能请求次数
    pub fn enable_calls(&self) -> u32 {
        self.enable_calls
    }

    /// 收到的夹爪指令次数
    pub fn gripper_calls(&self) -> u32 {
        self.gripper_calls
    }

    /// 收到的全部关节指令
    pub fn joint_commands(&self) -> &[[i32; 6]] {
        &self.joint_commands
    }

    /// 收到的全部位姿指令
    pub fn pose_commands(&self) -> &[[i32; 6]] {
        &self.pose_commands
    }

    /// 收到的全部运动模式设置
    pub fn motion_modes(&self) -> &[MotionMode] {
        &self.motion_modes
    }

    fn ensure_connected(&self) -> Result<(), LinkError> {
        if self.connected {
            Ok(())
        } else {
            Err(LinkError::NotConnected)
        }
    }

    /// 各轴向目标有界步进
    fn step_pose(&mut self) {
        for (axis, target) in self.pose.iter_mut().zip(self.pose_target) {
            let delta = target - *axis;
            *axis += delta.clamp(-self.pose_step, self.pose_step);
        }
    }
}

impl Default for SimArm {
    fn default() -> Self {
        SimArm::new()
    }
}

impl Drop for SimArm {
    /// 提前出错返回时连接也会被释放；显式 `disconnect` 之后是空操作
    fn drop(&mut self) {
        self.disconnect();
    }
}

impl ArmLink for SimArm {
    fn connect(&mut self, bus: &str) -> Result<(), LinkError> {
        if bus.is_empty() {
            return Err(LinkError::Bus("empty bus identifier".to_string()));
        }
        self.bus = bus.to_string();
        self.connected = true;
        tracing::debug!(bus, "sim arm connected");
        Ok(())
    }

    fn disconnect(&mut self) {
        if self.connected {
            tracing::debug!(bus = %self.bus, "sim arm disconnected");
        }
        self.connected = false;
    }

    fn enable(&mut self, _mask: u8) -> Result<(), LinkError> {
        self.ensure_connected()?;
        self.enable_calls += 1;
        if !self.enable_requested {
            self.enable_requested = true;
            self.polls_since_enable = 0;
        }
        Ok(())
    }

    fn gripper_control(
        &mut self,
        _opening_um: i32,
        _effort: u16,
        _code: u8,
        _set_zero: u8,
    ) -> Result<(), LinkError> {
        self.ensure_connected()?;
        self.gripper_calls += 1;
        Ok(())
    }

    fn driver_enable_status(&mut self) -> Result<DriverEnableStatus, LinkError> {
        self.ensure_connected()?;
        if self.enable_requested && !self.refuse_enable {
            if self.polls_since_enable >= self.enable_latency_polls {
                self.drivers = DriverEnableStatus([true; 6]);
            }
            self.polls_since_enable += 1;
        }
        Ok(self.drivers)
    }

    fn joint_angles(&mut self) -> Result<Option<JointDegrees>, LinkError> {
        self.ensure_connected()?;
        if self.absent_ticks > 0 {
            self.absent_ticks -= 1;
            return Ok(None);
        }
        Ok(Some(self.joints))
    }

    fn end_pose(&mut self) -> Result<EndPose, LinkError> {
        self.ensure_connected()?;
        self.step_pose();
        Ok(EndPose::from_units(self.pose))
    }

    fn set_motion_mode(&mut self, mode: MotionMode) -> Result<(), LinkError> {
        self.ensure_connected()?;
        self.motion_modes.push(mode);
        Ok(())
    }

    fn send_joint_command(&mut self, joints: [i32; 6]) -> Result<(), LinkError> {
        self.ensure_connected()?;
        self.joint_commands.push(joints);
        // 关节角即时跟随指令
        self.joints =
            JointDegrees::new(joints.map(|units| units as f64 / crate::UNITS_PER_DEGREE));
        Ok(())
    }

    fn send_pose_command(&mut self, pose: [i32; 6]) -> Result<(), LinkError> {
        self.ensure_connected()?;
        self.pose_commands.push(pose);
        self.pose_target = pose;
        Ok(())
    }
}
