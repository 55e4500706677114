//! # Arm Motion - 运动控制回路
//!
//! 构建在 [`arm_link::ArmLink`] 能力接口之上的控制回路：
//!
//! - `enable` - 使能握手（运动前的安全门）
//! - `sampler` - 固定频率采样关节角并落盘
//! - `player` - 按记录的时间间隔回放关节轨迹
//! - `patterns` - 几何轨迹（圆形、直线往复、多点巡航）
//!
//! ## 执行模型
//!
//! 全部单线程阻塞执行，睡眠式节拍控制。取消通过共享的
//! `AtomicBool` 标志传达，每个回路每拍检查一次；已发出的指令
//! 不可撤回。录制与回放被中断时走正常返回路径，不是错误。

pub mod enable;
pub mod error;
pub mod patterns;
pub mod player;
pub mod sampler;

pub use enable::{wait_until_enabled, EnablePolicy};
pub use error::MotionError;
pub use player::{Player, PlayerConfig, ReplayStats};
pub use sampler::{Sampler, SamplerStats};
