//! 命令共用的小工具：连接建立、使能握手、参数解析

use anyhow::{Context, Result};
use arm_link::{ArmLink, SimArm};
use arm_motion::{wait_until_enabled, EnablePolicy};

/// 连接机械臂
///
/// 目前唯一的内建后端是仿真臂；硬件适配器在仓库外实现
/// [`ArmLink`] 后从这里接入。
pub fn connect_arm(bus: &str) -> Result<SimArm> {
    println!("⏳ 连接机械臂 ({bus})...");
    let mut arm = SimArm::new();
    arm.connect(bus)
        .with_context(|| format!("连接总线 {bus} 失败"))?;
    tracing::debug!(bus, "link established");
    println!("✅ 已连接");
    Ok(arm)
}

/// 运动前的使能握手（默认策略：5 秒超时、1 秒轮询）
///
/// 超时是安全门：返回错误让进程携非零码退出，绝不在驱动器
/// 未确认使能时继续发运动指令。
pub fn enable_gate(arm: &mut dyn ArmLink) -> Result<()> {
    println!("⚡ 等待全部关节驱动器使能...");
    wait_until_enabled(arm, &EnablePolicy::default())
        .context("使能握手失败，中止运动")?;
    println!("✅ 使能完成");
    Ok(())
}

/// 解析 `x,y,z` 三元组（mm）
pub fn parse_point3(text: &str) -> Result<[f64; 3], String> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(format!("需要 3 个逗号分隔的数值，得到 {} 个", fields.len()));
    }
    let mut point = [0.0; 3];
    for (slot, field) in point.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| format!("无法解析数值: {field}"))?;
    }
    Ok(point)
}

/// 解析 `x,y,z,rx,ry,rz` 六元组（mm / 度）
pub fn parse_pose6(text: &str) -> Result<[f64; 6], String> {
    let fields: Vec<&str> = text.split(',').map(str::trim).collect();
    if fields.len() != 6 {
        return Err(format!("需要 6 个逗号分隔的数值，得到 {} 个", fields.len()));
    }
    let mut pose = [0.0; 6];
    for (slot, field) in pose.iter_mut().zip(&fields) {
        *slot = field.parse().map_err(|_| format!("无法解析数值: {field}"))?;
    }
    Ok(pose)
}
