//! # Arm Trajectory - 轨迹数据模型与存储格式
//!
//! 关节角轨迹的录制文件格式，录制端与回放端共用。
//!
//! ## 文件格式
//!
//! 面向行的文本格式，逗号分隔：
//!
//! ```text
//! # Timestamp, Joint 1, Joint 2, Joint 3, Joint 4, Joint 5, Joint 6
//! 1714291200.123456,0.0000,12.3400,-45.5000,0.1230,90.0000,-0.0040
//! 1714291200.143456,0.0100,12.3500,-45.4900,0.1230,90.0000,-0.0040
//! ```
//!
//! - 首行是 `#` 开头的表头注释，读取时忽略（任何 `#` 行都忽略）
//! - 数据行恰好 7 个十进制字段：时间戳（6 位小数）+ 6 个关节角（4 位小数）
//! - 解析端丢弃畸形行并告警，不中断读取
//! - 录制期间逐样本追加并落盘；回放前整文件读入内存

mod sample;
mod store;

pub use sample::{Sample, Trajectory};
pub use store::{format_line, TrajectoryWriter, HEADER};
