//! 子命令实现

mod circle;
mod config;
mod record;
mod replay;
mod status;
mod sweep;
mod waypoints;

pub use circle::CircleCommand;
pub use config::ConfigCommand;
pub use record::RecordCommand;
pub use replay::ReplayCommand;
pub use status::StatusCommand;
pub use sweep::SweepCommand;
pub use waypoints::WaypointsCommand;
