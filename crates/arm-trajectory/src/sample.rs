//! 采样点与轨迹序列

use arm_link::JointDegrees;

/// 一次采样：时间戳 + 6 个关节角
///
/// 时间戳为 Unix 墙钟秒。采样落盘后不再修改。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// 采样时刻（Unix 秒）
    pub timestamp: f64,

    /// 关节角（度）
    pub joints: JointDegrees,
}

impl Sample {
    /// 创建采样点
    pub fn new(timestamp: f64, joints: JointDegrees) -> Self {
        Sample { timestamp, joints }
    }
}

/// 关节角轨迹
///
/// 有序采样序列：插入顺序 = 录制顺序 = 回放顺序。时间戳单调不减，
/// 相等的时间戳按零间隔回放。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    /// 从采样序列创建轨迹
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Trajectory { samples }
    }

    /// 采样数量
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// 首个采样
    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    /// 采样迭代器
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// 录制时间跨度（秒）
    pub fn duration(&self) -> Option<f64> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        Some(last.timestamp - first.timestamp)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts: f64) -> Sample {
        Sample::new(ts, JointDegrees::new([0.0; 6]))
    }

    #[test]
    fn test_empty_trajectory() {
        let traj = Trajectory::default();
        assert!(traj.is_empty());
        assert_eq!(traj.len(), 0);
        assert!(traj.first().is_none());
        assert!(traj.duration().is_none());
    }

    #[test]
    fn test_trajectory_order_and_duration() {
        let traj = Trajectory::from_samples(vec![sample(10.0), sample(10.5), sample(11.3)]);

        assert_eq!(traj.len(), 3);
        assert_eq!(traj.first().unwrap().timestamp, 10.0);

        let timestamps: Vec<f64> = traj.iter().map(|s| s.timestamp).collect();
        assert_eq!(timestamps, vec![10.0, 10.5, 11.3]);

        let duration = traj.duration().unwrap();
        assert!((duration - 1.3).abs() < 1e-9);
    }
}
