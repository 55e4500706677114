//! 关节角采样器
//!
//! 以目标频率轮询关节角并逐样本落盘。产出频率不高于目标频率：
//! 每拍记录处理耗时，睡 `max(0, 周期 − 耗时)`，查询慢时自然降速
//! 而不是报错。
//!
//! 采样只能被取消标志终止；收到取消后关闭存储并正常返回。

use crate::error::MotionError;
use arm_link::ArmLink;
use arm_trajectory::{Sample, TrajectoryWriter};
use spin_sleep::SpinSleeper;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// 进度日志间隔
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// 一次录制的统计
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplerStats {
    /// 落盘的采样数
    pub samples: usize,

    /// 因状态缺失而跳过的拍数
    pub skipped: usize,

    /// 录制墙钟时长
    pub elapsed: Duration,
}

/// 关节角采样器
///
/// 独占持有轨迹文件的写入端；取消后写入端被关闭，采样器不可复用。
pub struct Sampler<'a> {
    link: &'a mut dyn ArmLink,
    writer: TrajectoryWriter,
    period: Duration,
    sleeper: SpinSleeper,
}

impl<'a> Sampler<'a> {
    /// 创建采样器
    ///
    /// `frequency_hz` 是产出频率的上限，必须为正。
    pub fn new(
        link: &'a mut dyn ArmLink,
        writer: TrajectoryWriter,
        frequency_hz: f64,
    ) -> Result<Self, MotionError> {
        if !(frequency_hz > 0.0) || !frequency_hz.is_finite() {
            return Err(MotionError::InvalidFrequency(frequency_hz));
        }
        Ok(Sampler {
            link,
            writer,
            period: Duration::from_secs_f64(1.0 / frequency_hz),
            sleeper: SpinSleeper::default(),
        })
    }

    /// 运行采样回路，直到取消标志被置位
    ///
    /// 每拍：查询关节角；拿到完整 6 元组就打上墙钟时间戳并立即
    /// 落盘，否则静默跳过该拍。取消后关闭存储，返回统计。
    pub fn run(mut self, cancel: &AtomicBool) -> anyhow::Result<SamplerStats> {
        let start = Instant::now();
        let mut samples = 0usize;
        let mut skipped = 0usize;
        let mut last_report = Instant::now();

        while !cancel.load(Ordering::SeqCst) {
            let tick = Instant::now();

            match self.link.joint_angles() {
                Ok(Some(joints)) => {
                    let timestamp = unix_seconds();
                    self.writer.append(&Sample::new(timestamp, joints))?;
                    samples += 1;
                    tracing::trace!(timestamp, %joints, "sample");
                }
                Ok(None) => {
                    skipped += 1;
                    tracing::trace!("joint status absent, skipping tick");
                }
                Err(err) => {
                    skipped += 1;
                    tracing::debug!(error = %err, "joint status query failed, skipping tick");
                }
            }

            if last_report.elapsed() >= REPORT_INTERVAL {
                tracing::info!(samples, skipped, "recording");
                last_report = Instant::now();
            }

            if let Some(rest) = self.period.checked_sub(tick.elapsed()) {
                self.sleeper.sleep(rest);
            }
        }

        let path = self.writer.finish()?;
        let stats = SamplerStats {
            samples,
            skipped,
            elapsed: start.elapsed(),
        };
        tracing::info!(
            samples = stats.samples,
            skipped = stats.skipped,
            path = %path.display(),
            "recording stopped"
        );
        Ok(stats)
    }
}

/// 当前 Unix 墙钟（秒）
fn unix_seconds() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arm_link::SimArm;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn cancel_after(delay: Duration) -> Arc<AtomicBool> {
        let cancel = Arc::new(AtomicBool::new(false));
        let flag = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(delay);
            flag.store(true, Ordering::SeqCst);
        });
        cancel
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let writer = TrajectoryWriter::create(dir.path().join("t.txt")).unwrap();

        assert!(matches!(
            Sampler::new(&mut sim, writer, 0.0),
            Err(MotionError::InvalidFrequency(_))
        ));
    }

    #[test]
    fn test_rate_ceiling_at_50_hz() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rate.txt");
        let writer = TrajectoryWriter::create(&path).unwrap();

        let run_for = Duration::from_millis(500);
        let cancel = cancel_after(run_for);
        let sampler = Sampler::new(&mut sim, writer, 50.0).unwrap();
        let stats = sampler.run(&cancel).unwrap();

        // 查询即时返回时也必须睡满周期：500ms 内最多 ~25 个采样
        let ceiling = (stats.elapsed.as_secs_f64() * 50.0).ceil() as usize + 1;
        assert!(
            stats.samples <= ceiling,
            "{} samples exceeds 50 Hz ceiling {}",
            stats.samples,
            ceiling
        );
        assert!(stats.samples >= 15, "only {} samples", stats.samples);
    }

    #[test]
    fn test_absent_status_skips_ticks() {
        let mut sim = SimArm::new().with_absent_ticks(3);
        sim.connect("sim0").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("skip.txt");
        let writer = TrajectoryWriter::create(&path).unwrap();

        let cancel = cancel_after(Duration::from_millis(200));
        let sampler = Sampler::new(&mut sim, writer, 50.0).unwrap();
        let stats = sampler.run(&cancel).unwrap();

        assert_eq!(stats.skipped, 3);
        assert!(stats.samples >= 1);

        // 跳过的拍没有写进文件
        let loaded = arm_trajectory::Trajectory::load(&path).unwrap();
        assert_eq!(loaded.len(), stats.samples);
    }

    #[test]
    fn test_recorded_timestamps_non_decreasing() {
        let mut sim = SimArm::new();
        sim.connect("sim0").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mono.txt");
        let writer = TrajectoryWriter::create(&path).unwrap();

        let cancel = cancel_after(Duration::from_millis(200));
        let sampler = Sampler::new(&mut sim, writer, 100.0).unwrap();
        sampler.run(&cancel).unwrap();

        let loaded = arm_trajectory::Trajectory::load(&path).unwrap();
        let timestamps: Vec<f64> = loaded.iter().map(|s| s.timestamp).collect();
        assert!(timestamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
