//! 轨迹文件的写入与解析

use crate::sample::{Sample, Trajectory};
use anyhow::{Context, Result};
use arm_link::JointDegrees;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// 表头行（`#` 开头，读取时作为注释忽略）
pub const HEADER: &str = "# Timestamp, Joint 1, Joint 2, Joint 3, Joint 4, Joint 5, Joint 6";

/// 注释行标记
const COMMENT_MARKER: char = '#';

/// 每行字段数：1 个时间戳 + 6 个关节角
const FIELDS_PER_LINE: usize = 7;

/// 格式化一行数据：时间戳 6 位小数，关节角 4 位小数
pub fn format_line(sample: &Sample) -> String {
    let j = sample.joints.as_array();
    format!(
        "{:.6},{:.4},{:.4},{:.4},{:.4},{:.4},{:.4}",
        sample.timestamp, j[0], j[1], j[2], j[3], j[4], j[5]
    )
}

/// 解析一行数据
///
/// 恰好 7 个逗号分隔的数值字段才算有效采样，否则返回 `None`。
fn parse_line(line: &str) -> Option<Sample> {
    let mut fields = [0.0f64; FIELDS_PER_LINE];
    let mut count = 0;

    for field in line.split(',') {
        if count == FIELDS_PER_LINE {
            return None;
        }
        fields[count] = field.trim().parse().ok()?;
        count += 1;
    }
    if count != FIELDS_PER_LINE {
        return None;
    }

    let joints = JointDegrees::new([
        fields[1], fields[2], fields[3], fields[4], fields[5], fields[6],
    ]);
    Some(Sample::new(fields[0], joints))
}

/// 轨迹文件写入端
///
/// 创建时写入表头，录制期间只追加。每个采样写入后立即落盘，
/// 进程崩溃至多丢失一个在途采样。
pub struct TrajectoryWriter {
    out: BufWriter<File>,
    path: PathBuf,
    written: usize,
}

impl TrajectoryWriter {
    /// 创建轨迹文件并写入表头（已存在则覆盖）
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .with_context(|| format!("创建轨迹文件失败: {}", path.display()))?;

        let mut out = BufWriter::new(file);
        writeln!(out, "{}", HEADER).context("写入表头失败")?;
        out.flush().context("刷新表头失败")?;

        Ok(TrajectoryWriter {
            out,
            path,
            written: 0,
        })
    }

    /// 追加一个采样并立即落盘
    pub fn append(&mut self, sample: &Sample) -> Result<()> {
        writeln!(self.out, "{}", format_line(sample)).context("写入采样失败")?;
        self.out.flush().context("刷新采样失败")?;
        self.written += 1;
        Ok(())
    }

    /// 已写入的采样数
    pub fn written(&self) -> usize {
        self.written
    }

    /// 输出文件路径
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 结束写入，返回文件路径
    pub fn finish(mut self) -> Result<PathBuf> {
        self.out.flush().context("刷新轨迹文件失败")?;
        Ok(self.path)
    }
}

impl Trajectory {
    /// 从文件整体读入轨迹
    ///
    /// `#` 行与空行忽略；畸形行（字段数不对或数值解析失败）丢弃并
    /// 告警，不中断读取。文件不存在才是错误。
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Trajectory> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("打开轨迹文件失败: {}", path.display()))?;

        let mut samples = Vec::new();
        let mut dropped = 0usize;

        for (number, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with(COMMENT_MARKER) {
                continue;
            }
            match parse_line(line) {
                Some(sample) => samples.push(sample),
                None => {
                    dropped += 1;
                    tracing::warn!(line = number + 1, "dropping malformed trajectory line");
                }
            }
        }

        if dropped > 0 {
            tracing::warn!(
                dropped,
                kept = samples.len(),
                path = %path.display(),
                "trajectory file contained malformed lines"
            );
        }

        Ok(Trajectory::from_samples(samples))
    }
}
