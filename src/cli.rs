use std::num::NonZeroUsize;
use std::path::PathBuf;

use chrono::TimeDelta;
use clap::{Parser, ValueEnum};

/// 요청 로그 삭제
#[derive(Parser, Debug)]
#[command(name = "clear_request_log")]
#[command(about = "Clears the log of requests", long_about = None)]
pub struct Cli {
    /// Delete requests older than X time units (omit to delete everything)
    #[arg(long, value_name = "N")]
    pub older_than: Option<u32>,

    /// Time unit for the deletion horizon count
    #[arg(long, value_enum, default_value_t = TimeUnit::Days)]
    pub time_unit: TimeUnit,

    /// Maximum number of requests deleted per round trip (overrides prune.yml)
    #[arg(long, value_name = "N")]
    pub chunk_size: Option<NonZeroUsize>,

    /// Directory holding db.yml and prune.yml
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// 보존기간, `None` 이면 전체 삭제
    pub fn horizon(&self) -> Option<TimeDelta> {
        self.older_than.map(|count| self.time_unit.duration(count))
    }
}

/// 작업 결과 출력 문구
pub fn report(deleted: u64) -> String {
    format!("Successfully deleted {deleted} requests")
}

/// 보존기간 단위
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl TimeUnit {
    /// `count` 단위시간 (u32 범위 안에서는 TimeDelta 범위를 넘지 않음)
    pub fn duration(self, count: u32) -> TimeDelta {
        let count = i64::from(count);
        match self {
            TimeUnit::Seconds => TimeDelta::seconds(count),
            TimeUnit::Minutes => TimeDelta::minutes(count),
            TimeUnit::Hours => TimeDelta::hours(count),
            TimeUnit::Days => TimeDelta::days(count),
            TimeUnit::Weeks => TimeDelta::weeks(count),
        }
    }
}
