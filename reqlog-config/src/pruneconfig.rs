use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use reqlog_error::{Result, input_err};

/// 한 번에 삭제할 요청 로그 수 기본값
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// 정리 작업 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// 청크당 최대 요청 로그 수
    pub chunk_size: usize,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PruneConfig {
    /// 기본설정으로 생성
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// 설정파일에서 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: PruneConfig = serde_yml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(input_err("chunk_size는 1 이상이어야 합니다"));
        }
        Ok(())
    }
}
