use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::Lazy;

use reqlog_error::{Result, config_err};

use crate::dbconfig::DbConfig;
use crate::pruneconfig::PruneConfig;

const DB_CONFIG_FILE: &str = "db.yml";
const PRUNE_CONFIG_FILE: &str = "prune.yml";

/// 설정파일 디렉토리 (REQLOG_CONFIG_DIR, 기본값 현재 디렉토리)
static CONFIG_DIR: Lazy<PathBuf> = Lazy::new(|| {
    std::env::var("REQLOG_CONFIG_DIR")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
});

/// 통합 세팅 인스턴스
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub database: DbConfig,
    pub prune: PruneConfig,
}

impl Settings {
    /// 기본 설정 디렉토리에서 Setting 생성
    pub fn new() -> Result<Self> {
        Self::from_dir(CONFIG_DIR.as_path())
    }

    /// 지정한 디렉토리에서 Setting 생성
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let database = Self::load_db_config(&dir.join(DB_CONFIG_FILE))?;
        let prune = Self::load_prune_config(&dir.join(PRUNE_CONFIG_FILE))?;

        Ok(Self { database, prune })
    }

    /// db 설정 로드
    fn load_db_config(path: &Path) -> Result<DbConfig> {
        // yml 파일 유무 확인
        if path.exists() {
            info!("DB 설정파일 로드: {}", path.display());
            match DbConfig::from_file(path) {
                Ok(config) => Ok(config),
                Err(e) => Err(config_err(format!("DB 설정파일 로드 실패: {}", e))),
            }
        } else {
            // 기본설정사용
            info!("DB 기본설정 사용");
            Ok(DbConfig::default())
        }
    }

    /// 정리 작업 설정 로드
    fn load_prune_config(path: &Path) -> Result<PruneConfig> {
        if path.exists() {
            info!("정리 설정파일 로드: {}", path.display());
            match PruneConfig::from_file(path) {
                Ok(config) => Ok(config),
                Err(e) => Err(config_err(format!("정리 설정파일 로드 실패: {}", e))),
            }
        } else {
            info!("정리 기본설정 사용");
            Ok(PruneConfig::new())
        }
    }
}
