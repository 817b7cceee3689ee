use std::path::Path;
use std::fs::File;
use std::io::Read;

use serde::{Deserialize, Serialize};

use reqlog_error::Result;

/// 데이터베이스 설정
#[derive(Default, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DbConfig {
    /// 데이터베이스 연결 설정
    pub connection: ConnectionConfig,
    /// 연결 풀 설정
    pub pool: PoolConfig,
}

impl DbConfig {
    /// 설정파일에서 db 설정 로드
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: DbConfig = serde_yml::from_str(&contents)?;

        Ok(config)
    }
}

/// db 연결설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub sslmode: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "reqlog".to_string(),
            user: "reqlog".to_string(),
            password: "reqlog".to_string(),
            sslmode: "disable".to_string(),
        }
    }
}

/// 데이터베이스 연결 풀 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// 연결 대기, 생성 타임아웃(초)
    pub connection_timeout_seconds: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            connection_timeout_seconds: 30,
        }
    }
}
