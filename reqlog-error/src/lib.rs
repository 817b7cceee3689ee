use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::PoisonError;
use deadpool_postgres::PoolError;
use serde_yml::Error as YmlError;
use tokio_postgres::Error as PgError;

/// 요청 로그 정리 작업의 모든 에러 타입을 정의합니다.
#[derive(Debug)]
pub enum LogError {
    /// 설정 관련 에러
    Config(String),

    /// 파일 입출력 에러
    Io(io::Error),

    /// 데이터베이스 관련 에러
    Database(String),

    /// 잘못된 입력값 (청크 크기, 보존 기간 등)
    InvalidInput(String),

    /// 내부 상태 관련 에러 (락 포이즌, 삭제되지 않는 청크)
    Internal(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::Config(msg) => write!(f, "설정 에러: {}", msg),
            LogError::Io(err) => write!(f, "I/O 에러: {}", err),
            LogError::Database(msg) => write!(f, "데이터베이스 에러: {}", msg),
            LogError::InvalidInput(msg) => write!(f, "입력값 에러: {}", msg),
            LogError::Internal(msg) => write!(f, "내부 에러: {}", msg),
        }
    }
}

impl StdError for LogError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            LogError::Io(err) => Some(err),
            _ => None,
        }
    }
}

/// Result 타입 별칭 정의
pub type Result<T> = std::result::Result<T, LogError>;

/// From 트레이트 구현으로 다양한 에러 타입을 LogError로 변환
impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::Io(err)
    }
}

impl From<PoolError> for LogError {
    fn from(err: PoolError) -> Self {
        LogError::Database(format!("DB 풀 에러: {}", err))
    }
}

impl From<PgError> for LogError {
    fn from(err: PgError) -> Self {
        LogError::Database(format!("PostgreSQL 에러: {}", err))
    }
}

impl<T> From<PoisonError<T>> for LogError {
    fn from(err: PoisonError<T>) -> Self {
        LogError::Internal(format!("락 포이즌 에러: {}", err))
    }
}

impl From<YmlError> for LogError {
    fn from(err: YmlError) -> Self {
        LogError::Config(format!("YAML 파싱 에러: {}", err))
    }
}

/// 에러 처리 유틸리티 함수
pub fn config_err<E: fmt::Display>(err: E) -> LogError {
    LogError::Config(format!("{}", err))
}

pub fn db_err<E: fmt::Display>(err: E) -> LogError {
    LogError::Database(format!("{}", err))
}

pub fn input_err<E: fmt::Display>(err: E) -> LogError {
    LogError::InvalidInput(format!("{}", err))
}
