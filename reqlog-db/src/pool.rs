use std::time::Duration;

use deadpool_postgres::{Manager, ManagerConfig, Object, Pool, RecyclingMethod, Runtime};
use log::info;
use tokio_postgres::NoTls;
use tokio_postgres::config::{Config, SslMode};

use reqlog_config::DbConfig;
use reqlog_error::{Result, db_err};

/// 정리 작업은 문장을 하나씩 순서대로 보내므로 연결 하나면 됨
const POOL_SIZE: usize = 1;

/// db 풀 인스턴스
///
/// 연결은 처음 `checkout` 할 때 맺습니다. 연결 대기와 연결 생성 모두
/// `connection_timeout_seconds` 안에 끝나야 합니다.
#[derive(Clone)]
pub struct DatabasePool {
    pool: Pool,
}

impl DatabasePool {
    pub fn new(dbconfig: &DbConfig) -> Result<Self> {
        let timeout = Duration::from_secs(dbconfig.pool.connection_timeout_seconds);

        let mut pg_config = pg_config(dbconfig);
        pg_config.connect_timeout(timeout);

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Verified,
            },
        );
        let pool = Pool::builder(manager)
            .max_size(POOL_SIZE)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .build()
            .map_err(|e| db_err(format!("db 풀 생성 실패: {e}")))?;

        let conn = &dbconfig.connection;
        info!("db 풀 생성: {}:{}/{}", conn.host, conn.port, conn.database);
        Ok(Self { pool })
    }

    /// 연결 하나 대여, 반환은 `Object` drop 시점
    pub async fn checkout(&self) -> Result<Object> {
        let conn = self.pool.get().await?;
        Ok(conn)
    }
}

fn pg_config(dbconfig: &DbConfig) -> Config {
    let conn = &dbconfig.connection;

    let mut config = Config::new();
    config
        .host(&conn.host)
        .port(conn.port)
        .dbname(&conn.database)
        .user(&conn.user)
        .password(&conn.password)
        .ssl_mode(ssl_mode(&conn.sslmode))
        .application_name("clear_request_log");
    config
}

/// TLS 커넥터가 없으므로 prefer 외에는 disable 뿐
fn ssl_mode(sslmode: &str) -> SslMode {
    if sslmode.eq_ignore_ascii_case("disable") {
        SslMode::Disable
    } else {
        SslMode::Prefer
    }
}
