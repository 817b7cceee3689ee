mod cli;

use std::io::Write;
use std::num::NonZeroUsize;

use chrono::Local;
use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, info};

use reqlog_config::Settings;
use reqlog_db::{DatabasePool, LogPruner, PgLogStore, cleanup_expired_requests};
use reqlog_error::Result;

use cli::Cli;

/// 로거 세팅
fn setup_logger() {
    #[cfg(debug_assertions)]
    {
        Builder::new()
            .filter(None, LevelFilter::Debug)
            .parse_default_env()
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{} {} {}:{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    record.level(),
                    record.file().unwrap_or("unknown"),
                    record.line().unwrap_or(0),
                    record.args()
                )
            })
            .init()
    }

    #[cfg(not(debug_assertions))]
    {
        Builder::new()
            .filter(None, LevelFilter::Info)
            .parse_default_env()
            .init();
    }
}

/// 정리 작업 실행, 삭제한 요청 로그 수 반환
async fn run(cli: &Cli) -> Result<u64> {
    // 통합 설정 로드
    let settings = match &cli.config_dir {
        Some(dir) => Settings::from_dir(dir)?,
        None => Settings::new()?,
    };
    let chunk_size = cli
        .chunk_size
        .map(NonZeroUsize::get)
        .unwrap_or(settings.prune.chunk_size);

    // db 세팅
    let db_pool = DatabasePool::new(&settings.database)?;
    let store = PgLogStore::connect(&db_pool).await?;

    let deleted = match cli.horizon() {
        Some(horizon) => {
            info!("{horizon} 보다 오래된 요청 로그 삭제");
            cleanup_expired_requests(&store, horizon, chunk_size).await?
        }
        None => {
            info!("요청 로그 전체 삭제");
            LogPruner::new(&store).prune_all(chunk_size).await?
        }
    };

    Ok(deleted)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 로거 세팅
    setup_logger();

    let cli = Cli::parse();
    let deleted = run(&cli).await?;

    println!("{}", cli::report(deleted));
    Ok(())
}
