//! 실제 PostgreSQL 대상 테스트
//!
//! `REQLOG_TEST_DB_CONFIG` 에 db.yml 경로가 있을 때만 실행됩니다.

mod common;

use chrono::{DateTime, TimeDelta, Utc};

use common::{days_ago, init_logger};
use reqlog_config::DbConfig;
use reqlog_db::{DatabasePool, LogPruner, PgLogStore, create_tables};

async fn insert_request(conn: &deadpool_postgres::Object, start_time: DateTime<Utc>) -> i64 {
    let row = conn
        .query_one(
            "INSERT INTO request_logs (start_time, host, method, path, header, client_ip)
             VALUES ($1, 'example.com', 'GET', '/', '{}', '127.0.0.1')
             RETURNING id",
            &[&start_time],
        )
        .await
        .unwrap();
    row.get(0)
}

async fn count(conn: &deadpool_postgres::Object, sql: &str) -> i64 {
    conn.query_one(sql, &[]).await.unwrap().get(0)
}

#[tokio::test]
async fn prunes_against_postgres() {
    let Ok(path) = std::env::var("REQLOG_TEST_DB_CONFIG") else {
        eprintln!("REQLOG_TEST_DB_CONFIG 미설정, 건너뜀");
        return;
    };
    init_logger();

    let config = DbConfig::from_file(path).unwrap();
    // 풀마다 연결이 하나라 데이터 준비용 풀을 따로 둠
    let fixture_pool = DatabasePool::new(&config).unwrap();
    let conn = fixture_pool.checkout().await.unwrap();
    create_tables(&conn).await.unwrap();

    let pool = DatabasePool::new(&config).unwrap();
    let pruner = LogPruner::new(PgLogStore::connect(&pool).await.unwrap());
    pruner.prune_all(1000).await.unwrap();

    let recent = insert_request(&conn, days_ago(10)).await;
    let old = insert_request(&conn, days_ago(20)).await;
    let older = insert_request(&conn, days_ago(30)).await;

    conn.execute(
        "INSERT INTO profiles (request_id, name) VALUES ($1, 'a'), ($1, 'b')",
        &[&recent],
    )
    .await
    .unwrap();
    conn.execute(
        "INSERT INTO sql_queries (request_id, query) VALUES ($1, 'SELECT 1')",
        &[&old],
    )
    .await
    .unwrap();
    conn.execute(
        "INSERT INTO response_logs (request_id, status_code, headers) VALUES ($1, 200, '{}'), ($2, 404, '{}')",
        &[&old, &older],
    )
    .await
    .unwrap();

    let deleted = pruner.prune_older_than(TimeDelta::days(15), 1).await.unwrap();
    assert_eq!(deleted, 2);

    let remaining: Vec<i64> = conn
        .query("SELECT id FROM request_logs ORDER BY id", &[])
        .await
        .unwrap()
        .iter()
        .map(|row| row.get(0))
        .collect();
    assert_eq!(remaining, vec![recent]);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM profiles").await, 2);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM sql_queries").await, 0);
    assert_eq!(count(&conn, "SELECT COUNT(*) FROM response_logs").await, 0);

    assert_eq!(pruner.prune_older_than(TimeDelta::days(15), 1).await.unwrap(), 0);
    assert_eq!(pruner.prune_all(1000).await.unwrap(), 1);
}
