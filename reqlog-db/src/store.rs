use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_postgres::Object;
use log::{debug, error};

use reqlog_error::{LogError, Result, input_err};

use crate::pool::DatabasePool;
use crate::sql::request_logs;
use crate::table::DeleteCriteria;

/// 요청 로그 저장소
///
/// 정리 작업이 필요로 하는 두 가지 연산만 노출합니다.
#[async_trait]
pub trait LogStore: Send + Sync {
    /// `cutoff` 이전에 시작된 요청 id 를 오래된 순으로 최대 `limit` 개 조회
    ///
    /// `cutoff` 가 없으면 전체 요청이 대상입니다.
    async fn select_request_ids(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<i64>>;

    /// 조건에 맞는 행을 한 번에 삭제하고 삭제된 행 수 반환
    async fn delete_where(&self, criteria: &DeleteCriteria<'_>) -> Result<u64>;
}

#[async_trait]
impl<S: LogStore + ?Sized> LogStore for &S {
    async fn select_request_ids(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<i64>> {
        (**self).select_request_ids(cutoff, limit).await
    }

    async fn delete_where(&self, criteria: &DeleteCriteria<'_>) -> Result<u64> {
        (**self).delete_where(criteria).await
    }
}

/// PostgreSQL 기반 요청 로그 저장소
///
/// 풀에서 연결 하나를 빌려 작업이 끝날 때까지 모든 문장을 그 연결로 보냅니다.
pub struct PgLogStore {
    conn: Object,
}

impl PgLogStore {
    pub fn new(conn: Object) -> Self {
        Self { conn }
    }

    pub async fn connect(pool: &DatabasePool) -> Result<Self> {
        let conn = pool.checkout().await.map_err(|e| {
            error!("db 연결 실패: {e}");
            e
        })?;
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl LogStore for PgLogStore {
    async fn select_request_ids(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<i64>> {
        let limit = i64::try_from(limit)
            .map_err(|_| input_err(format!("조회 개수가 너무 큽니다: {limit}")))?;

        let rows = match cutoff {
            Some(cutoff) => {
                self.conn
                    .query(request_logs::SELECT_IDS_BEFORE, &[&cutoff, &limit])
                    .await
            }
            None => self.conn.query(request_logs::SELECT_IDS_ALL, &[&limit]).await,
        }
        .map_err(|e| {
            error!("요청 id 조회 실패: {e}");
            LogError::from(e)
        })?;

        let ids = rows
            .iter()
            .map(|row| row.try_get::<usize, i64>(0))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!("요청 id {}개 조회", ids.len());
        Ok(ids)
    }

    async fn delete_where(&self, criteria: &DeleteCriteria<'_>) -> Result<u64> {
        let sql = criteria.to_sql();

        let deleted = self
            .conn
            .execute(sql.as_str(), &[&criteria.ids])
            .await
            .map_err(|e| {
                error!("{} 삭제 실패: {e}", criteria.table.name());
                LogError::from(e)
            })?;

        debug!("{} {}행 삭제", criteria.table.name(), deleted);
        Ok(deleted)
    }
}
