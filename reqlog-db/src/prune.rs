//! 요청 로그 보존기간 정리
//!
//! 요청 로그를 `chunk_size` 개씩 오래된 순으로 잘라 삭제합니다. 청크마다
//! 참조 테이블(`profiles`, `sql_queries`, `response_logs`)을 테이블별로 한 번씩
//! 먼저 지우고 마지막에 `request_logs` 를 지웁니다. 저장소의 cascade 처리에
//! 기대지 않으므로 청크 하나가 잡는 락과 쿼리 크기는 `chunk_size` 로 제한됩니다.
//!
//! 청크 중간에 실패하면 해당 청크는 일부만 삭제된 채로 남고 에러가 그대로
//! 호출자에게 전달됩니다. 재시도는 하지 않습니다. 트리거 등으로 요청 로그가
//! 한 행도 지워지지 않은 청크가 그대로 다시 조회되면 `LogError::Internal` 로
//! 멈춥니다.

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, error, info, warn};

use reqlog_error::{LogError, Result, input_err};

use crate::store::LogStore;
use crate::table::{DeleteCriteria, LogTable};

pub use reqlog_config::DEFAULT_CHUNK_SIZE;

/// 정리 대상 요청 id 청크 시퀀스
///
/// 매 호출마다 저장소에서 남아있는 가장 오래된 id 를 새로 조회하므로 오프셋이
/// 필요 없고, 이미 삭제한 행을 다시 고르지 않습니다. 조회 결과가 비면 끝입니다.
pub struct ExpiredChunks<'s, S: ?Sized> {
    store: &'s S,
    cutoff: Option<DateTime<Utc>>,
    chunk_size: usize,
    done: bool,
}

impl<'s, S: LogStore + ?Sized> ExpiredChunks<'s, S> {
    pub fn new(store: &'s S, cutoff: Option<DateTime<Utc>>, chunk_size: usize) -> Result<Self> {
        validate_chunk_size(chunk_size)?;
        Ok(Self {
            store,
            cutoff,
            chunk_size,
            done: false,
        })
    }

    /// 다음 청크 조회, 더 없으면 `None`
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<i64>>> {
        if self.done {
            return Ok(None);
        }

        let ids = self
            .store
            .select_request_ids(self.cutoff, self.chunk_size)
            .await?;

        if ids.is_empty() {
            self.done = true;
            return Ok(None);
        }
        Ok(Some(ids))
    }

    /// 처음부터 다시 조회
    pub fn restart(&mut self) {
        self.done = false;
    }
}

/// 요청 로그 정리기
pub struct LogPruner<S> {
    store: S,
}

impl<S: LogStore> LogPruner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 현재 시각 기준 `horizon` 보다 오래된 요청 로그 삭제
    pub async fn prune_older_than(&self, horizon: TimeDelta, chunk_size: usize) -> Result<u64> {
        let cutoff = cutoff_for(Utc::now(), horizon)?;
        self.prune_before(cutoff, chunk_size).await
    }

    /// `cutoff` 이전에 시작된 요청 로그 삭제
    pub async fn prune_before(&self, cutoff: DateTime<Utc>, chunk_size: usize) -> Result<u64> {
        info!("요청 로그 정리 시작: {cutoff} 이전, 청크 크기 {chunk_size}");
        self.prune(Some(cutoff), chunk_size).await
    }

    /// 요청 로그 전체 삭제
    pub async fn prune_all(&self, chunk_size: usize) -> Result<u64> {
        info!("요청 로그 전체 삭제 시작: 청크 크기 {chunk_size}");
        self.prune(None, chunk_size).await
    }

    async fn prune(&self, cutoff: Option<DateTime<Utc>>, chunk_size: usize) -> Result<u64> {
        let mut chunks = ExpiredChunks::new(&self.store, cutoff, chunk_size)?;
        let mut deleted_requests: u64 = 0;
        // 요청 로그가 한 행도 지워지지 않은 직전 청크
        let mut stalled: Option<Vec<i64>> = None;

        while let Some(ids) = chunks.next_chunk().await? {
            if stalled.as_ref() == Some(&ids) {
                error!("요청 로그가 삭제되지 않아 정리 중단: {ids:?}");
                return Err(LogError::Internal(format!(
                    "요청 로그 {}개가 삭제되지 않고 다시 조회됨",
                    ids.len()
                )));
            }

            if self.delete_requests(&ids).await? == 0 {
                // 다른 작업이 먼저 지웠다면 다음 조회에는 나오지 않음
                warn!("요청 로그 {}개 중 삭제된 행 없음", ids.len());
                stalled = Some(ids);
                continue;
            }

            stalled = None;
            deleted_requests += ids.len() as u64;
            debug!("청크 삭제 완료: {}개 (누적 {deleted_requests})", ids.len());
        }

        info!("요청 로그 {deleted_requests}개 삭제 완료");
        Ok(deleted_requests)
    }

    /// 청크 하나 삭제: 참조 테이블 먼저, 요청 로그는 마지막
    ///
    /// 삭제된 요청 로그 행 수 반환
    async fn delete_requests(&self, ids: &[i64]) -> Result<u64> {
        for table in LogTable::DEPENDENTS {
            self.store
                .delete_where(&DeleteCriteria::dependents_of(table, ids))
                .await?;
        }

        self.store.delete_where(&DeleteCriteria::requests(ids)).await
    }
}

/// `horizon` 보다 오래된 요청 로그 삭제, 스케줄러에서 호출
pub async fn cleanup_expired_requests<S: LogStore>(
    store: S,
    horizon: TimeDelta,
    chunk_size: usize,
) -> Result<u64> {
    LogPruner::new(store)
        .prune_older_than(horizon, chunk_size)
        .await
}

/// 요청 로그 전체 삭제
pub async fn purge<S: LogStore>(store: S) -> Result<u64> {
    LogPruner::new(store).prune_all(DEFAULT_CHUNK_SIZE).await
}

fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(input_err("chunk_size는 1 이상이어야 합니다"));
    }
    Ok(())
}

fn cutoff_for(now: DateTime<Utc>, horizon: TimeDelta) -> Result<DateTime<Utc>> {
    now.checked_sub_signed(horizon)
        .ok_or_else(|| input_err(format!("보존기간이 너무 깁니다: {horizon}")))
}
