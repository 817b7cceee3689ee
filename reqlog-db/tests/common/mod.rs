#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};

use reqlog_db::{DeleteCriteria, LogStore, LogTable};
use reqlog_error::{LogError, Result, db_err};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - TimeDelta::days(days)
}

#[derive(Default)]
struct State {
    /// request id -> start_time
    requests: BTreeMap<i64, DateTime<Utc>>,
    /// (table, row id, request id)
    dependents: Vec<(LogTable, i64, i64)>,
    next_dependent_id: i64,
    statements: Vec<LogTable>,
    selects: usize,
}

/// `request_logs` 삭제 동작
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParentDelete {
    #[default]
    Deletes,
    /// 삭제를 막는 트리거처럼 행을 남기고 0 반환
    KeepsRows,
    /// 다른 작업이 먼저 지운 것처럼 행은 사라지고 0 반환
    AlreadyGone,
}

/// 메모리 기반 테스트용 저장소
#[derive(Default)]
pub struct MemoryLogStore {
    state: Mutex<State>,
    fail_on: Option<LogTable>,
    parent_delete: ParentDelete,
}

impl MemoryLogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// `table` 삭제 시 실패하는 저장소
    pub fn failing_on(table: LogTable) -> Self {
        Self {
            fail_on: Some(table),
            ..Self::default()
        }
    }

    pub fn with_parent_delete(parent_delete: ParentDelete) -> Self {
        Self {
            parent_delete,
            ..Self::default()
        }
    }

    pub fn add_request(&self, id: i64, start_time: DateTime<Utc>) {
        self.state.lock().unwrap().requests.insert(id, start_time);
    }

    /// 참조 행 추가, 행 id 반환
    pub fn add_dependent(&self, table: LogTable, request_id: i64) -> i64 {
        let mut state = self.state.lock().unwrap();
        state.next_dependent_id += 1;
        let row_id = state.next_dependent_id;
        state.dependents.push((table, row_id, request_id));
        row_id
    }

    pub fn request_ids(&self) -> Vec<i64> {
        self.state.lock().unwrap().requests.keys().copied().collect()
    }

    pub fn dependent_ids(&self) -> Vec<i64> {
        let state = self.state.lock().unwrap();
        let mut ids: Vec<_> = state.dependents.iter().map(|(_, id, _)| *id).collect();
        ids.sort_unstable();
        ids
    }

    pub fn statements(&self) -> Vec<LogTable> {
        self.state.lock().unwrap().statements.clone()
    }

    pub fn selects(&self) -> usize {
        self.state.lock().unwrap().selects
    }

    /// 부모가 없는 참조 행이 있는지
    pub fn has_orphans(&self) -> bool {
        let state = self.state.lock().unwrap();
        state
            .dependents
            .iter()
            .any(|(_, _, request_id)| !state.requests.contains_key(request_id))
    }
}

#[async_trait]
impl LogStore for MemoryLogStore {
    async fn select_request_ids(
        &self,
        cutoff: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<i64>> {
        let mut state = self.state.lock()?;
        state.selects += 1;

        let mut rows: Vec<(DateTime<Utc>, i64)> = state
            .requests
            .iter()
            .filter(|(_, start)| cutoff.is_none_or(|cutoff| **start < cutoff))
            .map(|(id, start)| (*start, *id))
            .collect();
        rows.sort();

        Ok(rows.into_iter().take(limit).map(|(_, id)| id).collect())
    }

    async fn delete_where(&self, criteria: &DeleteCriteria<'_>) -> Result<u64> {
        if self.fail_on == Some(criteria.table) {
            return Err(db_err(format!("{} 삭제 거부", criteria.table.name())));
        }

        let mut state = self.state.lock()?;
        state.statements.push(criteria.table);

        match criteria.table {
            LogTable::RequestLogs => {
                if state
                    .dependents
                    .iter()
                    .any(|(_, _, request_id)| criteria.ids.contains(request_id))
                {
                    return Err(LogError::Database(
                        "참조 중인 요청 로그는 삭제할 수 없습니다".to_string(),
                    ));
                }
                if self.parent_delete == ParentDelete::KeepsRows {
                    return Ok(0);
                }
                let before = state.requests.len();
                state.requests.retain(|id, _| !criteria.ids.contains(id));
                match self.parent_delete {
                    ParentDelete::AlreadyGone => Ok(0),
                    _ => Ok((before - state.requests.len()) as u64),
                }
            }
            table => {
                let before = state.dependents.len();
                state.dependents.retain(|(t, _, request_id)| {
                    *t != table || !criteria.ids.contains(request_id)
                });
                Ok((before - state.dependents.len()) as u64)
            }
        }
    }
}
