/// 테이블 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTable {
    RequestLogs,
    Profiles,
    SqlQueries,
    ResponseLogs,
}

impl LogTable {
    /// 요청 로그를 참조하는 테이블 (삭제 순서)
    pub const DEPENDENTS: [LogTable; 3] = [
        LogTable::Profiles,
        LogTable::SqlQueries,
        LogTable::ResponseLogs,
    ];

    /// 테이블 이름 반환
    pub const fn name(self) -> &'static str {
        match self {
            LogTable::RequestLogs => "request_logs",
            LogTable::Profiles => "profiles",
            LogTable::SqlQueries => "sql_queries",
            LogTable::ResponseLogs => "response_logs",
        }
    }
}

/// 삭제 조건: `table` 에서 `key_column` 이 `ids` 중 하나인 행
#[derive(Debug, Clone, Copy)]
pub struct DeleteCriteria<'a> {
    pub table: LogTable,
    pub key_column: &'static str,
    pub ids: &'a [i64],
}

impl<'a> DeleteCriteria<'a> {
    /// 요청 로그 본체 삭제 조건
    pub fn requests(ids: &'a [i64]) -> Self {
        Self {
            table: LogTable::RequestLogs,
            key_column: "id",
            ids,
        }
    }

    /// 요청 로그를 참조하는 행 삭제 조건
    pub fn dependents_of(table: LogTable, ids: &'a [i64]) -> Self {
        Self {
            table,
            key_column: "request_id",
            ids,
        }
    }

    /// DELETE 문 생성, id 목록은 $1 (BIGINT[]) 로 바인딩
    pub fn to_sql(&self) -> String {
        format!(
            "DELETE FROM {} WHERE {} = ANY($1)",
            self.table.name(),
            self.key_column
        )
    }
}
