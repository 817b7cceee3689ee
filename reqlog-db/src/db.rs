use log::{debug, error};

use reqlog_error::Result;

use crate::sql::{profiles, request_logs, response_logs, sql_queries};

/// 테이블 이름, 생성 쿼리, 인덱스 쿼리 (참조 관계상 request_logs 가 먼저)
const SCHEMA: [(&str, &str, &[&str]); 4] = [
    ("request_logs", request_logs::CREATE_TABLE, &request_logs::CREATE_INDICES),
    ("profiles", profiles::CREATE_TABLE, &profiles::CREATE_INDICES),
    ("sql_queries", sql_queries::CREATE_TABLE, &sql_queries::CREATE_INDICES),
    ("response_logs", response_logs::CREATE_TABLE, &response_logs::CREATE_INDICES),
];

/// 로그 테이블 생성, 인덱싱
///
/// 이미 있는 테이블과 인덱스는 그대로 둡니다.
pub async fn create_tables(conn: &deadpool_postgres::Object) -> Result<()> {
    for (name, create_table, indices) in SCHEMA {
        match conn.execute(create_table, &[]).await {
            Ok(_) => debug!("{name} 테이블 생성 완료"),
            Err(e) => {
                error!("{name} 테이블 생성중 오류 발생: {e}");
                return Err(e.into());
            }
        }

        // 인덱싱
        for index_query in indices {
            if let Err(e) = conn.execute(*index_query, &[]).await {
                error!("{name} 인덱스 생성 실패: {e}");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
