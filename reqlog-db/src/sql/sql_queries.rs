/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS sql_queries (
        id BIGSERIAL PRIMARY KEY,
        request_id BIGINT REFERENCES request_logs(id),
        query TEXT NOT NULL,
        start_time TIMESTAMPTZ,
        end_time TIMESTAMPTZ,
        traceback TEXT
    )";

/// 기본 인덱스 생성 쿼리
pub const CREATE_INDICES: [&str; 1] =
    ["CREATE INDEX IF NOT EXISTS sql_queries_request_id_idx ON sql_queries(request_id)"];
