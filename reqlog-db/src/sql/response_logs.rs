/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS response_logs (
        id BIGSERIAL PRIMARY KEY,
        request_id BIGINT NOT NULL REFERENCES request_logs(id),
        status_code INTEGER NOT NULL,
        headers TEXT NOT NULL,
        body_preview TEXT,
        response_size BIGINT NOT NULL DEFAULT 0
    )";

/// 기본 인덱스 생성 쿼리
pub const CREATE_INDICES: [&str; 2] = [
    "CREATE INDEX IF NOT EXISTS response_logs_request_id_idx ON response_logs(request_id)",
    "CREATE INDEX IF NOT EXISTS response_logs_status_code_idx ON response_logs(status_code)",
];
