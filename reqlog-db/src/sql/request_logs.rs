/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS request_logs (
        id BIGSERIAL PRIMARY KEY,
        start_time TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        end_time TIMESTAMPTZ,
        host TEXT NOT NULL,
        method TEXT NOT NULL,
        path TEXT NOT NULL,
        query_params TEXT,
        header TEXT NOT NULL,
        body TEXT,
        client_ip TEXT NOT NULL,
        num_sql_queries INTEGER NOT NULL DEFAULT 0
    )";

/// 기본 인덱스 생성 쿼리
pub const CREATE_INDICES: [&str; 3] = [
    "CREATE INDEX IF NOT EXISTS request_logs_start_time_idx ON request_logs(start_time)",
    "CREATE INDEX IF NOT EXISTS request_logs_host_idx ON request_logs(host)",
    "CREATE INDEX IF NOT EXISTS request_logs_path_idx ON request_logs(path)",
];

/// 보존기간이 지난 요청 id 조회 (오래된 순)
pub const SELECT_IDS_BEFORE: &str = "
    SELECT id
    FROM request_logs
    WHERE start_time < $1
    ORDER BY start_time, id
    LIMIT $2
";

/// 전체 요청 id 조회 (오래된 순)
pub const SELECT_IDS_ALL: &str = "
    SELECT id
    FROM request_logs
    ORDER BY start_time, id
    LIMIT $1
";
