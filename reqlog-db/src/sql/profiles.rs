/// 테이블 생성 쿼리
pub const CREATE_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS profiles (
        id BIGSERIAL PRIMARY KEY,
        request_id BIGINT REFERENCES request_logs(id),
        name TEXT NOT NULL DEFAULT '',
        start_time TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        end_time TIMESTAMPTZ,
        file_path TEXT NOT NULL DEFAULT '',
        line_num INTEGER,
        dynamic BOOLEAN NOT NULL DEFAULT FALSE
    )";

/// 기본 인덱스 생성 쿼리
pub const CREATE_INDICES: [&str; 1] =
    ["CREATE INDEX IF NOT EXISTS profiles_request_id_idx ON profiles(request_id)"];
