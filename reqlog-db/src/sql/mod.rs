pub mod profiles;
pub mod request_logs;
pub mod response_logs;
pub mod sql_queries;
