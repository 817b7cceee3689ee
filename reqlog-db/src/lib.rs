pub mod pool;
pub mod db;
pub mod sql;
pub mod table;
pub mod store;
pub mod prune;

pub use pool::DatabasePool;

pub use db::create_tables;

pub use table::{
    DeleteCriteria,
    LogTable,
};

pub use store::{
    LogStore,
    PgLogStore,
};

pub use prune::{
    DEFAULT_CHUNK_SIZE,
    ExpiredChunks,
    LogPruner,
    cleanup_expired_requests,
    purge,
};
