pub mod setting;
pub mod dbconfig;
pub mod pruneconfig;

pub use setting::Settings;
pub use dbconfig::DbConfig;
pub use pruneconfig::{PruneConfig, DEFAULT_CHUNK_SIZE};
