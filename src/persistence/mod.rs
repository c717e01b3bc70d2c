pub mod error;
pub mod files;
pub mod store;

pub use error::StoreError;
pub use files::{
    atomic_write, find_local_data_dir, home_data_dir, init_local_data_dir, DATA_FILE_NAME,
    LOG_FILE_NAME,
};
pub use store::{load_today, save, LoadOutcome, Loaded};
