pub mod files;
pub mod state;
pub mod store;

pub use files::{ensure_dir, get_data_dir, init_local_dir, LOG_FILE};
pub use state::{load_tasks, load_theme, load_timer, save_tasks, save_theme, save_timer};
pub use store::{FileStore, KeyValueStore, MemoryStore};
