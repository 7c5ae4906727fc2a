pub mod config;
pub mod fs_store;
pub mod handler;
pub mod payload;
pub mod splice;
pub mod store;
pub mod types;

pub use config::PatchConfig;
pub use fs_store::FsLineStore;
pub use handler::Patcher;
pub use store::*;
pub use types::*;
