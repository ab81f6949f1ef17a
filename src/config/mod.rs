mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
};
pub use model::{Config, ContentConfig, DEFAULT_EXCLUDE_DIRS, DEFAULT_EXTENSIONS, ScannerConfig};
