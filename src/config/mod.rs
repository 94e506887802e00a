mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem, TAXONOMY_FILE_NAME};
pub use model::{Config, OutputConfig, RankingConfig};
