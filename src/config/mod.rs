mod loader;
mod model;
mod validation;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem};
pub use model::{DEFAULT_COMMIT_WINDOW, DEFAULT_EXCLUSION_THRESHOLD, RenderConfig, ReportConfig};
pub use validation::validate_config;
