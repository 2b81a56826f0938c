mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{
    AccountConfig, ApiConfig, ChartConfig, ChartStyle, Config, DEFAULT_API_BASE_URL,
    DEFAULT_MIN_PERCENT, DEFAULT_OUTPUT, DEFAULT_TOKEN_ENV, DEFAULT_TOP_N, PolicyKind,
};
pub use validation::validate_config;
