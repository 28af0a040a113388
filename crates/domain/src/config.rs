pub mod errors;
pub mod logging;
pub mod output;
pub mod probe;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use output::{OutputConfig, OutputFormat};
pub use probe::ProbeConfig;
pub use root::{CliOverrides, Config};
