use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable is set but cannot be parsed into the expected type.
    ///
    /// Check the `.env` file or process environment for the named variable.
    #[error("Invalid value '{value}' for environment variable {name}")]
    InvalidEnvVar {
        /// Name of the offending environment variable
        name: String,
        /// The raw value that failed to parse
        value: String,
    },
}
