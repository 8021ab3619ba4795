use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but could not be interpreted.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// The environment variable name
        name: String,
        /// Why the value was rejected
        reason: String,
    },

    /// The customer records file could not be read or parsed.
    #[error("Failed to load customer records from '{path}': {reason}")]
    CustomersFile {
        /// The configured file path
        path: String,
        /// Read or parse failure description
        reason: String,
    },
}
