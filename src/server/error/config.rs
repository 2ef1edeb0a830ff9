use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `JWT_SECRET` is set but empty.
    ///
    /// Tokens signed with an empty secret would be trivially forgeable, so the server
    /// refuses to start.
    #[error("JWT signing secret must not be empty")]
    EmptySigningSecret,

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value '{value}' for {name}")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// The value that failed to parse
        value: String,
    },
}
