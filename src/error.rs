use thiserror::Error;

/// Invalid merge settings in a config profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("variant separator must not be empty")]
    EmptySeparator,

    #[error("class group id must not be empty")]
    EmptyGroupId,

    #[error("class group '{0}' lists neither classes nor prefixes")]
    EmptyGroup(String),

    #[error("class group '{group}' overrides unknown group '{target}'")]
    UnknownConflict { group: String, target: String },
}
