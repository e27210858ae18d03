use thiserror::Error;

#[derive(Debug, Error)]
pub enum BeltError {
    #[error("Failed to read BELT_* environment variables: {0}")]
    Env(#[from] envy::Error),

    #[error("Failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

pub type Result<T> = std::result::Result<T, BeltError>;
