use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteseekError {
    #[error(
        "No search endpoint configured.\n\nSet api.endpoint in ~/.config/siteseek/config.toml or pass --endpoint."
    )]
    EndpointMissing,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
