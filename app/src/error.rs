use tilegen::GenError;

// Errors around the level config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write config: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] ron::error::SpannedError),

    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("layer `{layer}` failed: {source}")]
    Generate {
        layer: String,
        #[source]
        source: GenError,
    },

    #[error("unknown algorithm `{0}`, expected one of: {names}", names = tilegen::Algorithm::NAMES.join(", "))]
    UnknownAlgorithm(String),

    #[error("level has no layers")]
    NoLayers,

    #[error("level image does not fit at scale {scale}")]
    ImageTooLarge { scale: u32 },

    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
}
