/// Problems with the animation data handed to the simulation at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpriteError {
    /// A required animation strip is not present.
    MissingSheet(String),
    /// An animation strip exists but holds no frames.
    EmptySheet(String),
}

impl std::fmt::Display for SpriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSheet(name) => write!(f, "missing sprite sheet `{name}`"),
            Self::EmptySheet(name) => write!(f, "sprite sheet `{name}` has no frames"),
        }
    }
}

impl std::error::Error for SpriteError {}
