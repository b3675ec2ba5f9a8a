use std::path::PathBuf;

use jumpquest_core::SpriteError;

/// Startup failure while loading or preparing game assets.
#[derive(Debug)]
pub enum AssetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// A sprite directory holds no PNG files.
    EmptyDirectory(PathBuf),
    /// A sheet is narrower than one frame.
    SheetTooNarrow {
        path: PathBuf,
        width: u32,
        frame_width: u32,
    },
    Sprite(SpriteError),
    /// Frame too large to upload as a texture.
    Texture { width: u32, height: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Decode { path, source } => {
                write!(f, "cannot decode {}: {source}", path.display())
            },
            Self::EmptyDirectory(path) => write!(f, "no PNG sheets in {}", path.display()),
            Self::SheetTooNarrow {
                path,
                width,
                frame_width,
            } => write!(
                f,
                "{} is {width}px wide, less than one {frame_width}px frame",
                path.display()
            ),
            Self::Sprite(e) => write!(f, "{e}"),
            Self::Texture { width, height } => {
                write!(f, "frame {width}x{height} exceeds the texture size limit")
            },
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Sprite(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpriteError> for AssetError {
    fn from(e: SpriteError) -> Self {
        Self::Sprite(e)
    }
}
