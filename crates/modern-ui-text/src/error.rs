use std::path::PathBuf;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur while loading or baking a font
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The font source could not be read.
    #[error("failed to read font file {path:?}: {source}")]
    FileMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The bytes are not a font the rasterizer understands.
    #[error("failed to parse font: {0}")]
    Parse(String),

    /// A glyph did not fit into the atlas at the requested pixel height.
    #[error(
        "glyph {glyph} does not fit in a {atlas_width}x{atlas_height} atlas at {pixel_height}px"
    )]
    BakeFailed {
        glyph: u32,
        pixel_height: f32,
        atlas_width: u32,
        atlas_height: u32,
    },
}
