use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum BilError {
    #[error("Couldn't read {}: {}", .path.display(), .source)]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// absent, non-numeric or zero NROWS/NCOLS
    #[error("Missing or invalid {}-Header", .0)]
    MissingKey(&'static str),

    #[error("Raster has {actual} bytes, expected {expected} (rows * cols * element size)")]
    MalformedRaster { expected: usize, actual: usize },

    /// zero rows/cols, or more cells than fit in memory addressing
    #[error("Raster of {rows}x{cols} cells is empty or too large to address")]
    InvalidDimensions { rows: usize, cols: usize },
}

impl BilError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BilError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
