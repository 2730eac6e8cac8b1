mod decoder;
mod error;
mod header;
mod raster;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use decoder::{decode, PixelType};
pub use error::BilError;
pub use header::{read_header, BilHeader};
pub use raster::{BilRaster, RasterStats};

pub const HEADER_EXTENSION: &str = "hdr";
pub const RASTER_EXTENSION: &str = "bil";

/// A `.hdr` / `.bil` pair, fully decoded.
#[derive(Debug)]
pub struct BilFile {
    pub header: BilHeader,
    pub raster: BilRaster,
}

/// Sibling `.hdr` and `.bil` paths for either file of a pair.
pub fn file_pair_paths(path: &Path) -> (PathBuf, PathBuf) {
    (
        path.with_extension(HEADER_EXTENSION),
        path.with_extension(RASTER_EXTENSION),
    )
}

impl BilFile {
    pub fn open(path: &Path) -> Result<BilFile, BilError> {
        let (header_path, raster_path) = file_pair_paths(path);
        log::debug!(
            "Opening {} with raster {}",
            header_path.display(),
            raster_path.display()
        );

        let header = read_header(&header_path)?;
        let rows = header.rows()?;
        let cols = header.cols()?;
        let pixel_type = header.pixel_type();

        let bytes = fs::read(&raster_path).map_err(|e| BilError::file_access(&raster_path, e))?;
        let raster = decode(&bytes, rows, cols, pixel_type)?;

        Ok(BilFile { header, raster })
    }
}
