use byteorder::{ByteOrder, LE};
use serde::Serialize;

use super::{BilError, BilRaster};

/// The unsigned 16 bit max, used by the format as void marker.
pub const VOID_VALUE: f64 = 65535.0;
pub const MAX_ELEVATION: f64 = 20000.0;
pub const NO_DATA_PLACEHOLDER: f64 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PixelType {
    /// 4 byte little-endian IEEE-754
    Float,
    /// 2 byte little-endian u16
    UnsignedInt,
}

impl PixelType {
    pub fn element_size(&self) -> usize {
        match self {
            PixelType::Float => 4,
            PixelType::UnsignedInt => 2,
        }
    }

    fn read(&self, buf: &[u8]) -> f64 {
        match self {
            PixelType::Float => f64::from(LE::read_f32(buf)),
            PixelType::UnsignedInt => f64::from(LE::read_u16(buf)),
        }
    }
}

/// Only the literal `FLOAT` selects floats, the format assumes unsigned
/// integers for everything else.
impl From<&str> for PixelType {
    fn from(value: &str) -> Self {
        match value {
            "FLOAT" => PixelType::Float,
            _ => PixelType::UnsignedInt,
        }
    }
}

/// The void marker and anything below 0 or above 20000 become the placeholder.
/// NaN fails every comparison and is kept as is.
fn cleanse(val: f64) -> Option<f64> {
    if val == VOID_VALUE || val < 0.0 || val > MAX_ELEVATION {
        None
    } else {
        Some(val)
    }
}

pub fn decode(
    bytes: &[u8],
    rows: usize,
    cols: usize,
    pixel_type: impl Into<PixelType>,
) -> Result<BilRaster, BilError> {
    let pixel_type = pixel_type.into();
    let element_size = pixel_type.element_size();

    if rows == 0 || cols == 0 {
        return Err(BilError::InvalidDimensions { rows, cols });
    }

    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(element_size))
        .ok_or(BilError::InvalidDimensions { rows, cols })?;

    if bytes.len() != expected {
        return Err(BilError::MalformedRaster {
            expected,
            actual: bytes.len(),
        });
    }

    let mut void_count = 0;
    let data: Vec<f64> = bytes
        .chunks_exact(element_size)
        .map(|chunk| match cleanse(pixel_type.read(chunk)) {
            Some(val) => val,
            None => {
                void_count += 1;
                NO_DATA_PLACEHOLDER
            }
        })
        .collect();

    log::debug!(
        "Decoded {}x{} {:?} raster, {} void cells",
        rows,
        cols,
        pixel_type,
        void_count
    );

    Ok(BilRaster::new(rows, cols, void_count, data))
}
