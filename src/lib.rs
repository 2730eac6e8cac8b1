//! Reads BIL elevation rasters: a `.hdr` key/value sidecar plus a flat
//! little-endian `.bil` grid, decoded into a cleansed elevation grid.

pub mod bil;
pub mod commands;
pub mod utils;
