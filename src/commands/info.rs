use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::bail;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::bil::{BilError, BilFile, PixelType, RasterStats};
use crate::commands::BilCommand;
use crate::utils::{bail_on_errors, find_header_files, FileError};


#[derive(Debug, Serialize)]
pub struct RasterSummary {
    pub path: PathBuf,
    pub rows: usize,
    pub cols: usize,
    pub pixel_type: PixelType,
    pub void_cells: usize,
    pub stats: RasterStats,
}

pub fn summarize(path: &Path) -> Result<RasterSummary, BilError> {
    let bil = BilFile::open(path)?;

    Ok(RasterSummary {
        path: path.to_path_buf(),
        rows: bil.raster.rows(),
        cols: bil.raster.cols(),
        pixel_type: bil.header.pixel_type(),
        void_cells: bil.raster.void_count(),
        stats: bil.raster.stats(),
    })
}

pub struct Info {}

impl BilCommand for Info {
    fn get_description(&self) -> &str {
        "Decode BIL rasters and print their dimensions and elevation range."
    }

    fn exec(&self, input_path: &Path, output_path: Option<&Path>) -> anyhow::Result<()> {
        let start = Instant::now();

        let paths = if input_path.is_dir() {
            find_header_files(input_path)?
        } else {
            vec![input_path.to_path_buf()]
        };

        if paths.is_empty() {
            bail!("Couldn't find any .hdr file in {}", input_path.display());
        }
        println!("ℹ️  Found {} raster(s)", paths.len());

        println!("▶️  Decoding rasters");
        let results: Vec<_> = paths
            .par_iter()
            .map(|path| -> Result<RasterSummary, FileError> {
                let now = Instant::now();
                let summary = summarize(path).map_err(|e| FileError::new(path, e))?;
                println!(
                    "    ✔️  Decoded {} in {}ms",
                    path.display(),
                    now.elapsed().as_millis()
                );
                Ok(summary)
            })
            .collect();

        let (summaries, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
        let summaries: Vec<RasterSummary> = summaries.into_iter().filter_map(Result::ok).collect();
        let errors: Vec<FileError> = errors.into_iter().filter_map(Result::err).collect();

        bail_on_errors("decode", errors)?;

        for s in summaries.iter() {
            println!(
                "{}: {}x{} {:?}, min {} max {} mean {:.2}, {} void cells",
                s.path.display(),
                s.rows,
                s.cols,
                s.pixel_type,
                s.stats.min,
                s.stats.max,
                s.stats.mean,
                s.void_cells
            );
        }

        if let Some(path) = output_path {
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, &summaries)?;
            writer.flush()?;
            println!("✔️  Wrote {}", path.display());
        }

        println!("\n    🎉  Finished in {}ms", start.elapsed().as_millis());

        Ok(())
    }
}
