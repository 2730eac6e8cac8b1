use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::bil::{file_pair_paths, read_header};
use crate::commands::BilCommand;


pub struct Header {}

impl BilCommand for Header {
    fn get_description(&self) -> &str {
        "Print the .hdr file of a BIL pair as JSON."
    }

    fn exec(&self, input_path: &Path, output_path: Option<&Path>) -> anyhow::Result<()> {
        let (header_path, _) = file_pair_paths(input_path);

        let now = Instant::now();
        let header = read_header(&header_path)?;

        match output_path {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                serde_json::to_writer_pretty(&mut writer, &header)?;
                writer.flush()?;
                println!("✔️  Wrote {} in {}ms", path.display(), now.elapsed().as_millis());
            }
            None => println!("{}", serde_json::to_string_pretty(&header)?),
        }

        Ok(())
    }
}
