use clap::{App, arg};
use std::path::Path;
use anyhow::bail;
use crate::commands::BilCommand;


pub struct ClapCommand {
    pub identifier: String,
    pub exec: Box<dyn BilCommand>,
}

impl ClapCommand {
    pub fn new(identifier: &str, exec: Box<dyn BilCommand>) -> Self {
        ClapCommand { identifier: identifier.to_string(), exec }
    }

    pub fn register(&self) -> App {
        App::new(self.identifier.as_str())
            .about(self.exec.get_description())
            .arg(arg!(-i --input <INPUT> "Path to a .hdr/.bil file (or a directory of them)"))
            .arg(arg!(-o --output [OUTPUT] "Path to output JSON file, prints to stdout if omitted"))
    }

    pub fn run(&self, args: &clap::ArgMatches) -> anyhow::Result<()> {
        let input_path = match args.value_of("input") {
            Some(input) => Path::new(input),
            None => bail!("Missing input path"),
        };
        let output_path = args.value_of("output").map(Path::new);

        if !input_path.exists() {
            bail!("Input path {} does not exist", input_path.display());
        }

        self.exec.exec(input_path, output_path)
    }
}
