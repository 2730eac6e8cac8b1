mod clap_command;
mod header;
mod info;

use std::path::Path;

pub use clap_command::ClapCommand;
pub use header::Header;
pub use info::Info;

pub trait BilCommand {
    fn get_description(&self) -> &str;
    fn exec(&self, input_path: &Path, output_path: Option<&Path>) -> anyhow::Result<()>;
}

#[cfg(test)]
pub struct DummyBilCommand {}

#[cfg(test)]
impl BilCommand for DummyBilCommand {
    fn get_description(&self) -> &str {
        "dummy"
    }

    fn exec(&self, _: &Path, _: Option<&Path>) -> anyhow::Result<()> {
        Ok(())
    }
}
