use std::path::PathBuf;
use tempdir::TempDir;

pub fn with_temp_dir(f: impl FnOnce(PathBuf)) -> std::io::Result<()> {
    let dir = TempDir::new("bil-utils-rust")?;

    f(dir.path().to_path_buf());

    dir.close()
}
