use std::error::Error;
use std::fmt::{Display, Formatter, Result};
use std::path::{Path, PathBuf};

type Underlying = Box<dyn Error + Send + Sync>;

#[derive(Debug)]
pub struct FileError {
    path: PathBuf,
    original_error: Underlying,
}

impl FileError {
    pub fn new(path: &Path, original_error: impl Into<Underlying>) -> Self {
        FileError {
            path: path.to_path_buf(),
            original_error: original_error.into(),
        }
    }
}

impl Display for FileError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}: {}", self.path.display(), self.original_error)
    }
}

impl Error for FileError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.original_error)
    }
}
