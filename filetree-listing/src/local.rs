use crate::{DirectoryEntry, DirectoryReaderTrait, Error};

/// Reads directories from the local filesystem.
///
/// Entries come back sorted by name. Symlinks are reported by their own
/// type, so a link to a directory is listed as a file.
#[derive(Debug, Clone, Default)]
pub struct LocalDirectoryReader {}

impl LocalDirectoryReader {
    pub fn new() -> Self {
        Self {}
    }
}

impl DirectoryReaderTrait for LocalDirectoryReader {
    fn read_dir(&self, path: &str) -> Result<Vec<DirectoryEntry>, Error> {
        let entries = std::fs::read_dir(path).map_err(Error::IOError)?;
        let mut result = Vec::new();
        for entry in entries {
            let entry = entry.map_err(Error::IOError)?;
            let file_type = entry.file_type().map_err(Error::IOError)?;
            let file_name = entry.file_name().to_string_lossy().to_string();
            result.push(DirectoryEntry::new(file_name, file_type.is_dir()));
        }
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }
}
