use crate::{local::LocalDirectoryReader, DirectoryEntry, DirectoryReaderTrait, Error};

#[derive(Debug, Clone)]
pub enum DirectoryReader {
    Local(LocalDirectoryReader),
}

impl Default for DirectoryReader {
    fn default() -> Self {
        DirectoryReader::Local(LocalDirectoryReader::new())
    }
}

impl DirectoryReaderTrait for DirectoryReader {
    fn read_dir(&self, path: &str) -> Result<Vec<DirectoryEntry>, Error> {
        match self {
            DirectoryReader::Local(reader) => reader.read_dir(path),
        }
    }
}
