use filetree_common::path::extension_of;

pub mod local;
pub mod reader;
pub mod renderer;

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
}

/// One immediate child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
    /// Empty for directories and for names without a `.`.
    pub extension: String,
}

impl DirectoryEntry {
    pub fn new(name: String, is_directory: bool) -> Self {
        let extension = if is_directory {
            String::new()
        } else {
            extension_of(&name).to_string()
        };
        Self {
            name,
            is_directory,
            extension,
        }
    }
}

pub trait DirectoryReaderTrait {
    /// Lists the immediate children of `path`.
    fn read_dir(&self, path: &str) -> Result<Vec<DirectoryEntry>, Error>;
}

/// Per-request switches sent by the file-tree widget alongside `dir`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingOptions {
    pub only_folders: bool,
    pub only_files: bool,
    pub multi_select: bool,
}

impl ListingOptions {
    // Setting both flags is the same as setting neither.
    pub fn includes_directories(&self) -> bool {
        !self.only_files || self.only_folders
    }

    pub fn includes_files(&self) -> bool {
        !self.only_folders || self.only_files
    }
}
