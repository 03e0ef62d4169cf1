use filetree_listing::ListingOptions;
use serde::{Deserialize, Serialize};

pub const PATH: &str = "/jqueryFileTree";

/// Form fields posted by the file-tree widget. Flags arrive as the strings
/// `"true"` / `"false"`; anything other than `"true"` counts as false.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JqueryFileTreeRequest {
    pub dir: Option<String>,
    pub only_folders: Option<String>,
    pub only_files: Option<String>,
    pub multi_select: Option<String>,
}

fn is_true(flag: &Option<String>) -> bool {
    flag.as_deref() == Some("true")
}

impl JqueryFileTreeRequest {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: Some(dir.to_string()),
            ..Default::default()
        }
    }

    /// `None` when `dir` is absent or empty.
    pub fn dir(&self) -> Option<&str> {
        self.dir.as_deref().filter(|dir| !dir.is_empty())
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            only_folders: is_true(&self.only_folders),
            only_files: is_true(&self.only_files),
            multi_select: is_true(&self.multi_select),
        }
    }

    /// Pairs in the order the widget sends them, skipping unset fields.
    pub fn form_pairs(&self) -> Vec<(&str, &str)> {
        let fields = [
            ("dir", &self.dir),
            ("onlyFolders", &self.only_folders),
            ("onlyFiles", &self.only_files),
            ("multiSelect", &self.multi_select),
        ];
        fields
            .into_iter()
            .filter_map(|(key, value)| value.as_deref().map(|value| (key, value)))
            .collect()
    }
}
