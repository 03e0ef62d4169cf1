use filetree_common::{
    html::escape_html,
    path::{is_hidden_name, join_path},
};

use crate::{reader::DirectoryReader, DirectoryReaderTrait, ListingOptions};

const LIST_OPEN: &str = r#"<ul class="jqueryFileTree" style="display: none;">"#;
const LIST_CLOSE: &str = "</ul>";
const CHECKBOX: &str = "<input type='checkbox' />";

#[derive(Debug, Clone)]
pub struct RendererConfig {
    pub exclude_hidden: bool,
    /// Entry names are inserted verbatim unless this is set.
    pub escape_names: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            exclude_hidden: true,
            escape_names: false,
        }
    }
}

/// Renders one directory as the `<ul class="jqueryFileTree">` fragment the
/// file-tree widget appends under the node being expanded.
#[derive(Debug, Clone)]
pub struct DirectoryListingRenderer<R = DirectoryReader> {
    reader: R,
    config: RendererConfig,
}

impl<R: DirectoryReaderTrait> DirectoryListingRenderer<R> {
    pub fn new(reader: R, config: RendererConfig) -> Self {
        Self { reader, config }
    }

    pub fn render(&self, dir: &str) -> String {
        self.render_with_options(dir, &ListingOptions::default())
    }

    /// A directory that cannot be read renders as an empty list.
    pub fn render_with_options(&self, dir: &str, options: &ListingOptions) -> String {
        let entries = match self.reader.read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                log::debug!("read_dir({:?}) failed, rendering empty listing: {:?}", dir, e);
                vec![]
            }
        };

        let checkbox = if options.multi_select { CHECKBOX } else { "" };
        let mut res = String::from(LIST_OPEN);
        for entry in &entries {
            if self.config.exclude_hidden && is_hidden_name(&entry.name) {
                continue;
            }
            if entry.is_directory && !options.includes_directories() {
                continue;
            }
            if !entry.is_directory && !options.includes_files() {
                continue;
            }

            let path = join_path(dir, &entry.name);
            let (rel, name, ext) = if self.config.escape_names {
                (
                    escape_html(&path),
                    escape_html(&entry.name),
                    escape_html(&entry.extension),
                )
            } else {
                (path, entry.name.clone(), entry.extension.clone())
            };

            if entry.is_directory {
                res.push_str(&format!(
                    r#"<li class="directory collapsed">{}<a rel="{}/">{}</a></li>"#,
                    checkbox, rel, name
                ));
            } else {
                res.push_str(&format!(
                    r#"<li class="file ext_{}">{}<a rel="{}">{}</a></li>"#,
                    ext, checkbox, rel, name
                ));
            }
        }
        res.push_str(LIST_CLOSE);
        res
    }
}
