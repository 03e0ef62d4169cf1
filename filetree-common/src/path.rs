/// Joins a directory path and an entry name with a single `/`.
///
/// Only the separator between the two parts is handled; `dir` is otherwise
/// kept verbatim (no `..` resolution, no collapsing of repeated separators).
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Returns the part of `name` after its last `.`, or `""` if there is none.
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(i) => &name[i + 1..],
        None => "",
    }
}

/// A leaf name starting with `.` is hidden.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
