use std::path::Path;

/// A file qualifies when its name ends in one of the extensions and is not hidden.
///
/// Only the file name is checked: files inside hidden directories still qualify.
pub fn should_include_file(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };

    if name.starts_with('.') {
        return false;
    }

    extensions.iter().any(|ext| {
        name.len() > ext.len() + 1
            && name.ends_with(ext.as_str())
            && name.as_bytes()[name.len() - ext.len() - 1] == b'.'
    })
}
