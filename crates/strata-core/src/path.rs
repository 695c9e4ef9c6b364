//! Tree paths: `$`, `$.key`, `$[0]`, `$.a[1].b`

use crate::{Result, StrataError};

/// Path of the root node
pub const ROOT_PATH: &str = "$";

/// Path of element `index` below `path`
pub fn array_path(path: &str, index: usize) -> String {
    format!("{}[{}]", path, index)
}

/// Path of entry `key` below `path`
pub fn object_path(path: &str, key: &str) -> String {
    format!("{}.{}", path, key)
}

/// Number of segments in a path (`$` is 0, `$.a[1]` is 2)
pub fn path_depth(path: &str) -> usize {
    path.chars().filter(|c| matches!(c, '.' | '[')).count()
}

/// Validate a user-supplied root path
pub fn check_root_path(path: &str) -> Result<()> {
    if path.starts_with(ROOT_PATH) {
        Ok(())
    } else {
        Err(StrataError::InvalidPath(format!(
            "'{}' must start with '{}'",
            path, ROOT_PATH
        )))
    }
}
