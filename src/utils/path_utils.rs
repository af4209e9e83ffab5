use std::path::{Path, PathBuf};

/// `file://` URL for a local file, percent-encoded so `#`, `?` and spaces
/// in directory names survive. `None` when the path cannot be made absolute.
pub fn file_url(path: &Path) -> Option<String> {
    let absolute = match path.canonicalize() {
        Ok(p) => strip_verbatim_prefix(p),
        Err(_) => std::env::current_dir().ok()?.join(path),
    };
    url::Url::from_file_path(&absolute).ok().map(String::from)
}

/// Windows `canonicalize` returns `\\?\C:\...` (or `\\?\UNC\server\...`),
/// which browsers do not accept.
fn strip_verbatim_prefix(path: PathBuf) -> PathBuf {
    let text = path.to_string_lossy();
    if let Some(rest) = text.strip_prefix(r"\\?\UNC\") {
        PathBuf::from(format!(r"\\{}", rest))
    } else if let Some(rest) = text.strip_prefix(r"\\?\") {
        PathBuf::from(rest)
    } else {
        path
    }
}
