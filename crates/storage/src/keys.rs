/// Storage key for a file: `{path}/{hash}{ext}`, or `{hash}{ext}` without a path.
///
/// Upload and delete both go through this so they always address the same object.
pub fn derive_key(path: Option<&str>, hash: &str, ext: &str) -> String {
    match path.filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", path, hash, ext),
        None => format!("{}{}", hash, ext),
    }
}
