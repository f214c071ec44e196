//! Path string helpers for repository-relative paths.
//!
//! Listings come from git with `/` separators regardless of platform, so
//! these operate on plain strings instead of `std::path::Path`.

/// The file name without its containing directory path.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// The extension after the last dot, or `""` when there is none.
///
/// A leading dot does not count: `.env` has no extension, and `foo.` yields
/// the empty string.
pub fn extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(0) | None => "",
        Some(idx) => &name[idx + 1..],
    }
}
