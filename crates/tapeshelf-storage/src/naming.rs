//! Generated filenames and public URLs for uploads.

/// URL path segment under which the upload directory is served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Extension of a client-supplied filename, including the leading `.`.
///
/// Only the final path segment is considered, so the result never contains a
/// path separator. Case is preserved. Dotfiles (`.bashrc`) and names without a
/// dot have no extension; a trailing dot yields `"."`.
pub fn original_extension(original_filename: &str) -> &str {
    let trimmed = original_filename.trim_end_matches(['/', '\\']);
    let segment = match trimmed.rfind(['/', '\\']) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    };

    if segment == ".." {
        return "";
    }

    match segment.rfind('.') {
        None | Some(0) => "",
        Some(idx) => &segment[idx..],
    }
}

/// Server-side name for an upload received at `millis` (ms since the Unix epoch).
pub fn generated_filename(millis: i64, original_filename: &str) -> String {
    format!("{}{}", millis, original_extension(original_filename))
}

/// Relative URL under which a stored file is served.
pub fn public_url(filename: &str) -> String {
    format!("{}/{}", PUBLIC_PREFIX, filename)
}
