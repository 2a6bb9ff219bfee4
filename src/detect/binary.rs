//! Stage 1 of the detection pipeline: reject files that are clearly binary
//! before spending any effort on content-based classification.

/// Extensions that are never source code: images, archives, office
/// documents, media, and common compiled-artifact suffixes.
pub const KNOWN_BINARY_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "svgz",
    "zip", "tar", "gz", "bz2", "xz", "7z", "rar", "zst",
    "doc", "docx", "xls", "xlsx", "ppt", "pptx", "pdf",
    "mp3", "mp4", "avi", "mov", "wav", "flac", "ogg", "webm",
    "exe", "dll", "so", "dylib", "o", "a", "class", "jar", "pyc",
    "woff", "woff2", "ttf", "otf", "eot", "wasm",
];

pub fn is_known_binary_extension(ext: &str) -> bool {
    let lower = ext.to_ascii_lowercase();
    KNOWN_BINARY_EXTENSIONS.contains(&lower.as_str())
}

/// A null byte anywhere in the first 100 bytes is treated as a reliable
/// binary signal, per the spec's stage-1 sniff.
pub fn has_null_byte_in_prefix(buf: &[u8]) -> bool {
    buf.iter().take(100).any(|&b| b == 0)
}
