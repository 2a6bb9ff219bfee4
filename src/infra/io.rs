use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

const MMAP_THRESHOLD: u64 = 1024 * 1024; // 1 MiB

pub enum FileContent {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl AsRef<[u8]> for FileContent {
    fn as_ref(&self) -> &[u8] {
        match self {
            FileContent::Mapped(mmap) => &mmap[..],
            FileContent::Buffered(bytes) => bytes.as_slice(),
        }
    }
}

impl FileContent {
    pub fn as_bytes(&self) -> &[u8] {
        self.as_ref()
    }
}

/// Read a file's raw bytes, memory-mapping it above `MMAP_THRESHOLD` and
/// buffering it in memory otherwise. Never validates UTF-8: scanners work
/// over raw bytes per the "no Unicode normalization" contract.
pub fn read_file_smart<P: AsRef<Path>>(path: P) -> Result<FileContent> {
    let path = path.as_ref();
    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    if metadata.len() > MMAP_THRESHOLD {
        let file =
            File::open(path).with_context(|| format!("Failed to open file {}", path.display()))?;

        // Safety: read-only map of a file we just opened; not modified elsewhere during this call.
        let mmap = unsafe { Mmap::map(&file) }
            .with_context(|| format!("Failed to memory-map {}", path.display()))?;

        Ok(FileContent::Mapped(mmap))
    } else {
        let content = std::fs::read(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;

        Ok(FileContent::Buffered(content))
    }
}

/// Extract inclusive 1-based line ranges as a single String, used by the
/// `annotate` subcommand to show source alongside classification.
pub fn extract_lines(content: &str, ranges: &[(usize, usize)]) -> Result<String> {
    let bytes = content.as_bytes();
    let idx = crate::infra::line_index::NewlineIndex::build(bytes);

    if idx.line_count() == 0 {
        return Ok(String::new());
    }

    let mut out = String::with_capacity(ranges.len() * 60);

    for (i, &(s, e)) in ranges.iter().enumerate() {
        if s == 0 || s > e || s > idx.line_count() {
            anyhow::bail!("invalid range: {s}-{e}");
        }

        let end = e.min(idx.line_count());

        let (lo, hi) = idx
            .byte_range_for_lines(s, end, bytes)
            .ok_or_else(|| anyhow::anyhow!("range out of bounds: {s}-{end}"))?;

        out.push_str(&content[lo..hi]);

        if i + 1 != ranges.len() {
            out.push('\n');
        }
    }

    Ok(out)
}
