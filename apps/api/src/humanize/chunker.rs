//! Splits long input into overlapping word windows so each completion call
//! stays small while neighboring chunks share context.

/// Splits `text` into windows of `chunk_size` words, each starting
/// `chunk_size - overlap` words after the previous one.
///
/// The stride is clamped to at least 1 so `overlap >= chunk_size` cannot
/// loop forever. Non-empty input always yields at least one chunk, and every
/// word lands in at least one chunk.
pub fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let stride = chunk_size.saturating_sub(overlap).max(1);

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = (start + chunk_size).min(words.len());
        chunks.push(words[start..end].join(" "));
        start += stride;
    }
    chunks
}
