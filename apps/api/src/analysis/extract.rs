//! PDF → text extraction for uploaded resumes and job descriptions.

use tracing::warn;

/// Decodes a PDF byte buffer into its concatenated page text.
///
/// Returns `None` when the buffer cannot be parsed as a PDF; the caller turns
/// that into a user-facing input error. A PDF that parses but contains no
/// text still yields the (possibly empty) string — emptiness is judged by the
/// caller alongside empty form fields.
pub fn pdf_text(bytes: &[u8]) -> Option<String> {
    match pdf_extract::extract_text_from_mem(bytes) {
        Ok(text) => Some(text),
        Err(e) => {
            warn!("Error reading PDF file: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_yield_none() {
        assert_eq!(pdf_text(b"this is not a pdf"), None);
    }

    #[test]
    fn test_empty_buffer_yields_none() {
        assert_eq!(pdf_text(b""), None);
    }
}
