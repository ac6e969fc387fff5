use anyhow::{Context, Result};
use std::io::Write;

/// Writes candidate words one per line, stopping once `limit` words have
/// been written. Returns the number actually written.
///
/// Pulling stops with the cap, so the upstream iterator does no further
/// work. Sink failures are the one fatal error class this tool owns.
pub fn write_words<W: Write>(
    sink: &mut W,
    words: impl Iterator<Item = String>,
    limit: usize,
) -> Result<usize> {
    let mut count = 0;

    for word in words.take(limit) {
        writeln!(sink, "{word}").context("Failed to write word to output")?;
        count += 1;
    }

    sink.flush().context("Failed to flush output")?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn words(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_one_word_per_line() {
        let mut sink = Vec::new();
        let written = write_words(&mut sink, words(&["max", "m4x"]), 100).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(sink).unwrap(), "max\nm4x\n");
    }

    #[test]
    fn test_limit_enforced() {
        let mut sink = Vec::new();
        let written = write_words(&mut sink, words(&["a", "b", "c", "d"]), 2).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(sink).unwrap(), "a\nb\n");
    }

    #[test]
    fn test_limit_zero_writes_nothing() {
        let mut sink = Vec::new();
        let written = write_words(&mut sink, words(&["a"]), 0).unwrap();
        assert_eq!(written, 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_short_stream_under_limit() {
        let mut sink = Vec::new();
        let written = write_words(&mut sink, words(&["a", "b"]), 5000).unwrap();
        assert_eq!(written, 2);
    }

    #[test]
    fn test_write_failure_propagates() {
        let result = write_words(&mut FailingSink, words(&["a"]), 10);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("write"));
    }

    #[test]
    fn test_limit_stops_pulling() {
        // The iterator must not be advanced past the cap.
        let mut pulled = 0;
        let counting = std::iter::repeat_with(|| {
            pulled += 1;
            "word".to_string()
        });
        let mut sink = Vec::new();
        write_words(&mut sink, counting, 3).unwrap();
        assert_eq!(pulled, 3);
    }
}
