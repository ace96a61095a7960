use anyhow::{Context, Result, bail};
use std::io::{self, Read};

const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

pub struct InputReader;

impl InputReader {
    /// Returns the source text: the positional argument when given,
    /// otherwise everything read from stdin until EOF.
    pub fn read(text: Option<&str>) -> Result<String> {
        text.map_or_else(Self::read_stdin, Self::from_arg)
    }

    fn from_arg(text: &str) -> Result<String> {
        if text.len() > MAX_INPUT_SIZE {
            bail!(
                "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                 Consider splitting the text into smaller parts.",
                text.len() as f64 / 1024.0 / 1024.0
            );
        }
        Ok(text.to_string())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn read_stdin() -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];
        let mut stdin = io::stdin().lock();

        loop {
            let bytes_read = stdin
                .read(&mut chunk)
                .context("Failed to read from stdin")?;

            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);

            if buffer.len() > MAX_INPUT_SIZE {
                bail!(
                    "Error: Input size ({:.1} MB) exceeds maximum allowed size (1 MB).\n\n\
                     Consider splitting the input into smaller parts.",
                    buffer.len() as f64 / 1024.0 / 1024.0
                );
            }
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_arg_text() {
        let content = InputReader::read(Some("Hello, World!")).unwrap();
        assert_eq!(content, "Hello, World!");
    }

    #[test]
    fn test_read_arg_unicode() {
        let content = InputReader::read(Some("こんにちは世界！🌍")).unwrap();
        assert_eq!(content, "こんにちは世界！🌍");
    }

    #[test]
    fn test_read_arg_empty() {
        let content = InputReader::read(Some("")).unwrap();
        assert!(content.is_empty());
    }

    #[test]
    fn test_read_arg_at_max_size() {
        let text = "x".repeat(MAX_INPUT_SIZE);
        let content = InputReader::read(Some(&text)).unwrap();
        assert_eq!(content.len(), MAX_INPUT_SIZE);
    }

    #[test]
    fn test_read_arg_exceeds_max_size() {
        let text = "x".repeat(MAX_INPUT_SIZE + 1);
        let result = InputReader::read(Some(&text));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exceeds maximum"));
    }

    #[test]
    fn test_max_input_size_constant() {
        assert_eq!(MAX_INPUT_SIZE, 1024 * 1024);
    }
}
