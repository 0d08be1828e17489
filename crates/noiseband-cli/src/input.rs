//! Control-point file reader.
//!
//! The format is plain text: `frequency,amplitude` entries, one per line or
//! several on one line. Tokens may also be separated by whitespace; `#`
//! starts a comment that runs to the end of the line. The reader only
//! tokenizes and pairs — numeric validation belongs to the profile parser.

use std::path::Path;

use thiserror::Error;

/// Errors reading the control-point file.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path as given on the command line.
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A frequency value had no matching amplitude value.
    #[error("{path}: dangling value '{token}' without a matching amplitude")]
    DanglingValue {
        /// Path as given on the command line.
        path: String,
        /// The unpaired token.
        token: String,
    },
}

/// Reads a control-point file into ordered raw `(frequency, amplitude)`
/// pairs, preserving input order.
pub fn read_control_pairs(path: &Path) -> Result<Vec<(String, String)>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    pair_tokens(tokenize(&text), path)
}

/// Splits the file into value tokens, dropping comments and blank space.
fn tokenize(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or(""))
        .flat_map(|line| line.split(|c: char| c == ',' || c.is_whitespace()))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pairs tokens into (frequency, amplitude) entries.
fn pair_tokens(tokens: Vec<String>, path: &Path) -> Result<Vec<(String, String)>, InputError> {
    if tokens.len() % 2 != 0 {
        return Err(InputError::DanglingValue {
            path: path.display().to_string(),
            token: tokens.last().cloned().unwrap_or_default(),
        });
    }

    Ok(tokens
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs_of(text: &str) -> Result<Vec<(String, String)>, InputError> {
        pair_tokens(tokenize(text), Path::new("test.csv"))
    }

    #[test]
    fn test_one_entry_per_line() {
        let pairs = pairs_of("100,0\n1000,-10\n5000,0\n").unwrap();
        assert_eq!(
            pairs,
            vec![
                ("100".to_string(), "0".to_string()),
                ("1000".to_string(), "-10".to_string()),
                ("5000".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn test_several_entries_on_one_line() {
        let pairs = pairs_of("100,0,1000,-10").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1], ("1000".to_string(), "-10".to_string()));
    }

    #[test]
    fn test_whitespace_separated() {
        let pairs = pairs_of("100 0\n1000\t-10\n").unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let pairs = pairs_of("# speech band\n\n300,1  # low edge\n3400,1\n").unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0], ("300".to_string(), "1".to_string()));
    }

    #[test]
    fn test_dangling_token() {
        let err = pairs_of("100,0\n1000\n").unwrap_err();
        assert!(matches!(
            err,
            InputError::DanglingValue { ref token, .. } if token == "1000"
        ));
    }

    #[test]
    fn test_empty_file_yields_no_pairs() {
        let pairs = pairs_of("# only comments\n").unwrap();
        assert!(pairs.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = read_control_pairs(Path::new("/nonexistent/profile.csv")).unwrap_err();
        assert!(matches!(err, InputError::Io { .. }));
    }
}
