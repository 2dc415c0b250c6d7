//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use crate::error::CliError;
use anyhow::Result;
use clap::Args;

/// Where the text to work on comes from
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Literal text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// One loaded input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Display name: the file path, or `<text>`
    pub name: String,
    /// Full text content
    pub text: String,
}

impl InputArgs {
    /// Load every input text
    pub fn load(&self) -> Result<Vec<Source>> {
        if let Some(text) = &self.text {
            return Ok(vec![Source {
                name: "<text>".to_string(),
                text: text.clone(),
            }]);
        }
        if self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        resolve_patterns(&self.input)?
            .into_iter()
            .map(|path| -> Result<Source> {
                log::debug!("Reading {}", path.display());
                Ok(Source {
                    name: path.display().to_string(),
                    text: FileReader::read_text(&path)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_literal_text_wins() {
        let args = InputArgs {
            input: Vec::new(),
            text: Some("foo ...".to_string()),
        };
        let sources = args.load().unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name, "<text>");
        assert_eq!(sources[0].text, "foo ...");
    }

    #[test]
    fn test_missing_input() {
        let args = InputArgs {
            input: Vec::new(),
            text: None,
        };
        let err = args.load().unwrap_err();
        assert!(matches!(err.downcast_ref::<CliError>(), Some(CliError::NoInput)));
    }

    #[test]
    fn test_files_from_pattern() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "beta").unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "alpha").unwrap();

        let args = InputArgs {
            input: vec![format!("{}/*.txt", temp_dir.path().display())],
            text: None,
        };
        let sources = args.load().unwrap();
        let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "beta"]);
    }
}
