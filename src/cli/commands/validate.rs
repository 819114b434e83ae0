use std::path::PathBuf;

use super::CommandHandler;
use crate::catalog::{validate_examples, CatalogLoader};
use crate::{FinderError, Result};

/// Validate a catalog file without using it
pub struct ValidateCommand {
    file: PathBuf,
}

impl ValidateCommand {
    pub fn new(file: PathBuf) -> Self {
        Self { file }
    }

    /// Number of examples in a valid file
    pub fn check(&self) -> Result<usize> {
        let examples = CatalogLoader::new().load_examples(&self.file)?;
        validate_examples(&examples)?;
        Ok(examples.len())
    }
}

impl CommandHandler for ValidateCommand {
    fn execute(&self) -> Result<()> {
        println!("Validating catalog: {}", self.file.display());

        match self.check() {
            Ok(count) => {
                println!("Catalog is valid ({count} examples).");
                Ok(())
            }
            Err(FinderError::Validation(problems)) => {
                for problem in &problems {
                    println!("ERROR: {problem}");
                }
                println!();
                println!("Validation failed with {} error(s).", problems.len());
                Err(FinderError::Validation(problems))
            }
            Err(e) => Err(e),
        }
    }

    fn name(&self) -> &'static str {
        "validate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_valid_yaml_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "- id: a\n  title: A\n  description: d\n  longDescription: l\n  url: '#'\n  categories: [defi]\n  difficulty: beginner\n"
        )
        .unwrap();
        assert_eq!(ValidateCommand::new(file.path().to_path_buf()).check().unwrap(), 1);
    }

    #[test]
    fn test_invalid_file_reports_problems() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "- id: a\n  title: ''\n  description: d\n  longDescription: l\n  url: '#'\n  categories: []\n  difficulty: beginner\n"
        )
        .unwrap();
        match ValidateCommand::new(file.path().to_path_buf()).check() {
            Err(FinderError::Validation(problems)) => assert_eq!(problems.len(), 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unparseable_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "- id: a\n  difficulty: expert\n").unwrap();
        match ValidateCommand::new(file.path().to_path_buf()).check() {
            Err(FinderError::Catalog(message)) => {
                assert!(message.contains("Failed to parse catalog file"), "{message}");
                assert!(message.contains("expert"), "{message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_json_file_is_detected_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".JSON").tempfile().unwrap();
        write!(
            file,
            r##"{{"examples":[{{"id":"a","title":"A","description":"d","longDescription":"l","url":"#","categories":["nft"],"difficulty":"advanced"}}]}}"##
        )
        .unwrap();
        assert_eq!(ValidateCommand::new(file.path().to_path_buf()).check().unwrap(), 1);
    }

    #[test]
    fn test_missing_file() {
        assert!(ValidateCommand::new(PathBuf::from("/nonexistent/catalog.yaml"))
            .check()
            .is_err());
    }
}
