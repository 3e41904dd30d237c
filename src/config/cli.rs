use crate::core::InputSource;
use crate::utils::error::Result;
use std::io::BufRead;
use std::path::PathBuf;

/// Where the course lines come from. `-` on the command line selects stdin.
#[derive(Debug, Clone)]
pub enum CourseInput {
    Stdin,
    File(PathBuf),
}

impl CourseInput {
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }
}

impl InputSource for CourseInput {
    async fn read_lines(&self) -> Result<Vec<String>> {
        match self {
            Self::Stdin => {
                let stdin = std::io::stdin();
                let mut lines = Vec::new();
                for line in stdin.lock().lines() {
                    lines.push(line?);
                }
                Ok(lines)
            }
            Self::File(path) => {
                let file = std::fs::File::open(path)?;
                let reader = std::io::BufReader::new(file);
                let mut lines = Vec::new();
                for line in reader.lines() {
                    lines.push(line?);
                }
                Ok(lines)
            }
        }
    }
}
