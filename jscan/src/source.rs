//! Source loading for the scanner.

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{JscanError, Result};

/// The demonstration program scanned by `--sample`.
pub const SAMPLE: &str = "let a = 42;\nconst pi = 3.14;\nvar hexValue = 0x1A3F;\n\n\
function greet(name) {\n    console.log(\"Hello, \" + name);\n}\n\ngreet(\"World\");\n";

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
    /// The built-in [`SAMPLE`] program.
    Sample,
}

impl Input {
    /// Picks the input from the command-line selection.
    ///
    /// A file named `-` means standard input.
    pub fn select(file: Option<PathBuf>, stdin: bool, sample: bool) -> Result<Self> {
        match (file, stdin, sample) {
            (Some(path), _, _) if path.as_os_str() == "-" => Ok(Input::Stdin),
            (Some(path), _, _) => Ok(Input::File(path)),
            (None, true, _) => Ok(Input::Stdin),
            (None, false, true) => Ok(Input::Sample),
            (None, false, false) => Err(JscanError::Input(
                "no input given; pass a FILE, `-`, --stdin or --sample".to_string(),
            )),
        }
    }

    /// A short name for log lines.
    pub fn name(&self) -> String {
        match self {
            Input::File(path) => path.display().to_string(),
            Input::Stdin => "<stdin>".to_string(),
            Input::Sample => "<sample>".to_string(),
        }
    }

    /// Reads the whole source text.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::File(path) => read_file(path),
            Input::Stdin => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            },
            Input::Sample => Ok(SAMPLE.to_string()),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(JscanError::Input(format!("not a readable file: {}", path.display())));
    }
    Ok(std::fs::read_to_string(path)?)
}
