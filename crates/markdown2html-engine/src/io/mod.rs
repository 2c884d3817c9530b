use crate::parsing::translate;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Line counts for one finished conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionReport {
    pub markdown_lines: usize,
    pub html_lines: usize,
}

/// Read a markdown document.
///
/// The path must name an existing regular file.
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.is_file() {
        return Err(IoError::MissingInput(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write an HTML fragment, replacing any existing file
pub fn write_html(path: &Path, html: &str) -> Result<(), IoError> {
    fs::write(path, html).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert `input` to HTML and write it to `output`.
///
/// The output file is not touched unless the input could be read.
pub fn convert_file(input: &Path, output: &Path) -> Result<ConversionReport, IoError> {
    let markdown = read_document(input)?;
    let html = translate(&markdown);
    write_html(output, &html)?;

    let report = ConversionReport {
        markdown_lines: markdown.lines().count(),
        html_lines: html.lines().count(),
    };
    log::debug!(
        "converted {} ({} lines) to {} ({} lines)",
        input.display(),
        report.markdown_lines,
        output.display(),
        report.html_lines
    );
    Ok(report)
}
