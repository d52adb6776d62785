//! History export.

use std::fs;
use std::io;
use std::path::Path;

/// File name used when no export path is given.
pub const DEFAULT_EXPORT_PATH: &str = "calculator_history.txt";

/// Destination for exported history text.
pub trait Exporter {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()>;
}

/// Writes history to the filesystem, replacing any existing file.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileExporter;

impl Exporter for FileExporter {
    fn write(&mut self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_exporter_writes_content() {
        let path = std::env::temp_dir().join(format!("opcalc-export-{}.txt", std::process::id()));
        FileExporter.write(&path, "1 + 1 = 2\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1 + 1 = 2\n");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_exporter_reports_errors() {
        let path = std::env::temp_dir()
            .join("opcalc-missing-dir")
            .join("nested")
            .join("history.txt");
        assert!(FileExporter.write(&path, "x").is_err());
    }
}
