//! Downloader that saves exports into a directory on disk.

use anyhow::Result;
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

use super::Downloader;

/// Writes every download as `<directory>/<filename>`, creating the directory on demand
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    directory: PathBuf,
    written: Vec<PathBuf>,
}

impl DirectoryDownloader {
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
            written: Vec::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Paths written so far, oldest first
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Keep only the final path component so a filename cannot escape the directory
    fn sanitize_filename(filename: &str) -> String {
        let name = Path::new(filename.trim())
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        if name.is_empty() {
            "download".to_string()
        } else {
            name
        }
    }
}

impl Downloader for DirectoryDownloader {
    fn download(&mut self, bytes: &[u8], filename: &str, mime_type: &str) -> Result<()> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory)?;
            info!("Created export directory: {:?}", self.directory);
        }

        let file_path = self.directory.join(Self::sanitize_filename(filename));
        if let Err(e) = fs::write(&file_path, bytes) {
            error!("Failed to write export file {:?}: {}", file_path, e);
            return Err(e.into());
        }

        info!("Saved {} ({} bytes, {}) to {:?}", filename, bytes.len(), mime_type, file_path);
        self.written.push(file_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_download_creates_directory_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let export_dir = temp_dir.path().join("exports");
        let mut downloader = DirectoryDownloader::new(&export_dir);

        downloader.download(b"a,b\n1,2", "erp_report.csv", "text/csv").unwrap();

        let written = export_dir.join("erp_report.csv");
        assert_eq!(fs::read_to_string(&written).unwrap(), "a,b\n1,2");
        assert_eq!(downloader.written(), &[written]);
    }

    #[test]
    fn test_filename_cannot_escape_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut downloader = DirectoryDownloader::new(temp_dir.path());

        downloader.download(b"x", "../../pitch.txt", "text/plain").unwrap();

        assert!(temp_dir.path().join("pitch.txt").exists());
    }
}
