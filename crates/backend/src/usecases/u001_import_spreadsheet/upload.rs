use contracts::usecases::u001_import_spreadsheet::SUPPORTED_EXTENSIONS;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::error::{FormatError, ImportError};

const DEFAULT_EXTENSION: &str = "xlsx";

/// Загруженный файл во временном каталоге. Удаляется при drop,
/// чем бы ни закончился импорт.
pub struct UploadedSpreadsheet {
    file: NamedTempFile,
}

impl UploadedSpreadsheet {
    /// Сохраняет содержимое во временный файл с тем же расширением,
    /// по которому calamine выберет формат
    pub fn store(
        upload_dir: &Path,
        file_name: Option<&str>,
        bytes: &[u8],
    ) -> Result<Self, ImportError> {
        let extension = extension_of(file_name)?;

        std::fs::create_dir_all(upload_dir)?;
        let mut file = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(&format!(".{}", extension))
            .tempfile_in(upload_dir)?;
        file.write_all(bytes)?;
        file.flush()?;

        tracing::debug!(
            "Stored upload {:?} ({} bytes) as {}",
            file_name.unwrap_or("<unnamed>"),
            bytes.len(),
            file.path().display()
        );
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl Drop for UploadedSpreadsheet {
    fn drop(&mut self) {
        tracing::debug!("Removing upload {}", self.file.path().display());
    }
}

fn extension_of(file_name: Option<&str>) -> Result<String, FormatError> {
    let extension = file_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension {
        None => Ok(DEFAULT_EXTENSION.to_string()),
        Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => Ok(ext),
        Some(ext) => Err(FormatError::UnsupportedFile(ext)),
    }
}
