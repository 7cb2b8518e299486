use crate::comic::Comic;
use crate::{GoComicsError, Result};
use std::path::{Path, PathBuf};

/// Image file extensions `download` accepts
pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

impl Comic {
    /// Downloads the strip image and returns the path written
    ///
    /// # Arguments
    ///
    /// * `filename` - File name to write; defaults to `{identifier}.png`
    /// * `dir` - Target directory; defaults to the client's download directory
    ///
    /// # Errors
    ///
    /// * [`GoComicsError::Validation`] - no image URL, or an extension outside
    ///   [`ALLOWED_EXTENSIONS`]; nothing is fetched or written
    /// * [`GoComicsError::Fetch`] - the image could not be retrieved
    /// * [`GoComicsError::Io`] - the file could not be written
    pub fn download(&self, filename: Option<&str>, dir: Option<&Path>) -> Result<PathBuf> {
        let image_url = self.image_url().ok_or_else(|| {
            GoComicsError::Validation("Comic does not have an image URL".to_string())
        })?;

        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!("{}.png", self.identifier()),
        };
        validate_extension(&filename)?;

        let dir = dir.unwrap_or_else(|| self.client.download_dir());
        let path = dir.join(&filename);

        let response = self.client.fetch(image_url)?;
        std::fs::write(&path, &response.body)?;

        tracing::info!("Saved {} to {}", image_url, path.display());
        Ok(path)
    }
}

fn validate_extension(filename: &str) -> Result<()> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if ALLOWED_EXTENSIONS.contains(&extension) {
        Ok(())
    } else {
        Err(GoComicsError::Validation(format!(
            "Filename must end with .png, .jpg, or .jpeg, got '{}'",
            filename
        )))
    }
}
