use crate::error::ExportResult;
#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

/// Where an export ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to disk at this path
    #[cfg(not(target_arch = "wasm32"))]
    Written(PathBuf),
    /// Handed to the browser as a download with this file name
    #[cfg(target_arch = "wasm32")]
    Downloaded(String),
}

impl std::fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(not(target_arch = "wasm32"))]
            Self::Written(path) => write!(f, "Saved {}", path.display()),
            #[cfg(target_arch = "wasm32")]
            Self::Downloaded(name) => write!(f, "Downloaded {name}"),
        }
    }
}

/// Delivers exported PNG bytes to the user.
pub struct FileHandler {
    file_name: String,
    #[cfg(not(target_arch = "wasm32"))]
    output_dir: PathBuf,
}

impl FileHandler {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(file_name: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            output_dir: output_dir.into(),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path the native build writes to
    #[cfg(not(target_arch = "wasm32"))]
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }

    /// Writes the PNG next to the configured output directory
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_png(&self, bytes: &[u8]) -> ExportResult<SaveOutcome> {
        let path = self.target_path();
        write_file(&path, bytes)?;
        log::info!("Saved drawing to {} ({} bytes)", path.display(), bytes.len());
        Ok(SaveOutcome::Written(path))
    }

    /// Triggers a browser download of the PNG
    #[cfg(target_arch = "wasm32")]
    pub fn save_png(&self, bytes: &[u8]) -> ExportResult<SaveOutcome> {
        web::download(&self.file_name, bytes, "image/png")?;
        log::info!("Downloaded drawing as {} ({} bytes)", self.file_name, bytes.len());
        Ok(SaveOutcome::Downloaded(self.file_name.clone()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)
}

#[cfg(target_arch = "wasm32")]
mod web {
    use crate::error::{ExportError, ExportResult};
    use wasm_bindgen::{JsCast as _, JsValue};

    fn js_error(step: &str, err: JsValue) -> ExportError {
        ExportError::Web(format!("{step}: {err:?}"))
    }

    /// Download `data` through a temporary object URL and anchor element
    pub fn download(file_name: &str, data: &[u8], mime_type: &str) -> ExportResult<()> {
        let window = web_sys::window().ok_or_else(|| ExportError::Web("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| ExportError::Web("no document".to_owned()))?;

        let uint8_array = js_sys::Uint8Array::from(data);
        let blob_parts = js_sys::Array::new();
        blob_parts.push(&uint8_array);

        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);

        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
            .map_err(|err| js_error("create blob", err))?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|err| js_error("create object url", err))?;

        let anchor = document
            .create_element("a")
            .map_err(|err| js_error("create anchor", err))?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| ExportError::Web("element is not an anchor".to_owned()))?;
        anchor.set_href(&url);
        anchor.set_download(file_name);
        anchor.click();

        web_sys::Url::revoke_object_url(&url).ok();
        Ok(())
    }
}
