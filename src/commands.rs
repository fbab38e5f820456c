//! CLI command implementations.

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use stonekit_designer::{
    AssetVerifier, AssetWarning, DesignDocument, DesignHandle, FileAssetProbe, FileDocumentStore,
    PersistenceAdapter,
};
use stonekit_settings::Config;

/// Config from `path`, or from the platform default location if present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(&Config::default_path()?)?,
    };
    Ok(config)
}

/// A design with its images verified
#[derive(Debug, Clone)]
pub struct Inspection {
    pub source: String,
    pub document: DesignDocument,
    pub warnings: Vec<AssetWarning>,
}

impl Inspection {
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }
}

impl std::fmt::Display for Inspection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = &self.document.state;
        let dims = state.stone_dimensions;
        writeln!(f, "Design:     {}", self.source)?;
        writeln!(
            f,
            "Object:     {} ({})",
            state.selected_object, state.selected_texture
        )?;
        writeln!(
            f,
            "Dimensions: {} x {} x {}",
            dims.width, dims.height, dims.thickness
        )?;
        writeln!(f, "Texts:      {}", state.texts.len())?;
        writeln!(
            f,
            "Images:     {} ({} dropped)",
            state.uploaded_images.len(),
            self.warnings.len()
        )?;
        writeln!(f, "Frames:     {}", state.frames.len())?;
        for warning in &self.warnings {
            writeln!(f, "Warning:    {}", warning)?;
        }
        Ok(())
    }
}

/// Load a design by handle from the document directory, or from a file.
/// File assets are resolved relative to the document's directory.
pub async fn inspect(design: &str, config: &Config) -> Result<Inspection> {
    let settings = &config.persistence;

    if let Ok(handle) = design.parse::<DesignHandle>() {
        let adapter = PersistenceAdapter::with_settings(
            FileDocumentStore::new(&settings.document_dir),
            FileAssetProbe::new(&settings.document_dir),
            settings,
        );
        let loaded = adapter
            .load(&handle)
            .await?
            .ok_or_else(|| anyhow!("Design {} not found", handle))?;
        return Ok(Inspection {
            source: handle.to_string(),
            document: loaded.document,
            warnings: loaded.warnings,
        });
    }

    let path = Path::new(design);
    let mut document = DesignDocument::load_from_file(path)?;
    let root = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let verifier = AssetVerifier::new(FileAssetProbe::new(root), settings.asset_timeout());

    let images = std::mem::take(&mut document.state.uploaded_images);
    let verified = verifier.verify(images).await;
    document.state.uploaded_images = verified.admitted;

    Ok(Inspection {
        source: path.display().to_string(),
        document,
        warnings: verified.warnings,
    })
}
