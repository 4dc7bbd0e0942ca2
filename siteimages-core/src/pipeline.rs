//! Generation Pipeline - Single Entry Point
//!
//! Every image goes render -> encode -> validate -> write. Validation always
//! runs before a file touches disk; the first failure aborts the batch.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::encoder::{RasterEncoder, WebpEncoder, DEFAULT_QUALITY};
use crate::hashing::{compute_manifest_hash, compute_template_hash, sha256_hex};
use crate::templates::{ImageTemplate, TemplateRegistry};
use crate::validation::{ValidationResult, Validator};
use crate::ENGINE_VERSION;

pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Validation failed for {0}: {1}")]
    ValidationFailed(String, String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encoding error: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Progress reported by `GenerationPipeline::run`.
#[derive(Debug, Clone, Copy)]
pub enum RunEvent<'a> {
    Starting(&'a ImageTemplate),
    Written(&'a GeneratedFile),
}

/// One written output file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub template_id: String,
    pub filename: String,
    /// Where this run wrote the file; not part of the manifest.
    #[serde(skip)]
    pub path: PathBuf,
    pub size: [u32; 2],
    pub bytes: u64,
    pub sha256: String,
    pub template_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub engine_version: String,
    pub generated_at: DateTime<Utc>,
    pub files: Vec<GeneratedFile>,
    /// Hash of `files` alone, so identical runs share it.
    pub manifest_hash: String,
}

impl Manifest {
    pub fn build(files: Vec<GeneratedFile>) -> Result<Self, PipelineError> {
        let manifest_hash = compute_manifest_hash(&files)?;
        Ok(Self {
            engine_version: ENGINE_VERSION.to_string(),
            generated_at: Utc::now(),
            files,
            manifest_hash,
        })
    }

    pub fn write(&self, out_dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = out_dir.join(MANIFEST_FILENAME);
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(path)
    }
}

/// The generation pipeline
pub struct GenerationPipeline<E = WebpEncoder> {
    registry: TemplateRegistry,
    encoder: E,
    validator: Validator,
    quality: u8,
}

impl GenerationPipeline<WebpEncoder> {
    pub fn new(registry: TemplateRegistry) -> Self {
        Self::with_encoder(registry, WebpEncoder)
    }

    /// The seven published images, WebP encoded.
    pub fn bristol() -> Self {
        Self::new(TemplateRegistry::bristol())
    }
}

impl<E: RasterEncoder> GenerationPipeline<E> {
    pub fn with_encoder(registry: TemplateRegistry, encoder: E) -> Self {
        Self {
            registry,
            encoder,
            validator: Validator::new(),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn templates(&self) -> &[ImageTemplate] {
        self.registry.list()
    }

    /// Renders every template into `out_dir` in registry order, reporting
    /// progress to `observe`.
    pub fn run(
        &self,
        out_dir: &Path,
        mut observe: impl FnMut(RunEvent<'_>),
    ) -> Result<Vec<GeneratedFile>, PipelineError> {
        fs::create_dir_all(out_dir)?;
        let mut files = Vec::with_capacity(self.registry.list().len());
        for template in self.registry.list() {
            observe(RunEvent::Starting(template));
            let file = self.generate(template, out_dir)?;
            observe(RunEvent::Written(&file));
            files.push(file);
        }
        Ok(files)
    }

    pub fn generate_by_id(&self, id: &str, out_dir: &Path) -> Result<GeneratedFile, PipelineError> {
        let template = self
            .registry
            .get(id)
            .ok_or_else(|| PipelineError::TemplateNotFound(id.to_string()))?;
        fs::create_dir_all(out_dir)?;
        self.generate(template, out_dir)
    }

    fn generate(&self, template: &ImageTemplate, out_dir: &Path) -> Result<GeneratedFile, PipelineError> {
        let canvas = template.render();
        let data = self.encoder.encode(canvas.as_image(), self.quality)?;

        // MANDATORY: nothing reaches disk without passing validation.
        let validation = self.validator.validate(&data, template);
        if !validation.valid {
            return Err(PipelineError::ValidationFailed(template.id.clone(), validation.summary()));
        }

        let path = out_dir.join(&template.filename);
        fs::write(&path, &data)?;
        info!("wrote {} ({} bytes)", path.display(), data.len());

        Ok(GeneratedFile {
            template_id: template.id.clone(),
            filename: template.filename.clone(),
            path,
            size: template.size,
            bytes: data.len() as u64,
            sha256: sha256_hex(&data),
            template_hash: compute_template_hash(&template.id, template, ENGINE_VERSION)?,
        })
    }

    /// Re-reads every expected file in `out_dir` and validates it. A missing
    /// file is reported as a failed result; other read errors abort.
    pub fn verify(&self, out_dir: &Path) -> Result<Vec<ValidationResult>, PipelineError> {
        let mut results = vec![];
        for template in self.registry.list() {
            let path = out_dir.join(&template.filename);
            let result = match fs::read(&path) {
                Ok(data) => self.validator.validate(&data, template),
                Err(e) if e.kind() == ErrorKind::NotFound => ValidationResult::missing(template),
                Err(e) => return Err(e.into()),
            };
            info!("verified {}: valid={}", path.display(), result.valid);
            results.push(result);
        }
        Ok(results)
    }
}

impl Default for GenerationPipeline<WebpEncoder> {
    fn default() -> Self {
        Self::bristol()
    }
}
