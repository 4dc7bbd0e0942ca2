//! SiteImages Core - procedural artwork for the Bristol emergency plumber site
//!
//! # Ground Rules
//! 1. Geometry only: gradients, polygons, ellipses, lines
//! 2. Same code, same bytes: every random stream is seeded per image
//! 3. Nothing is written without passing validation
//! 4. The first failure stops the batch

pub mod color;
pub mod canvas;
pub mod gradient;
pub mod random;
pub mod motifs;
pub mod home;
pub mod locations;
pub mod card;
pub mod templates;
pub mod encoder;
pub mod validation;
pub mod hashing;
pub mod print;
pub mod pipeline;

pub use canvas::Canvas;
pub use color::{palette, Color};
pub use gradient::Gradient;
pub use random::{FixedSequence, RandomSource};
pub use card::{CardScene, ColorScheme, CompassDial, Direction};
pub use templates::{ImageTemplate, Scene, TemplateId, TemplateRegistry};
pub use encoder::{RasterEncoder, WebpEncoder};
pub use validation::{ValidationResult, ValidationRule, ValidationViolation, ViolationSeverity};
pub use hashing::{canonical_json, compute_manifest_hash, sha256_hex};
pub use pipeline::{GeneratedFile, GenerationPipeline, Manifest, PipelineError, RunEvent};

pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default output directory, relative to the site root.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/images";
