//! Mask-driven identifier generation for idmint.
//!
//! The mask engine turns patterns such as `@###` into random strings; the
//! builders in [`code`] and [`file`] compose masks and lookup tables into
//! ISBN, EAN, ISSN, IMEI, PIN, locale and file-name values. The
//! [`generators`] registry and [`engine`] expose every builder by id and
//! produce seeded, reproducible batches.

pub mod checksum;
pub mod code;
pub mod engine;
pub mod errors;
pub mod file;
pub mod generators;
pub mod mask;
pub mod model;
pub mod output;
pub mod params;

mod sample;

pub use engine::BatchEngine;
pub use errors::GenerationError;
pub use mask::Placeholders;
pub use model::{Batch, GenerateOptions, GeneratorRequest};
