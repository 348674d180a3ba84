use idmint_core::{FileType, MimeType};
use rand::RngCore;
use serde_json::Value;

use crate::errors::GenerationError;
use crate::file::{DEFAULT_SIZE_MAX, DEFAULT_SIZE_MIN, extension, file_name, mime_type, size};
use crate::generators::{Generator, GeneratorContext, GeneratorRegistry};
use crate::params::{ParamKind, ParamSpec, validate_params};

const FILE_TYPE_PARAMS: &[ParamSpec] = &[ParamSpec::new("file_type", ParamKind::String, false)];
const MIME_TYPE_PARAMS: &[ParamSpec] = &[ParamSpec::new("type", ParamKind::String, false)];
const SIZE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min", ParamKind::Count, false),
    ParamSpec::new("max", ParamKind::Count, false),
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(ExtensionGenerator));
    registry.register_generator(Box::new(FileNameGenerator));
    registry.register_generator(Box::new(MimeTypeGenerator));
    registry.register_generator(Box::new(SizeGenerator));
}

fn resolve_file_type(
    params: Option<&Value>,
    ctx: &'static str,
) -> Result<Option<FileType>, GenerationError> {
    validate_params(params, FILE_TYPE_PARAMS, ctx)?.get_selector("file_type")
}

struct ExtensionGenerator;

impl Generator for ExtensionGenerator {
    fn id(&self) -> &'static str {
        "file.extension"
    }

    fn description(&self) -> &'static str {
        "File extension such as .py (file_type picks the family)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        FILE_TYPE_PARAMS
    }

    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        resolve_file_type(params, "file.extension").map(|_| ())
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let file_type = resolve_file_type(params, "file.extension")?;
        Ok(extension(file_type, rng).to_string())
    }
}

struct FileNameGenerator;

impl Generator for FileNameGenerator {
    fn id(&self) -> &'static str {
        "file.name"
    }

    fn description(&self) -> &'static str {
        "File name made of a word and an extension"
    }

    fn params(&self) -> &'static [ParamSpec] {
        FILE_TYPE_PARAMS
    }

    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        resolve_file_type(params, "file.name").map(|_| ())
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let file_type = resolve_file_type(params, "file.name")?;
        Ok(file_name(file_type, rng))
    }
}

struct MimeTypeGenerator;

impl MimeTypeGenerator {
    fn resolve(params: Option<&Value>) -> Result<Option<MimeType>, GenerationError> {
        validate_params(params, MIME_TYPE_PARAMS, "file.mime_type")?.get_selector("type")
    }
}

impl Generator for MimeTypeGenerator {
    fn id(&self) -> &'static str {
        "file.mime_type"
    }

    fn description(&self) -> &'static str {
        "MIME type such as text/csv (type picks the top-level type)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        MIME_TYPE_PARAMS
    }

    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        Self::resolve(params).map(|_| ())
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let mime = Self::resolve(params)?;
        Ok(mime_type(mime, rng).to_string())
    }
}

struct SizeGenerator;

impl SizeGenerator {
    fn resolve(params: Option<&Value>) -> Result<(u64, u64), GenerationError> {
        let params = validate_params(params, SIZE_PARAMS, "file.size")?;
        let min = params.get_u64("min").unwrap_or(DEFAULT_SIZE_MIN);
        let max = params.get_u64("max").unwrap_or(DEFAULT_SIZE_MAX);
        if min > max {
            return Err(GenerationError::InvalidParams(
                "file.size: min must be <= max".to_string(),
            ));
        }
        Ok((min, max))
    }
}

impl Generator for SizeGenerator {
    fn id(&self) -> &'static str {
        "file.size"
    }

    fn description(&self) -> &'static str {
        "File size such as 56 kB (min/max bound the number, default 1..=100)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        SIZE_PARAMS
    }

    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        Self::resolve(params).map(|_| ())
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let (min, max) = Self::resolve(params)?;
        size(min, max, rng)
    }
}
