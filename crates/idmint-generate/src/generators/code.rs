use idmint_core::{EanFormat, IsbnFormat};
use rand::RngCore;
use serde_json::Value;

use crate::code::{
    CUSTOM_CODE_MASK, ISSN_MASK, PIN_MASK, custom_code, ean, imei, isbn, issn, locale_code, pin,
};
use crate::errors::GenerationError;
use crate::generators::{Generator, GeneratorContext, GeneratorRegistry};
use crate::mask::{DIGIT_PLACEHOLDER, LETTER_PLACEHOLDER, Placeholders};
use crate::params::{ParamKind, ParamSpec, validate_params};

const CUSTOM_CODE_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("mask", ParamKind::String, false),
    ParamSpec::new("char", ParamKind::Char, false),
    ParamSpec::new("digit", ParamKind::Char, false),
];
const MASK_PARAMS: &[ParamSpec] = &[ParamSpec::new("mask", ParamKind::String, false)];
const ISBN_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("format", ParamKind::String, false),
    ParamSpec::new("locale", ParamKind::String, false),
];
const EAN_PARAMS: &[ParamSpec] = &[ParamSpec::new("format", ParamKind::String, false)];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_generator(Box::new(CustomCodeGenerator));
    registry.register_generator(Box::new(MaskedGenerator {
        id: "code.issn",
        description: "International Standard Serial Number (default mask ####-####)",
        default_mask: ISSN_MASK,
        build: |mask, rng| issn(mask, rng),
    }));
    registry.register_generator(Box::new(MaskedGenerator {
        id: "code.pin",
        description: "Numeric PIN (default mask ####)",
        default_mask: PIN_MASK,
        build: |mask, rng| pin(mask, rng),
    }));
    registry.register_generator(Box::new(IsbnGenerator));
    registry.register_generator(Box::new(EanGenerator));
    registry.register_generator(Box::new(ImeiGenerator));
    registry.register_generator(Box::new(LocaleCodeGenerator));
}

struct CustomCodeGenerator;

impl Generator for CustomCodeGenerator {
    fn id(&self) -> &'static str {
        "code.custom"
    }

    fn description(&self) -> &'static str {
        "Code from a mask; `char` marks letters (default @), `digit` marks digits (default #)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        CUSTOM_CODE_PARAMS
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let params = validate_params(params, CUSTOM_CODE_PARAMS, "code.custom")?;
        let mask = params.get_str("mask").unwrap_or(CUSTOM_CODE_MASK);
        let placeholders = Placeholders::new(
            params.get_char("char").unwrap_or(LETTER_PLACEHOLDER),
            params.get_char("digit").unwrap_or(DIGIT_PLACEHOLDER),
        );
        Ok(custom_code(mask, placeholders, rng))
    }
}

/// Builders that only take an overridable mask.
struct MaskedGenerator {
    id: &'static str,
    description: &'static str,
    default_mask: &'static str,
    build: fn(&str, &mut dyn RngCore) -> String,
}

impl Generator for MaskedGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn params(&self) -> &'static [ParamSpec] {
        MASK_PARAMS
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let params = validate_params(params, MASK_PARAMS, self.id)?;
        let mask = params.get_str("mask").unwrap_or(self.default_mask);
        Ok((self.build)(mask, rng))
    }
}

struct IsbnGenerator;

impl IsbnGenerator {
    fn resolve<'a>(
        params: Option<&'a Value>,
    ) -> Result<(IsbnFormat, Option<&'a str>), GenerationError> {
        let params = validate_params(params, ISBN_PARAMS, "code.isbn")?;
        let format: IsbnFormat = params.get_selector("format")?.unwrap_or_default();
        Ok((format, params.get_str("locale")))
    }
}

impl Generator for IsbnGenerator {
    fn id(&self) -> &'static str {
        "code.isbn"
    }

    fn description(&self) -> &'static str {
        "ISBN for the locale's registration group (format isbn-10 or isbn-13)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        ISBN_PARAMS
    }

    fn validate(&self, params: Option<&Value>) -> Result<(), GenerationError> {
        Self::resolve(params).map(|_| ())
    }

    fn generate(
        &self,
        ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        let (format, locale) = Self::resolve(params)?;
        Ok(isbn(format, locale.unwrap_or(ctx.locale), rng))
    }
}

struct EanGenerator;

impl EanGenerator {
    fn resolve(params: Option<&Value>) -> Result<EanFormat, GenerationError> {
        let params = validate_params(params, EAN_PARAMS, "code.ean")?;
        let format: EanFormat = params.get_selector("format")?.unwrap_or_default();
        Ok(format)
    }
}

impl Generator for EanGenerator {
    fn id(&self) -> &'static str {
        "code.ean"
    }

    fn description(&self) -> &'static str {
        "European Article Number (format ean-13 or ean-8)"
    }

    fn params(&self) -> &'static [ParamSpec] {
        EAN_PARAMS
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
        let format = Self::resolve(params)?;
        Ok(ean(format, rng))
    }
}

struct ImeiGenerator;

impl Generator for ImeiGenerator {
    fn id(&self) -> &'static str {
        "code.imei"
    }

    fn description(&self) -> &'static str {
        "15-digit IMEI with Luhn check digit"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        validate_params(params, &[], "code.imei")?;
        Ok(imei(rng))
    }
}

struct LocaleCodeGenerator;

impl Generator for LocaleCodeGenerator {
    fn id(&self) -> &'static str {
        "code.locale"
    }

    fn description(&self) -> &'static str {
        "Windows language code identifier such as de-ch"
    }

    fn generate(
        &self,
        _ctx: &GeneratorContext<'_>,
        params: Option<&Value>,
        rng: &mut dyn RngCore,
    ) -> Result<String, GenerationError> {
        validate_params(params, &[], "code.locale")?;
        Ok(locale_code(rng).to_string())
    }
}
