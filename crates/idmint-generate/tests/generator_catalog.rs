use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use serde_json::json;

use idmint_core::Error as CoreError;
use idmint_generate::checksum::is_luhn_valid;
use idmint_generate::errors::GenerationError;
use idmint_generate::generators::{GeneratorContext, GeneratorRegistry};

const CTX: GeneratorContext<'static> = GeneratorContext { locale: "en" };

#[test]
fn generator_ids_are_sorted_and_complete() {
    let registry = GeneratorRegistry::new();
    let ids = registry.generator_ids();
    assert_eq!(
        ids,
        vec![
            "code.custom",
            "code.ean",
            "code.imei",
            "code.isbn",
            "code.issn",
            "code.locale",
            "code.pin",
            "file.extension",
            "file.mime_type",
            "file.name",
            "file.size",
        ]
    );
    assert!(registry.describe().all(|g| !g.description().is_empty()));
}

#[test]
fn unknown_generator_errors() {
    let registry = GeneratorRegistry::new();
    assert!(registry.generator("code.asin").is_none());
    assert!(matches!(
        registry.require("code.asin"),
        Err(GenerationError::UnknownGenerator(id)) if id == "code.asin"
    ));
}

#[test]
fn custom_code_honours_placeholder_params() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("code.custom").expect("generator exists");
    let params = json!({"mask": "**-%%", "char": "%", "digit": "*"});
    let pattern = Regex::new(r"^\d{2}-[A-Z]{2}$").expect("valid regex");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for _ in 0..20 {
        let value = generator
            .generate(&CTX, Some(&params), &mut rng)
            .expect("generate code");
        assert!(pattern.is_match(&value), "{value}");
    }
}

#[test]
fn isbn_format_selector_is_strict() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("code.isbn").expect("generator exists");
    let params = json!({"format": "isbn-12"});
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    let result = generator.generate(&CTX, Some(&params), &mut rng);
    assert!(matches!(
        result,
        Err(GenerationError::Selector(CoreError::UnrecognizedSelector { selector: "isbn format", .. }))
    ));
    assert!(generator.validate(Some(&params)).is_err());
}

#[test]
fn ean_format_selector_is_strict() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("code.ean").expect("generator exists");
    assert!(generator.validate(Some(&json!({"format": "ean-8"}))).is_ok());
    assert!(matches!(
        generator.validate(Some(&json!({"format": "upc"}))),
        Err(GenerationError::Selector(_))
    ));
}

#[test]
fn isbn_uses_context_locale_unless_overridden() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("code.isbn").expect("generator exists");
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let german = GeneratorContext { locale: "de" };
    let value = generator
        .generate(&german, None, &mut rng)
        .expect("generate isbn");
    assert!(value.starts_with("3-"), "{value}");

    let params = json!({"locale": "ja", "format": "isbn-13"});
    let value = generator
        .generate(&german, Some(&params), &mut rng)
        .expect("generate isbn");
    assert_eq!(value.split('-').nth(1), Some("4"), "{value}");
}

#[test]
fn imei_generator_is_luhn_valid() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("code.imei").expect("generator exists");
    let mut rng = ChaCha8Rng::seed_from_u64(15);
    for _ in 0..20 {
        let value = generator.generate(&CTX, None, &mut rng).expect("imei");
        assert!(is_luhn_valid(&value), "{value}");
    }
}

#[test]
fn parameterless_generators_reject_params() {
    let registry = GeneratorRegistry::new();
    let params = json!({"mask": "###"});
    for id in ["code.imei", "code.locale"] {
        let generator = registry.generator(id).expect("generator exists");
        assert!(matches!(
            generator.validate(Some(&params)),
            Err(GenerationError::InvalidParams(_))
        ));
    }
}

#[test]
fn file_selectors_are_strict() {
    let registry = GeneratorRegistry::new();
    let extension = registry.generator("file.extension").expect("generator exists");
    assert!(matches!(
        extension.validate(Some(&json!({"file_type": "font"}))),
        Err(GenerationError::Selector(CoreError::UnrecognizedSelector { selector: "file type", .. }))
    ));

    let mime = registry.generator("file.mime_type").expect("generator exists");
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let value = mime
        .generate(&CTX, Some(&json!({"type": "video"})), &mut rng)
        .expect("mime type");
    assert!(value.starts_with("video/"), "{value}");
}

#[test]
fn file_size_rejects_inverted_bounds() {
    let registry = GeneratorRegistry::new();
    let generator = registry.generator("file.size").expect("generator exists");
    let params = json!({"min": 50, "max": 5});
    assert!(matches!(
        generator.validate(Some(&params)),
        Err(GenerationError::InvalidParams(_))
    ));
}
