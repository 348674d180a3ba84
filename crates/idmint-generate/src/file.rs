//! File extensions, MIME types, sizes and names.

use fake::Fake;
use fake::faker::lorem::en::Word;
use idmint_core::data::{SIZE_UNITS, extensions, mime_types};
use idmint_core::{FileType, MimeType};
use rand::Rng;

use crate::errors::GenerationError;
use crate::sample::pick;

pub const DEFAULT_SIZE_MIN: u64 = 1;
pub const DEFAULT_SIZE_MAX: u64 = 100;

const NAME_SEPARATORS: &[&str] = &["_", "-"];

/// Random extension, e.g. `.py`. A random file type is used when `None`.
pub fn extension<R: Rng + ?Sized>(file_type: Option<FileType>, rng: &mut R) -> &'static str {
    let file_type = file_type.unwrap_or_else(|| random_file_type(rng));
    pick(extensions(file_type), rng).copied().unwrap_or(".txt")
}

/// Random MIME type, e.g. `text/csv`. A random top-level type is used when `None`.
pub fn mime_type<R: Rng + ?Sized>(mime: Option<MimeType>, rng: &mut R) -> &'static str {
    let mime = mime.unwrap_or_else(|| *pick(MimeType::ALL, rng).unwrap_or(&MimeType::Text));
    pick(mime_types(mime), rng)
        .copied()
        .unwrap_or("text/plain")
}

/// Human readable size such as `56 kB`.
pub fn size<R: Rng + ?Sized>(min: u64, max: u64, rng: &mut R) -> Result<String, GenerationError> {
    if min > max {
        return Err(GenerationError::InvalidParams(format!(
            "file size min ({min}) must be <= max ({max})"
        )));
    }
    let num = rng.random_range(min..=max);
    let unit = pick(SIZE_UNITS, rng).copied().unwrap_or("bytes");
    Ok(format!("{num} {unit}"))
}

/// Random word followed by an extension, e.g. `legislative.txt`.
pub fn file_name<R: Rng + ?Sized>(file_type: Option<FileType>, rng: &mut R) -> String {
    let word: String = Word().fake_with_rng(rng);
    let ext = extension(file_type, rng);
    let separator = pick(NAME_SEPARATORS, rng).copied().unwrap_or("_");
    format!("{}{ext}", join_whitespace(&word, separator))
}

fn random_file_type<R: Rng + ?Sized>(rng: &mut R) -> FileType {
    *pick(FileType::ALL, rng).unwrap_or(&FileType::Text)
}

/// Trim and collapse every whitespace run into `separator`.
fn join_whitespace(value: &str, separator: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn join_whitespace_collapses_runs() {
        assert_eq!(join_whitespace("  annual \t report  2024 ", "-"), "annual-report-2024");
        assert_eq!(join_whitespace("plain", "_"), "plain");
    }

    #[test]
    fn size_rejects_inverted_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert!(matches!(
            size(10, 1, &mut rng),
            Err(GenerationError::InvalidParams(_))
        ));
    }

    #[test]
    fn size_with_equal_bounds_is_fixed() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let value = size(42, 42, &mut rng).unwrap_or_default();
        let (num, unit) = value.split_once(' ').unwrap_or_default();
        assert_eq!(num, "42");
        assert!(SIZE_UNITS.contains(&unit));
    }
}
