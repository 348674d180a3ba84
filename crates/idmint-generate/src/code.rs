//! Identifier builders on top of the mask engine.
//!
//! Every builder takes the random source and, where it matters, the locale
//! as explicit arguments.

use idmint_core::data::{IMEI_TACS, ISBN_DEFAULT_KEY, ISBN_GROUPS, LOCALE_CODES, lookup};
use idmint_core::{DEFAULT_LOCALE, EanFormat, IsbnFormat};
use rand::Rng;

use crate::checksum::check_digit;
use crate::mask::{self, Placeholders};
use crate::sample::pick;

pub const CUSTOM_CODE_MASK: &str = "@###";
pub const ISSN_MASK: &str = "####-####";
pub const PIN_MASK: &str = "####";
const IMEI_SERIAL_MASK: &str = "######";
const FALLBACK_ISBN_GROUP: &str = "1";

pub fn custom_code<R: Rng + ?Sized>(mask: &str, placeholders: Placeholders, rng: &mut R) -> String {
    mask::generate(mask, placeholders, rng)
}

/// International Standard Serial Number, `####-####` unless overridden.
pub fn issn<R: Rng + ?Sized>(mask: &str, rng: &mut R) -> String {
    custom_code(mask, Placeholders::default(), rng)
}

/// ISBN with the registration group of `locale`.
///
/// Locales missing from the group table use the table's `default` entry.
pub fn isbn<R: Rng + ?Sized>(format: IsbnFormat, locale: &str, rng: &mut R) -> String {
    let group = isbn_group(locale);
    let mask = match format {
        IsbnFormat::Isbn10 => format!("{group}-#####-###-#"),
        IsbnFormat::Isbn13 => format!("###-{group}-#####-###-#"),
    };
    custom_code(&mask, Placeholders::default(), rng)
}

pub fn isbn_group(locale: &str) -> &'static str {
    lookup(ISBN_GROUPS, locale)
        .or_else(|| lookup(ISBN_GROUPS, ISBN_DEFAULT_KEY))
        .unwrap_or(FALLBACK_ISBN_GROUP)
}

/// European Article Number without separators.
pub fn ean<R: Rng + ?Sized>(format: EanFormat, rng: &mut R) -> String {
    custom_code(&"#".repeat(format.digits()), Placeholders::default(), rng)
}

/// 15-digit IMEI: type allocation code, six-digit serial, Luhn check digit.
pub fn imei<R: Rng + ?Sized>(rng: &mut R) -> String {
    let tac = pick(IMEI_TACS, rng).copied().unwrap_or("35332203");
    let mut number = String::with_capacity(15);
    number.push_str(tac);
    number.push_str(&custom_code(IMEI_SERIAL_MASK, Placeholders::default(), rng));

    let digits: Vec<u8> = number.bytes().map(|byte| byte - b'0').collect();
    number.push(char::from(b'0' + check_digit(&digits)));
    number
}

pub fn pin<R: Rng + ?Sized>(mask: &str, rng: &mut R) -> String {
    custom_code(mask, Placeholders::default(), rng)
}

/// Random Windows language code identifier, e.g. `de-ch`.
pub fn locale_code<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(LOCALE_CODES, rng).copied().unwrap_or(DEFAULT_LOCALE)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn isbn_group_falls_back_to_default() {
        assert_eq!(isbn_group("de"), "3");
        assert_eq!(isbn_group("et"), "9949");
        assert_eq!(isbn_group("xx-unknown"), "1");
        assert_eq!(isbn_group(""), "1");
    }

    #[test]
    fn isbn_uses_locale_group_as_literal_prefix() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let value = isbn(IsbnFormat::Isbn10, "ru", &mut rng);
        assert!(value.starts_with("5-"), "{value}");

        let value = isbn(IsbnFormat::Isbn13, "tr", &mut rng);
        assert_eq!(value.split('-').nth(1), Some("975"), "{value}");
    }

    #[test]
    fn imei_starts_with_known_tac() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..20 {
            let value = imei(&mut rng);
            assert!(IMEI_TACS.contains(&&value[..8]), "{value}");
        }
    }
}
