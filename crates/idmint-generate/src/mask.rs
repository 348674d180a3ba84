//! Mask engine.
//!
//! A mask is any string. Two characters act as placeholders: one is replaced
//! by a random uppercase ASCII letter, the other by a random decimal digit.
//! Every other character is copied as is, so the output always has as many
//! characters as the mask.

use rand::Rng;

const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Default letter placeholder.
pub const LETTER_PLACEHOLDER: char = '@';
/// Default digit placeholder.
pub const DIGIT_PLACEHOLDER: char = '#';

/// Characters that the engine substitutes.
///
/// When both roles share the same character the letter role wins: the
/// letter check runs first for every mask character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholders {
    pub letter: char,
    pub digit: char,
}

impl Placeholders {
    pub const fn new(letter: char, digit: char) -> Self {
        Self { letter, digit }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self::new(LETTER_PLACEHOLDER, DIGIT_PLACEHOLDER)
    }
}

/// Materialize `mask`, drawing one random value per placeholder occurrence.
pub fn generate<R: Rng + ?Sized>(mask: &str, placeholders: Placeholders, rng: &mut R) -> String {
    let mut code = String::with_capacity(mask.len());
    for ch in mask.chars() {
        if ch == placeholders.letter {
            code.push(random_letter(rng));
        } else if ch == placeholders.digit {
            code.push(random_digit(rng));
        } else {
            code.push(ch);
        }
    }
    code
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    let idx = rng.random_range(0..UPPERCASE.len());
    char::from(UPPERCASE[idx])
}

fn random_digit<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'0' + rng.random_range(0..=9_u8))
}
