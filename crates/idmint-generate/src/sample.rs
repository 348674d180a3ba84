use rand::Rng;

/// Uniform choice from a slice; `None` only when the slice is empty.
pub(crate) fn pick<'a, T, R: Rng + ?Sized>(values: &'a [T], rng: &mut R) -> Option<&'a T> {
    if values.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..values.len());
    values.get(idx)
}
