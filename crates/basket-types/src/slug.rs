//! Slug derivation: turn a display name into a stable item identifier.
//!
//! Rules:
//! - Lowercase
//! - Common Latin diacritics folded to their base letter
//! - Runs of anything outside `a-z0-9` collapsed to a single `-`
//! - No leading or trailing `-`
//!
//! Used when an "add to cart" trigger supplies a display name but no
//! explicit id.

/// Derive a slug from arbitrary display text.
///
/// # Examples
///
/// ```
/// use basket_types::slug::slugify;
///
/// assert_eq!(slugify("Curso de Programación"), "curso-de-programacion");
/// assert_eq!(slugify("  Rust 101!  "), "rust-101");
/// assert_eq!(slugify("***"), "");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        let ch = fold_diacritic(ch);
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    if slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Fold a lowercase Latin character with a diacritic to its base letter.
///
/// Characters without a mapping pass through unchanged.
fn fold_diacritic(ch: char) -> char {
    match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        'ñ' => 'n',
        'ç' => 'c',
        _ => ch,
    }
}
