//! Text canonicalization for comment filtering
//!
//! All junk heuristics operate on normalized text: trimmed, lowercased,
//! NFKD-decomposed with combining marks stripped. The one exception is
//! the tilde on `n`: `ñ` is a letter of the target alphabet, not an
//! accented variant, so it is recombined instead of flattened to `n`.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Combining tilde produced by NFKD decomposition of `ñ`.
const COMBINING_TILDE: char = '\u{0303}';

/// Normalize raw comment text for filtering.
///
/// Total over all inputs and idempotent: normalizing an already
/// normalized string returns it unchanged. Accented vowels collapse to
/// their base letters (`atención` → `atencion`) while `ñ` survives.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for c in text.to_lowercase().nfkd() {
        if is_combining_mark(c) {
            // NFKD turns ñ into `n` + combining tilde; put it back together.
            if c == COMBINING_TILDE && out.ends_with('n') {
                out.pop();
                out.push('ñ');
            }
        } else {
            out.push(c);
        }
    }

    // Trim last: NFKD can introduce edge whitespace (e.g. U+00A0 → space),
    // and idempotence requires the result to be trim-stable.
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_and_trim() {
        assert_eq!(normalize("  Muy Buena Atención  "), "muy buena atencion");
        assert_eq!(normalize("HOLA"), "hola");
    }

    #[test]
    fn test_accents_collapse_to_base_letters() {
        assert_eq!(normalize("áéíóú"), "aeiou");
        assert_eq!(normalize("café"), "cafe");
        assert_eq!(normalize("Über"), "uber");
    }

    #[test]
    fn test_enye_is_preserved() {
        assert_eq!(normalize("ñ"), "ñ");
        assert_eq!(normalize("Ñoño"), "ñoño");
        assert_eq!(normalize("años"), "años");
        // Decomposed input recombines too.
        assert_eq!(normalize("n\u{0303}"), "ñ");
    }

    #[test]
    fn test_tilde_on_other_letters_is_dropped() {
        assert_eq!(normalize("São Paulo"), "sao paulo");
        assert_eq!(normalize("a\u{0303}"), "a");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t\n  "), "");
    }

    #[test]
    fn test_non_latin_scripts_pass_through() {
        assert_eq!(normalize("привет мир"), "привет мир");
        assert_eq!(normalize("こんにちは"), "こんにちは");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Muy Buena Atención  ",
            "Ñoño",
            "café résumé naïve",
            "....",
            "",
            "a\u{00A0}", // NBSP decomposes to a plain space under NFKD
            "привет",
            "N/A",
        ];

        for s in samples {
            let once = normalize(s);
            let twice = normalize(&once);
            assert_eq!(once, twice, "normalize not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_nbsp_edge_whitespace_is_trimmed() {
        assert_eq!(normalize("hola\u{00A0}"), "hola");
    }
}
