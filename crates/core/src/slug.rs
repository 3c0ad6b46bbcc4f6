//! Slug derivation for bilingual catalog entries.
//!
//! Slugs are URL path segments, so the character set is deliberately narrow:
//! lowercase ASCII letters and digits, hyphens, and (for Arabic slugs) the
//! Arabic Unicode block. Everything else is dropped.

use crate::lang::{Lang, LocalizedText};

/// Arabic block accepted in Arabic-language slugs.
const ARABIC_BLOCK: core::ops::RangeInclusive<char> = '\u{0600}'..='\u{06FF}';

/// Derive a slug from free text.
///
/// Lowercases, turns whitespace runs into single hyphens, drops characters
/// outside the slug alphabet for `lang`, collapses repeated hyphens, and trims
/// hyphens from both ends.
///
/// Total and idempotent. Symbol-only input degenerates to an empty string;
/// rejecting that is the caller's job (an empty slug is never persisted).
pub fn slugify(text: &str, lang: Lang) -> String {
    let lowered = text.to_lowercase();

    let mut raw = String::with_capacity(lowered.len());
    for c in lowered.trim().chars() {
        if c.is_whitespace() {
            raw.push('-');
        } else if is_slug_char(c, lang) {
            raw.push(c);
        }
    }

    let mut slug = String::with_capacity(raw.len());
    let mut prev_hyphen = false;
    for c in raw.chars() {
        if c == '-' {
            if !prev_hyphen {
                slug.push('-');
            }
            prev_hyphen = true;
        } else {
            slug.push(c);
            prev_hyphen = false;
        }
    }

    slug.trim_matches('-').to_string()
}

/// Derive both language slugs from a bilingual text.
pub fn slugify_text(text: &LocalizedText) -> LocalizedText {
    LocalizedText {
        en: slugify(&text.en, Lang::En),
        ar: slugify(&text.ar, Lang::Ar),
    }
}

fn is_slug_char(c: char, lang: Lang) -> bool {
    if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
        return true;
    }
    lang == Lang::Ar && ARABIC_BLOCK.contains(&c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn basic_english_slug() {
        assert_eq!(slugify("Laptop Pro 15", Lang::En), "laptop-pro-15");
    }

    #[test]
    fn whitespace_runs_and_repeated_hyphens_collapse() {
        assert_eq!(slugify("  A   B--C ", Lang::En), "a-b-c");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(slugify("", Lang::En), "");
        assert_eq!(slugify("   ", Lang::En), "");
    }

    #[test]
    fn symbols_are_dropped() {
        assert_eq!(slugify("JavaScript: The Good Parts!", Lang::En), "javascript-the-good-parts");
        assert_eq!(slugify("100% Cotton", Lang::En), "100-cotton");
    }

    #[test]
    fn arabic_text_survives_in_arabic_slugs() {
        assert_eq!(slugify("لابتوب برو", Lang::Ar), "لابتوب-برو");
        assert_eq!(slugify("ساعة ذكية", Lang::Ar), "ساعة-ذكية");
    }

    #[test]
    fn arabic_text_is_stripped_from_english_slugs() {
        assert_eq!(slugify("لابتوب", Lang::En), "");
        assert_eq!(slugify("Laptop لابتوب 15", Lang::En), "laptop-15");
    }

    #[test]
    fn mixed_ascii_allowed_in_arabic_slugs() {
        assert_eq!(slugify("لابتوب برو 15", Lang::Ar), "لابتوب-برو-15");
    }

    #[test]
    fn slugify_text_derives_both_sides() {
        let name = LocalizedText::new("Smart Watch", "ساعة ذكية");
        let slug = slugify_text(&name);
        assert_eq!(slug.en, "smart-watch");
        assert_eq!(slug.ar, "ساعة-ذكية");
    }

    proptest! {
        /// Slugification is idempotent: re-slugifying an output is a no-op.
        #[test]
        fn slugify_is_idempotent(text in "\\PC{0,64}", ar in proptest::bool::ANY) {
            let lang = if ar { Lang::Ar } else { Lang::En };
            let once = slugify(&text, lang);
            let twice = slugify(&once, lang);
            prop_assert_eq!(once, twice);
        }

        /// Output only ever contains the slug alphabet, with no hyphen runs
        /// and no hyphens at the ends.
        #[test]
        fn slugify_output_is_canonical(text in "\\PC{0,64}", ar in proptest::bool::ANY) {
            let lang = if ar { Lang::Ar } else { Lang::En };
            let slug = slugify(&text, lang);

            for c in slug.chars() {
                prop_assert!(super::is_slug_char(c, lang), "unexpected char {c:?}");
            }
            prop_assert!(!slug.contains("--"));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
        }
    }
}
