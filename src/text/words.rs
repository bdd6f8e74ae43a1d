//! Language-aware word counter
//!
//! Article bodies arrive as HTML from the rich-text editor. Tags are
//! stripped before counting, and Arabic text has its diacritics and
//! tatweel removed so vocalized and unvocalized spellings count the same.

use regex::Regex;
use std::sync::OnceLock;

static HTML_TAG: OnceLock<Regex> = OnceLock::new();
static ARABIC_MARKS: OnceLock<Regex> = OnceLock::new();
static HTML_ENTITY: OnceLock<Regex> = OnceLock::new();

fn html_tag() -> &'static Regex {
    HTML_TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("valid regex"))
}

fn html_entity() -> &'static Regex {
    HTML_ENTITY.get_or_init(|| {
        Regex::new(r"&(#[0-9]{1,7}|#[xX][0-9a-fA-F]{1,6}|[a-zA-Z][a-zA-Z0-9]{1,31});")
            .expect("valid regex")
    })
}

// Harakat, Quranic annotation marks, superscript alef and tatweel.
fn arabic_marks() -> &'static Regex {
    ARABIC_MARKS.get_or_init(|| {
        Regex::new(r"[\u{0610}-\u{061A}\u{064B}-\u{065F}\u{0670}\u{06D6}-\u{06ED}\u{0640}]")
            .expect("valid regex")
    })
}

/// Lowercase primary subtag of a BCP 47 code (`"ar-SA"` -> `"ar"`)
pub fn normalize_language(code: &str) -> String {
    code.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or("")
        .to_lowercase()
}

/// Replace tags with spaces so adjacent blocks don't merge into one word,
/// then decode character references
pub fn strip_html(text: &str) -> String {
    let plain = html_tag().replace_all(text, " ");
    html_entity()
        .replace_all(&plain, |caps: &regex::Captures| decode_entity(&caps[1]))
        .into_owned()
}

/// Decode one entity body (without `&` and `;`). Names we don't know
/// become a space so they never count as a word.
fn decode_entity(entity: &str) -> String {
    if let Some(number) = entity.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => number.parse::<u32>().ok(),
        };
        return code
            .and_then(char::from_u32)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
    }

    match entity {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        "rsquo" | "lsquo" => "'",
        "rdquo" | "ldquo" => "\"",
        _ => " ",
    }
    .to_string()
}

/// Count words in `text` for the given language code.
///
/// A word is a whitespace-separated token holding at least one letter or
/// digit, so stray punctuation is not counted.
pub fn count_words(text: &str, language: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    let mut plain = strip_html(text);
    if normalize_language(language) == "ar" {
        plain = arabic_marks().replace_all(&plain, "").into_owned();
    }

    plain
        .split_whitespace()
        .filter(|token| token.chars().any(char::is_alphanumeric))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text() {
        assert_eq!(count_words("", "en"), 0);
        assert_eq!(count_words("   \n\t", "ar"), 0);
    }

    #[test]
    fn test_plain_english() {
        assert_eq!(count_words("The quick brown fox", "en"), 4);
    }

    #[test]
    fn test_html_is_stripped() {
        let html = "<p>Hello <strong>big</strong> world</p><p>again</p>";
        assert_eq!(count_words(html, "en"), 4);
        assert_eq!(count_words("<p>one</p><p>two</p>", "en"), 2);
        assert_eq!(count_words("one&nbsp;two", "en"), 2);
    }

    #[test]
    fn test_entities_are_not_words() {
        assert_eq!(count_words("a &amp; b", "en"), 2);
        assert_eq!(count_words("Tom&nbsp;&amp;&nbsp;Jerry &copy; 2024", "en"), 3);
        assert_eq!(count_words("&lt;b&gt;", "en"), 1);
        assert_eq!(count_words("caf&#233; &#x263A;", "en"), 1);
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("<p>a&amp;b</p>").trim(), "a&b");
        assert_eq!(strip_html("x&nbsp;y"), "x y");
        assert_eq!(strip_html("&#1605;"), "م");
        assert_eq!(strip_html("&unknown;"), " ");
    }

    #[test]
    fn test_punctuation_only_tokens_ignored() {
        assert_eq!(count_words("Hello - world !", "en"), 2);
    }

    #[test]
    fn test_arabic_diacritics_do_not_split_or_add_words() {
        // "the book is new" with and without harakat
        let vocalized = "الْكِتَابُ جَدِيدٌ";
        let bare = "الكتاب جديد";
        assert_eq!(count_words(vocalized, "ar"), 2);
        assert_eq!(count_words(bare, "ar"), 2);
    }

    #[test]
    fn test_arabic_tatweel_only_token_ignored() {
        assert_eq!(count_words("كتاب ـــ قلم", "ar"), 2);
    }

    #[test]
    fn test_normalize_language() {
        assert_eq!(normalize_language("ar-SA"), "ar");
        assert_eq!(normalize_language("EN_us"), "en");
        assert_eq!(normalize_language(" fr "), "fr");
        assert_eq!(normalize_language(""), "");
    }
}
