//! Language resolution and the supported-language listing.

use anyhow::Result;

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their English names.
///
/// The name is what ends up in the prompt; models follow "German" far more
/// reliably than "de".
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bn", "Bengali"),
    ("cs", "Czech"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

/// Resolves a language given as an ISO 639-1 code or an English name
/// (case-insensitive) to the display name used in the prompt.
pub fn resolve_language(lang: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, name)| *code == lang || name.eq_ignore_ascii_case(lang))
        .map(|(_, name)| *name)
}

/// Resolves a language or fails with a user-facing diagnostic.
///
/// # Errors
///
/// Returns an error if the language is neither a supported code nor name.
pub fn language_name(lang: &str) -> Result<&'static str> {
    resolve_language(lang).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid language: '{lang}'\n\n\
             Use an ISO 639-1 code (de, ja, pt, ...) or an English name (German, Japanese, ...).\n\
             Run 'xl8 languages' to see all supported languages."
        )
    })
}

/// Validates that the given language is supported.
///
/// # Errors
///
/// Returns an error if the language is neither a supported code nor name.
pub fn validate_language(lang: &str) -> Result<()> {
    language_name(lang).map(|_| ())
}

/// Prints all supported languages to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}
