//! Language catalog for the selection dropdowns.

use crate::shared::types::LanguageOption;

/// Languages the bundled MarianMT server ships models for. Used as a
/// fallback when the server's `/languages` endpoint is unreachable.
pub const BUILTIN_LANGUAGES: &[&str] = &["en", "fr", "de", "es", "ru"];

/// Display name for an ISO 639-1 code. Falls back to the uppercased
/// code for anything isolang does not know.
pub fn display_name(code: &str) -> String {
    isolang::Language::from_639_1(code)
        .map(|lang| lang.to_name().to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Build sorted selection options from raw language codes.
pub fn options_from_codes<I, S>(codes: I) -> Vec<LanguageOption>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options: Vec<LanguageOption> = codes
        .into_iter()
        .map(|code| LanguageOption {
            code: code.as_ref().to_string(),
            label: display_name(code.as_ref()),
        })
        .collect();
    options.sort_by(|a, b| a.label.cmp(&b.label));
    options
}

pub fn builtin_options() -> Vec<LanguageOption> {
    options_from_codes(BUILTIN_LANGUAGES.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_resolves_known_codes() {
        assert_eq!(display_name("en"), "English");
        assert_eq!(display_name("fr"), "French");
    }

    #[test]
    fn display_name_falls_back_to_uppercased_code() {
        assert_eq!(display_name("xx"), "XX");
    }

    #[test]
    fn builtin_options_are_sorted_by_label() {
        let labels: Vec<String> = builtin_options().into_iter().map(|o| o.label).collect();
        assert_eq!(
            labels,
            vec!["English", "French", "German", "Russian", "Spanish"]
        );
    }
}
