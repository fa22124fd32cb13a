/// A language the generator can write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub label: &'static str,
}

const fn language(code: &'static str, label: &'static str) -> Language {
    Language { code, label }
}

pub const LANGUAGES: [Language; 16] = [
    language("en", "English"),
    language("ro", "Română"),
    language("fr", "Français"),
    language("es", "Español"),
    language("it", "Italiano"),
    language("de", "Deutsch"),
    language("la", "Latin"),
    language("grc", "Ancient Greek"),
    language("sa", "Sanskrit"),
    language("ar", "Arabic"),
    language("he", "Hebrew"),
    language("ja", "Japanese"),
    language("zh", "Chinese"),
    language("ru", "Russian"),
    language("pt", "Portuguese"),
    language("nl", "Dutch"),
];

pub fn find_language(code: &str) -> Option<Language> {
    LANGUAGES.iter().copied().find(|l| l.code == code)
}

/// Languages whose label contains `query`, ignoring case. An empty query matches all.
pub fn search_languages(query: &str) -> Vec<Language> {
    let query = query.trim().to_lowercase();
    LANGUAGES
        .iter()
        .copied()
        .filter(|l| l.label.to_lowercase().contains(&query))
        .collect()
}
