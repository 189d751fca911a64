use once_cell::sync::Lazy;
use regex::Regex;

/// Entity names recognized in headlines. Matching is case-insensitive and
/// bounded at word edges; longer names take precedence over names they
/// contain ("OpenAI" before "AI").
pub static KNOWN_ENTITIES: &[&str] = &[
    "OpenAI",
    "ChatGPT",
    "GPT-4",
    "DeepMind",
    "Gemini",
    "Google",
    "Microsoft",
    "Apple",
    "Amazon",
    "Meta",
    "Nvidia",
    "Intel",
    "AMD",
    "Tesla",
    "SpaceX",
    "Samsung",
    "TikTok",
    "Netflix",
    "Spotify",
    "Node.js",
    "Bitcoin",
    "Ethereum",
    "NASA",
    "AI",
];

static ENTITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let mut names: Vec<&str> = KNOWN_ENTITIES.to_vec();
    // Longest first so a name contained in a longer one never wins at the
    // same position
    names.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = names
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(r"(?i)\b({})\b", alternation)).expect("entity pattern is valid")
});

/// Wrap every known entity occurrence in a `<mark>` marker, preserving the
/// original casing. Text without known entities passes through unchanged.
pub fn highlight_entities(headline: &str) -> String {
    ENTITY_PATTERN
        .replace_all(headline, "<mark>${0}</mark>")
        .into_owned()
}
