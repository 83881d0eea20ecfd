/// Replaces accented Latin letters by their ASCII transliteration,
/// e.g. `Fès` by `Fes` and `Cœur` by `Coeur`.
///
/// Other scripts pass through unchanged.
pub fn fold_diacritics(s: &str) -> String {
    let mut folded = String::with_capacity(s.len());
    for c in s.chars() {
        match deunicode::deunicode_char(c) {
            Some(ascii) if is_accented_latin_letter(c) => folded.push_str(ascii),
            _ => folded.push(c),
        }
    }
    folded
}

fn is_accented_latin_letter(c: char) -> bool {
    c.is_alphabetic() && matches!(c, '\u{00C0}'..='\u{024F}' | '\u{1E00}'..='\u{1EFF}')
}

/// Trimmed and lower-cased, used for case-insensitive comparisons of names.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Trims all entries, drops empty ones and removes
/// case-insensitive duplicates while keeping the first spelling.
pub fn prepare_name_list<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut names: Vec<String> = names
        .into_iter()
        .filter_map(|n| match n.trim() {
            n if n.is_empty() => None,
            n => Some(n.to_string()),
        })
        .filter(|n| {
            let key = normalize_name(n);
            if seen.contains(&key) {
                false
            } else {
                seen.push(key);
                true
            }
        })
        .collect();
    names.shrink_to_fit();
    names
}
