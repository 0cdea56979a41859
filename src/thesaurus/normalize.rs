//! Name normalization for the fuzzy matching strategy.
//!
//! A raw name like `"Иванов И.В."` is reduced to the form the matcher
//! compares on: lowercase, letters/periods only, collapsed to
//! `"surname initials"`, Cyrillic transliterated to Latin. The end result
//! for the example is `"ivanov i.v"` → surname `"ivanov"`, initials `"i.v"`.

/// Full reduction: lowercase/filter, collapse, transliterate.
pub fn ready_form(raw: &str) -> String {
    transliterate(&collapse(&clean(raw)))
}

/// Lowercase and strip everything outside Cyrillic/Latin letters, periods
/// and spaces.
fn clean(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'а'..='я' | 'ё' | 'a'..='z' | ' ' | '.'))
        .collect()
}

/// Collapse `"surname i. v."` into `"surname i.v"`: strip trailing periods,
/// keep the first token as surname, concatenate the rest with no separator.
fn collapse(name: &str) -> String {
    let name = name.trim_end_matches('.');
    let mut tokens = name.split_whitespace();
    let Some(surname) = tokens.next() else {
        return String::new();
    };
    let initials: String = tokens.collect();
    format!("{surname} {initials}")
}

/// Reversed Russian transliteration, letter by letter. Latin letters and
/// punctuation pass through; hard/soft signs are dropped.
fn transliterate(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'а' => out.push('a'),
            'б' => out.push('b'),
            'в' => out.push('v'),
            'г' => out.push('g'),
            'д' => out.push('d'),
            'е' | 'ё' | 'э' => out.push('e'),
            'ж' => out.push_str("zh"),
            'з' => out.push('z'),
            'и' => out.push('i'),
            'й' => out.push('j'),
            'к' => out.push('k'),
            'л' => out.push('l'),
            'м' => out.push('m'),
            'н' => out.push('n'),
            'о' => out.push('o'),
            'п' => out.push('p'),
            'р' => out.push('r'),
            'с' => out.push('s'),
            'т' => out.push('t'),
            'у' => out.push('u'),
            'ф' => out.push('f'),
            'х' => out.push('h'),
            'ц' => out.push_str("ts"),
            'ч' => out.push_str("ch"),
            'ш' => out.push_str("sh"),
            'щ' => out.push_str("sch"),
            'ъ' | 'ь' => {}
            'ы' => out.push('y'),
            'ю' => out.push_str("ju"),
            'я' => out.push_str("ja"),
            other => out.push(other),
        }
    }
    out
}

/// Split a ready form into (surname, initials). Either side may be empty.
pub fn surname_initials(ready: &str) -> (String, String) {
    let mut tokens = ready.split_whitespace();
    let surname = tokens.next().unwrap_or("").to_string();
    let initials = tokens.next().unwrap_or("").to_string();
    (surname, initials)
}
