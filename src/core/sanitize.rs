// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Make a competition title usable as a file stem.
/// Path separators and characters Windows rejects become '-'.
pub fn sanitize_file_stem(name: &str, fallback: &str) -> String {
    let out: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '-',
            c if c.is_control() => ' ',
            c => c,
        })
        .collect();
    let out = normalize_ws(&out);
    let out = out.trim_matches('.').trim();
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

/// True for exactly four ASCII digits (a plausible birth year).
pub fn is_year(s: &str) -> bool {
    s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit())
}
