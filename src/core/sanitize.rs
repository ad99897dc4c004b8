// src/core/sanitize.rs

/// Scraped value to a field: trimmed, missing becomes empty.
pub fn field(v: Option<String>) -> String {
    match v {
        Some(s) => {
            let t = s.trim();
            if t.len() == s.len() { s } else { s!(t) }
        }
        None => s!(),
    }
}

/// Filesystem-safe stem: ASCII alphanumerics, '-' and '_' kept, whitespace runs
/// become one '_', everything else dropped.
pub fn file_stem(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' {
            out.push(ch);
            last_us = false;
        } else if ch.is_whitespace() || ch == '_' {
            if !last_us {
                out.push('_');
                last_us = true;
            }
        }
    }
    let out = out.trim_matches('_');
    if out.is_empty() { s!(fallback) } else { s!(out) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_trims_and_defaults() {
        assert_eq!(field(Some(s!("  Albert Einstein\n"))), "Albert Einstein");
        assert_eq!(field(Some(s!("as-is"))), "as-is");
        assert_eq!(field(None), "");
    }

    #[test]
    fn stems_keep_tag_slugs() {
        assert_eq!(file_stem("deep-thoughts", "tag"), "deep-thoughts");
        assert_eq!(file_stem("be  yourself", "tag"), "be_yourself");
        assert_eq!(file_stem("../etc", "tag"), "etc");
        assert_eq!(file_stem("///", "tag"), "tag");
    }
}
