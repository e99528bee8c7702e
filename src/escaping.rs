//! Context-aware escaping for menu markup
//!
//! Three contexts appear in rendered menus: text content (titles),
//! attribute values (classes, ids, target, rel, tooltips) and urls (`href`).
//! Values are always defused, never rejected.

/// Schemes accepted in `href` values. Anything else renders as an empty url.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "irc6", "ircs", "gopher", "nntp",
    "feed", "telnet", "mms", "rtsp", "sms", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Escape a string for use as HTML text content
///
/// Escapes: `&`, `<`, `>`, `"`, `'`. Existing character references are kept.
pub fn escape_html(s: &str) -> String {
    specialchars(s)
}

/// Escape a string for use inside a double-quoted attribute value
pub fn escape_attr(s: &str) -> String {
    specialchars(s)
}

/// Escape a url for use as an `href` value
///
/// Strips characters that cannot appear in a url, removes encoded line
/// breaks, prefixes bare hosts with `http://` and blanks out urls whose
/// scheme is not in [`ALLOWED_PROTOCOLS`].
pub fn escape_url(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }

    let mut cleaned: String = url
        .replace(' ', "%20")
        .chars()
        .filter(|&c| is_url_char(c))
        .collect();

    // Repeat until stable so "%0%0dd" cannot reassemble into "%0d"
    loop {
        let before = cleaned.len();
        for seq in ["%0d", "%0a", "%0D", "%0A", "%00"] {
            cleaned = cleaned.replace(seq, "");
        }
        if cleaned.len() == before {
            break;
        }
    }
    cleaned = cleaned.replace(";//", "://");

    if cleaned.is_empty() {
        return String::new();
    }

    if !cleaned.contains(':')
        && !cleaned.starts_with(['/', '#', '?'])
        && !looks_like_php_file(&cleaned)
    {
        cleaned.insert_str(0, "http://");
    }

    if let Some(scheme) = scheme_of(&cleaned) {
        let scheme = scheme.to_ascii_lowercase();
        if !ALLOWED_PROTOCOLS.contains(&scheme.as_str()) {
            return String::new();
        }
    }

    encode_url_entities(&cleaned)
}

fn specialchars(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, ch) in s.char_indices() {
        match ch {
            '&' if starts_with_entity(&s[i..]) => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// `s` starts with `&`; check for a named, decimal or hex character reference.
fn starts_with_entity(s: &str) -> bool {
    let rest = &s[1..];
    let Some(end) = rest.find(';') else {
        return false;
    };
    let name = &rest[..end];

    if let Some(num) = name.strip_prefix('#') {
        match num.strip_prefix(['x', 'X']) {
            Some(hex) => {
                !hex.is_empty() && hex.len() <= 6 && hex.chars().all(|c| c.is_ascii_hexdigit())
            }
            None => !num.is_empty() && num.len() <= 7 && num.chars().all(|c| c.is_ascii_digit()),
        }
    } else {
        name.len() <= 32
            && name.starts_with(|c: char| c.is_ascii_alphabetic())
            && name.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || !c.is_ascii() || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
}

fn looks_like_php_file(url: &str) -> bool {
    match url.find('.') {
        Some(dot) if dot > 0 => {
            url[..dot]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
                && url[dot + 1..].to_ascii_lowercase().starts_with("php")
        }
        _ => false,
    }
}

/// Scheme of an absolute url: the text before a `:` that precedes any `/`, `?` or `#`.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let stop = url.find(['/', '?', '#']).unwrap_or(url.len());
    (colon < stop).then(|| &url[..colon])
}

fn encode_url_entities(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    let mut rest = url;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '&' if rest.starts_with("&amp;") => {
                out.push_str("&#038;");
                rest = &rest[5..];
                continue;
            }
            '&' if starts_with_entity(rest) => out.push('&'),
            '&' => out.push_str("&#038;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}
