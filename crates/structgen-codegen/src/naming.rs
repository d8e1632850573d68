//! Identifier cleanup and Go naming

use convert_case::{Case, Casing};

/// Placeholder replaced by the column name in tag templates
pub const TAG_PLACEHOLDER: &str = "%s";

/// Words Go spells fully upper-case inside identifiers
const GO_INITIALISMS: &[&str] = &[
    "ACL", "API", "ASCII", "CPU", "CSS", "DNS", "EOF", "GUID", "HTML", "HTTP", "HTTPS", "ID",
    "IP", "JSON", "LHS", "QPS", "RAM", "RHS", "RPC", "SLA", "SMTP", "SQL", "SSH", "TCP", "TLS",
    "TTL", "UDP", "UI", "UID", "UUID", "URI", "URL", "UTF8", "VM", "XML", "XMPP", "XSRF", "XSS",
];

/// Strips one layer of identifier or string quoting: backticks, double or
/// single quotes, or MS-style brackets. Doubled quote characters inside
/// are collapsed to one.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let (Some(first), Some(last)) = (chars.next(), chars.next_back()) else {
        return trimmed.to_string();
    };

    let closing = match first {
        '`' | '"' | '\'' => first,
        '[' => ']',
        _ => return trimmed.to_string(),
    };
    if last != closing {
        return trimmed.to_string();
    }

    let inner = &trimmed[first.len_utf8()..trimmed.len() - last.len_utf8()];
    let unescaped = if first == '[' {
        inner.replace("]]", "]")
    } else {
        let quote = first.to_string();
        inner.replace(&quote.repeat(2), &quote)
    };
    unescaped.trim().to_string()
}

/// Converts a SQL identifier into an exported Go name.
///
/// `user_id` becomes `UserID`, `createdAt` becomes `CreatedAt`.
pub fn to_field_name(clean_name: &str) -> String {
    clean_name
        .to_case(Case::Snake)
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(go_word)
        .collect()
}

fn go_word(word: &str) -> String {
    let upper = word.to_uppercase();
    if GO_INITIALISMS.contains(&upper.as_str()) {
        return upper;
    }

    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders a field tag by substituting the column name for every `%s` in
/// the template. The template is not otherwise interpreted.
pub fn to_tag(clean_name: &str, template: &str) -> String {
    template.replace(TAG_PLACEHOLDER, clean_name)
}

/// Renders a trailing line comment, or an empty string when there is no
/// comment. Line breaks inside the comment become single spaces.
pub fn render_comment(comment: Option<&str>) -> String {
    let Some(comment) = comment else {
        return String::new();
    };

    let text = sanitize(comment)
        .replace("\r\n", " ")
        .replace(['\n', '\r'], " ");
    format!(" // {}", text)
}
