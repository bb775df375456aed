use super::RenderError;
use serde::Serialize;

/// escapes text for use in html content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// serializes a value as a JSON literal that can sit inside a `<script>`
/// element without closing it
pub fn json_for_script<T: Serialize>(what: &str, value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value).map_err(|source| RenderError::SerializationError {
        what: what.to_string(),
        source,
    })?;
    Ok(json.replace("</", "<\\/"))
}
