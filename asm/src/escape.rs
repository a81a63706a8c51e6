use crate::error::Error;

/// Validates `\ddd` escapes and makes the value safe to embed as XML text.
///
/// Every segment following a backslash must start with three decimal
/// digits. The markup characters are substituted in a single pass, so an
/// already substituted `&amp;` is never rewritten again.
pub fn escape(value: &str) -> Result<String, Error> {
    for segment in value.split('\\').skip(1) {
        let bytes = segment.as_bytes();
        if bytes.len() < 3 || !bytes[..3].iter().all(u8::is_ascii_digit) {
            return Err(Error::Escape(value.to_string()));
        }
    }

    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    Ok(escaped)
}
