/// Escapes the five HTML-significant characters so user-supplied text is
/// inert when the quote email is rendered by the recipient's mail client.
///
/// The ampersand is replaced first; entities introduced by the later
/// replacements would otherwise be escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
