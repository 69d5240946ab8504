//! Escaping-aware HTML text builder.
//!
//! Only `&'static str` fragments are appended verbatim; every runtime value
//! goes through [`escape_into`] so it lands in the document as inert text.

/// Accumulates an HTML document from trusted fragments and escaped values.
#[derive(Debug, Default)]
pub struct MarkupBuilder {
    buf: String,
}

impl MarkupBuilder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
        }
    }

    /// Appends a fixed markup fragment.
    pub fn raw(&mut self, markup: &'static str) -> &mut Self {
        self.buf.push_str(markup);
        self
    }

    /// Appends a value as escaped text (also safe inside quoted attributes).
    pub fn text(&mut self, value: &str) -> &mut Self {
        escape_into(&mut self.buf, value);
        self
    }

    /// Appends `open`, the escaped value, then `close`.
    pub fn element(&mut self, open: &'static str, value: &str, close: &'static str) -> &mut Self {
        self.raw(open).text(value).raw(close)
    }

    /// Appends script source so it cannot terminate its enclosing element.
    pub fn script(&mut self, source: &str) -> &mut Self {
        neutralize_script_into(&mut self.buf, source);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Returns `input` with HTML-significant characters replaced by entities.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    escape_into(&mut out, input);
    out
}

fn escape_into(out: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Inserts a backslash after `<` in every `</script` (any case) and `<!--`.
/// Both only occur inside JS string or regex literals, where `<\/` and
/// `<\!` read back as the original characters.
fn neutralize_script_into(out: &mut String, source: &str) {
    let bytes = source.as_bytes();
    let mut copied = 0;
    for (index, byte) in bytes.iter().enumerate() {
        if *byte != b'<' {
            continue;
        }
        let rest = &bytes[index + 1..];
        let closes_script = rest.len() >= 7 && rest[..7].eq_ignore_ascii_case(b"/script");
        if closes_script || rest.starts_with(b"!--") {
            out.push_str(&source[copied..=index]);
            out.push('\\');
            copied = index + 1;
        }
    }
    out.push_str(&source[copied..]);
}
