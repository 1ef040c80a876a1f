//! Minimal HTML writer
//!
//! Text and attribute values are always escaped; only `raw` bypasses it.

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Attribute list; a `None` value renders as a bare boolean attribute
pub type Attrs<'a> = &'a [(&'a str, Option<&'a str>)];

#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
    open: Vec<&'static str>,
}

impl HtmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_tag(&mut self, tag: &str, attrs: Attrs<'_>) {
        self.out.push('<');
        self.out.push_str(tag);
        for (name, value) in attrs {
            self.out.push(' ');
            self.out.push_str(name);
            if let Some(value) = value {
                self.out.push_str("=\"");
                self.out.push_str(&escape_html(value));
                self.out.push('"');
            }
        }
        self.out.push('>');
    }

    pub fn open(&mut self, tag: &'static str, attrs: Attrs<'_>) -> &mut Self {
        self.push_tag(tag, attrs);
        self.open.push(tag);
        self
    }

    /// Close the innermost open element
    pub fn close(&mut self) -> &mut Self {
        if let Some(tag) = self.open.pop() {
            self.out.push_str("</");
            self.out.push_str(tag);
            self.out.push('>');
        }
        self
    }

    /// Element with no children and no end tag (`img`, `br`, `meta`, `link`)
    pub fn void(&mut self, tag: &str, attrs: Attrs<'_>) -> &mut Self {
        self.push_tag(tag, attrs);
        self
    }

    /// `<tag attrs>text</tag>`
    pub fn element(&mut self, tag: &'static str, attrs: Attrs<'_>, text: &str) -> &mut Self {
        self.open(tag, attrs);
        self.text(text);
        self.close()
    }

    pub fn text(&mut self, text: &str) -> &mut Self {
        self.out.push_str(&escape_html(text));
        self
    }

    pub fn raw(&mut self, html: &str) -> &mut Self {
        self.out.push_str(html);
        self
    }

    /// Close everything still open and return the markup
    pub fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        self.out
    }
}

/// Join class names, skipping empty ones
pub fn classes(names: &[&str]) -> String {
    names
        .iter()
        .copied()
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
