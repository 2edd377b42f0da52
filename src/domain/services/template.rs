//! `$`-placeholder templates
//!
//! Supported syntax:
//! - `$$` is an escape for a literal `$`
//! - `$name` and `${name}` are placeholders; `name` matches `[_A-Za-z][_A-Za-z0-9]*`
//!
//! [`Template::safe_substitute`] replaces placeholders whose key is known and
//! passes everything else through verbatim: unknown keys, a lone `$`, and
//! malformed braces such as `${1x}` or an unterminated `${name`.

use std::collections::BTreeMap;

/// Variables available to a template
pub type TemplateVars = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    /// `raw` is the exact source text, emitted when the key is unknown
    Placeholder { key: String, raw: String },
}

/// A parsed template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template. Parsing never fails.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('$') {
            text.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            if let Some(tail) = after.strip_prefix('$') {
                text.push('$');
                rest = tail;
                continue;
            }

            if let Some(inner) = after.strip_prefix('{') {
                let len = identifier_len(inner);
                if len > 0 && inner[len..].starts_with('}') {
                    flush(&mut segments, &mut text);
                    let key = &inner[..len];
                    segments.push(Segment::Placeholder {
                        key: key.to_string(),
                        raw: format!("${{{key}}}"),
                    });
                    rest = &inner[len + 1..];
                    continue;
                }
            } else {
                let len = identifier_len(after);
                if len > 0 {
                    flush(&mut segments, &mut text);
                    let key = &after[..len];
                    segments.push(Segment::Placeholder {
                        key: key.to_string(),
                        raw: format!("${key}"),
                    });
                    rest = &after[len..];
                    continue;
                }
            }

            // Not a placeholder: keep the `$` as literal text
            text.push('$');
            rest = after;
        }

        text.push_str(rest);
        flush(&mut segments, &mut text);
        Self { segments }
    }

    /// Substitute known keys; leave unknown placeholders untouched.
    pub fn safe_substitute(&self, vars: &TemplateVars) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder { key, raw } => match vars.get(key) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }

    /// Convenience for the single-variable case used by the deploy stage
    pub fn substitute_one(&self, key: &str, value: &str) -> String {
        let mut vars = TemplateVars::new();
        vars.insert(key.to_string(), value.to_string());
        self.safe_substitute(&vars)
    }
}

fn flush(segments: &mut Vec<Segment>, text: &mut String) {
    if !text.is_empty() {
        segments.push(Segment::Text(std::mem::take(text)));
    }
}

fn identifier_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return 0,
    }
    bytes
        .iter()
        .take_while(|b| b.is_ascii_alphanumeric() || **b == b'_')
        .count()
}
