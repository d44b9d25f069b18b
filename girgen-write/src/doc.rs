//! Documentation text: gtk-doc markup cleanup and comment wrapping.

use girgen_translate::Naming;
use regex::{Captures, Regex};

const MAX_LINE: usize = 79;

/// Rewrites gtk-doc markup into plain Ada-flavoured prose
pub struct DocCleaner {
    constants: Vec<(Regex, &'static str)>,
    type_ref: Regex,
    param_ref: Regex,
    whitespace: Regex,
}

impl DocCleaner {
    pub fn new() -> Result<DocCleaner, regex::Error> {
        Ok(DocCleaner {
            constants: vec![
                (Regex::new(r"%TRUE\b")?, "True"),
                (Regex::new(r"%FALSE\b")?, "False"),
                (Regex::new(r"%NULL\b")?, "null"),
            ],
            type_ref: Regex::new(r"#([A-Z][a-z]+)([A-Za-z0-9]+)")?,
            param_ref: Regex::new(r"@([a-z_][a-z0-9_]*)")?,
            whitespace: Regex::new(r"\s+")?,
        })
    }

    /// `%TRUE` -> `True`, `#GtkWidget` -> `Gtk_Widget`, `@label` -> `Label`
    pub fn clean(&self, naming: &Naming, text: &str) -> String {
        let mut result = self.whitespace.replace_all(text.trim(), " ").to_string();

        for (pattern, replacement) in &self.constants {
            result = pattern.replace_all(&result, *replacement).to_string();
        }

        result = self
            .type_ref
            .replace_all(&result, |caps: &Captures| {
                format!("{}_{}", naming.case(&caps[1]), naming.case(&caps[2]))
            })
            .to_string();

        self.param_ref
            .replace_all(&result, |caps: &Captures| naming.case(&caps[1]))
            .to_string()
    }
}

/// Break text into lines that fit in `width` columns. Words longer than the width get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Render paragraphs as an Ada comment at the given indent, with a bare `--` line between paragraphs
pub fn comment(paragraphs: &[String], indent: &str) -> String {
    let prefix = format!("{indent}--  ");
    let width = MAX_LINE.saturating_sub(prefix.len()).max(20);

    paragraphs
        .iter()
        .map(|p| {
            wrap(p, width)
                .iter()
                .map(|line| format!("{prefix}{line}\n"))
                .collect::<String>()
        })
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(&format!("{indent}--\n"))
}
