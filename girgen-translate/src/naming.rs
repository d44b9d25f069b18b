//! Ada casing and the rules for picking a subprogram's final name.

use hashbrown::HashMap;

const ADA_RESERVED: &[&str] = &[
    "abort", "abs", "abstract", "accept", "access", "aliased", "all", "and", "array", "at", "begin",
    "body", "case", "constant", "declare", "delay", "delta", "digits", "do", "else", "elsif", "end",
    "entry", "exception", "exit", "for", "function", "generic", "goto", "if", "in", "interface",
    "is", "limited", "loop", "mod", "new", "not", "null", "of", "or", "others", "out",
    "overriding", "package", "pragma", "private", "procedure", "protected", "raise", "range",
    "record", "rem", "renames", "requeue", "return", "reverse", "select", "separate", "some",
    "subtype", "synchronized", "tagged", "task", "terminate", "then", "type", "until", "use",
    "when", "while", "with", "xor",
];

/// Converts native identifiers into Ada ones
#[derive(Debug, Clone)]
pub struct Naming {
    namespace: String,
    exceptions: HashMap<String, String>,
}

impl Naming {
    pub fn new(namespace: &str) -> Naming {
        Naming {
            namespace: namespace.to_string(),
            exceptions: HashMap::new(),
        }
    }

    pub fn with_exceptions<I, S>(mut self, exceptions: I) -> Naming
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        self.exceptions
            .extend(exceptions.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// The namespace every unqualified name belongs to, e.g. "Gtk"
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// "window-type", "window_type" and "WindowType" all become "Window_Type"
    pub fn case(&self, name: &str) -> String {
        let cased = split_words(name)
            .iter()
            .map(|w| {
                let word = capitalize(w);
                self.exceptions.get(&word).cloned().unwrap_or(word)
            })
            .collect::<Vec<_>>()
            .join("_");

        self.exceptions.get(&cased).cloned().unwrap_or(cased)
    }

    /// Like [`Naming::case`] but never returns an Ada reserved word, for use as a parameter name
    pub fn parameter(&self, name: &str) -> String {
        let cased = self.case(name);
        if is_reserved(&cased) {
            format!("The_{cased}")
        } else {
            cased
        }
    }

    /// Split a possibly qualified GIR name ("Gdk.Window" or "Widget") into namespace and local name
    pub fn qualify<'a>(&'a self, name: &'a str) -> (&'a str, &'a str) {
        match name.rsplit_once('.') {
            Some((ns, local)) => (ns, local),
            None => (&self.namespace, name),
        }
    }

    /// The Ada package a GIR type lives in, e.g. "Widget" -> "Gtk.Widget"
    pub fn package_name(&self, name: &str) -> String {
        let (ns, local) = self.qualify(name);
        format!("{}.{}", self.case(ns), self.case(local))
    }

    /// The Ada type for a GIR type, e.g. "Widget" -> "Gtk_Widget", "Gdk.Window" -> "Gdk_Window"
    pub fn type_name(&self, name: &str) -> String {
        let (ns, local) = self.qualify(name);
        format!("{}_{}", self.case(ns), self.case(local))
    }
}

/// Title-case like the native short names expect: a letter is upper case when it does not follow another letter
pub fn title(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut prev_is_alpha = false;
    for c in name.chars() {
        if prev_is_alpha {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_is_alpha = c.is_alphabetic();
    }
    result
}

/// Pick a final name: an override wins over a name derived from the document, which wins over a synthesized default
pub fn resolve_name(rename: Option<&str>, derived: Option<String>, synthesized: String) -> String {
    rename
        .map(str::to_string)
        .or(derived)
        .unwrap_or(synthesized)
}

pub fn is_reserved(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ADA_RESERVED.contains(&lower.as_str())
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if c == '-' || c == '_' || c == ' ' || c == '.' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else {
            // CamelCase boundary
            if c.is_uppercase()
                && matches!(prev, Some(p) if p.is_lowercase() || p.is_ascii_digit())
                && !current.is_empty()
            {
                words.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
