//! A small namespace-aware element tree built on top of quick-xml's namespace resolving reader.
//!
//! Both the introspection document and the override database are read into this tree first. Names are kept
//! expanded (namespace URI + local name) so lookups do not depend on which prefixes a document chose.

use std::fmt::{Display, Write};

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{LocalName, ResolveResult};
use quick_xml::NsReader;
use ustr::{ustr, Ustr};

use crate::error::ParseError;
type Result<T, E = ParseError> = std::result::Result<T, E>;

const XML_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// An expanded name to look elements and attributes up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QName {
    pub ns: Option<&'static str>,
    pub local: &'static str,
}

impl QName {
    pub const fn new(ns: &'static str, local: &'static str) -> QName {
        QName {
            ns: Some(ns),
            local,
        }
    }

    /// A name with no namespace, which is what unprefixed attributes get
    pub const fn local(local: &'static str) -> QName {
        QName { ns: None, local }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Name {
    ns: Option<Ustr>,
    local: Ustr,
}

impl Name {
    fn matches(&self, q: QName) -> bool {
        self.local == q.local && self.ns.as_ref().map(|n| n.as_str()) == q.ns
    }
}

impl Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.ns {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    name: Name,
    attributes: Vec<(Name, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn is(&self, q: QName) -> bool {
        self.name.matches(q)
    }

    pub fn local_name(&self) -> &str {
        self.name.local.as_str()
    }

    pub fn get(&self, q: QName) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.matches(q))
            .map(|(_, v)| v.as_str())
    }

    pub fn get_ustr(&self, q: QName) -> Option<Ustr> {
        self.get(q).map(ustr)
    }

    /// First direct child with the given name
    pub fn find(&self, q: QName) -> Option<&Element> {
        self.children.iter().find(|c| c.is(q))
    }

    /// All direct children with the given name, in document order
    pub fn find_all(&self, q: QName) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(move |c| c.is(q))
    }

    /// Trimmed text of the first child with the given name, if it has any
    pub fn find_text(&self, q: QName) -> Option<String> {
        self.find(q)
            .map(|c| c.text().to_string())
            .filter(|t| !t.is_empty())
    }

    pub fn text(&self) -> &str {
        self.text.trim()
    }

    /// Render this element back to (approximate) XML, for diagnostics
    pub fn to_xml(&self) -> String {
        let mut out = String::new();
        let _ = self.write_xml(&mut out, 0);
        out
    }

    fn write_xml(&self, out: &mut String, depth: usize) -> std::fmt::Result {
        write!(out, "{:width$}<{}", "", self.name, width = depth * 2)?;
        for (name, value) in &self.attributes {
            write!(out, " {name}=\"{value}\"")?;
        }

        if self.children.is_empty() && self.text().is_empty() {
            return writeln!(out, "/>");
        }

        write!(out, ">{}", self.text())?;
        if !self.children.is_empty() {
            writeln!(out)?;
            for child in &self.children {
                child.write_xml(out, depth + 1)?;
            }
            write!(out, "{:width$}", "", width = depth * 2)?;
        }
        writeln!(out, "</{}>", self.name)
    }
}

/// Expand a resolved namespace. Prefixes without a declaration in scope are an error.
fn namespace(resolved: ResolveResult, raw: &[u8]) -> Result<Option<Ustr>> {
    match resolved {
        ResolveResult::Bound(ns) => Ok(Some(ustr(&String::from_utf8_lossy(ns.as_ref())))),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) if prefix == b"xml" => Ok(Some(ustr(XML_NS))),
        ResolveResult::Unknown(_) => Err(ParseError::UnboundPrefix(
            String::from_utf8_lossy(raw).to_string(),
        )),
    }
}

fn name(ns: Option<Ustr>, local: LocalName) -> Name {
    Name {
        ns,
        local: ustr(&String::from_utf8_lossy(local.as_ref())),
    }
}

/// Turn a start tag whose namespace has been resolved into an element. Namespace declarations are not kept as
/// attributes.
fn open_element(
    reader: &NsReader<&[u8]>,
    ns: Option<Ustr>,
    start: &BytesStart,
    position: u64,
) -> Result<Element> {
    let element_name = name(ns, start.local_name());

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|source| ParseError::Attribute { position, source })?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        // unprefixed attributes are in no namespace, whatever the default namespace is
        let (ns, local) = reader.resolve_attribute(attr.key);
        let value = attr
            .unescape_value()
            .map_err(|source| ParseError::Xml { position, source })?
            .to_string();
        attributes.push((name(namespace(ns, attr.key.as_ref())?, local), value));
    }

    Ok(Element {
        name: element_name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

/// Parse a complete document and return its root element
pub fn parse_str(source: &str) -> Result<Element> {
    let mut reader = NsReader::from_str(source);
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        let position = reader.buffer_position() as u64;
        let (resolved, event) = reader
            .read_resolved_event()
            .map_err(|source| ParseError::Xml { position, source })?;
        // expanded here so the reader is free again to resolve attributes
        let ns = match &event {
            Event::Start(e) | Event::Empty(e) => namespace(resolved, e.name().as_ref())?,
            _ => None,
        };

        match event {
            Event::Start(ref e) => {
                let element = open_element(&reader, ns, e, position)?;
                stack.push(element);
            }
            Event::Empty(ref e) => {
                let element = open_element(&reader, ns, e, position)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(ref e) => {
                let element = stack.pop().ok_or_else(|| {
                    ParseError::UnexpectedEnd(String::from_utf8_lossy(e.name().as_ref()).to_string())
                })?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    let text = e
                        .unescape()
                        .map_err(|source| ParseError::Xml { position, source })?;
                    current.text.push_str(&text);
                }
            }
            Event::CData(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(ParseError::Unclosed(open.name.to_string()));
    }

    root.ok_or(ParseError::NoRoot)
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        Ok(())
    } else if root.is_none() {
        *root = Some(element);
        Ok(())
    } else {
        // a second top-level element
        Err(ParseError::UnexpectedEnd(element.name.to_string()))
    }
}
