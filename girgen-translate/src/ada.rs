//! The Ada declarations the generator emits, before they are rendered to text.

use std::fmt::Display;

use crate::adatype::TypeDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    In,
    Out,
    Access,
}

impl Mode {
    /// Pointer-like values are written by the callee, everything else is passed in
    pub fn for_type(ty: &TypeDescriptor) -> Mode {
        if ty.is_pointer_like() {
            Mode::Out
        } else {
            Mode::In
        }
    }

    /// The mode keyword with its trailing space, empty for the default `in`
    pub fn keyword(&self) -> &'static str {
        match self {
            Mode::In => "",
            Mode::Out => "out ",
            Mode::Access => "access ",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaParameter {
    pub name: String,
    pub mode: Mode,
    pub ty: String,
    pub default: Option<String>,
}

impl AdaParameter {
    pub fn new(name: &str, mode: Mode, ty: &str) -> AdaParameter {
        AdaParameter {
            name: name.to_string(),
            mode,
            ty: ty.to_string(),
            default: None,
        }
    }

    pub fn with_default(mut self, default: Option<&str>) -> AdaParameter {
        self.default = default.map(str::to_string);
        self
    }
}

impl Display for AdaParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} : {}{}", self.name, self.mode.keyword(), self.ty)?;
        if let Some(default) = &self.default {
            write!(f, " := {default}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    /// Declaration only, e.g. a handler profile in a comment
    None,
    /// `pragma Import (C, Name, "symbol");`
    Import(String),
    /// A body in the package body
    Code {
        /// Subprograms declared inside the body, typically the imported `Internal`
        nested: Vec<Subprogram>,
        locals: Vec<String>,
        statements: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subprogram {
    pub name: String,
    pub parameters: Vec<AdaParameter>,
    /// `None` for a procedure
    pub returns: Option<String>,
    /// Documentation lines, without the comment marker
    pub doc: Vec<String>,
    pub body: Body,
}

impl Subprogram {
    pub fn procedure(name: &str) -> Subprogram {
        Subprogram {
            name: name.to_string(),
            parameters: Vec::new(),
            returns: None,
            doc: Vec::new(),
            body: Body::None,
        }
    }

    pub fn function(name: &str, returns: &str) -> Subprogram {
        Subprogram {
            returns: Some(returns.to_string()),
            ..Subprogram::procedure(name)
        }
    }

    pub fn is_function(&self) -> bool {
        self.returns.is_some()
    }

    pub fn has_body(&self) -> bool {
        matches!(self.body, Body::Code { .. })
    }
}
