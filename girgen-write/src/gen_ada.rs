//! Rendering of [`Subprogram`]s as Ada text.

use std::fmt::Write;

use girgen_translate::{AdaParameter, Body, Naming, Subprogram};

use crate::doc::{comment, DocCleaner};
use crate::error::Error;

type Result<T, E = Error> = std::result::Result<T, E>;

pub const INDENT: &str = "   ";
const MAX_LINE: usize = 79;

/// The subprogram's profile, without the terminating `;` or ` is`.
///
/// Fits on one line if it can, otherwise each parameter goes on its own line with the colons aligned.
pub fn profile(sub: &Subprogram, indent: &str) -> String {
    let keyword = if sub.is_function() {
        "function"
    } else {
        "procedure"
    };
    let returns = sub
        .returns
        .as_ref()
        .map(|r| format!(" return {r}"))
        .unwrap_or_default();

    if sub.parameters.is_empty() {
        return format!("{indent}{keyword} {}{returns}", sub.name);
    }

    let single = format!(
        "{indent}{keyword} {} ({}){returns}",
        sub.name,
        sub.parameters
            .iter()
            .map(AdaParameter::to_string)
            .collect::<Vec<_>>()
            .join("; ")
    );
    // leave room for the terminator
    if single.len() + 3 <= MAX_LINE {
        return single;
    }

    let width = sub
        .parameters
        .iter()
        .map(|p| p.name.len())
        .max()
        .unwrap_or_default();

    let params = sub
        .parameters
        .iter()
        .map(|p| {
            let mut s = format!("{:width$} : {}{}", p.name, p.mode.keyword(), p.ty);
            if let Some(default) = &p.default {
                s = format!("{s} := {default}");
            }
            s
        })
        .collect::<Vec<_>>()
        .join(&format!(";\n{indent}    "));

    format!("{indent}{keyword} {}\n{indent}   ({params}){returns}", sub.name)
}

/// Renders declarations and bodies, cleaning up documentation on the way
pub struct AdaWriter<'a> {
    naming: &'a Naming,
    cleaner: &'a DocCleaner,
}

impl<'a> AdaWriter<'a> {
    pub fn new(naming: &'a Naming, cleaner: &'a DocCleaner) -> AdaWriter<'a> {
        AdaWriter { naming, cleaner }
    }

    /// Clean up each blank-line separated paragraph of `text`
    pub fn clean_doc(&self, text: &str) -> String {
        text.split("\n\n")
            .map(|p| self.cleaner.clean(self.naming, p))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Render the documentation paragraphs as a comment block
    pub fn doc(&self, paragraphs: &[String], indent: &str) -> String {
        let cleaned = paragraphs
            .iter()
            .map(|p| self.cleaner.clean(self.naming, p))
            .collect::<Vec<_>>();
        comment(&cleaned, indent)
    }

    /// The spec-part text for a group of related subprograms: every declaration, then the group's documentation
    pub fn declaration(&self, group: &[Subprogram], indent: &str) -> Result<String> {
        let mut result = String::new();
        for sub in group {
            writeln!(result, "{};", profile(sub, indent))?;
            if let Body::Import(symbol) = &sub.body {
                writeln!(result, "{indent}pragma Import (C, {}, \"{symbol}\");", sub.name)?;
            }
        }

        if let Some(doc) = group.iter().find(|s| !s.doc.is_empty()) {
            result.push_str(&self.doc(&doc.doc, indent));
        }

        Ok(result)
    }

    /// The body-part text, or `None` for subprograms that are imported or only declared
    pub fn body(&self, sub: &Subprogram, indent: &str) -> Result<Option<String>> {
        let Body::Code {
            nested,
            locals,
            statements,
        } = &sub.body
        else {
            return Ok(None);
        };

        let inner = format!("{indent}{INDENT}");
        let mut result = String::new();
        writeln!(result, "{} is", profile(sub, indent))?;
        for n in nested {
            result.push_str(&self.declaration(std::slice::from_ref(n), &inner)?);
        }
        for local in locals {
            writeln!(result, "{inner}{local}")?;
        }
        writeln!(result, "{indent}begin")?;
        for statement in statements {
            writeln!(result, "{inner}{statement}")?;
        }
        writeln!(result, "{indent}end {};", sub.name)?;

        Ok(Some(result))
    }
}

/// A subprogram profile shown as a comment, e.g. the handler a signal expects
pub fn commented_profile(sub: &Subprogram, indent: &str) -> String {
    format!("{};", profile(sub, ""))
        .lines()
        .map(|l| format!("{indent}--  {l}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use girgen_translate::Mode;
    use indoc::indoc;

    fn gtk_new() -> Subprogram {
        let mut sub = Subprogram::procedure("Gtk_New");
        sub.parameters = vec![
            AdaParameter::new("Self", Mode::Out, "Gtk_Frame"),
            AdaParameter::new("Label", Mode::In, "UTF8_String").with_default(Some("\"\"")),
        ];
        sub
    }

    #[test]
    fn short_profiles_stay_on_one_line() {
        assert_eq!(
            profile(&gtk_new(), INDENT),
            "   procedure Gtk_New (Self : out Gtk_Frame; Label : UTF8_String := \"\")"
        );
        assert_eq!(
            profile(&Subprogram::function("Get_Type", "Glib.GType"), INDENT),
            "   function Get_Type return Glib.GType"
        );
    }

    #[test]
    fn long_profiles_align_colons() {
        let mut sub = Subprogram::function("Get_Label_Align", "Boolean");
        sub.parameters = vec![
            AdaParameter::new("Self", Mode::Access, "Gtk_Frame_Record"),
            AdaParameter::new("Xalign", Mode::Out, "Gfloat"),
            AdaParameter::new("Yalign", Mode::Out, "Gfloat"),
        ];
        assert_eq!(
            profile(&sub, ""),
            indoc! {"
                function Get_Label_Align
                   (Self   : access Gtk_Frame_Record;
                    Xalign : out Gfloat;
                    Yalign : out Gfloat) return Boolean"}
        );
    }

    #[test]
    fn body_nests_the_import() {
        let naming = Naming::new("Gtk");
        let cleaner = DocCleaner::new().unwrap();
        let writer = AdaWriter::new(&naming, &cleaner);

        let mut internal = Subprogram::function("Internal", "System.Address");
        internal.body = Body::Import("gtk_frame_new".to_string());
        let mut sub = Subprogram::procedure("Initialize");
        sub.parameters = vec![AdaParameter::new(
            "Self",
            Mode::Access,
            "Gtk_Frame_Record'Class",
        )];
        sub.body = Body::Code {
            nested: vec![internal],
            locals: vec![],
            statements: vec!["Set_Object (Self, Internal);".to_string()],
        };

        assert_eq!(
            writer.body(&sub, "").unwrap().unwrap(),
            indoc! {r#"
                procedure Initialize (Self : access Gtk_Frame_Record'Class) is
                   function Internal return System.Address;
                   pragma Import (C, Internal, "gtk_frame_new");
                begin
                   Set_Object (Self, Internal);
                end Initialize;
            "#}
        );
        assert_eq!(writer.body(&Subprogram::procedure("Handler"), "").unwrap(), None);
    }

    #[test]
    fn group_declaration_puts_doc_last() {
        let naming = Naming::new("Gtk");
        let cleaner = DocCleaner::new().unwrap();
        let writer = AdaWriter::new(&naming, &cleaner);

        let mut allocate = gtk_new();
        allocate.doc = vec!["Creates a new #GtkFrame.".to_string()];
        let mut initialize = Subprogram::procedure("Initialize");
        initialize.parameters = vec![AdaParameter::new(
            "Self",
            Mode::Access,
            "Gtk_Frame_Record'Class",
        )];

        assert_eq!(
            writer.declaration(&[allocate, initialize], "").unwrap(),
            indoc! {r#"
                procedure Gtk_New (Self : out Gtk_Frame; Label : UTF8_String := "");
                procedure Initialize (Self : access Gtk_Frame_Record'Class);
                --  Creates a new Gtk_Frame.
            "#}
        );
    }

    #[test]
    fn handler_profile_as_comment() {
        let mut handler = Subprogram::procedure("Handler");
        handler.parameters = vec![AdaParameter::new(
            "Self",
            Mode::Access,
            "Gtk_Window_Record'Class",
        )];
        assert_eq!(
            commented_profile(&handler, INDENT),
            "   --  procedure Handler (Self : access Gtk_Window_Record'Class);\n"
        );
    }
}
