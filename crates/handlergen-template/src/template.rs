//! Typed markup templates with named slots
//!
//! A template is static source text with `{{slot}}` placeholders. Values are
//! supplied through [`Slots`] in one of two forms:
//!
//! - **text** - a runtime string. It is checked for characters that would
//!   close a string literal, attribute or JSX expression and rejected if any
//!   are found.
//! - **raw** - a `&'static str` fragment compiled into the binary. It is
//!   inserted verbatim; continuation lines are indented to the column of the
//!   line holding the slot.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Characters a text slot value may not contain.
pub const UNSAFE_CHARS: &[char] = &['"', '\'', '`', '{', '}', '<', '>', '\\', '\n', '\r'];

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(String),
}

/// A parsed template.
#[derive(Debug, Clone)]
pub struct Template {
    name: &'static str,
    segments: Vec<Segment>,
}

impl Template {
    /// Parse template source.
    ///
    /// # Errors
    ///
    /// Returns `TemplateSyntax` for an unterminated `{{` or a slot name that
    /// is not `[a-z_]+`.
    pub fn parse(name: &'static str, source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after_open = &rest[open + 2..];
            let close = after_open.find("}}").ok_or_else(|| Error::TemplateSyntax {
                template: name,
                message: "unterminated '{{'".into(),
            })?;
            let slot = after_open[..close].trim();
            if slot.is_empty() || !slot.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
                return Err(Error::TemplateSyntax {
                    template: name,
                    message: format!("invalid slot name {slot:?}"),
                });
            }
            segments.push(Segment::Slot(slot.to_string()));
            rest = &after_open[close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    /// Slot names in order of first appearance.
    pub fn slot_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Slot(slot) = segment {
                if !names.contains(&slot.as_str()) {
                    names.push(slot);
                }
            }
        }
        names
    }

    /// Render with the given slot values.
    ///
    /// Extra values that the template does not use are ignored.
    pub fn render(&self, slots: &Slots<'_>) -> Result<String> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => match slots.values.get(slot.as_str()) {
                    None => {
                        return Err(Error::MissingSlot {
                            template: self.name,
                            slot: slot.clone(),
                        });
                    }
                    Some(SlotValue::Text(value)) => {
                        check_text_value(slot, value)?;
                        out.push_str(value);
                    }
                    Some(SlotValue::Raw(fragment)) => {
                        let indent = current_line_indent(&out);
                        push_reindented(&mut out, fragment, &indent);
                    }
                },
            }
        }

        Ok(out)
    }
}

#[derive(Debug, Clone, Copy)]
enum SlotValue<'a> {
    Text(&'a str),
    Raw(&'static str),
}

/// Named values for a template render.
#[derive(Debug, Clone, Default)]
pub struct Slots<'a> {
    values: HashMap<&'a str, SlotValue<'a>>,
}

impl<'a> Slots<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a runtime text value (validated at render time).
    pub fn text(mut self, slot: &'a str, value: &'a str) -> Self {
        self.values.insert(slot, SlotValue::Text(value));
        self
    }

    /// Set a compile-time fragment (inserted verbatim).
    pub fn raw(mut self, slot: &'a str, fragment: &'static str) -> Self {
        self.values.insert(slot, SlotValue::Raw(fragment));
        self
    }
}

fn check_text_value(slot: &str, value: &str) -> Result<()> {
    match value.chars().find(|c| UNSAFE_CHARS.contains(c)) {
        Some(found) => Err(Error::UnsafeValue {
            slot: slot.to_string(),
            value: value.to_string(),
            found,
        }),
        None => Ok(()),
    }
}

/// Leading whitespace of the line currently being written.
fn current_line_indent(out: &str) -> String {
    let line_start = out.rfind('\n').map_or(0, |i| i + 1);
    out[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .collect()
}

fn push_reindented(out: &mut String, fragment: &str, indent: &str) {
    for (i, line) in fragment.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
            if !line.is_empty() {
                out.push_str(indent);
            }
        }
        out.push_str(line);
    }
}
