//! Placeholder parsing and positional substitution for message templates.
//!
//! # Grammar
//!
//! | Token | Meaning |
//! |-------|---------|
//! | `%%` | literal `%` |
//! | `%{name}` | named placeholder `name` |
//! | `%` + ASCII letter (`%d`, `%v`) | single-character placeholder |
//! | any other `%` | literal `%` |
//!
//! # Resolution
//!
//! Placeholders are collected left to right. The k-th occurrence of an
//! identifier `id` takes `params[id]` when present, otherwise
//! `params[id + k]`, so `"between %v and %v"` with `{v1: 1, v2: 10}`
//! renders `"between 1 and 10"` whatever the map order.
//!
//! # Failure Modes
//!
//! | Failure | Behavior |
//! |---------|----------|
//! | Placeholder with no matching param | Token left verbatim |
//! | Unterminated `%{` | Treated as literal text |
//! | Params supplied, template has no placeholders | Template returned as-is |

use crate::i18n::MessageParams;
use std::collections::HashMap;

/// A parsed piece of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied to the output unchanged.
    Literal(&'a str),
    /// A substitution point.
    Placeholder {
        /// Identifier looked up in the params (`"v"`, `"name"`).
        name: &'a str,
        /// The original token (`"%v"`, `"%{name}"`), emitted when unresolved.
        token: &'a str,
    },
}

/// Split a template into literal and placeholder segments, in order.
pub fn parse(template: &str) -> Vec<Segment<'_>> {
    let bytes = template.as_bytes();
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }

        match bytes.get(i + 1).copied() {
            Some(b'%') => {
                push_literal(&mut segments, &template[literal_start..i]);
                segments.push(Segment::Literal("%"));
                i += 2;
                literal_start = i;
            }
            Some(b'{') => {
                let name_start = i + 2;
                let closing = template[name_start..].find('}');
                match closing {
                    Some(len) if is_named_identifier(&template[name_start..name_start + len]) => {
                        let end = name_start + len + 1;
                        push_literal(&mut segments, &template[literal_start..i]);
                        segments.push(Segment::Placeholder {
                            name: &template[name_start..name_start + len],
                            token: &template[i..end],
                        });
                        i = end;
                        literal_start = i;
                    }
                    _ => i += 1,
                }
            }
            Some(c) if c.is_ascii_alphabetic() => {
                push_literal(&mut segments, &template[literal_start..i]);
                segments.push(Segment::Placeholder {
                    name: &template[i + 1..i + 2],
                    token: &template[i..i + 2],
                });
                i += 2;
                literal_start = i;
            }
            _ => i += 1,
        }
    }

    push_literal(&mut segments, &template[literal_start..]);
    segments
}

/// Placeholder identifiers in order of first appearance, repeats included.
pub fn placeholders(template: &str) -> Vec<&str> {
    parse(template)
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(name),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Substitute `params` into `template`.
///
/// Arguments are first resolved in placeholder order into a positional list,
/// then written out in a single pass. Unresolved placeholders keep their
/// original token.
pub fn render(template: &str, params: &MessageParams) -> String {
    let segments = parse(template);

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    let args: Vec<Option<&str>> = segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Placeholder { name, .. } => Some(*name),
            Segment::Literal(_) => None,
        })
        .map(|name| {
            let seen = occurrences.entry(name).or_insert(0);
            *seen += 1;
            resolve(params, name, *seen)
        })
        .collect();

    let mut output = String::with_capacity(template.len());
    let mut args = args.into_iter();
    for segment in &segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder { token, .. } => match args.next().flatten() {
                Some(value) => output.push_str(value),
                None => output.push_str(token),
            },
        }
    }
    output
}

fn resolve<'p>(params: &'p MessageParams, name: &str, occurrence: usize) -> Option<&'p str> {
    params
        .get(name)
        .or_else(|| params.get(&format!("{}{}", name, occurrence)))
}

fn push_literal<'a>(segments: &mut Vec<Segment<'a>>, text: &'a str) {
    if !text.is_empty() {
        segments.push(Segment::Literal(text));
    }
}

fn is_named_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
