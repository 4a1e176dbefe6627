//! A small subset of CSS selectors.
//!
//! Supports selector lists (`a, b`) of compound selectors built from a tag
//! name or `*`, `.class`, `#id`, `[attr]` and `[attr=value]`. Combinators are
//! not supported; scoping is done by the query that uses the selector.

use std::fmt;

use thiserror::Error;

use crate::dom::Dom;

/// Errors produced while parsing a selector string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,

    #[error("unexpected character '{found}' at offset {offset} in selector '{input}'")]
    UnexpectedChar {
        input: String,
        found: char,
        offset: usize,
    },

    #[error("unterminated attribute selector in '{0}'")]
    UnterminatedAttribute(String),

    #[error("expected a name after '{prefix}' in selector '{input}'")]
    MissingName { input: String, prefix: char },
}

/// One simple condition inside a compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Condition {
    Tag(String),
    Class(String),
    Id(String),
    HasAttr(String),
    AttrEquals(String, String),
}

/// A compound selector: every condition must hold for the same node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    conditions: Vec<Condition>,
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut alternatives = Vec::new();
        let mut offset = input.len() - input.trim_start().len();
        for part in split_unquoted(trimmed, ',') {
            let lead = part.len() - part.trim_start().len();
            let compound = parse_compound(input, part.trim(), offset + lead)?;
            alternatives.push(compound);
            offset += part.len() + 1;
        }

        Ok(Self {
            source: trimmed.to_string(),
            alternatives,
        })
    }

    /// The selector text as given, without surrounding whitespace.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if `node` satisfies any alternative of this selector.
    pub fn matches<D: Dom + ?Sized>(&self, dom: &D, node: D::Node) -> bool {
        self.alternatives
            .iter()
            .any(|compound| compound.matches(dom, node))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl std::str::FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Compound {
    fn matches<D: Dom + ?Sized>(&self, dom: &D, node: D::Node) -> bool {
        self.conditions.iter().all(|condition| match condition {
            Condition::Tag(tag) => dom.tag(node).eq_ignore_ascii_case(tag),
            Condition::Class(class) => dom
                .attribute(node, "class")
                .is_some_and(|list| list.split_whitespace().any(|c| c == class)),
            Condition::Id(id) => dom.attribute(node, "id").as_deref() == Some(id.as_str()),
            Condition::HasAttr(name) => dom.attribute(node, name).is_some(),
            Condition::AttrEquals(name, value) => {
                dom.attribute(node, name).as_deref() == Some(value.as_str())
            }
        })
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Index into `chars` of the first `target` at or after `from` that is not
/// inside a quoted attribute value.
fn find_unquoted(chars: &[(usize, char)], from: usize, target: char) -> Option<usize> {
    let mut quote = None;
    for (i, &(_, c)) in chars.iter().enumerate().skip(from) {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None if c == '"' || c == '\'' => quote = Some(c),
            None if c == target => return Some(i),
            None => {}
        }
    }
    None
}

/// Split on `sep`, ignoring separators inside quoted attribute values.
fn split_unquoted(input: &str, sep: char) -> Vec<&str> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut from = 0;
    while let Some(i) = find_unquoted(&chars, from, sep) {
        let pos = chars[i].0;
        parts.push(&input[start..pos]);
        start = pos + sep.len_utf8();
        from = i + 1;
    }
    parts.push(&input[start..]);
    parts
}

fn parse_compound(input: &str, part: &str, base: usize) -> Result<Compound, SelectorError> {
    if part.is_empty() {
        return Err(SelectorError::Empty);
    }

    let chars: Vec<(usize, char)> = part.char_indices().collect();
    let mut compound = Compound::default();
    let mut i = 0;

    let take_name = |start: usize| -> (String, usize) {
        let mut end = start;
        while end < chars.len() && is_name_char(chars[end].1) {
            end += 1;
        }
        let name: String = chars[start..end].iter().map(|(_, c)| c).collect();
        (name, end)
    };

    while i < chars.len() {
        let (pos, c) = chars[i];
        match c {
            '*' if i == 0 => i += 1,
            '.' | '#' => {
                let (name, end) = take_name(i + 1);
                if name.is_empty() {
                    return Err(SelectorError::MissingName {
                        input: input.to_string(),
                        prefix: c,
                    });
                }
                compound.conditions.push(if c == '.' {
                    Condition::Class(name)
                } else {
                    Condition::Id(name)
                });
                i = end;
            }
            '[' => {
                let close = find_unquoted(&chars, i + 1, ']')
                    .ok_or_else(|| SelectorError::UnterminatedAttribute(input.to_string()))?;
                let body: String = chars[i + 1..close].iter().map(|(_, c)| c).collect();
                compound.conditions.push(parse_attribute(input, &body)?);
                i = close + 1;
            }
            c if is_name_char(c) && i == 0 => {
                let (name, end) = take_name(i);
                compound.conditions.push(Condition::Tag(name));
                i = end;
            }
            found => {
                return Err(SelectorError::UnexpectedChar {
                    input: input.to_string(),
                    found,
                    offset: base + pos,
                });
            }
        }
    }

    Ok(compound)
}

fn parse_attribute(input: &str, body: &str) -> Result<Condition, SelectorError> {
    let missing = || SelectorError::MissingName {
        input: input.to_string(),
        prefix: '[',
    };

    match body.split_once('=') {
        None => {
            let name = body.trim();
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(missing());
            }
            Ok(Condition::HasAttr(name.to_string()))
        }
        Some((name, value)) => {
            let name = name.trim();
            if name.is_empty() || !name.chars().all(is_name_char) {
                return Err(missing());
            }
            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            Ok(Condition::AttrEquals(name.to_string(), value.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_class_selector() {
        let sel = Selector::parse(".accordion__panel").unwrap();
        assert_eq!(
            sel.alternatives,
            vec![Compound {
                conditions: vec![Condition::Class("accordion__panel".into())]
            }]
        );
        assert_eq!(sel.as_str(), ".accordion__panel");
    }

    #[test]
    fn parses_compound_and_list() {
        let sel = Selector::parse("button.toggle[data-kind='faq'], #main").unwrap();
        assert_eq!(sel.alternatives.len(), 2);
        assert_eq!(
            sel.alternatives[0].conditions,
            vec![
                Condition::Tag("button".into()),
                Condition::Class("toggle".into()),
                Condition::AttrEquals("data-kind".into(), "faq".into()),
            ]
        );
        assert_eq!(sel.alternatives[1].conditions, vec![Condition::Id("main".into())]);
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(Selector::parse("   "), Err(SelectorError::Empty));
        assert!(matches!(
            Selector::parse(".a > .b"),
            Err(SelectorError::UnexpectedChar { found: ' ', .. })
        ));
        assert!(matches!(
            Selector::parse("[data-active"),
            Err(SelectorError::UnterminatedAttribute(_))
        ));
        assert!(matches!(
            Selector::parse(".a, "),
            Err(SelectorError::Empty)
        ));
        assert!(matches!(
            Selector::parse("div."),
            Err(SelectorError::MissingName { prefix: '.', .. })
        ));
        assert!(matches!(
            Selector::parse("[data-x=\"a]"),
            Err(SelectorError::UnterminatedAttribute(_))
        ));
    }

    #[test]
    fn quoted_values_may_contain_brackets_and_commas() {
        let sel = Selector::parse(r#"[data-x="a]b"]"#).unwrap();
        assert_eq!(
            sel.alternatives[0].conditions,
            vec![Condition::AttrEquals("data-x".into(), "a]b".into())]
        );

        let sel = Selector::parse("[data-x='a,b'], .c").unwrap();
        assert_eq!(sel.alternatives.len(), 2);
        assert_eq!(
            sel.alternatives[0].conditions,
            vec![Condition::AttrEquals("data-x".into(), "a,b".into())]
        );
        assert_eq!(sel.alternatives[1].conditions, vec![Condition::Class("c".into())]);
    }
}
