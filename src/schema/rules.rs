//! Declarative field rules and the walker that checks a YAML value against them

use serde_yaml::Value;

use super::error::{FieldError, FieldErrorKind};
use crate::helpers::date::parse_date;

/// Shape a value must have
#[derive(Debug, Clone)]
pub enum Rule {
    /// Any string, empty allowed
    Str,
    /// A string with at least one non-whitespace character
    NonEmpty,
    Bool,
    /// Any number, integer or float
    Number,
    /// A string that parses to a calendar date
    Date,
    /// A string from a closed set
    OneOf(&'static [&'static str]),
    List(Box<Rule>),
    Object(Vec<Field>),
    /// Any mapping; contents are not inspected
    AnyObject,
}

/// One named field of an object rule
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub rule: Rule,
    pub required: bool,
}

/// Required field
pub fn req(name: &'static str, rule: Rule) -> Field {
    Field {
        name,
        rule,
        required: true,
    }
}

/// Optional field; `null` counts as absent
pub fn opt(name: &'static str, rule: Rule) -> Field {
    Field {
        name,
        rule,
        required: false,
    }
}

pub fn object(fields: Vec<Field>) -> Rule {
    Rule::Object(fields)
}

pub fn list(rule: Rule) -> Rule {
    Rule::List(Box::new(rule))
}

/// `base` with `more` fields appended
pub fn extend(base: Rule, more: Vec<Field>) -> Rule {
    match base {
        Rule::Object(mut fields) => {
            fields.extend(more);
            Rule::Object(fields)
        }
        other => other,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}

fn child(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

impl Rule {
    /// Check `value`, pushing one error per offending field
    pub fn check(&self, value: &Value, path: &str, errors: &mut Vec<FieldError>) {
        let wrong_type = |expected: &'static str| {
            FieldError::new(
                path,
                FieldErrorKind::WrongType {
                    expected,
                    found: type_name(value),
                },
            )
        };

        match self {
            Rule::Str => {
                if !value.is_string() {
                    errors.push(wrong_type("string"));
                }
            }
            Rule::NonEmpty => match value.as_str() {
                Some(s) if s.trim().is_empty() => {
                    errors.push(FieldError::new(path, FieldErrorKind::Empty))
                }
                Some(_) => {}
                None => errors.push(wrong_type("string")),
            },
            Rule::Bool => {
                if !value.is_bool() {
                    errors.push(wrong_type("boolean"));
                }
            }
            Rule::Number => {
                if !value.is_number() {
                    errors.push(wrong_type("number"));
                }
            }
            Rule::Date => match value.as_str() {
                Some(s) if parse_date(s).is_some() => {}
                Some(s) => errors.push(FieldError::new(
                    path,
                    FieldErrorKind::InvalidDate(s.to_string()),
                )),
                None => errors.push(wrong_type("date string")),
            },
            Rule::OneOf(allowed) => match value.as_str() {
                Some(s) if allowed.iter().any(|a| *a == s) => {}
                Some(s) => errors.push(FieldError::new(
                    path,
                    FieldErrorKind::NotInSet {
                        value: s.to_string(),
                        allowed: *allowed,
                    },
                )),
                None => errors.push(wrong_type("string")),
            },
            Rule::List(item) => match value.as_sequence() {
                Some(items) => {
                    for (i, v) in items.iter().enumerate() {
                        item.check(v, &format!("{}[{}]", path, i), errors);
                    }
                }
                None => errors.push(wrong_type("list")),
            },
            Rule::Object(fields) => match value.as_mapping() {
                Some(map) => {
                    for field in fields {
                        let field_path = child(path, field.name);
                        match map.get(field.name) {
                            None | Some(Value::Null) if field.required => errors
                                .push(FieldError::new(field_path, FieldErrorKind::Missing)),
                            None | Some(Value::Null) => {}
                            Some(v) => field.rule.check(v, &field_path, errors),
                        }
                    }
                }
                None => errors.push(wrong_type("object")),
            },
            Rule::AnyObject => {
                if !value.is_mapping() {
                    errors.push(wrong_type("object"));
                }
            }
        }
    }

    /// All errors for `value`, empty when it conforms
    pub fn errors(&self, value: &Value) -> Vec<FieldError> {
        let mut errors = Vec::new();
        self.check(value, "", &mut errors);
        errors
    }
}
