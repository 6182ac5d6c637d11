//! Message template rendering.
//!
//! Templates use `{field}` placeholders resolved against a snapshot of the
//! event's attributes. `{{` and `}}` produce literal braces.

use std::collections::BTreeMap;

use super::error::FormatError;

pub type Attributes = BTreeMap<&'static str, String>;

/// Render `template`, looking every placeholder up in `attributes`.
///
/// # Examples
/// ```
/// use paradox_core::event::format::{Attributes, render};
///
/// let mut attributes = Attributes::new();
/// attributes.insert("label", "Front door".to_string());
/// assert_eq!(render("Zone {label} open", &attributes).unwrap(), "Zone Front door open");
/// assert_eq!(render("{{literal}}", &attributes).unwrap(), "{literal}");
/// ```
///
/// # Errors
/// `MissingAttribute` for an unknown placeholder, `Malformed` for unbalanced
/// braces or an empty placeholder.
pub fn render(template: &str, attributes: &Attributes) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((position, ch)) = chars.next() {
        match ch {
            '{' => {
                if chars.next_if(|(_, c)| *c == '{').is_some() {
                    out.push('{');
                    continue;
                }
                let mut field = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    match c {
                        '}' => {
                            closed = true;
                            break;
                        }
                        '{' => {
                            return Err(FormatError::Malformed {
                                position,
                                reason: "nested '{' in placeholder",
                            });
                        }
                        _ => field.push(c),
                    }
                }
                if !closed {
                    return Err(FormatError::Malformed {
                        position,
                        reason: "unterminated placeholder",
                    });
                }
                if field.is_empty() {
                    return Err(FormatError::Malformed {
                        position,
                        reason: "empty placeholder",
                    });
                }
                let value = attributes
                    .get(field.as_str())
                    .ok_or(FormatError::MissingAttribute { field })?;
                out.push_str(value);
            }
            '}' => {
                if chars.next_if(|(_, c)| *c == '}').is_none() {
                    return Err(FormatError::Malformed {
                        position,
                        reason: "single '}' outside a placeholder",
                    });
                }
                out.push('}');
            }
            _ => out.push(ch),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::{Attributes, render};
    use crate::event::error::FormatError;

    fn attributes() -> Attributes {
        let mut attributes = Attributes::new();
        attributes.insert("label", "Kitchen".to_string());
        attributes.insert("partition", "2".to_string());
        attributes.insert("name", "-".to_string());
        attributes
    }

    #[test]
    fn renders_multiple_placeholders() {
        let rendered = render("{label} in partition {partition} ({name})", &attributes()).unwrap();
        assert_eq!(rendered, "Kitchen in partition 2 (-)");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render("System trouble", &attributes()).unwrap(), "System trouble");
        assert_eq!(render("", &attributes()).unwrap(), "");
    }

    #[test]
    fn missing_attribute_is_reported() {
        let err = render("Zone {zone}", &attributes()).unwrap_err();
        assert_eq!(
            err,
            FormatError::MissingAttribute {
                field: "zone".to_string()
            }
        );
    }

    #[test]
    fn escaped_braces() {
        assert_eq!(render("{{{label}}}", &attributes()).unwrap(), "{Kitchen}");
    }

    #[test]
    fn unterminated_placeholder() {
        let err = render("Zone {label", &attributes()).unwrap_err();
        assert_eq!(
            err,
            FormatError::Malformed {
                position: 5,
                reason: "unterminated placeholder"
            }
        );
    }

    #[test]
    fn stray_closing_brace() {
        let err = render("Zone }", &attributes()).unwrap_err();
        assert!(matches!(err, FormatError::Malformed { position: 5, .. }));
    }

    #[test]
    fn empty_placeholder() {
        let err = render("Zone {}", &attributes()).unwrap_err();
        assert!(matches!(err, FormatError::Malformed { reason: "empty placeholder", .. }));
    }
}
