//! Statute code normalization.
//!
//! Raw codes arrive in each jurisdiction's native habits: California and
//! Texas practitioners append a code-class token ("23152 VC"), Massachusetts
//! sources prefix the chapter with "c." or "ch.", and everyone pads
//! whitespace. Normalization runs before citation formatting and URL
//! building so those layers see one clean shape per jurisdiction.

/// Statute class extracted from a code-class token. Only CA, NY, and TX
/// raw codes carry one; everywhere else the class is implied by the
/// jurisdiction's single criminal code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeClass {
    Penal,
    Vehicle,
    Health,
}

/// A cleaned statute code plus any extracted class token.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedCode {
    pub code: String,
    pub class: Option<CodeClass>,
}

impl NormalizedCode {
    fn plain(code: &str) -> Self {
        Self {
            code: code.to_string(),
            class: None,
        }
    }
}

/// Normalize a raw statute code for one jurisdiction. Expects the canonical
/// jurisdiction key ("CA", "US"); unknown keys get whitespace trimming only.
pub fn normalize(jurisdiction: &str, code: &str) -> NormalizedCode {
    let trimmed = code.trim();
    match jurisdiction {
        "CA" => split_class_token(trimmed, &[("PC", CodeClass::Penal), ("VC", CodeClass::Vehicle), ("HS", CodeClass::Health), ("HSC", CodeClass::Health)]),
        "NY" => split_class_token(trimmed, &[("PL", CodeClass::Penal), ("VTL", CodeClass::Vehicle), ("PHL", CodeClass::Health)]),
        "TX" => split_class_token(trimmed, &[("PE", CodeClass::Penal), ("TN", CodeClass::Vehicle), ("HS", CodeClass::Health)]),
        "MA" => NormalizedCode::plain(strip_chapter_prefix(trimmed)),
        _ => NormalizedCode::plain(trimmed),
    }
}

/// Split a class token off a code. Practitioners write the token on either
/// side ("23152 VC" and "PC 242" are both customary); it must be a separate
/// word. Codes without one keep `class: None` and the jurisdiction's
/// formatter applies its default class.
fn split_class_token(code: &str, tokens: &[(&str, CodeClass)]) -> NormalizedCode {
    if let Some((head, tail)) = code.rsplit_once(char::is_whitespace) {
        let tail_upper = tail.to_ascii_uppercase();
        for (token, class) in tokens {
            if tail_upper == *token {
                return NormalizedCode {
                    code: head.trim().to_string(),
                    class: Some(*class),
                };
            }
        }
    }
    if let Some((head, tail)) = code.split_once(char::is_whitespace) {
        let head_upper = head.to_ascii_uppercase();
        for (token, class) in tokens {
            if head_upper == *token {
                return NormalizedCode {
                    code: tail.trim().to_string(),
                    class: Some(*class),
                };
            }
        }
    }
    NormalizedCode::plain(code)
}

/// Strip a leading "c." / "ch." chapter marker from Massachusetts codes;
/// the chapter-section formatter supplies its own "ch." text.
fn strip_chapter_prefix(code: &str) -> &str {
    for prefix in ["ch.", "c."] {
        if let Some(rest) = code.strip_prefix(prefix) {
            return rest.trim_start();
        }
    }
    code
}
