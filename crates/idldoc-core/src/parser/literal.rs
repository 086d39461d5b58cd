//! Constant values and field defaults

use crate::ast::{BasicType, FieldType, Literal};

/// Parse `text` as a value of type `ty`, returning a reason on failure
pub(crate) fn parse_literal(text: &str, ty: &FieldType) -> Result<Literal, String> {
    let text = text.trim();
    match ty {
        FieldType::Basic(basic) => parse_basic(text, *basic),
        FieldType::GenericString { max_size, .. } => {
            let value = parse_string(text)?;
            if let Some(max) = max_size {
                if value.chars().count() as u64 > *max {
                    return Err(format!("string is longer than {max} characters"));
                }
            }
            Ok(Literal::String(value))
        }
        FieldType::Array { element, size } => {
            let items = parse_list(text, element)?;
            if items.len() as u64 != *size {
                return Err(format!("expected {size} elements, found {}", items.len()));
            }
            Ok(Literal::Array(items))
        }
        FieldType::BoundedSequence { element, max_size } => {
            let items = parse_list(text, element)?;
            if items.len() as u64 > *max_size {
                return Err(format!(
                    "expected at most {max_size} elements, found {}",
                    items.len()
                ));
            }
            Ok(Literal::Array(items))
        }
        FieldType::UnboundedSequence(element) => parse_list(text, element).map(Literal::Array),
        FieldType::Named(_) => Err("message-typed members cannot have values".to_string()),
    }
}

fn parse_basic(text: &str, basic: BasicType) -> Result<Literal, String> {
    if basic == BasicType::Bool {
        return match text.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(Literal::Bool(true)),
            "false" | "0" => Ok(Literal::Bool(false)),
            _ => Err("expected true or false".to_string()),
        };
    }

    if basic == BasicType::WChar {
        return parse_string(text).map(Literal::String);
    }

    if basic.is_float() {
        return text
            .parse::<f64>()
            .map(Literal::Float)
            .map_err(|_| "expected a floating point number".to_string());
    }

    let value = parse_integer(text)?;
    let (min, max) = basic.integer_range().unwrap_or((0, i128::from(u8::MAX)));
    if value < min || value > max {
        return Err(format!("out of range [{min}, {max}]"));
    }
    Ok(Literal::Int(value))
}

fn parse_integer(text: &str) -> Result<i128, String> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        i128::from_str_radix(hex, 16)
    } else {
        digits.parse::<i128>()
    }
    .map_err(|_| "expected an integer".to_string())?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Quoted strings are unescaped; anything else is taken verbatim
fn parse_string(text: &str) -> Result<String, String> {
    let Some(quote) = text.chars().next().filter(|c| *c == '"' || *c == '\'') else {
        return Ok(text.to_string());
    };
    if text.len() < 2 || !text.ends_with(quote) {
        return Err("unterminated string".to_string());
    }

    let inner = &text[1..text.len() - 1];
    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(other) => value.push(other),
                None => value.push('\\'),
            }
        } else if c == quote {
            return Err("unescaped quote inside string".to_string());
        } else {
            value.push(c);
        }
    }
    Ok(value)
}

fn parse_list(text: &str, element: &FieldType) -> Result<Vec<Literal>, String> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "array values must be enclosed in '[' and ']'".to_string())?;
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }
    split_top_level(inner, ',')
        .into_iter()
        .map(|item| parse_literal(item, element))
        .collect()
}

/// Split on `separator` outside of quotes
pub(crate) fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (Some(_), '\\') => escaped = true,
            (Some(q), c) if c == q => quote = None,
            (None, '"' | '\'') => quote = Some(c),
            (None, c) if c == separator => {
                parts.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Remove a trailing `#` comment that is not inside quotes
pub(crate) fn strip_comment(text: &str) -> &str {
    split_top_level(text, '#').into_iter().next().unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int32() -> FieldType {
        FieldType::Basic(BasicType::Int32)
    }

    #[test]
    fn integers_respect_range() {
        assert_eq!(parse_literal("-7", &int32()), Ok(Literal::Int(-7)));
        assert_eq!(parse_literal("0x10", &int32()), Ok(Literal::Int(16)));
        assert!(parse_literal("300", &FieldType::Basic(BasicType::UInt8)).is_err());
        assert!(parse_literal("abc", &int32()).is_err());
    }

    #[test]
    fn booleans_and_floats() {
        let bool_ty = FieldType::Basic(BasicType::Bool);
        assert_eq!(parse_literal("True", &bool_ty), Ok(Literal::Bool(true)));
        assert_eq!(
            parse_literal("2.5", &FieldType::Basic(BasicType::Float64)),
            Ok(Literal::Float(2.5))
        );
    }

    #[test]
    fn strings_quoted_and_bare() {
        let ty = FieldType::string();
        assert_eq!(parse_literal("\"a # b\"", &ty), Ok(Literal::String("a # b".into())));
        assert_eq!(parse_literal("'it\\'s'", &ty), Ok(Literal::String("it's".into())));
        assert_eq!(parse_literal("bare", &ty), Ok(Literal::String("bare".into())));
        let bounded = FieldType::GenericString {
            wide: false,
            max_size: Some(2),
        };
        assert!(parse_literal("\"abc\"", &bounded).is_err());
    }

    #[test]
    fn arrays_check_their_size() {
        let ty = FieldType::Array {
            element: Box::new(int32()),
            size: 3,
        };
        assert_eq!(
            parse_literal("[1, 2, 3]", &ty),
            Ok(Literal::Array(vec![Literal::Int(1), Literal::Int(2), Literal::Int(3)]))
        );
        assert!(parse_literal("[1, 2]", &ty).is_err());
        assert!(parse_literal("1, 2, 3", &ty).is_err());
    }

    #[test]
    fn string_arrays_keep_commas_inside_quotes() {
        let ty = FieldType::UnboundedSequence(Box::new(FieldType::string()));
        assert_eq!(
            parse_literal("[\"a,b\", 'c']", &ty),
            Ok(Literal::Array(vec![
                Literal::String("a,b".into()),
                Literal::String("c".into())
            ]))
        );
    }

    #[test]
    fn comments_outside_quotes_are_stripped() {
        assert_eq!(strip_comment("42 # answer"), "42 ");
        assert_eq!(strip_comment("\"#1\" # tag"), "\"#1\" ");
        assert_eq!(strip_comment("no comment"), "no comment");
    }
}
