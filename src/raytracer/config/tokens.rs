use crate::error::{RaycastError, Result};
use crate::raytracer::config::cursor::Cursor;
use glam::DVec3;

pub const MAX_STRING_LEN: usize = 128;

/// Reads a double-quoted string. Escapes are rejected, not interpreted.
pub fn read_string(cursor: &mut Cursor) -> Result<String> {
    cursor.expect('"')?;
    let mut text = String::new();
    loop {
        let line = cursor.line();
        let c = cursor.advance()?;
        if c == '"' {
            return Ok(text);
        }
        if text.len() >= MAX_STRING_LEN {
            return Err(RaycastError::StringTooLong {
                max: MAX_STRING_LEN,
                line,
            });
        }
        if c == '\\' {
            return Err(RaycastError::UnsupportedEscape { line });
        }
        if !(' '..='~').contains(&c) {
            return Err(RaycastError::NonAsciiCharacter { found: c, line });
        }
        text.push(c);
    }
}

/// Reads a floating-point literal: sign, digits, fraction and exponent.
pub fn read_number(cursor: &mut Cursor) -> Result<f64> {
    let line = cursor.line();
    let mut literal = String::new();
    while let Some(c) = cursor.peek() {
        if !is_number_char(c) {
            break;
        }
        literal.push(cursor.advance()?);
    }
    match literal.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RaycastError::MalformedNumber { literal, line }),
    }
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}

/// Reads `[x, y, z]`, allowing whitespace around every delimiter.
pub fn read_vector3(cursor: &mut Cursor) -> Result<DVec3> {
    cursor.expect('[')?;
    cursor.skip_whitespace()?;
    let x = read_number(cursor)?;
    cursor.skip_whitespace()?;
    cursor.expect(',')?;
    cursor.skip_whitespace()?;
    let y = read_number(cursor)?;
    cursor.skip_whitespace()?;
    cursor.expect(',')?;
    cursor.skip_whitespace()?;
    let z = read_number(cursor)?;
    cursor.skip_whitespace()?;
    cursor.expect(']')?;
    Ok(DVec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_string() {
        let mut cursor = Cursor::new("\"sphere\" rest");
        assert_eq!(read_string(&mut cursor).unwrap(), "sphere");
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_read_string_empty() {
        let mut cursor = Cursor::new("\"\"");
        assert_eq!(read_string(&mut cursor).unwrap(), "");
    }

    #[test]
    fn test_read_string_requires_quote() {
        let mut cursor = Cursor::new("type\"");
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::UnexpectedCharacter { expected: '"', actual: 't', .. })
        ));
    }

    #[test]
    fn test_read_string_length_bound() {
        let exact = format!("\"{}\"", "a".repeat(MAX_STRING_LEN));
        let mut cursor = Cursor::new(&exact);
        assert_eq!(read_string(&mut cursor).unwrap().len(), MAX_STRING_LEN);

        let too_long = format!("\"{}\"", "a".repeat(MAX_STRING_LEN + 1));
        let mut cursor = Cursor::new(&too_long);
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::StringTooLong { max: MAX_STRING_LEN, .. })
        ));
    }

    #[test]
    fn test_read_string_rejects_escape() {
        let mut cursor = Cursor::new("\"a\\\"b\"");
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::UnsupportedEscape { line: 1 })
        ));
    }

    #[test]
    fn test_read_string_rejects_non_ascii() {
        let mut cursor = Cursor::new("\"caf\u{e9}\"");
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::NonAsciiCharacter { found: '\u{e9}', .. })
        ));

        let mut cursor = Cursor::new("\"a\tb\"");
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::NonAsciiCharacter { found: '\t', .. })
        ));
    }

    #[test]
    fn test_read_string_unterminated() {
        let mut cursor = Cursor::new("\"open");
        assert!(matches!(
            read_string(&mut cursor),
            Err(RaycastError::UnexpectedEndOfInput { .. })
        ));
    }

    #[test]
    fn test_read_number_forms() {
        let cases = [
            ("5", 5.0),
            ("-2.5", -2.5),
            ("+0.25", 0.25),
            (".5", 0.5),
            ("1e3", 1000.0),
            ("-4.5E-1", -0.45),
        ];
        for (text, expected) in cases {
            let mut cursor = Cursor::new(text);
            assert_eq!(read_number(&mut cursor).unwrap(), expected, "input {text}");
        }
    }

    #[test]
    fn test_read_number_stops_at_delimiter() {
        let mut cursor = Cursor::new("12.5,");
        assert_eq!(read_number(&mut cursor).unwrap(), 12.5);
        assert_eq!(cursor.advance().unwrap(), ',');
    }

    #[test]
    fn test_read_number_malformed() {
        for text in ["abc", "-", "1.2.3", ""] {
            let mut cursor = Cursor::new(text);
            assert!(
                matches!(
                    read_number(&mut cursor),
                    Err(RaycastError::MalformedNumber { line: 1, .. })
                ),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_read_number_rejects_overflow() {
        for text in ["1e400", "-1e400"] {
            let mut cursor = Cursor::new(text);
            match read_number(&mut cursor) {
                Err(RaycastError::MalformedNumber { literal, line }) => {
                    assert_eq!(literal, text);
                    assert_eq!(line, 1);
                }
                other => panic!("input {text:?}: unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_vector3() {
        let mut cursor = Cursor::new("[ 1 ,\n -2.5,3e1 ]");
        assert_eq!(
            read_vector3(&mut cursor).unwrap(),
            DVec3::new(1.0, -2.5, 30.0)
        );
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn test_read_vector3_too_short() {
        let mut cursor = Cursor::new("[1, 2]");
        assert!(matches!(
            read_vector3(&mut cursor),
            Err(RaycastError::UnexpectedCharacter { expected: ',', actual: ']', .. })
        ));
    }

    #[test]
    fn test_read_vector3_missing_bracket() {
        let mut cursor = Cursor::new("1, 2, 3]");
        assert!(matches!(
            read_vector3(&mut cursor),
            Err(RaycastError::UnexpectedCharacter { expected: '[', .. })
        ));
    }
}
