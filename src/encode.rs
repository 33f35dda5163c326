use crate::value::Number;

/// Encode a number as a JSON literal. Non-finite floats have no JSON
/// representation and encode as `null`.
pub fn encode_number(number: &Number) -> String {
    match number {
        Number::F64(f) if !f.is_finite() => "null".to_owned(),
        _ => number.to_string(),
    }
}

/// Append `value` to `out` as a quoted, escaped JSON string literal.
pub fn escape_str(value: &str, out: &mut String) {
    out.push('"');
    escape_fragment(value, out);
    out.push('"');
}

/// Append `value` escaped but unquoted, as a fragment of a longer string
/// literal. Independently-escaped fragments concatenate into one valid
/// literal, which is what lets scalar-source chunks be spliced between a
/// single quote pair.
pub fn escape_fragment(value: &str, out: &mut String) {
    let bytes = value.as_bytes();
    let mut start = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        let escape = ESCAPE[byte as usize];
        if escape == 0 {
            continue;
        }

        if start < i {
            out.push_str(&value[start..i]);
        }

        match escape {
            self::B_ => out.push_str("\\b"),
            self::T_ => out.push_str("\\t"),
            self::N_ => out.push_str("\\n"),
            self::F_ => out.push_str("\\f"),
            self::R_ => out.push_str("\\r"),
            self::QT => out.push_str("\\\""),
            self::BS => out.push_str("\\\\"),
            self::U => {
                static HEX_DIGITS: [u8; 16] = *b"0123456789abcdef";
                out.push_str("\\u00");
                out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
                out.push(HEX_DIGITS[(byte & 0xF) as usize] as char);
            }
            _ => unreachable!(),
        }

        start = i + 1;
    }

    if start != bytes.len() {
        out.push_str(&value[start..]);
    }
}

const B_: u8 = b'b'; // \x08
const T_: u8 = b't'; // \x09
const N_: u8 = b'n'; // \x0A
const F_: u8 = b'f'; // \x0C
const R_: u8 = b'r'; // \x0D
const QT: u8 = b'"'; // \x22
const BS: u8 = b'\\'; // \x5C
const U: u8 = b'u'; // \x00...\x1F except the ones above

// Lookup table of escape sequences. A value of b'x' at index i means that byte
// i is escaped as "\x" in JSON. A value of 0 means that byte i is not escaped.
#[rustfmt::skip]
static ESCAPE: [u8; 256] = [
    //  1   2   3   4   5   6   7   8   9   A   B   C   D   E   F
    U,  U,  U,  U,  U,  U,  U,  U, B_, T_, N_,  U, F_, R_,  U,  U, // 0
    U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U,  U, // 1
    0,  0, QT,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 2
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 3
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 4
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, BS,  0,  0,  0, // 5
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 6
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 7
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 8
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // 9
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // A
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // B
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // C
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // D
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // E
    0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0,  0, // F
];

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(value: &str) -> String {
        let mut out = String::new();
        escape_str(value, &mut out);
        out
    }

    #[test]
    fn plain_strings_pass_through_quoted() {
        assert_eq!(escaped("hello"), "\"hello\"");
        assert_eq!(escaped(""), "\"\"");
    }

    #[test]
    fn special_characters_are_escaped() {
        assert_eq!(escaped("a\"b"), "\"a\\\"b\"");
        assert_eq!(escaped("a\\b"), "\"a\\\\b\"");
        assert_eq!(escaped("a\nb\tc"), "\"a\\nb\\tc\"");
        assert_eq!(escaped("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn multibyte_utf8_passes_through() {
        assert_eq!(escaped("héllo✓"), "\"héllo✓\"");
    }

    #[test]
    fn fragments_concatenate_like_one_literal() {
        let mut split = String::new();
        escape_fragment("ab\"", &mut split);
        escape_fragment("\ncd", &mut split);

        let mut whole = String::new();
        escape_fragment("ab\"\ncd", &mut whole);

        assert_eq!(split, whole);
    }

    #[test]
    fn numbers_use_shortest_plain_form() {
        assert_eq!(encode_number(&Number::U64(7)), "7");
        assert_eq!(encode_number(&Number::I64(-3)), "-3");
        assert_eq!(encode_number(&Number::F64(1.5)), "1.5");
        assert_eq!(encode_number(&Number::F64(2.0)), "2");
    }

    #[test]
    fn non_finite_floats_encode_as_null() {
        assert_eq!(encode_number(&Number::F64(f64::NAN)), "null");
        assert_eq!(encode_number(&Number::F64(f64::INFINITY)), "null");
        assert_eq!(encode_number(&Number::F64(f64::NEG_INFINITY)), "null");
    }
}
