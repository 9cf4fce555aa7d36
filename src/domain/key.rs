// ============================================================================
// Key Identifiers
// Normalized calculator keys and their mapping from raw input identifiers
// ============================================================================

use crate::numeric::Operator;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single normalized calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Key {
    /// Digit 0-9. Build it with [`Key::digit`] to keep it in range; the
    /// engine ignores anything above 9.
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Evaluate (`=`)
    Equals,
    /// Full reset (`C`)
    Clear,
    /// Reset the current entry only (`CE`)
    ClearEntry,
    /// Remove the last typed character
    Backspace,
    /// Negate the current entry (`±`)
    ToggleSign,
}

/// Error returned when a button identifier names no calculator key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKey(pub String);

impl fmt::Display for UnknownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown calculator key: {:?}", self.0)
    }
}

impl std::error::Error for UnknownKey {}

impl Key {
    /// Checked digit key: `None` above 9.
    pub fn digit(d: u8) -> Option<Key> {
        (d <= 9).then_some(Key::Digit(d))
    }

    /// Map a keyboard event to a calculator key.
    ///
    /// `keysym` is the symbolic key name (e.g. `"KP_Add"`, `"Return"`) and
    /// `ch` the character it produced, if any.
    pub fn from_keysym(keysym: &str, ch: Option<char>) -> Option<Key> {
        if let Some(c) = ch {
            if let Some(d) = c.to_digit(10) {
                return Key::digit(d as u8);
            }
        }

        if let Some(rest) = keysym.strip_prefix("KP_") {
            let mut chars = rest.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if let Some(d) = c.to_digit(10) {
                    return Key::digit(d as u8);
                }
            }
        }

        if let Some(c) = ch {
            if matches!(c, '+' | '-' | '*' | '/') {
                let mut buf = [0u8; 4];
                return Operator::from_symbol(c.encode_utf8(&mut buf)).map(Key::Operator);
            }
        }

        match keysym {
            "KP_Add" => return Some(Key::Operator(Operator::Add)),
            "KP_Subtract" => return Some(Key::Operator(Operator::Sub)),
            "KP_Multiply" => return Some(Key::Operator(Operator::Mul)),
            "KP_Divide" => return Some(Key::Operator(Operator::Div)),
            "period" | "KP_Decimal" => return Some(Key::Decimal),
            "Return" | "KP_Enter" => return Some(Key::Equals),
            "BackSpace" => return Some(Key::Backspace),
            "Delete" => return Some(Key::ClearEntry),
            "Escape" => return Some(Key::Clear),
            _ => {},
        }

        match ch {
            Some('.') | Some(',') => Some(Key::Decimal),
            Some('=') => Some(Key::Equals),
            Some('s') | Some('S') => Some(Key::ToggleSign),
            _ => None,
        }
    }

    /// Canonical button label for this key.
    ///
    /// Every key built by [`Key::digit`], [`Key::from_keysym`] or parsing has a
    /// label that parses back to the same key. An out-of-range `Digit` does not.
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Operator(op) => op.ascii_symbol().to_string(),
            Key::Equals => "=".to_string(),
            Key::Clear => "C".to_string(),
            Key::ClearEntry => "CE".to_string(),
            Key::Backspace => "BS".to_string(),
            Key::ToggleSign => "±".to_string(),
        }
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    /// Parse a button identifier such as `"7"`, `"×"`, `"CE"` or `"±"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();

        let mut chars = id.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                if let Some(key) = Key::digit(d as u8) {
                    return Ok(key);
                }
            }
        }

        if let Some(op) = Operator::from_symbol(id) {
            return Ok(Key::Operator(op));
        }

        match id.to_ascii_uppercase().as_str() {
            "." | "," => Ok(Key::Decimal),
            "=" => Ok(Key::Equals),
            "C" => Ok(Key::Clear),
            "CE" => Ok(Key::ClearEntry),
            "BS" | "BACKSPACE" => Ok(Key::Backspace),
            "±" | "SIGN" => Ok(Key::ToggleSign),
            _ => Err(UnknownKey(s.to_string())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_button_identifiers() {
        assert_eq!("7".parse::<Key>().unwrap(), Key::Digit(7));
        assert_eq!(".".parse::<Key>().unwrap(), Key::Decimal);
        assert_eq!(",".parse::<Key>().unwrap(), Key::Decimal);
        assert_eq!("×".parse::<Key>().unwrap(), Key::Operator(Operator::Mul));
        assert_eq!("÷".parse::<Key>().unwrap(), Key::Operator(Operator::Div));
        assert_eq!("-".parse::<Key>().unwrap(), Key::Operator(Operator::Sub));
        assert_eq!("=".parse::<Key>().unwrap(), Key::Equals);
        assert_eq!("C".parse::<Key>().unwrap(), Key::Clear);
        assert_eq!("CE".parse::<Key>().unwrap(), Key::ClearEntry);
        assert_eq!("BS".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("backspace".parse::<Key>().unwrap(), Key::Backspace);
        assert_eq!("±".parse::<Key>().unwrap(), Key::ToggleSign);
        assert_eq!("SIGN".parse::<Key>().unwrap(), Key::ToggleSign);
    }

    #[test]
    fn test_checked_digit() {
        assert_eq!(Key::digit(0), Some(Key::Digit(0)));
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(12), None);
        for d in 0..=9 {
            let key = Key::digit(d).unwrap();
            assert_eq!(key.label().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert!("M+".parse::<Key>().is_err());
        assert!("12".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
    }

    #[test]
    fn test_label_round_trip() {
        let keys = [
            Key::Digit(0),
            Key::Digit(9),
            Key::Decimal,
            Key::Operator(Operator::Div),
            Key::Equals,
            Key::Clear,
            Key::ClearEntry,
            Key::Backspace,
            Key::ToggleSign,
        ];
        for key in keys {
            assert_eq!(key.label().parse::<Key>().unwrap(), key);
        }
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(Key::from_keysym("5", Some('5')), Some(Key::Digit(5)));
        assert_eq!(Key::from_keysym("KP_3", None), Some(Key::Digit(3)));
        assert_eq!(Key::from_keysym("plus", Some('+')), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_keysym("KP_Divide", None), Some(Key::Operator(Operator::Div)));
        assert_eq!(Key::from_keysym("KP_Decimal", None), Some(Key::Decimal));
        assert_eq!(Key::from_keysym("comma", Some(',')), Some(Key::Decimal));
        assert_eq!(Key::from_keysym("Return", Some('\r')), Some(Key::Equals));
        assert_eq!(Key::from_keysym("equal", Some('=')), Some(Key::Equals));
        assert_eq!(Key::from_keysym("BackSpace", None), Some(Key::Backspace));
        assert_eq!(Key::from_keysym("Delete", None), Some(Key::ClearEntry));
        assert_eq!(Key::from_keysym("Escape", None), Some(Key::Clear));
        assert_eq!(Key::from_keysym("S", Some('S')), Some(Key::ToggleSign));
        assert_eq!(Key::from_keysym("F1", None), None);
        assert_eq!(Key::from_keysym("KP_Add2", None), None);
    }
}
