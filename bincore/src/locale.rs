//! English/Japanese label and message tables.
//!
//! The engine reports errors as [`CalcError`] values; picking the message
//! text for the current language happens here, in the UI layer's hands.

use crate::engine::{CalcError, Operator};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    En,
    Jp,
}

impl Lang {
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Jp,
            Lang::Jp => Lang::En,
        }
    }

    /// Caption for the language toggle button.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Jp => "JP",
        }
    }

    /// Key-cap label for an operator button. Japanese uses full-width
    /// plus/minus glyphs; the rest are shared.
    pub fn operator_label(self, op: Operator) -> &'static str {
        match (self, op) {
            (Lang::En, Operator::Add) => "+",
            (Lang::En, Operator::Subtract) => "-",
            (Lang::Jp, Operator::Add) => "＋",
            (Lang::Jp, Operator::Subtract) => "－",
            (_, Operator::Multiply) => "×",
            (_, Operator::Divide) => "÷",
            (_, Operator::And) => "AND",
            (_, Operator::Or) => "OR",
            (_, Operator::Xor) => "XOR",
        }
    }

    pub fn equals_label(self) -> &'static str {
        match self {
            Lang::En => "=",
            Lang::Jp => "＝",
        }
    }

    pub fn error_message(self, err: CalcError) -> &'static str {
        match (self, err) {
            (Lang::En, CalcError::DivisionByZero) => "Cannot divide by zero.",
            (Lang::Jp, CalcError::DivisionByZero) => "ゼロで割ることはできません。",
            (Lang::En, CalcError::InvalidOperand) => "Invalid input.",
            (Lang::Jp, CalcError::InvalidOperand) => "無効な入力です。",
        }
    }
}

/// Labels shared by every language.
pub const BACKSPACE_LABEL: &str = "⌫";
pub const CLEAR_LABEL: &str = "C";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Lang::En.toggle(), Lang::Jp);
        assert_eq!(Lang::En.toggle().toggle(), Lang::En);
    }

    #[test]
    fn test_jp_fullwidth_arithmetic_labels() {
        assert_eq!(Lang::Jp.operator_label(Operator::Add), "＋");
        assert_eq!(Lang::Jp.operator_label(Operator::Subtract), "－");
        assert_eq!(Lang::Jp.equals_label(), "＝");
        // Bitwise captions do not vary.
        assert_eq!(
            Lang::Jp.operator_label(Operator::Xor),
            Lang::En.operator_label(Operator::Xor)
        );
    }

    #[test]
    fn test_error_messages_localized() {
        assert_eq!(
            Lang::En.error_message(CalcError::DivisionByZero),
            "Cannot divide by zero."
        );
        assert_eq!(
            Lang::Jp.error_message(CalcError::InvalidOperand),
            "無効な入力です。"
        );
    }
}
