//! Binary expression engine - operand accumulation, evaluation, formatting
//!
//! The engine is a pure state machine: every button or key press becomes an
//! [`Event`], and [`step`] maps `(state, event)` to `(state, output)` with no
//! UI types involved. Operands are base-2 digit strings built one [`Bit`] at
//! a time, so they can never contain anything but '0' and '1'. Evaluation is
//! strictly left to right; there is no operator precedence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single binary digit. Digit input is restricted to this type, which is
/// what keeps operand strings well-formed without any post-hoc validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bit {
    Zero,
    One,
}

impl Bit {
    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
    Xor,
}

impl Operator {
    /// Symbol shown in the accumulated-expression line. Locale-independent.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64, CalcError> {
        Ok(match self {
            Operator::Add => x + y,
            Operator::Subtract => x - y,
            Operator::Multiply => x * y,
            Operator::Divide => {
                if y == 0 {
                    return Err(CalcError::DivisionByZero);
                }
                floor_div(x, y)
            }
            Operator::And => x & y,
            Operator::Or => x | y,
            Operator::Xor => x ^ y,
        })
    }
}

/// One discrete input delivered by the surrounding UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(Bit),
    Operator(Operator),
    Equals,
    /// Remove the last digit of whichever operand is being edited.
    Backspace,
    /// Remove a pending operator if no digit of the second operand has been
    /// entered yet. Backspace never touches operators; this is the one path
    /// that does.
    UndoOperator,
    Clear,
}

/// What the engine hands back to the display surface after each event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Output {
    /// The accumulated expression or operand being edited.
    Display(String),
    /// A completed computation, formatted as a signed binary string.
    Result(String),
    /// Evaluation failed; state has been reset to the initial state.
    Error(CalcError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("invalid operand")]
    InvalidOperand,
}

/// The accumulated input state.
///
/// Invariant: `editing_second` implies `operator` is set, and the operand
/// strings hold binary literals (plus a possible leading '-' on `operand1`
/// when a negative previous result was chained in).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineState {
    pub operand1: String,
    pub operand2: String,
    pub operator: Option<Operator>,
    pub editing_second: bool,
    pub last_result: String,
}

impl EngineState {
    /// Single-line rendering of the current expression, e.g. `"10 + 1"`.
    /// An empty state renders as `"0"`.
    pub fn display_text(&self) -> String {
        match self.operator {
            None => {
                if self.operand1.is_empty() {
                    "0".to_owned()
                } else {
                    self.operand1.clone()
                }
            }
            Some(op) => format!("{} {} {}", self.operand1, op.symbol(), self.operand2)
                .trim_end()
                .to_owned(),
        }
    }

    /// The operand a digit press would currently extend, with a `"0"`
    /// placeholder. While awaiting the first digit of the second operand
    /// this is still the first operand, which is what a pocket calculator
    /// keeps showing until new digits arrive.
    pub fn entry_text(&self) -> String {
        let active = if self.editing_second && !self.operand2.is_empty() {
            &self.operand2
        } else {
            &self.operand1
        };
        if active.is_empty() {
            "0".to_owned()
        } else {
            active.clone()
        }
    }

    /// The pending part of the expression (`"10 +"`), if any.
    pub fn pending_text(&self) -> Option<String> {
        self.operator
            .map(|op| format!("{} {}", self.operand1, op.symbol()))
    }
}

/// Apply one event to the state. Pure: the only effect is the returned pair.
pub fn step(mut state: EngineState, event: Event) -> (EngineState, Output) {
    match event {
        Event::Digit(b) => {
            // A digit right after a completed computation starts over.
            if !state.last_result.is_empty()
                && state.operator.is_none()
                && state.operand1.is_empty()
            {
                state = EngineState::default();
            }
            if state.editing_second {
                state.operand2.push(b.as_char());
            } else {
                state.operand1.push(b.as_char());
            }
            let text = state.display_text();
            (state, Output::Display(text))
        }

        Event::Operator(op) => match (state.operator, state.operand2.is_empty()) {
            // No second-operand digit yet: the user changed their mind.
            (Some(_), true) => {
                state.operator = Some(op);
                let text = state.display_text();
                (state, Output::Display(text))
            }
            // A full pair is pending: reduce it before accepting the new
            // operator (left-to-right chaining).
            (Some(pending), false) => match evaluate(&state.operand1, pending, &state.operand2) {
                Ok(intermediate) => {
                    state.operand1 = intermediate;
                    state.operand2.clear();
                    state.operator = Some(op);
                    let text = state.display_text();
                    (state, Output::Display(text))
                }
                Err(e) => (EngineState::default(), Output::Error(e)),
            },
            (None, _) => {
                if state.operand1.is_empty() {
                    if state.last_result.is_empty() {
                        // No left operand to attach the operator to.
                        let text = state.display_text();
                        return (state, Output::Display(text));
                    }
                    state.operand1 = state.last_result.clone();
                }
                state.operator = Some(op);
                state.editing_second = true;
                state.operand2.clear();
                let text = state.display_text();
                (state, Output::Display(text))
            }
        },

        Event::Equals => {
            let Some(op) = state.operator else {
                let text = state.display_text();
                return (state, Output::Display(text));
            };
            let evaluated = if state.operand2.is_empty() {
                // Dangling trailing operator: drop it and finish with the
                // normalized first operand.
                parse_operand(&state.operand1).map(format_result)
            } else {
                evaluate(&state.operand1, op, &state.operand2)
            };
            match evaluated {
                Ok(result) => {
                    let next = EngineState {
                        last_result: result.clone(),
                        ..EngineState::default()
                    };
                    (next, Output::Result(result))
                }
                Err(e) => (EngineState::default(), Output::Error(e)),
            }
        }

        Event::Backspace => {
            if state.editing_second {
                state.operand2.pop();
            } else {
                state.operand1.pop();
            }
            let text = state.display_text();
            (state, Output::Display(text))
        }

        Event::UndoOperator => {
            if state.editing_second && state.operand2.is_empty() {
                state.operator = None;
                state.editing_second = false;
            }
            let text = state.display_text();
            (state, Output::Display(text))
        }

        Event::Clear => {
            let state = EngineState::default();
            let text = state.display_text();
            (state, Output::Display(text))
        }
    }
}

/// Evaluate a single `a op b` round: parse both operands as base-2 integers,
/// apply the operator, format the signed result.
pub fn evaluate(a: &str, op: Operator, b: &str) -> Result<String, CalcError> {
    let x = parse_operand(a)?;
    let y = parse_operand(b)?;
    Ok(format_result(op.apply(x, y)?))
}

/// Owns an [`EngineState`] and applies [`step`] in place.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    state: EngineState,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn apply(&mut self, event: Event) -> Output {
        let (next, output) = step(std::mem::take(&mut self.state), event);
        self.state = next;
        output
    }
}

/// Parse a binary literal. A leading '-' is accepted because a chained
/// negative result re-enters as the first operand.
fn parse_operand(s: &str) -> Result<i64, CalcError> {
    i64::from_str_radix(s, 2).map_err(|_| CalcError::InvalidOperand)
}

/// Signed binary rendering: leading '-' for negatives, minimal-width
/// magnitude, `"0"` for zero.
fn format_result(value: i64) -> String {
    if value < 0 {
        format!("-{:b}", value.unsigned_abs())
    } else {
        format!("{:b}", value)
    }
}

/// Floor division (rounds toward negative infinity), so a chained negative
/// intermediate divides the same way the display suggests: -101 ÷ 10 = -11.
fn floor_div(x: i64, y: i64) -> i64 {
    let q = x / y;
    if x % y != 0 && (x < 0) != (y < 0) {
        q - 1
    } else {
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(events: &[Event]) -> (Engine, Output) {
        let mut engine = Engine::new();
        let mut last = Output::Display("0".to_owned());
        for &event in events {
            last = engine.apply(event);
        }
        (engine, last)
    }

    const D0: Event = Event::Digit(Bit::Zero);
    const D1: Event = Event::Digit(Bit::One);

    #[test]
    fn test_evaluate_arithmetic() {
        assert_eq!(evaluate("10", Operator::Add, "1"), Ok("11".to_owned()));
        assert_eq!(evaluate("11", Operator::Multiply, "10"), Ok("110".to_owned()));
        assert_eq!(evaluate("1", Operator::Subtract, "10"), Ok("-1".to_owned()));
        assert_eq!(evaluate("111", Operator::Divide, "10"), Ok("11".to_owned()));
    }

    #[test]
    fn test_evaluate_bitwise() {
        assert_eq!(evaluate("1100", Operator::And, "1010"), Ok("1000".to_owned()));
        assert_eq!(evaluate("1100", Operator::Or, "1010"), Ok("1110".to_owned()));
        assert_eq!(evaluate("1100", Operator::Xor, "1010"), Ok("110".to_owned()));
    }

    #[test]
    fn test_evaluate_zero_result() {
        assert_eq!(evaluate("101", Operator::Subtract, "101"), Ok("0".to_owned()));
        assert_eq!(evaluate("0", Operator::And, "111"), Ok("0".to_owned()));
    }

    #[test]
    fn test_no_leading_zero_padding() {
        // 0011 + 0 parses as 3 and renders minimally.
        assert_eq!(evaluate("0011", Operator::Add, "0"), Ok("11".to_owned()));
    }

    #[test]
    fn test_division_is_floor() {
        // -5 / 2 rounds toward negative infinity: -3.
        assert_eq!(evaluate("-101", Operator::Divide, "10"), Ok("-11".to_owned()));
        assert_eq!(floor_div(5, 2), 2);
        assert_eq!(floor_div(-5, 2), -3);
        assert_eq!(floor_div(5, -2), -3);
        assert_eq!(floor_div(-4, 2), -2);
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            evaluate("101", Operator::Divide, "0"),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_invalid_operand() {
        assert_eq!(evaluate("", Operator::Add, "1"), Err(CalcError::InvalidOperand));
        assert_eq!(evaluate("10", Operator::Add, "2"), Err(CalcError::InvalidOperand));
    }

    #[test]
    fn test_digit_accumulation() {
        let (engine, out) = feed(&[D1, D0, D1]);
        assert_eq!(engine.state().operand1, "101");
        assert_eq!(out, Output::Display("101".to_owned()));
    }

    #[test]
    fn test_operator_routes_digits_to_second_operand() {
        let (engine, out) = feed(&[D1, D0, Event::Operator(Operator::Add), D1]);
        assert_eq!(engine.state().operand1, "10");
        assert_eq!(engine.state().operand2, "1");
        assert!(engine.state().editing_second);
        assert_eq!(out, Output::Display("10 + 1".to_owned()));
    }

    #[test]
    fn test_equals_add() {
        let (engine, out) = feed(&[D1, D0, Event::Operator(Operator::Add), D1, Event::Equals]);
        assert_eq!(out, Output::Result("11".to_owned()));
        assert_eq!(engine.state().last_result, "11");
        assert_eq!(engine.state().operand1, "");
        assert_eq!(engine.state().operator, None);
        assert!(!engine.state().editing_second);
    }

    #[test]
    fn test_worked_multiply_example() {
        // 11 × 10 = 110 (3 × 2 = 6)
        let (_, out) = feed(&[
            D1,
            D1,
            Event::Operator(Operator::Multiply),
            D1,
            D0,
            Event::Equals,
        ]);
        assert_eq!(out, Output::Result("110".to_owned()));
    }

    #[test]
    fn test_chaining_through_last_result() {
        let mut engine = Engine::new();
        for event in [D1, D0, Event::Operator(Operator::Add), D1, Event::Equals] {
            engine.apply(event);
        }
        assert_eq!(engine.state().last_result, "11");

        // + 1 = continues from the previous result: 3 + 1 = 4.
        engine.apply(Event::Operator(Operator::Add));
        assert_eq!(engine.state().operand1, "11");
        engine.apply(D1);
        let out = engine.apply(Event::Equals);
        assert_eq!(out, Output::Result("100".to_owned()));
    }

    #[test]
    fn test_chained_reduction_on_operator_press() {
        // 1 + 1 + 1 = reduces left to right: (1+1)+1 = 3.
        let mut engine = Engine::new();
        engine.apply(D1);
        engine.apply(Event::Operator(Operator::Add));
        engine.apply(D1);
        let out = engine.apply(Event::Operator(Operator::Add));
        // Intermediate 10 shown with the new pending operator.
        assert_eq!(engine.state().operand1, "10");
        assert_eq!(out, Output::Display("10 +".to_owned()));
        engine.apply(D1);
        assert_eq!(engine.apply(Event::Equals), Output::Result("11".to_owned()));
    }

    #[test]
    fn test_chained_negative_result() {
        // 1 - 10 = -1, then × 10 = -10.
        let mut engine = Engine::new();
        for event in [D1, Event::Operator(Operator::Subtract), D1, D0, Event::Equals] {
            engine.apply(event);
        }
        assert_eq!(engine.state().last_result, "-1");
        engine.apply(Event::Operator(Operator::Multiply));
        engine.apply(D1);
        engine.apply(D0);
        assert_eq!(engine.apply(Event::Equals), Output::Result("-10".to_owned()));
    }

    #[test]
    fn test_digit_after_result_starts_fresh() {
        let mut engine = Engine::new();
        for event in [D1, Event::Operator(Operator::Add), D1, Event::Equals] {
            engine.apply(event);
        }
        let out = engine.apply(D1);
        assert_eq!(engine.state().last_result, "");
        assert_eq!(engine.state().operand1, "1");
        assert_eq!(out, Output::Display("1".to_owned()));
    }

    #[test]
    fn test_operator_replacement() {
        let (engine, out) = feed(&[
            D1,
            D0,
            Event::Operator(Operator::Add),
            Event::Operator(Operator::Xor),
        ]);
        assert_eq!(engine.state().operator, Some(Operator::Xor));
        assert_eq!(engine.state().operand2, "");
        assert_eq!(out, Output::Display("10 XOR".to_owned()));
    }

    #[test]
    fn test_operator_without_left_operand_is_noop() {
        let (engine, out) = feed(&[Event::Operator(Operator::Add)]);
        assert_eq!(engine.state(), &EngineState::default());
        assert_eq!(out, Output::Display("0".to_owned()));
    }

    #[test]
    fn test_equals_without_operator_is_noop() {
        let (engine, out) = feed(&[D1, D0, Event::Equals]);
        assert_eq!(engine.state().operand1, "10");
        assert_eq!(out, Output::Display("10".to_owned()));
    }

    #[test]
    fn test_equals_drops_dangling_operator() {
        let (engine, out) = feed(&[D1, D0, Event::Operator(Operator::Add), Event::Equals]);
        assert_eq!(out, Output::Result("10".to_owned()));
        assert_eq!(engine.state().last_result, "10");
        assert_eq!(engine.state().operator, None);
    }

    #[test]
    fn test_backspace_edits_active_operand() {
        let (engine, _) = feed(&[D1, D0, Event::Backspace]);
        assert_eq!(engine.state().operand1, "1");

        let (engine, _) = feed(&[D1, Event::Operator(Operator::Add), D1, D0, Event::Backspace]);
        assert_eq!(engine.state().operand1, "1");
        assert_eq!(engine.state().operand2, "1");
        assert_eq!(engine.state().operator, Some(Operator::Add));
    }

    #[test]
    fn test_backspace_on_empty_state_is_noop() {
        let (engine, out) = feed(&[Event::Backspace]);
        assert_eq!(engine.state(), &EngineState::default());
        assert_eq!(out, Output::Display("0".to_owned()));
    }

    #[test]
    fn test_backspace_never_removes_operator() {
        let (engine, _) = feed(&[D1, Event::Operator(Operator::Add), Event::Backspace]);
        assert_eq!(engine.state().operator, Some(Operator::Add));
        assert!(engine.state().editing_second);
    }

    #[test]
    fn test_undo_operator() {
        let (engine, out) = feed(&[D1, D0, Event::Operator(Operator::Add), Event::UndoOperator]);
        assert_eq!(engine.state().operator, None);
        assert!(!engine.state().editing_second);
        assert_eq!(engine.state().operand1, "10");
        assert_eq!(out, Output::Display("10".to_owned()));
    }

    #[test]
    fn test_undo_operator_noop_once_second_operand_started() {
        let (engine, _) = feed(&[D1, Event::Operator(Operator::Add), D1, Event::UndoOperator]);
        assert_eq!(engine.state().operator, Some(Operator::Add));
        assert_eq!(engine.state().operand2, "1");
    }

    #[test]
    fn test_division_by_zero_resets_state() {
        let (engine, out) = feed(&[D1, Event::Operator(Operator::Divide), D0, Event::Equals]);
        assert_eq!(out, Output::Error(CalcError::DivisionByZero));
        assert_eq!(engine.state(), &EngineState::default());
        assert_eq!(engine.state().last_result, "");
    }

    #[test]
    fn test_division_by_zero_during_chain_reduction() {
        let (engine, out) = feed(&[
            D1,
            Event::Operator(Operator::Divide),
            D0,
            Event::Operator(Operator::Add),
        ]);
        assert_eq!(out, Output::Error(CalcError::DivisionByZero));
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_clear_from_any_state() {
        let (mut engine, _) = feed(&[D1, D0, Event::Operator(Operator::Add), D1, Event::Equals]);
        let out = engine.apply(Event::Clear);
        assert_eq!(engine.state(), &EngineState::default());
        assert_eq!(out, Output::Display("0".to_owned()));

        let (mut engine, _) = feed(&[D1, Event::Operator(Operator::Or)]);
        engine.apply(Event::Clear);
        assert_eq!(engine.state(), &EngineState::default());
    }

    #[test]
    fn test_display_text_states() {
        assert_eq!(EngineState::default().display_text(), "0");

        let (engine, _) = feed(&[D1, D0, Event::Operator(Operator::Add)]);
        assert_eq!(engine.state().display_text(), "10 +");
        assert_eq!(engine.state().pending_text(), Some("10 +".to_owned()));
        assert_eq!(engine.state().entry_text(), "10");
    }

    #[test]
    fn test_state_serialization_round_trip() {
        let (engine, _) = feed(&[D1, D0, Event::Operator(Operator::Xor), D1]);
        let json = serde_json::to_string(engine.state()).unwrap();
        let back: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, engine.state());
    }
}
