// Calculator input state machine with decimal arithmetic
// Operations are committed one at a time, left to right

use core::str::FromStr;

use rust_decimal::Decimal;

use crate::diagnostics::{DiagnosticSink, LogSink};

mod config;
mod error;
mod format;
mod operator;

pub use config::{Config, ENTRY_CAPACITY, EmptyDot, LoneMinus, MAX_DIGITS};
pub use error::CalcError;
pub use format::{DisplayText, format_for_display};
pub use operator::{Operator, QUOTIENT_SCALE, SIGNIFICANT_DIGITS};

/// Coarse calculator state, gates which keys are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Ready,
    EnteringNumber,
    AfterOperator,
    /// Left only through [`Calculator::clear`]
    Error,
}

impl Mode {
    pub fn accepts_input(self) -> bool {
        matches!(
            self,
            Mode::Ready | Mode::EnteringNumber | Mode::AfterOperator
        )
    }
}

/// Calculator state
pub struct Calculator<S = LogSink> {
    config: Config,
    mode: Mode,
    /// Committed left operand
    accumulator: Option<Decimal>,
    /// Operator waiting for its right operand
    pending: Option<Operator>,
    /// Numeral being typed, exactly as typed
    entry: heapless::String<ENTRY_CAPACITY>,
    sink: S,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    pub fn with_config(config: Config) -> Self {
        Self::with_sink(config, LogSink)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: DiagnosticSink> Calculator<S> {
    pub fn with_sink(config: Config, sink: S) -> Self {
        Self {
            config,
            mode: Mode::Ready,
            accumulator: None,
            pending: None,
            entry: heapless::String::new(),
            sink,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn entry(&self) -> &str {
        self.entry.as_str()
    }

    pub fn accumulator(&self) -> Option<Decimal> {
        self.accumulator
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Append a digit (0-9) to the entry
    pub fn digit(&mut self, digit: u8) {
        if digit > 9 {
            log::trace!("Ignoring digit {digit}: not a decimal digit");
            return;
        }

        if !self.mode.accepts_input() {
            log::trace!("Ignoring digit {digit} in {:?}", self.mode);
            return;
        }

        if self.digit_count() >= self.config.max_digits {
            log::trace!("Ignoring digit {digit}: entry full");
            return;
        }

        // Suppress the leading zero (0 -> 5 gives 5)
        if self.entry == "0" {
            self.entry.clear();
        }

        self.push_entry(char::from(b'0' + digit));
        self.set_mode(Mode::EnteringNumber);
    }

    /// Add a decimal point to the entry
    pub fn dot(&mut self) {
        if !self.mode.accepts_input() {
            log::trace!("Ignoring dot in {:?}", self.mode);
            return;
        }

        // Only allow one decimal point
        if self.entry.contains('.') || self.digit_count() >= self.config.max_digits {
            log::trace!("Ignoring dot for entry {:?}", self.entry.as_str());
            return;
        }

        if self.entry.is_empty() {
            match self.config.empty_dot {
                EmptyDot::StartZero => {
                    self.push_entry('0');
                    self.push_entry('.');
                }
                EmptyDot::Reject => {
                    log::trace!("Ignoring dot: nothing entered");
                    return;
                }
            }
        } else {
            self.push_entry('.');
        }

        self.set_mode(Mode::EnteringNumber);
    }

    /// Commit the entry and remember `op` for the next operand
    pub fn input_operator(&mut self, op: Operator) {
        if !self.mode.accepts_input() {
            log::trace!("Ignoring operator {} in {:?}", op.symbol(), self.mode);
            return;
        }

        // Minus before any digit starts a negative number
        if op == Operator::Subtract
            && self.entry.is_empty()
            && matches!(self.mode, Mode::Ready | Mode::AfterOperator)
        {
            self.push_entry('-');
            self.set_mode(Mode::EnteringNumber);
            return;
        }

        // Repeated operator replaces the pending one
        if self.entry.is_empty() {
            self.pending = Some(op);
            self.set_mode(Mode::AfterOperator);
            return;
        }

        let right = match self.entry_value() {
            Ok(value) => value,
            Err(e) => return self.fail(e),
        };

        match (self.accumulator, self.pending) {
            (None, _) => self.accumulator = Some(right),
            (Some(left), Some(pending)) => match pending.apply(left, right) {
                Ok(result) => self.accumulator = Some(result),
                Err(e) => return self.fail(e),
            },
            // A number typed over a shown result without an operator is dropped
            (Some(_), None) => {}
        }

        self.entry.clear();
        self.pending = Some(op);
        self.set_mode(Mode::AfterOperator);
    }

    /// Evaluate the pending operation
    pub fn equals(&mut self) {
        if self.mode == Mode::Error {
            log::trace!("Ignoring equals in {:?}", self.mode);
            return;
        }

        let lone_minus = self.entry == "-" && self.config.lone_minus == LoneMinus::Ignore;

        let op = match self.pending {
            Some(op) if !self.entry.is_empty() && !lone_minus => op,
            _ => {
                self.set_mode(Mode::Ready);
                return;
            }
        };

        let right = match self.entry_value() {
            Ok(value) => value,
            Err(e) => return self.fail(e),
        };

        // A leading operator works on the zero shown at start
        let left = self.accumulator.unwrap_or(Decimal::ZERO);

        match op.apply(left, right) {
            Ok(result) => {
                log::debug!("{left} {} {right} = {result}", op.symbol());
                self.accumulator = Some(result);
                self.pending = None;
                self.entry.clear();
                self.set_mode(Mode::Ready);
            }
            Err(e) => self.fail(e),
        }
    }

    /// Reset calculator completely
    pub fn clear(&mut self) {
        self.accumulator = None;
        self.pending = None;
        self.entry.clear();
        self.set_mode(Mode::Ready);
    }

    /// Text for the display
    pub fn display_text(&self) -> DisplayText {
        if self.mode == Mode::Error {
            let mut text = DisplayText::new();
            // Labels wider than the display are cut
            for ch in self.config.error_label.chars() {
                if text.push(ch).is_err() {
                    break;
                }
            }
            return text;
        }

        if !self.entry.is_empty() {
            let mut text = DisplayText::new();
            text.push_str(self.entry.as_str()).ok();
            return text;
        }

        format_for_display(self.accumulator, self.config.max_digits)
    }

    /// Digits in the entry, sign and decimal point excluded
    fn digit_count(&self) -> usize {
        self.entry.chars().filter(char::is_ascii_digit).count()
    }

    fn push_entry(&mut self, ch: char) {
        if self.entry.push(ch).is_err() {
            log::warn!("Entry buffer full, dropping {ch:?}");
        }
    }

    /// Numeric value of the entry; empty or a lone minus count as zero
    fn entry_value(&self) -> Result<Decimal, CalcError> {
        let text = self.entry.strip_suffix('.').unwrap_or(self.entry.as_str());

        if text.is_empty() || text == "-" {
            return Ok(Decimal::ZERO);
        }

        Decimal::from_str(text).map_err(|_| CalcError::MalformedNumeral)
    }

    fn fail(&mut self, error: CalcError) {
        self.sink.report(&error);
        self.set_mode(Mode::Error);
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            log::debug!("Mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    #[cfg(test)]
    pub(crate) fn set_entry(&mut self, text: &str) {
        self.entry.clear();
        self.entry.push_str(text).ok();
    }
}
