// Routes keypad events to the calculator and refreshes the view

use crate::calculator::{Calculator, Operator};
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::view::View;

/// A discrete input raised by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Digit(u8),
    Dot,
    Operator(Operator),
    Equals,
    Clear,
}

impl Event {
    /// Maps a typed character to an event, `None` for keys without one
    pub fn from_char(key_char: char) -> Option<Self> {
        match key_char {
            '0'..='9' => Some(Event::Digit(key_char as u8 - b'0')),
            '.' => Some(Event::Dot),
            '=' | '\n' | '\r' => Some(Event::Equals),
            'C' | 'c' | '\u{1b}' => Some(Event::Clear),
            _ => Operator::from_symbol(key_char).map(Event::Operator),
        }
    }
}

pub struct Controller<V, S = LogSink> {
    calculator: Calculator<S>,
    view: V,
}

impl<V: View> Controller<V> {
    pub fn new(view: V) -> Self {
        Self::with_calculator(Calculator::new(), view)
    }
}

impl<V: View, S: DiagnosticSink> Controller<V, S> {
    pub fn with_calculator(calculator: Calculator<S>, view: V) -> Self {
        Self { calculator, view }
    }

    pub fn calculator(&self) -> &Calculator<S> {
        &self.calculator
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_parts(self) -> (Calculator<S>, V) {
        (self.calculator, self.view)
    }

    pub fn on_digit(&mut self, digit: u8) {
        self.dispatch(Event::Digit(digit));
    }

    pub fn on_dot(&mut self) {
        self.dispatch(Event::Dot);
    }

    /// Unsupported symbols are ignored
    pub fn on_operator(&mut self, symbol: &str) {
        let Some(op) = Operator::from_label(symbol) else {
            log::trace!("Ignoring unknown operator {symbol:?}");
            return;
        };

        self.dispatch(Event::Operator(op));
    }

    pub fn on_equals(&mut self) {
        self.dispatch(Event::Equals);
    }

    pub fn on_clear(&mut self) {
        self.dispatch(Event::Clear);
    }

    /// Handle a typed character
    /// Returns true if the character mapped to an event
    pub fn press(&mut self, key_char: char) -> bool {
        match Event::from_char(key_char) {
            Some(event) => {
                self.dispatch(event);
                true
            }
            None => false,
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        log::debug!("Event: {event:?}");

        match event {
            Event::Digit(digit) => self.calculator.digit(digit),
            Event::Dot => self.calculator.dot(),
            Event::Operator(op) => self.calculator.input_operator(op),
            Event::Equals => self.calculator.equals(),
            Event::Clear => self.calculator.clear(),
        }

        self.refresh();
    }

    /// Push the current display text to the view
    pub fn refresh(&mut self) {
        let text = self.calculator.display_text();
        self.view.set_display(text.as_str());
    }
}
