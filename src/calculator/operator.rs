// Binary operators available on the keypad

use rust_decimal::{Decimal, RoundingStrategy};

use super::error::CalcError;

/// Significant digits kept by add, subtract and multiply
pub const SIGNIFICANT_DIGITS: u32 = 16;

/// Fractional digits kept by divide
pub const QUOTIENT_SCALE: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Glyph table, in keypad order
const TABLE: [(Operator, char, char); 4] = [
    (Operator::Add, '+', '+'),
    (Operator::Subtract, '-', '-'),
    (Operator::Multiply, '×', '*'),
    (Operator::Divide, '÷', '/'),
];

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// Glyph shown on the button
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }

    /// Look up an operator by its button glyph or ASCII alias.
    /// Unknown symbols yield `None` and must be ignored by the caller.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, glyph, ascii)| *glyph == symbol || *ascii == symbol)
            .map(|(op, _, _)| *op)
    }

    /// Same as [`Operator::from_symbol`] for a button label
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_symbol(c),
            _ => None,
        }
    }

    pub fn apply(self, left: Decimal, right: Decimal) -> Result<Decimal, CalcError> {
        match self {
            Operator::Add => left.checked_add(right).and_then(round_sf),
            Operator::Subtract => left.checked_sub(right).and_then(round_sf),
            Operator::Multiply => left.checked_mul(right).and_then(round_sf),
            Operator::Divide => {
                if right.is_zero() {
                    return Err(CalcError::DivisionByZero);
                }

                left.checked_div(right).map(|q| {
                    q.round_dp_with_strategy(QUOTIENT_SCALE, RoundingStrategy::MidpointAwayFromZero)
                })
            }
        }
        .ok_or(CalcError::Overflow)
    }
}

fn round_sf(value: Decimal) -> Option<Decimal> {
    // Zero has no significant digits to round
    if value.is_zero() {
        return Some(value);
    }

    value.round_sf_with_strategy(SIGNIFICANT_DIGITS, RoundingStrategy::MidpointNearestEven)
}
