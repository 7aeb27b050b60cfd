// Result formatting for the display line

use core::fmt::Write;

use rust_decimal::Decimal;

/// Text shown on the display
pub type DisplayText = heapless::String<48>;

/// Largest scale a `Decimal` can carry
const MAX_SCALE: u32 = 28;

/// Format a result for the display.
///
/// Trailing fractional zeros are dropped. Values with more than
/// `max_digits` integer digits switch to `<mantissa>e<exponent>` with a
/// single digit before the mantissa's decimal point.
pub fn format_for_display(value: Option<Decimal>, max_digits: usize) -> DisplayText {
    let mut text = DisplayText::new();

    let Some(value) = value else {
        text.push('0').ok();
        return text;
    };

    let normalized = value.normalize();
    let integer_digits = integer_digits(normalized);

    if integer_digits <= max_digits {
        write!(&mut text, "{normalized}").ok();
        return text;
    }

    let exponent = (integer_digits - 1) as u32;
    let mantissa = shift_left(normalized, exponent).normalize();
    write!(&mut text, "{mantissa}e{exponent}").ok();

    text
}

/// Number of digits before the decimal point, sign excluded
fn integer_digits(value: Decimal) -> usize {
    let mut integer = value.abs().trunc();
    let mut digits = 1;

    while integer >= Decimal::TEN {
        integer = (integer / Decimal::TEN).trunc();
        digits += 1;
    }

    digits
}

/// Move the decimal point `places` to the left
fn shift_left(value: Decimal, places: u32) -> Decimal {
    let mut shifted = value;

    if shifted.set_scale(value.scale() + places).is_ok() {
        return shifted;
    }

    // Scale would exceed 28; give up the lowest fractional digits first
    let keep = MAX_SCALE.saturating_sub(places);
    let mut rounded = value.round_dp(keep);
    if rounded.set_scale(rounded.scale() + places).is_ok() {
        return rounded;
    }

    value
}
