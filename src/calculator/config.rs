/// Maximum number of digits in one entry (sign and decimal point excluded)
pub const MAX_DIGITS: usize = 8;

/// Capacity of the entry buffer: digits plus sign and decimal point
pub const ENTRY_CAPACITY: usize = 16;

/// What `.` does while nothing has been typed yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyDot {
    /// Start the entry as `0.`
    #[default]
    StartZero,
    /// Ignore the key
    Reject,
}

/// How `=` treats an entry that is only a minus sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoneMinus {
    /// Evaluate it as zero
    #[default]
    Evaluate,
    /// Leave the pending operation alone
    Ignore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub max_digits: usize,
    pub empty_dot: EmptyDot,
    pub lone_minus: LoneMinus,
    pub error_label: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            max_digits: MAX_DIGITS,
            empty_dot: EmptyDot::StartZero,
            lone_minus: LoneMinus::Evaluate,
            error_label: "ERROR",
        }
    }

    pub const fn with_empty_dot(mut self, empty_dot: EmptyDot) -> Self {
        self.empty_dot = empty_dot;
        self
    }

    pub const fn with_lone_minus(mut self, lone_minus: LoneMinus) -> Self {
        self.lone_minus = lone_minus;
        self
    }

    /// Labels longer than the display line are cut to fit
    pub const fn with_error_label(mut self, error_label: &'static str) -> Self {
        self.error_label = error_label;
        self
    }

    /// Clamped so a full entry always fits the buffer
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = if max_digits > ENTRY_CAPACITY - 2 {
            ENTRY_CAPACITY - 2
        } else {
            max_digits
        };
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
