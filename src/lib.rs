#![cfg_attr(not(test), no_std)]

pub mod calculator;
pub mod controller;
pub mod diagnostics;
pub mod view;

pub use calculator::{
    CalcError, Calculator, Config, DisplayText, EmptyDot, LoneMinus, MAX_DIGITS, Mode, Operator,
    format_for_display,
};
pub use controller::{Controller, Event};
pub use diagnostics::{DiagnosticSink, LogSink};
pub use view::{TextView, View};
