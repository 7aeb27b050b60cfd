use crate::calculator::CalcError;

/// Receives evaluation failures before the calculator enters its error mode
pub trait DiagnosticSink {
    fn report(&mut self, error: &CalcError);
}

/// Forwards failures to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: &CalcError) {
        log::error!("Calculator error: {error}");
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, error: &CalcError) {
        (**self).report(error);
    }
}
