/// Receiver for non-fatal notices (for example an event-handler prop that
/// names no signal on the widget). Must never panic.
pub trait DiagnosticSink {
    fn notice(&self, message: &str);
}

impl<F: Fn(&str)> DiagnosticSink for F {
    fn notice(&self, message: &str) {
        self(message)
    }
}

/// Forwards notices to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, message: &str) {
        tracing::debug!(target: "widgetbridge::diagnostics", "{}", message);
    }
}
