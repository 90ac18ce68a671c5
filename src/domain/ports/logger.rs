/// Port for the warnings emitted while configuration is brought up.
///
/// The configuration service only ever needs `warn`. The production adapter
/// forwards to `tracing`; tests substitute a recorder.
pub trait WarnLogger: Send + Sync {
    /// Emit a warning.
    fn warn(&self, message: &str);
}
