/// Logging port used by the application layer.
///
/// Adapters live in the infrastructure layer, so use cases never depend on a
/// concrete logging backend.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
