/// User-facing Arabic message rendering
pub mod format;
/// Consistent log formatting helpers
pub mod logging;
/// Input validation for chat ids and location text
pub mod validation;
