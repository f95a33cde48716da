//! Result type alias

use super::errors::LocalizeError;

/// Result type alias for localization operations
///
/// # Examples
///
/// ```
/// use template_localizer::domain::result::Result;
/// use template_localizer::domain::errors::LocalizeError;
///
/// fn failing_function() -> Result<()> {
///     Err(LocalizeError::Configuration("template folder is not set".to_string()))
/// }
///
/// assert!(failing_function().is_err());
/// ```
pub type Result<T> = std::result::Result<T, LocalizeError>;
