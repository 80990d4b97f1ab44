//! Error type shared by the filter engine.
//!
//! The lenient entry points ([`filter`](fn@crate::filter), [`crate::Filterer::apply`]) never
//! return these errors: they log them and skip the offending property. The strict
//! entry point [`crate::Filterer::try_apply`] surfaces the first one.

use crate::value::ScalarKind;
use config::ConfigError;
use std::fmt;

/// Filter engine error type
#[derive(Debug)]
pub enum FilterError {
    /// A filter value could not be converted to the column's value type
    Coercion {
        /// Debug rendering of the rejected value
        value: String,
        /// Kind the value was being converted to
        target: ScalarKind,
    },
    /// A range bound kind has no registered bound builder
    UnsupportedRangeKind(ScalarKind),
    /// A range with neither a lower nor an upper bound
    EmptyRange {
        /// Entity property the range was aimed at
        property: &'static str,
    },
    /// A loosely typed filter value with no clause semantics (e.g. a JSON object)
    UnsupportedValue {
        /// Filter property name as supplied by the caller
        property: String,
        /// Short description of the rejected shape
        reason: String,
    },
    /// Configuration loading error
    Config(ConfigError),
}

impl FilterError {
    pub(crate) fn coercion(value: &impl fmt::Debug, target: ScalarKind) -> Self {
        FilterError::Coercion {
            value: format!("{value:?}"),
            target,
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::Coercion { value, target } => {
                write!(f, "Coercion error: cannot convert {value} to {target}")
            }
            FilterError::UnsupportedRangeKind(kind) => {
                write!(f, "Unsupported range bound kind: {kind}")
            }
            FilterError::EmptyRange { property } => {
                write!(f, "Range on `{property}` has neither a lower nor an upper bound")
            }
            FilterError::UnsupportedValue { property, reason } => {
                write!(f, "Unsupported filter value for `{property}`: {reason}")
            }
            FilterError::Config(e) => {
                write!(f, "Configuration error: {e}")
            }
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FilterError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for FilterError {
    fn from(err: ConfigError) -> Self {
        FilterError::Config(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion_display_names_target_kind() {
        let err = FilterError::coercion(&"abc", ScalarKind::I32);
        assert_eq!(err.to_string(), "Coercion error: cannot convert \"abc\" to i32");
    }

    #[test]
    fn test_config_error_is_source() {
        use std::error::Error;

        let err = FilterError::from(ConfigError::NotFound("filter".to_string()));
        assert!(err.source().is_some());
        assert!(FilterError::UnsupportedRangeKind(ScalarKind::Bool).source().is_none());
    }
}
