//! Error macros for citynet

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::CityNetError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::CityNetError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting an edge insertion
#[macro_export]
macro_rules! bail_edge {
    ($($arg:tt)*) => {
        return Err($crate::error::CityNetError::invalid_edge(format!($($arg)*)))
    };
}
