//! Logging macros with `"key" => value` context, backed by the `log` facade

/// Log error with Code type - accepts Display types for context values
#[macro_export]
macro_rules! log_error {
    ($code:expr, $message:expr) => {
        $crate::logging::log_error_with_context(module_path!(), $code, $message, &[])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::logging::log_error_with_context(
            module_path!(),
            $code,
            $message,
            &[$(($key, format!("{}", $value))),+],
        )
    };
}

/// Log success with Code type
#[macro_export]
macro_rules! log_success {
    ($code:expr, $message:expr) => {
        $crate::logging::log_success_with_context(module_path!(), $code, $message, &[])
    };

    ($code:expr, $message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::logging::log_success_with_context(
            module_path!(),
            $code,
            $message,
            &[$(($key, format!("{}", $value))),+],
        )
    };
}

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($message:expr) => {
        $crate::logging::log_with_context(module_path!(), $crate::logging::Level::Info, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::logging::log_with_context(
            module_path!(),
            $crate::logging::Level::Info,
            $message,
            &[$(($key, format!("{}", $value))),+],
        )
    };
}

/// Log warning message
#[macro_export]
macro_rules! log_warning {
    ($message:expr) => {
        $crate::logging::log_with_context(module_path!(), $crate::logging::Level::Warn, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::logging::log_with_context(
            module_path!(),
            $crate::logging::Level::Warn,
            $message,
            &[$(($key, format!("{}", $value))),+],
        )
    };
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($message:expr) => {
        $crate::logging::log_with_context(module_path!(), $crate::logging::Level::Debug, $message, &[])
    };

    ($message:expr, $($key:expr => $value:expr),+ $(,)?) => {
        $crate::logging::log_with_context(
            module_path!(),
            $crate::logging::Level::Debug,
            $message,
            &[$(($key, format!("{}", $value))),+],
        )
    };
}
