//! Various internal error handling mechanisms

/// Cold path hint, causes compiler to better optimize unlikely error paths.
#[cold]
pub(crate) fn cold_path() {}

/// Panic on `Err` value in debug mode.
macro_rules! log_or_panic_result {
    ($expr:expr, $($msg:expr),*) => {
        let res = $expr;
        match res {
            Ok(_) => {}
            Err(_) => {
                $crate::error_handling::log_or_panic!($($msg),*);
            }
        }
    };
}

/// Version of stdlib `debug_assert` that uses `log_or_panic` in order to get logging.
macro_rules! log_or_panic_assert {
    ($check:expr, $($msg:expr),*) => {
        if !$check {
            $crate::error_handling::log_or_panic!($($msg),*);
        }
    };
}

/// Panic on debug builds only
///
/// This lives in a gray zone between normal panics and Result/Option.
/// Use it when the error path can only be reached through a bug in this crate (for example
/// writing into a `String` failing), and there is a reasonable way to carry on in release builds.
///
/// *IMPORTANT:* This is not for malformed user input. Selectors, property names and values are
/// passed through verbatim, and at most get a `warn` log.
macro_rules! log_or_panic {
    ($($msg:expr),*) => {
        $crate::error_handling::cold_path();

        ::log::error!($($msg),*);
        if cfg!(debug_assertions) {
            panic!($($msg),*);
        }
    };
}

pub(crate) use {log_or_panic, log_or_panic_assert, log_or_panic_result};

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "Error in release mode")]
    fn test_debug_expect() {
        log_or_panic_result!(Err::<(), _>("error"), "Error in release mode");
    }

    #[test]
    #[should_panic(expected = "This won't panic in release")]
    fn test_debug_panic() {
        log_or_panic!("This won't panic in release");
    }

    #[test]
    fn passing_assert_is_silent() {
        let selector = ".btn";
        log_or_panic_assert!(!selector.is_empty(), "Selector was empty");
    }
}
