//! Log macros for every build of the crate.
//!
//! With the `defmt` feature the macros forward to the [defmt] macros of the same name. Under
//! test or `test-utils` they print to stderr, and `error!` panics in tests. Otherwise the
//! arguments are evaluated and dropped. Only the `{}` and `{:?}` placeholders work with all
//! three, not the defmt display hints.

#[allow(unused)]
#[cfg(all(not(test), not(feature = "test-utils"), not(feature = "defmt")))]
mod silent {
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),* $(,)?) => {{ $(let _ = &$arg;)* }};
    }
}

#[cfg(all(not(test), not(feature = "test-utils"), feature = "defmt"))]
mod defmt {
    /// Log at debug level.
    ///
    /// ```rust
    /// # #[macro_use] extern crate oledpad_firmware;
    /// # fn main() {
    /// let layer = 3;
    /// debug!("moved to layer {}", layer);
    /// # }
    /// ```
    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),* $(,)?) => { defmt::debug!($($arg),*) };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),* $(,)?) => { defmt::info!($($arg),*) };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),* $(,)?) => { defmt::warn!($($arg),*) };
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),* $(,)?) => { defmt::error!($($arg),*) };
    }
}

#[cfg(any(test, feature = "test-utils"))]
mod stderr {
    #[doc(hidden)]
    #[macro_export]
    macro_rules! __log_stderr {
        ($level:literal, $($arg:expr),*) => {{
            extern crate std;
            std::eprintln!("{}: {}", $level, std::format_args!($($arg),*))
        }};
    }

    #[macro_export]
    macro_rules! debug {
        ($($arg:expr),* $(,)?) => { $crate::__log_stderr!("DEBUG", $($arg),*) };
    }

    #[macro_export]
    macro_rules! info {
        ($($arg:expr),* $(,)?) => { $crate::__log_stderr!("INFO", $($arg),*) };
    }

    #[macro_export]
    macro_rules! warn {
        ($($arg:expr),* $(,)?) => { $crate::__log_stderr!("WARN", $($arg),*) };
    }

    #[macro_export]
    macro_rules! error {
        ($($arg:expr),* $(,)?) => {{
            extern crate std;
            if cfg!(test) {
                std::panic!("{}", std::format_args!($($arg),*));
            } else {
                $crate::__log_stderr!("ERROR", $($arg),*)
            }
        }};
    }
}
