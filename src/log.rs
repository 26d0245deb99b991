//! Optional console logging.
//!
//! With the `esp32-log` feature the macro forwards to `esp_println::println!`.
//! Without it the arguments are still type-checked but nothing is emitted.

macro_rules! log {
    ($($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!($($arg)*);
        #[cfg(not(feature = "esp32-log"))]
        let _ = core::format_args!($($arg)*);
    }};
}

pub(crate) use log;
