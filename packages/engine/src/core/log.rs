//! Console logging
//!
//! In the browser the messages go to `console.log` / `console.warn`.
//! Off wasm32 (native tests, benches) they are swallowed so nothing
//! reaches for a JS import that does not exist.
//!
//! Usage:
//! ```rust
//! use ballpit_engine::console_log;
//!
//! let count = 10;
//! console_log!("populated world with {} particles", count);
//! ```

#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {
        $crate::core::log::log(&format!($($arg)*))
    };
}

#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {
        $crate::core::log::warn(&format!($($arg)*))
    };
}

#[doc(hidden)]
pub fn log(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

#[doc(hidden)]
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&message.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}
