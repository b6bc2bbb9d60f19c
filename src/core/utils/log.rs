//! Console Logging Macros
//!
//! Thin wrappers over `web_sys::console` so engine code can log without
//! caring which target it runs on.
//!
//! - wasm32: forwards to the browser console
//! - native: arguments are type-checked and discarded (tests stay quiet and
//!   never touch JS imports)
//!
//! Usage:
//! ```rust
//! use torque_engine::{console_log, console_warn};
//!
//! let ticks = 3;
//! console_log!("ran {} ticks", ticks);
//! console_warn!("disk mass {} is invalid", -1.0);
//! ```

/// Log an informational message to the browser console.
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

/// Log a warning to the browser console.
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            ::web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
