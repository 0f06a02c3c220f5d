/// Logs a warning the first time this call site is reached, and stays silent afterwards.
macro_rules! warn_once(
    ($($arg: tt)+) => {
        {
            use core::sync::atomic::{AtomicBool, Ordering};
            static WARNED: AtomicBool = AtomicBool::new(false);

            if !WARNED.swap(true, Ordering::Relaxed) {
                log::warn!($($arg)+);
            }
        }
    }
);
