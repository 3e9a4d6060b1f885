//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `tinycare_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use tinycare_core::{to_date_key, week_start_key, Clock, SystemClock};

fn main() {
    // Tiny probe to validate core crate wiring independently from the
    // Flutter/FFI runtime setup.
    let today = SystemClock.today();
    println!("tinycare_core ping={}", tinycare_core::ping());
    println!("tinycare_core version={}", tinycare_core::core_version());
    println!("today_key={}", to_date_key(today));
    println!("week_start_key={}", week_start_key(today));
}
