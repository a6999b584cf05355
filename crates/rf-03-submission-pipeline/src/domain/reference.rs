//! Submission references.
//!
//! References combine a high-resolution timestamp with a random component,
//! so two calls in the same instant still differ with high probability.

use rand::Rng;
use shared_types::Timestamp;

/// Contact message reference: `MSG_<micros>_<8 hex digits>`.
pub fn message_reference<R: Rng + ?Sized>(now: Timestamp, rng: &mut R) -> String {
    format!("MSG_{}_{:08x}", now.timestamp_micros(), rng.gen::<u32>())
}

/// Order id: `CMD-` + last 6 digits of the millisecond clock + 3 random digits.
pub fn order_reference<R: Rng + ?Sized>(now: Timestamp, rng: &mut R) -> String {
    format!(
        "CMD-{:06}{:03}",
        now.timestamp_millis().rem_euclid(1_000_000),
        rng.gen_range(0..1_000)
    )
}
