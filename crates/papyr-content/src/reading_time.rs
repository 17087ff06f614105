//! Reading-time estimation.
//!
//! A pure function of the text: whitespace-split word count divided by a
//! fixed reading rate, rounded up. Any non-empty text reads for at least one
//! minute; empty text reads for zero.

/// Default reading rate in words per minute.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Estimate reading time in minutes at the default rate.
///
/// # Examples
///
/// ```rust
/// use papyr_content::reading_time::estimate_minutes;
///
/// assert_eq!(estimate_minutes(""), 0);
/// assert_eq!(estimate_minutes("word"), 1);
/// ```
pub fn estimate_minutes(text: &str) -> u32 {
    estimate_minutes_at(text, WORDS_PER_MINUTE)
}

/// Estimate reading time in minutes at a configurable rate.
///
/// Ceiling division: any non-zero remainder adds a minute. A rate of zero is
/// treated as one word per minute rather than dividing by zero.
pub fn estimate_minutes_at(text: &str, words_per_minute: u32) -> u32 {
    let words = text.split_whitespace().count() as u32;
    if words == 0 {
        return 0;
    }
    words.div_ceil(words_per_minute.max(1))
}

// ============================================================================
// Tests
// ============================================================================
