//! Typewriter cadence rules. The component in the browser layer owns the
//! timers; the prefix arithmetic lives here so it can be exercised on the
//! host.

/// Milliseconds between character reveals once typing has started.
pub const CHAR_INTERVAL_MS: u32 = 50;

/// Wait before revealing the character at `shown` (0-based count of
/// characters already visible). The first character honors the
/// per-instance start delay; every later one follows the fixed cadence.
pub fn reveal_wait_ms(shown: usize, start_delay_ms: u32) -> u32 {
    if shown == 0 {
        start_delay_ms
    } else {
        CHAR_INTERVAL_MS
    }
}

/// The first `chars` characters of `text`, cut on a character boundary.
/// Asking for more characters than exist yields the whole string.
pub fn typed_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((boundary, _)) => &text[..boundary],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_grows_monotonically_to_the_full_string() {
        let text = "Web Design & SEO";
        let mut last_len = 0;

        for shown in 0..=text.chars().count() {
            let prefix = typed_prefix(text, shown);
            assert!(prefix.len() >= last_len);
            assert!(text.starts_with(prefix));
            last_len = prefix.len();
        }

        assert_eq!(typed_prefix(text, text.chars().count()), text);
    }

    #[test]
    fn prefix_never_exceeds_the_target() {
        assert_eq!(typed_prefix("abc", 10), "abc");
        assert_eq!(typed_prefix("", 3), "");
    }

    #[test]
    fn prefix_respects_multibyte_boundaries() {
        let text = "Mëso Më Shumë";
        for shown in 0..=text.chars().count() {
            let prefix = typed_prefix(text, shown);
            assert_eq!(prefix.chars().count(), shown.min(text.chars().count()));
        }
    }

    #[test]
    fn first_character_waits_the_start_delay() {
        assert_eq!(reveal_wait_ms(0, 2_000), 2_000);
        assert_eq!(reveal_wait_ms(1, 2_000), CHAR_INTERVAL_MS);
        assert_eq!(reveal_wait_ms(41, 2_000), CHAR_INTERVAL_MS);
    }
}
