#[inline]
pub fn safe_truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}


/// Capitalizes the first letter of every alphabetic run and lowercases the
/// rest, so "lake pichola" becomes "Lake Pichola".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}

/// Replaces the default panic hook, which prints the panic location to
/// stderr, with one that only emits a `debug!` event. Recovered faults then
/// reach the user as guidance text alone.
pub fn install_quiet_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::debug!("Recovered internal fault: {}", info);
    }));
}
