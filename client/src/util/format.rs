//! Display formatting for counts.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group an integer's digits in threes with `,` (en-US style).
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Like count label shown under a post, e.g. `1,234 likes`.
pub fn likes_label(likes: u64) -> String {
    format!("{} likes", group_thousands(likes))
}
