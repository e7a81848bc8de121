/// Lag-style coercion: only a non-empty run of ASCII digits is a number, anything else
/// (including a leading sign, or the `-` Kafka prints for unknown offsets) counts as zero.
pub fn coerce_number(value: &str) -> u64 {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return 0;
    }

    // all digits, so the only possible failure is overflow
    value.parse::<u64>().unwrap_or(u64::MAX)
}
