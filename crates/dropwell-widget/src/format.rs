//! Human-readable byte-size formatting.

/// Unit table for [`format_file_size`]. Counts past the last entry are
/// clamped to it rather than indexed out of range.
const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a byte count for display, e.g. `1536` -> `"1.5 KB"`.
///
/// Picks the largest unit `u` with `1024^u <= bytes`, divides, rounds to
/// two decimal places, and strips trailing fractional zeros
/// (`"1.50"` -> `"1.5"`, `"2.00"` -> `"2"`). Zero formats as
/// `"0 Bytes"` exactly.
///
/// The unit table stops at GB; anything at or above 1024^4 bytes is
/// rendered as a large GB value rather than growing the table.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_owned();
    }

    // Precision loss above 2^53 bytes (8 PiB) only blurs the displayed
    // mantissa, never the chosen unit.
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_bytes() {
        assert_eq!(format_file_size(0), "0 Bytes");
    }

    #[test]
    fn sub_kilobyte_counts_stay_in_bytes() {
        assert_eq!(format_file_size(1), "1 Bytes");
        assert_eq!(format_file_size(500), "500 Bytes");
        assert_eq!(format_file_size(1023), "1023 Bytes");
    }

    #[test]
    fn exact_unit_boundaries() {
        assert_eq!(format_file_size(1024), "1 KB");
        assert_eq!(format_file_size(1_048_576), "1 MB");
        assert_eq!(format_file_size(1_073_741_824), "1 GB");
    }

    #[test]
    fn trailing_zeros_are_stripped() {
        // 1536 / 1024 = 1.50 -> "1.5"
        assert_eq!(format_file_size(1536), "1.5 KB");
        // 2048 / 1024 = 2.00 -> "2"
        assert_eq!(format_file_size(2048), "2 KB");
    }

    #[test]
    fn two_decimal_rounding() {
        // 2_500_000 / 1024^2 = 2.38418...
        assert_eq!(format_file_size(2_500_000), "2.38 MB");
        // 1500 / 1024 = 1.46484...
        assert_eq!(format_file_size(1500), "1.46 KB");
    }

    #[test]
    fn counts_past_the_table_clamp_to_gb() {
        // 1 TiB renders as 1024 GB, not an out-of-range unit.
        assert_eq!(format_file_size(1024 * 1_073_741_824), "1024 GB");
        assert!(format_file_size(u64::MAX).ends_with(" GB"));
    }

    #[test]
    fn rounding_at_a_unit_boundary_can_display_1024() {
        // 1_048_575 bytes is 1023.999 KB, which rounds to "1024 KB"
        // rather than promoting to MB. Matches the floor-then-round
        // order of operations.
        assert_eq!(format_file_size(1_048_575), "1024 KB");
    }

    #[test]
    fn chosen_unit_keeps_mantissa_in_range() {
        // Away from rounding boundaries, the displayed value is in
        // [1, 1024) and the unit is the largest power of 1024 that fits.
        for bytes in [
            1u64,
            999,
            1023,
            1024,
            1025,
            10_000,
            1_000_000,
            1_048_576,
            5_000_000_000,
            1_000_000_000_000,
        ] {
            let formatted = format_file_size(bytes);
            let (value, unit) = formatted.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            assert!(
                (1.0..1024.0).contains(&value),
                "{bytes} formatted as {formatted}: mantissa out of range"
            );
            let exponent = match unit {
                "Bytes" => 0u32,
                "KB" => 1,
                "MB" => 2,
                "GB" => 3,
                other => unreachable!("unexpected unit {other}"),
            };
            assert!(
                1024u64.pow(exponent) <= bytes,
                "{bytes} formatted as {formatted}: unit too large"
            );
            if exponent < 3 {
                assert!(
                    1024u64.pow(exponent + 1) > bytes,
                    "{bytes} formatted as {formatted}: unit too small"
                );
            }
        }
    }
}
