//! Raw glucose to display unit conversion.

use crate::constants::MGDL_PER_MMOL;
use crate::models::GlucoseValue;

/// Convert a raw mg/dL measurement into mmol/L, rounded half-up to one decimal
pub fn convert(raw: u32) -> GlucoseValue {
    // round_half_up(raw * 10 / 18) in integer arithmetic
    let tenths = (u64::from(raw) * 10 + MGDL_PER_MMOL / 2) / MGDL_PER_MMOL;
    GlucoseValue::from_tenths(tenths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_feed_samples() {
        assert_eq!(convert(154).to_string(), "8.6");
        assert_eq!(convert(160).to_string(), "8.9");
        assert_eq!(convert(166).to_string(), "9.2");
    }

    #[test]
    fn test_convert_zero() {
        assert_eq!(convert(0).to_string(), "0.0");
    }

    #[test]
    fn test_convert_rounds_half_up() {
        // 1 / 18 = 0.0555..
        assert_eq!(convert(1).to_string(), "0.1");
        // 2 / 18 = 0.111..
        assert_eq!(convert(2).to_string(), "0.1");
        // 158 / 18 = 8.777..
        assert_eq!(convert(158).to_string(), "8.8");
        // 157 / 18 = 8.722..
        assert_eq!(convert(157).to_string(), "8.7");
        assert_eq!(convert(9).to_string(), "0.5");
        assert_eq!(convert(153).to_string(), "8.5");
    }

    #[test]
    fn test_convert_matches_float_reference() {
        for raw in 0..=600u32 {
            let expected = (f64::from(raw) / 18.0 * 10.0 + 0.5 + 1e-9).floor() as u64;
            assert_eq!(convert(raw).tenths(), expected, "raw value {}", raw);
        }
    }

    #[test]
    fn test_convert_large_values_do_not_overflow() {
        assert_eq!(convert(u32::MAX).tenths(), (u64::from(u32::MAX) * 10 + 9) / 18);
    }
}
