//! Ranges of the four coordinates that make up a cube state.

/// Number of edge orientation patterns (2^11).
pub const N_FLIP: u16 = 2048;

/// Number of corner orientation patterns (3^7).
pub const N_TWIST: u16 = 2187;

/// Number of corner permutations (8!).
pub const N_URF_TO_DLB: u32 = 40_320;

/// Number of edge permutations (12!).
pub const N_UR_TO_BR: u32 = 479_001_600;

#[cfg(test)]
mod tests {
    use super::*;

    fn factorial(n: u64) -> u64 {
        (1..=n).product()
    }

    #[test]
    fn ranges_match_group_sizes() {
        assert_eq!(u64::from(N_FLIP), 1 << 11);
        assert_eq!(u64::from(N_TWIST), 3u64.pow(7));
        assert_eq!(u64::from(N_URF_TO_DLB), factorial(8));
        assert_eq!(u64::from(N_UR_TO_BR), factorial(12));
    }
}
