use crate::FgError;

/// Edge weight. Unsigned, so a negative weight cannot reach the engine.
pub type Weight = u32;

/// Total weight of a path.
///
/// Wider than `Weight` so a simple path over any realistic vertex count
/// cannot overflow.
pub type Dist = u64;

/// Matrix value meaning "no finite path known".
pub const INF_DIST: Dist = Dist::MAX;

/// Sum two path lengths, or `None` if either side is the sentinel.
///
/// The result saturates just below the sentinel so a sum can never be
/// mistaken for "unreachable" or wrap around into a shorter path.
pub fn path_sum(a: Dist, b: Dist) -> Option<Dist> {
    if a == INF_DIST || b == INF_DIST {
        return None;
    }
    Some(a.saturating_add(b).min(INF_DIST - 1))
}

/// Parse an edge weight supplied by a collaborator.
pub fn parse_weight(s: &str) -> Result<Weight, FgError> {
    let trimmed = s.trim();
    trimmed.parse::<Weight>().map_err(|_| {
        if trimmed.starts_with('-') && trimmed[1..].parse::<u64>().is_ok() {
            FgError::invalid(format!("negative weight {trimmed}"))
        } else {
            FgError::invalid(format!("'{trimmed}' is not a weight"))
        }
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn finite_sums_are_exact(a in 0..u32::MAX as u64, b in 0..u32::MAX as u64) {
            prop_assert_eq!(path_sum(a, b), Some(a + b));
        }
    }
}
