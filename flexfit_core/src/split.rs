//! Split selection.

use crate::{Experience, SplitType};

/// Classify a week by the number of training days.
///
/// Experience is accepted for future policies but does not change the
/// result today.
///
/// | days | split |
/// |------|-------|
/// | ≤ 3  | full body (3 days is the full/upper/lower hybrid) |
/// | 4    | upper/lower |
/// | ≥ 5  | push/pull/legs |
pub fn select_split(day_count: usize, _experience: Experience) -> SplitType {
    match day_count {
        0..=3 => SplitType::FullBody,
        4 => SplitType::UpperLower,
        _ => SplitType::PushPullLegs,
    }
}
