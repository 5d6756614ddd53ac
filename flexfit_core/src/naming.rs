//! Display names and focus labels for generated plans.

use crate::{MuscleGroup, SplitType};

/// Name a training day after its muscle groups.
///
/// Rules apply in order: four or more groups is "Full Body", chest without
/// back is "Push Day", back without chest is "Pull Day", any quadriceps or
/// hamstrings is "Leg Day". Anything else joins the capitalized group names
/// with " & ".
pub fn name_day(muscle_groups: &[MuscleGroup]) -> String {
    let has = |g: MuscleGroup| muscle_groups.contains(&g);

    if muscle_groups.len() >= 4 {
        return "Full Body".to_string();
    }
    if has(MuscleGroup::Chest) && !has(MuscleGroup::Back) {
        return "Push Day".to_string();
    }
    if has(MuscleGroup::Back) && !has(MuscleGroup::Chest) {
        return "Pull Day".to_string();
    }
    if has(MuscleGroup::Quadriceps) || has(MuscleGroup::Hamstrings) {
        return "Leg Day".to_string();
    }

    muscle_groups
        .iter()
        .map(|g| g.display_name())
        .collect::<Vec<_>>()
        .join(" & ")
}

/// Collapse a day's muscle groups into user-facing focus labels.
///
/// Calves and core count as neither upper nor lower body here, so a day
/// made only of them keeps its raw group names.
pub fn generalize_focus(muscle_groups: &[MuscleGroup]) -> Vec<String> {
    if muscle_groups.len() >= 8 {
        return vec!["Full Body".to_string()];
    }

    let has_upper = MuscleGroup::UPPER.iter().any(|g| muscle_groups.contains(g));
    let has_lower = MuscleGroup::LOWER_BODY
        .iter()
        .any(|g| muscle_groups.contains(g));

    match (has_upper, has_lower) {
        (true, false) => vec!["Upper Body".to_string()],
        (false, true) => vec!["Lower Body".to_string()],
        (true, true) => vec!["Full Body".to_string()],
        (false, false) => muscle_groups.iter().map(|g| g.to_string()).collect(),
    }
}

/// Plan title, e.g. "PUSH-PULL-LEGS Split (5 days)"
pub fn plan_name(split: SplitType, day_count: usize) -> String {
    format!("{} Split ({} days)", split.label().to_uppercase(), day_count)
}
