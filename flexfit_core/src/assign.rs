//! Muscle-group assignment.
//!
//! The weekly layout is a hand-authored table keyed on the number of
//! training days. Every row is written out so the frequency of each muscle
//! group can be read off directly:
//!
//! | days | layout |
//! |------|--------|
//! | 1    | full body |
//! | 2    | full body, full body |
//! | 3    | full body, upper, lower |
//! | 4    | upper, lower, upper, lower |
//! | 5    | push, pull, legs, upper, lower |
//! | 6+   | push, pull, legs repeated |
//!
//! The table switches on the day count alone. The split type computed by
//! [`crate::split::select_split`] only labels the plan.

use crate::{MuscleGroup, SplitType};

use crate::MuscleGroup::{
    Back, Biceps, Calves, Chest, Core, Glutes, Hamstrings, Quadriceps, Shoulders, Triceps,
};

const FULL_BODY: [MuscleGroup; 10] = MuscleGroup::ALL;
const UPPER: [MuscleGroup; 5] = MuscleGroup::UPPER;
const LOWER: [MuscleGroup; 5] = [Quadriceps, Hamstrings, Glutes, Calves, Core];
const PUSH: [MuscleGroup; 3] = [Chest, Shoulders, Triceps];
const PULL: [MuscleGroup; 2] = [Back, Biceps];
const LEGS: [MuscleGroup; 4] = [Quadriceps, Hamstrings, Glutes, Calves];

/// Map each day to its target muscle groups.
///
/// Returns one entry per input day, in input order. An empty day list
/// yields an empty assignment.
pub fn assign_muscle_groups<S: AsRef<str>>(
    split: SplitType,
    days: &[S],
) -> Vec<(String, Vec<MuscleGroup>)> {
    tracing::debug!(
        "Assigning muscle groups for {} days ({} split)",
        days.len(),
        split
    );

    let layout: Vec<&[MuscleGroup]> = match days.len() {
        0 => Vec::new(),
        1 => vec![&FULL_BODY[..]],
        2 => vec![&FULL_BODY[..], &FULL_BODY[..]],
        3 => vec![&FULL_BODY[..], &UPPER[..], &LOWER[..]],
        4 => vec![&UPPER[..], &LOWER[..], &UPPER[..], &LOWER[..]],
        5 => vec![&PUSH[..], &PULL[..], &LEGS[..], &UPPER[..], &LOWER[..]],
        n => {
            let cycle: [&[MuscleGroup]; 3] = [&PUSH[..], &PULL[..], &LEGS[..]];
            (0..n).map(|i| cycle[i % 3]).collect()
        }
    };

    days.iter()
        .zip(layout)
        .map(|(day, groups)| (day.as_ref().to_string(), groups.to_vec()))
        .collect()
}
