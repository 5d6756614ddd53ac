//! Exercise selection for a single training day.

use crate::{Catalog, Exercise, Experience, MuscleGroup};
use rand::seq::SliceRandom;
use rand::Rng;

/// Exercises per session minute. One exercise takes roughly 7.5 minutes
/// including rest.
pub const EXERCISES_PER_MINUTE: f64 = 0.13;

/// Fewest exercises a day asks for
pub const MIN_EXERCISES: usize = 3;

/// Most exercises a day asks for
pub const MAX_EXERCISES: usize = 6;

/// How many exercises fit into a session of the given length.
///
/// Always between [`MIN_EXERCISES`] and [`MAX_EXERCISES`].
pub fn exercise_count(minutes: u32) -> usize {
    let fit = (f64::from(minutes) * EXERCISES_PER_MINUTE).floor() as usize;
    fit.clamp(MIN_EXERCISES, MAX_EXERCISES)
}

/// Catalog exercises that target one of `muscle_groups` and do not exceed
/// the experience tier's difficulty ceiling. Easier tiers stay eligible.
pub fn eligible_exercises<'a>(
    catalog: &'a Catalog,
    muscle_groups: &[MuscleGroup],
    experience: Experience,
) -> Vec<&'a Exercise> {
    let ceiling = experience.difficulty_ceiling();
    catalog
        .exercises
        .iter()
        .filter(|ex| muscle_groups.contains(&ex.muscle_group) && ex.difficulty <= ceiling)
        .collect()
}

/// Pick a day's exercises.
///
/// The eligible pool is shuffled and the first [`exercise_count`] entries
/// are taken. A pool smaller than the target count is returned whole, and an
/// empty pool yields an empty day. Sampling is without replacement, so no
/// exercise repeats within the day.
pub fn select_exercises<R: Rng + ?Sized>(
    catalog: &Catalog,
    muscle_groups: &[MuscleGroup],
    minutes: u32,
    experience: Experience,
    rng: &mut R,
) -> Vec<Exercise> {
    let mut pool = eligible_exercises(catalog, muscle_groups, experience);
    let count = exercise_count(minutes);

    if pool.len() < count {
        tracing::warn!(
            "Only {} eligible exercises for {:?} at {} level (wanted {})",
            pool.len(),
            muscle_groups,
            experience,
            count
        );
    }

    pool.shuffle(rng);
    pool.into_iter().take(count).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn exercise(id: &str, group: MuscleGroup, difficulty: u8) -> Exercise {
        Exercise {
            id: id.into(),
            name: id.into(),
            muscle_group: group,
            target_muscle: None,
            difficulty,
            sets: 3,
            reps: "10".into(),
            equipment: vec![],
            instructions: String::new(),
            gif_url: None,
        }
    }

    #[test]
    fn test_exercise_count_clamps() {
        assert_eq!(exercise_count(5), 3);
        assert_eq!(exercise_count(30), 3);
        assert_eq!(exercise_count(38), 4);
        assert_eq!(exercise_count(45), 5);
        assert_eq!(exercise_count(60), 6);
        assert_eq!(exercise_count(500), 6);
        assert_eq!(exercise_count(0), 3);
    }

    #[test]
    fn test_count_bounds_with_ample_catalog() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        for minutes in 5..=500 {
            let picked = select_exercises(
                catalog,
                &MuscleGroup::UPPER,
                minutes,
                Experience::Beginner,
                &mut rng,
            );
            assert!(
                (MIN_EXERCISES..=MAX_EXERCISES).contains(&picked.len()),
                "{} minutes gave {} exercises",
                minutes,
                picked.len()
            );
            assert_eq!(picked.len(), exercise_count(minutes));
        }
    }

    #[test]
    fn test_small_pool_returned_whole() {
        let catalog = Catalog {
            exercises: vec![
                exercise("a", MuscleGroup::Calves, 1),
                exercise("b", MuscleGroup::Calves, 1),
                exercise("c", MuscleGroup::Chest, 1),
            ],
        };
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_exercises(
            &catalog,
            &[MuscleGroup::Calves],
            60,
            Experience::Advanced,
            &mut rng,
        );
        assert_eq!(picked.len(), 2);
        assert!(picked.iter().all(|ex| ex.muscle_group == MuscleGroup::Calves));
    }

    #[test]
    fn test_empty_pool_gives_empty_day() {
        let catalog = Catalog {
            exercises: vec![exercise("hard_squat", MuscleGroup::Quadriceps, 3)],
        };
        let mut rng = StdRng::seed_from_u64(1);
        let picked = select_exercises(
            &catalog,
            &[MuscleGroup::Quadriceps],
            45,
            Experience::Beginner,
            &mut rng,
        );
        assert!(picked.is_empty());
    }

    #[test]
    fn test_difficulty_ceiling_respected() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(42);
        for experience in [
            Experience::Beginner,
            Experience::Intermediate,
            Experience::Advanced,
        ] {
            for _ in 0..50 {
                let picked =
                    select_exercises(catalog, &MuscleGroup::ALL, 60, experience, &mut rng);
                assert!(picked
                    .iter()
                    .all(|ex| ex.difficulty <= experience.difficulty_ceiling()));
            }
        }
    }

    #[test]
    fn test_advanced_pool_includes_easier_tiers() {
        let catalog = default_catalog();
        let pool = eligible_exercises(catalog, &MuscleGroup::ALL, Experience::Advanced);
        let tiers: HashSet<u8> = pool.iter().map(|ex| ex.difficulty).collect();
        assert_eq!(tiers, HashSet::from([1, 2, 3]));
    }

    #[test]
    fn test_no_duplicates_within_day() {
        let catalog = default_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let picked =
                select_exercises(catalog, &MuscleGroup::ALL, 90, Experience::Advanced, &mut rng);
            let ids: HashSet<&str> = picked.iter().map(|ex| ex.id.as_str()).collect();
            assert_eq!(ids.len(), picked.len());
        }
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let catalog = default_catalog();
        let first = select_exercises(
            catalog,
            &MuscleGroup::ALL,
            60,
            Experience::Advanced,
            &mut StdRng::seed_from_u64(99),
        );
        let second = select_exercises(
            catalog,
            &MuscleGroup::ALL,
            60,
            Experience::Advanced,
            &mut StdRng::seed_from_u64(99),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_eligible_exercise_gets_picked_eventually() {
        let catalog = default_catalog();
        let pool = eligible_exercises(catalog, &[MuscleGroup::Back], Experience::Advanced);
        let mut seen = HashSet::new();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            for ex in select_exercises(
                catalog,
                &[MuscleGroup::Back],
                30,
                Experience::Advanced,
                &mut rng,
            ) {
                seen.insert(ex.id);
            }
        }
        assert_eq!(seen.len(), pool.len());
    }
}
