//! Plan generation engine.
//!
//! Generation is a three-stage pipeline:
//! - Pick a split label from the day count
//! - Assign muscle groups to each available day
//! - Sample exercises for each day within the time budget
//!
//! Only the last stage is random. Day names, focus labels and muscle-group
//! assignments are a pure function of the input.

use crate::assign::assign_muscle_groups;
use crate::naming::{generalize_focus, name_day, plan_name};
use crate::selector::select_exercises;
use crate::split::select_split;
use crate::{Catalog, SchedulerInput, ScheduledDay, WorkoutDay, WorkoutPlan};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// Generate a weekly plan using the thread-local random generator.
///
/// The input is not checked; see [`crate::input::check`] for the
/// preconditions callers are expected to enforce. An empty day list yields a
/// plan with no days.
pub fn generate_plan(input: &SchedulerInput, catalog: &Catalog, owner_id: &str) -> WorkoutPlan {
    generate_plan_with_rng(input, catalog, owner_id, &mut rand::thread_rng())
}

/// Generate a weekly plan drawing exercise samples from `rng`.
pub fn generate_plan_with_rng<R: Rng + ?Sized>(
    input: &SchedulerInput,
    catalog: &Catalog,
    owner_id: &str,
    rng: &mut R,
) -> WorkoutPlan {
    let day_count = input.available_days.len();
    let split = select_split(day_count, input.experience);

    tracing::info!(
        "Generating {} plan: {} days, {} level, {} min/session",
        split,
        day_count,
        input.experience,
        input.minutes_per_session
    );

    let days: Vec<ScheduledDay> = assign_muscle_groups(split, input.available_days.as_slice())
        .into_iter()
        .map(|(day, groups)| {
            let exercises = select_exercises(
                catalog,
                &groups,
                input.minutes_per_session,
                input.experience,
                &mut *rng,
            );
            let workout = WorkoutDay {
                name: name_day(&groups),
                focus: generalize_focus(&groups),
                exercises,
            };
            tracing::debug!(
                "{}: {} ({} exercises)",
                day,
                workout.name,
                workout.exercises.len()
            );
            ScheduledDay { day, workout }
        })
        .collect();

    WorkoutPlan {
        id: Uuid::new_v4(),
        owner_id: owner_id.to_string(),
        name: plan_name(split, day_count),
        split,
        available_days: input.available_days.clone(),
        minutes_per_session: input.minutes_per_session,
        goal: input.goal,
        days,
        created_at: Utc::now(),
        is_active: true,
        difficulty: input.experience,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::selector::exercise_count;
    use crate::{Experience, Goal, MuscleGroup, SplitType};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const WEEK: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];

    fn input(days: usize, experience: Experience, minutes: u32) -> SchedulerInput {
        SchedulerInput {
            available_days: WEEK[..days].iter().map(|d| d.to_string()).collect(),
            experience,
            goal: Goal::Muscle,
            minutes_per_session: minutes,
        }
    }

    #[test]
    fn test_one_day_beginner_45_minutes() {
        crate::logging::init_test();
        let plan = generate_plan(
            &input(1, Experience::Beginner, 45),
            default_catalog(),
            "user-1",
        );

        assert_eq!(plan.split, SplitType::FullBody);
        assert_eq!(plan.name, "FULLBODY Split (1 days)");
        assert_eq!(plan.days.len(), 1);

        let monday = plan.day("Monday").unwrap();
        assert_eq!(monday.name, "Full Body");
        assert_eq!(monday.focus, vec!["Full Body"]);
        assert_eq!(monday.exercises.len(), 5);
        assert!(monday.exercises.iter().all(|e| e.difficulty <= 1));
    }

    #[test]
    fn test_four_days_advanced_60_minutes() {
        let plan = generate_plan(
            &input(4, Experience::Advanced, 60),
            default_catalog(),
            "user-1",
        );

        assert_eq!(plan.split, SplitType::UpperLower);
        let focus: Vec<&str> = plan
            .days
            .iter()
            .map(|d| d.workout.focus[0].as_str())
            .collect();
        assert_eq!(focus, vec!["Upper Body", "Lower Body", "Upper Body", "Lower Body"]);

        for (i, day) in plan.days.iter().enumerate() {
            assert_eq!(day.workout.exercises.len(), 6);
            let upper_day = i % 2 == 0;
            for exercise in &day.workout.exercises {
                assert_eq!(
                    MuscleGroup::UPPER.contains(&exercise.muscle_group),
                    upper_day,
                    "{} on {}",
                    exercise.id,
                    day.day
                );
            }
        }
    }

    #[test]
    fn test_seven_days_intermediate_30_minutes() {
        let plan = generate_plan(
            &input(7, Experience::Intermediate, 30),
            default_catalog(),
            "user-1",
        );

        assert_eq!(plan.split, SplitType::PushPullLegs);
        assert_eq!(plan.name, "PUSH-PULL-LEGS Split (7 days)");
        // Legs covers four groups, which the naming rules call "Full Body"
        let names: Vec<&str> = plan.days.iter().map(|d| d.workout.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Push Day",
                "Pull Day",
                "Full Body",
                "Push Day",
                "Pull Day",
                "Full Body",
                "Push Day"
            ]
        );
        let focus: Vec<&str> = plan.days.iter().map(|d| d.workout.focus[0].as_str()).collect();
        assert_eq!(focus[2], "Lower Body");
        for day in &plan.days {
            assert_eq!(day.workout.exercises.len(), 3);
            assert!(day.workout.exercises.iter().all(|e| e.difficulty <= 2));
        }
    }

    #[test]
    fn test_one_workout_day_per_input_day() {
        for count in 0..=7 {
            let plan = generate_plan(
                &input(count, Experience::Beginner, 45),
                default_catalog(),
                "user-1",
            );
            assert_eq!(plan.days.len(), count);
            let days: Vec<&str> = plan.days.iter().map(|d| d.day.as_str()).collect();
            assert_eq!(days, WEEK[..count].to_vec());
        }
    }

    #[test]
    fn test_no_duplicates_and_bounded_counts() {
        let mut rng = StdRng::seed_from_u64(5);
        for count in 1..=7 {
            for minutes in [5, 20, 38, 45, 90, 500] {
                let plan = generate_plan_with_rng(
                    &input(count, Experience::Advanced, minutes),
                    default_catalog(),
                    "user-1",
                    &mut rng,
                );
                for day in &plan.days {
                    let ids: HashSet<&str> =
                        day.workout.exercises.iter().map(|e| e.id.as_str()).collect();
                    assert_eq!(ids.len(), day.workout.exercises.len());
                    assert_eq!(day.workout.exercises.len(), exercise_count(minutes));
                }
            }
        }
    }

    #[test]
    fn test_structure_is_deterministic() {
        let request = input(5, Experience::Advanced, 60);
        let first = generate_plan(&request, default_catalog(), "user-1");
        let second = generate_plan(&request, default_catalog(), "user-1");

        assert_eq!(first.name, second.name);
        for (a, b) in first.days.iter().zip(&second.days) {
            assert_eq!(a.day, b.day);
            assert_eq!(a.workout.name, b.workout.name);
            assert_eq!(a.workout.focus, b.workout.focus);
        }
    }

    #[test]
    fn test_exercise_content_varies_between_runs() {
        let request = input(1, Experience::Advanced, 60);
        let mut rng = StdRng::seed_from_u64(2024);
        let first = generate_plan_with_rng(&request, default_catalog(), "user-1", &mut rng);

        let differs = (0..20).any(|_| {
            let next = generate_plan_with_rng(&request, default_catalog(), "user-1", &mut rng);
            next.days[0].workout.exercises != first.days[0].workout.exercises
        });
        assert!(differs, "50-exercise pool should not give the same 6 every time");
    }

    #[test]
    fn test_plan_echoes_input() {
        let request = input(3, Experience::Intermediate, 50);
        let plan = generate_plan(&request, default_catalog(), "owner-42");

        assert_eq!(plan.owner_id, "owner-42");
        assert_eq!(plan.available_days, request.available_days);
        assert_eq!(plan.minutes_per_session, 50);
        assert_eq!(plan.goal, Goal::Muscle);
        assert_eq!(plan.difficulty, Experience::Intermediate);
        assert!(plan.is_active);
    }

    #[test]
    fn test_empty_catalog_gives_empty_days() {
        let plan = generate_plan(
            &input(3, Experience::Beginner, 45),
            &Catalog::default(),
            "user-1",
        );
        assert_eq!(plan.days.len(), 3);
        assert_eq!(plan.exercise_count(), 0);
    }

    #[test]
    fn test_empty_day_list_gives_empty_plan() {
        let plan = generate_plan(
            &input(0, Experience::Beginner, 45),
            default_catalog(),
            "user-1",
        );
        assert!(plan.days.is_empty());
        assert_eq!(plan.name, "FULLBODY Split (0 days)");
    }
}
