//! Exercise catalog: the built-in collection, JSON loading and validation.
//!
//! The built-in catalog covers every muscle group with three beginner
//! exercises and one each at intermediate and advanced, so every day of the
//! assignment table can be filled at every experience tier.

use crate::{Catalog, Error, Exercise, MuscleGroup, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

#[allow(clippy::too_many_arguments)]
fn ex(
    id: &str,
    name: &str,
    muscle_group: MuscleGroup,
    target_muscle: Option<&str>,
    difficulty: u8,
    sets: u32,
    reps: &str,
    equipment: &[&str],
    instructions: &str,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        muscle_group,
        target_muscle: target_muscle.map(Into::into),
        difficulty,
        sets,
        reps: reps.into(),
        equipment: equipment.iter().map(|e| e.to_string()).collect(),
        instructions: instructions.into(),
        gif_url: None,
    }
}

/// Builds the default catalog.
///
/// Prefer [`default_catalog`] outside of tests; it returns a cached copy.
pub fn build_default_catalog() -> Catalog {
    use crate::MuscleGroup::*;

    let exercises = vec![
        // ====================================================================
        // Chest
        // ====================================================================
        ex("push_up", "Push-up", Chest, Some("pectorals"), 1, 3, "8-12", &[],
            "Hands under shoulders, body straight, lower until the chest nearly touches the floor."),
        ex("incline_push_up", "Incline Push-up", Chest, Some("lower pectorals"), 1, 3, "10-15", &["bench"],
            "Hands on a bench, keep the body rigid and press back up."),
        ex("machine_chest_press", "Machine Chest Press", Chest, Some("pectorals"), 1, 3, "10-12", &["machine"],
            "Press the handles forward without locking the elbows, return slowly."),
        ex("dumbbell_bench_press", "Dumbbell Bench Press", Chest, Some("pectorals"), 2, 4, "8-10", &["dumbbells", "bench"],
            "Lower the dumbbells to chest level, press up until the arms are straight."),
        ex("barbell_bench_press", "Barbell Bench Press", Chest, Some("pectorals"), 3, 5, "5", &["barbell", "bench"],
            "Retract the shoulder blades, touch the bar to the lower chest and drive it up."),
        // ====================================================================
        // Back
        // ====================================================================
        ex("band_pull_apart", "Band Pull-apart", Back, Some("rhomboids"), 1, 3, "15", &["bands"],
            "Hold the band at shoulder height and pull it apart until it touches the chest."),
        ex("lat_pulldown", "Lat Pulldown", Back, Some("latissimus dorsi"), 1, 3, "10-12", &["machine"],
            "Pull the bar to the upper chest, squeeze the shoulder blades, return slowly."),
        ex("seated_cable_row", "Seated Cable Row", Back, Some("middle back"), 1, 3, "10-12", &["cable"],
            "Sit tall, row the handle to the stomach and pause."),
        ex("bent_over_row", "Barbell Bent-over Row", Back, Some("latissimus dorsi"), 2, 4, "8-10", &["barbell"],
            "Hinge at the hips, row the bar to the navel keeping the back flat."),
        ex("pull_up", "Pull-up", Back, Some("latissimus dorsi"), 3, 4, "6-8", &["pullup_bar"],
            "Hang with straight arms, pull until the chin clears the bar."),
        // ====================================================================
        // Shoulders
        // ====================================================================
        ex("dumbbell_shoulder_press", "Seated Dumbbell Shoulder Press", Shoulders, Some("deltoids"), 1, 3, "10-12", &["dumbbells"],
            "Press the dumbbells overhead from shoulder height without arching the back."),
        ex("lateral_raise", "Lateral Raise", Shoulders, Some("lateral deltoids"), 1, 3, "12-15", &["dumbbells"],
            "Raise the arms to the side until parallel to the floor."),
        ex("pike_push_up", "Pike Push-up", Shoulders, Some("anterior deltoids"), 1, 3, "8-10", &[],
            "Hips high, lower the head toward the floor between the hands."),
        ex("arnold_press", "Arnold Press", Shoulders, Some("deltoids"), 2, 3, "8-10", &["dumbbells"],
            "Start palms facing you and rotate the palms outward as you press."),
        ex("overhead_press", "Standing Barbell Overhead Press", Shoulders, Some("deltoids"), 3, 5, "5", &["barbell"],
            "Brace the core and press the bar overhead, moving the head through at lockout."),
        // ====================================================================
        // Biceps
        // ====================================================================
        ex("dumbbell_curl", "Dumbbell Curl", Biceps, Some("biceps brachii"), 1, 3, "10-12", &["dumbbells"],
            "Keep the elbows at your sides and curl the weights to the shoulders."),
        ex("hammer_curl", "Hammer Curl", Biceps, Some("brachialis"), 1, 3, "10-12", &["dumbbells"],
            "Neutral grip, curl without swinging the torso."),
        ex("band_curl", "Band Curl", Biceps, Some("biceps brachii"), 1, 3, "15", &["bands"],
            "Stand on the band and curl the handles up, lower slowly."),
        ex("barbell_curl", "Barbell Curl", Biceps, Some("biceps brachii"), 2, 4, "8-10", &["barbell"],
            "Curl the bar with a shoulder-width grip, no hip drive."),
        ex("chin_up", "Chin-up", Biceps, Some("biceps brachii"), 3, 4, "6-8", &["pullup_bar"],
            "Underhand grip, pull until the chin is over the bar."),
        // ====================================================================
        // Triceps
        // ====================================================================
        ex("bench_dip", "Bench Dip", Triceps, Some("triceps brachii"), 1, 3, "10-12", &["bench"],
            "Hands on the bench edge, lower until the elbows reach ninety degrees."),
        ex("triceps_pushdown", "Cable Triceps Pushdown", Triceps, Some("lateral head"), 1, 3, "12-15", &["cable"],
            "Elbows pinned to the sides, push the rope down until the arms are straight."),
        ex("overhead_triceps_extension", "Overhead Triceps Extension", Triceps, Some("long head"), 1, 3, "10-12", &["dumbbells"],
            "Lower the dumbbell behind the head and extend the elbows."),
        ex("close_grip_bench_press", "Close-grip Bench Press", Triceps, Some("triceps brachii"), 2, 4, "8-10", &["barbell", "bench"],
            "Hands shoulder-width apart, keep the elbows tucked."),
        ex("parallel_bar_dip", "Parallel Bar Dip", Triceps, Some("triceps brachii"), 3, 4, "8-10", &["dip_bars"],
            "Stay upright and lower until the shoulders are level with the elbows."),
        // ====================================================================
        // Quadriceps
        // ====================================================================
        ex("bodyweight_squat", "Bodyweight Squat", Quadriceps, Some("quadriceps"), 1, 3, "15", &[],
            "Feet shoulder-width, sit back and down until the thighs are parallel."),
        ex("goblet_squat", "Goblet Squat", Quadriceps, Some("quadriceps"), 1, 3, "10-12", &["dumbbells"],
            "Hold a dumbbell at the chest and squat keeping the torso upright."),
        ex("leg_press", "Leg Press", Quadriceps, Some("quadriceps"), 1, 3, "10-12", &["machine"],
            "Lower the sled until the knees reach ninety degrees and press back."),
        ex("walking_lunge", "Walking Lunge", Quadriceps, Some("quadriceps"), 2, 3, "10 each leg", &["dumbbells"],
            "Step forward and lower the back knee toward the floor, alternate legs."),
        ex("barbell_back_squat", "Barbell Back Squat", Quadriceps, Some("quadriceps"), 3, 5, "5", &["barbell", "squat_rack"],
            "Bar on the upper back, squat to depth and drive up through the mid-foot."),
        // ====================================================================
        // Hamstrings
        // ====================================================================
        ex("lying_leg_curl", "Lying Leg Curl", Hamstrings, Some("biceps femoris"), 1, 3, "10-12", &["machine"],
            "Curl the pad toward the glutes and lower under control."),
        ex("dumbbell_romanian_deadlift", "Dumbbell Romanian Deadlift", Hamstrings, Some("hamstrings"), 1, 3, "10-12", &["dumbbells"],
            "Soft knees, hinge until a stretch is felt in the hamstrings."),
        ex("stability_ball_curl", "Stability Ball Leg Curl", Hamstrings, Some("hamstrings"), 1, 3, "10-12", &["stability_ball"],
            "Heels on the ball, lift the hips and roll the ball in."),
        ex("romanian_deadlift", "Barbell Romanian Deadlift", Hamstrings, Some("hamstrings"), 2, 4, "8", &["barbell"],
            "Push the hips back with a flat back, bar close to the legs."),
        ex("nordic_curl", "Nordic Hamstring Curl", Hamstrings, Some("hamstrings"), 3, 3, "5", &[],
            "Anchor the heels and lower the torso forward as slowly as possible."),
        // ====================================================================
        // Glutes
        // ====================================================================
        ex("glute_bridge", "Glute Bridge", Glutes, Some("gluteus maximus"), 1, 3, "15", &[],
            "Lie on your back and drive the hips up by squeezing the glutes."),
        ex("donkey_kick", "Donkey Kick", Glutes, Some("gluteus maximus"), 1, 3, "15 each leg", &[],
            "On all fours, kick one heel toward the ceiling keeping the knee bent."),
        ex("banded_lateral_walk", "Banded Lateral Walk", Glutes, Some("gluteus medius"), 1, 3, "12 each side", &["bands"],
            "Band above the knees, stay low and step sideways."),
        ex("bulgarian_split_squat", "Bulgarian Split Squat", Glutes, Some("gluteus maximus"), 2, 3, "8 each leg", &["dumbbells", "bench"],
            "Rear foot on a bench, lower until the front thigh is parallel."),
        ex("barbell_hip_thrust", "Barbell Hip Thrust", Glutes, Some("gluteus maximus"), 3, 4, "8", &["barbell", "bench"],
            "Upper back on the bench, drive the bar up with the hips and pause at the top."),
        // ====================================================================
        // Calves
        // ====================================================================
        ex("standing_calf_raise", "Standing Calf Raise", Calves, Some("gastrocnemius"), 1, 3, "15-20", &[],
            "Rise onto the toes, pause, and lower the heels slowly."),
        ex("seated_calf_raise", "Seated Calf Raise", Calves, Some("soleus"), 1, 3, "15", &["machine"],
            "Raise the heels against the pad and lower for a full stretch."),
        ex("calf_press", "Leg Press Calf Press", Calves, Some("gastrocnemius"), 1, 3, "15", &["machine"],
            "Balls of the feet on the sled, press with the ankles only."),
        ex("single_leg_calf_raise", "Single-leg Calf Raise", Calves, Some("gastrocnemius"), 2, 3, "12 each leg", &["dumbbells"],
            "Stand on one foot on a step holding a dumbbell, full range of motion."),
        ex("jump_rope", "Jump Rope Intervals", Calves, Some("gastrocnemius"), 3, 5, "60 seconds", &["jump_rope"],
            "Stay on the balls of the feet with quick, low jumps."),
        // ====================================================================
        // Core
        // ====================================================================
        ex("plank", "Plank", Core, Some("transverse abdominis"), 1, 3, "30-60 seconds", &[],
            "Forearms on the floor, body in a straight line, brace the abs."),
        ex("dead_bug", "Dead Bug", Core, Some("rectus abdominis"), 1, 3, "10 each side", &[],
            "Lower the opposite arm and leg while keeping the lower back flat."),
        ex("bird_dog", "Bird Dog", Core, Some("erector spinae"), 1, 3, "10 each side", &[],
            "On all fours, extend the opposite arm and leg and hold briefly."),
        ex("hanging_knee_raise", "Hanging Knee Raise", Core, Some("lower abdominals"), 2, 3, "10-12", &["pullup_bar"],
            "Hang from the bar and raise the knees toward the chest without swinging."),
        ex("ab_wheel_rollout", "Ab Wheel Rollout", Core, Some("rectus abdominis"), 3, 3, "8-10", &["ab_wheel"],
            "Roll out as far as possible without the hips sagging, pull back with the abs."),
    ];

    Catalog { exercises }
}

/// Catalog record in its on-disk form, before the muscle group and
/// difficulty are checked.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExerciseRecord {
    id: String,
    name: String,
    muscle_group: String,
    #[serde(default)]
    target_muscle: Option<String>,
    difficulty: i64,
    sets: u32,
    reps: String,
    #[serde(default)]
    equipment: Vec<String>,
    #[serde(default)]
    instructions: String,
    #[serde(default)]
    gif_url: Option<String>,
}

impl ExerciseRecord {
    fn into_exercise(self) -> Option<Exercise> {
        let muscle_group = match self.muscle_group.parse::<MuscleGroup>() {
            Ok(group) => group,
            Err(_) => {
                tracing::warn!(
                    "Dropping exercise '{}': unknown muscle group '{}'",
                    self.id,
                    self.muscle_group
                );
                return None;
            }
        };

        let difficulty = match u8::try_from(self.difficulty) {
            Ok(d @ 1..=3) => d,
            _ => {
                tracing::warn!(
                    "Dropping exercise '{}': difficulty {} outside 1-3",
                    self.id,
                    self.difficulty
                );
                return None;
            }
        };

        Some(Exercise {
            id: self.id,
            name: self.name,
            muscle_group,
            target_muscle: self.target_muscle,
            difficulty,
            sets: self.sets,
            reps: self.reps,
            equipment: self.equipment,
            instructions: self.instructions,
            gif_url: self.gif_url,
        })
    }
}

/// Parse a catalog from a JSON array of exercise records.
///
/// Records with an unknown muscle group or a difficulty outside 1-3 are
/// skipped with a warning; they could never be selected anyway.
pub fn parse_catalog(json: &str) -> Result<Catalog> {
    let records: Vec<ExerciseRecord> = serde_json::from_str(json)?;
    let total = records.len();
    let exercises: Vec<Exercise> = records
        .into_iter()
        .filter_map(ExerciseRecord::into_exercise)
        .collect();

    tracing::debug!(
        "Parsed catalog: {} of {} records usable",
        exercises.len(),
        total
    );
    Ok(Catalog { exercises })
}

/// Load a catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let contents = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&contents)?;
    tracing::info!(
        "Loaded {} exercises from {:?}",
        catalog.exercises.len(),
        path
    );
    Ok(catalog)
}

impl Catalog {
    /// Validate the catalog for consistency and coverage
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let mut seen = HashSet::new();

        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push(format!("Exercise '{}' has empty ID", exercise.name));
            } else if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.sets == 0 {
                errors.push(format!("Exercise '{}' has zero sets", exercise.id));
            }
            if !(1..=3).contains(&exercise.difficulty) {
                errors.push(format!(
                    "Exercise '{}': difficulty {} outside 1-3",
                    exercise.id, exercise.difficulty
                ));
            }
        }

        // Every group needs something a beginner can do
        for group in MuscleGroup::ALL {
            let covered = self
                .exercises
                .iter()
                .any(|e| e.muscle_group == group && e.difficulty == 1);
            if !covered {
                errors.push(format!("No beginner exercise for {}", group));
            }
        }

        errors
    }

    /// Validate and turn any problems into a single error
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Error::CatalogValidation(errors.join("; ")))
        }
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}
