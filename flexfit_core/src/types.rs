//! Core domain types for the FlexFit plan generator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Muscle groups, experience tiers, goals and split types
//! - Exercise catalog records
//! - Scheduler input and the generated weekly plan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::Error;

// ============================================================================
// Muscle Groups
// ============================================================================

/// One of the ten body regions an exercise targets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Quadriceps,
    Hamstrings,
    Glutes,
    Calves,
    Core,
}

impl MuscleGroup {
    /// Every muscle group, in the order full-body days list them
    pub const ALL: [MuscleGroup; 10] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
        MuscleGroup::Quadriceps,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
        MuscleGroup::Calves,
        MuscleGroup::Core,
    ];

    /// Upper-body groups
    pub const UPPER: [MuscleGroup; 5] = [
        MuscleGroup::Chest,
        MuscleGroup::Back,
        MuscleGroup::Shoulders,
        MuscleGroup::Biceps,
        MuscleGroup::Triceps,
    ];

    /// Lower-body groups that decide a "Lower Body" focus.
    ///
    /// Calves and core are deliberately absent: on their own they do not make
    /// a day a lower-body day.
    pub const LOWER_BODY: [MuscleGroup; 3] = [
        MuscleGroup::Quadriceps,
        MuscleGroup::Hamstrings,
        MuscleGroup::Glutes,
    ];

    /// Lowercase identifier, as stored in catalog records
    pub fn as_str(&self) -> &'static str {
        match self {
            MuscleGroup::Chest => "chest",
            MuscleGroup::Back => "back",
            MuscleGroup::Shoulders => "shoulders",
            MuscleGroup::Biceps => "biceps",
            MuscleGroup::Triceps => "triceps",
            MuscleGroup::Quadriceps => "quadriceps",
            MuscleGroup::Hamstrings => "hamstrings",
            MuscleGroup::Glutes => "glutes",
            MuscleGroup::Calves => "calves",
            MuscleGroup::Core => "core",
        }
    }

    /// Capitalized name for display ("Quadriceps")
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MuscleGroup {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MuscleGroup::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput(format!("Unknown muscle group: {}", s)))
    }
}

// ============================================================================
// Experience, Goal and Split
// ============================================================================

/// User experience tier
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    /// Highest exercise difficulty tier this experience level may receive
    pub fn difficulty_ceiling(&self) -> u8 {
        match self {
            Experience::Beginner => 1,
            Experience::Intermediate => 2,
            Experience::Advanced => 3,
        }
    }

    /// One tier down, staying at beginner
    pub fn easier(&self) -> Experience {
        match self {
            Experience::Beginner | Experience::Intermediate => Experience::Beginner,
            Experience::Advanced => Experience::Intermediate,
        }
    }

    /// One tier up, staying at advanced
    pub fn harder(&self) -> Experience {
        match self {
            Experience::Beginner => Experience::Intermediate,
            Experience::Intermediate | Experience::Advanced => Experience::Advanced,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            other => Err(Error::InvalidInput(format!(
                "Unknown experience level: {}",
                other
            ))),
        }
    }
}

/// Training goal. Carried on the plan; selection does not depend on it.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Strength,
    Muscle,
    #[serde(alias = "Fat loss")]
    FatLoss,
    #[default]
    #[serde(alias = "General Fitness")]
    GeneralFitness,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Muscle => "muscle",
            Goal::FatLoss => "fat_loss",
            Goal::GeneralFitness => "general_fitness",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "strength" => Ok(Goal::Strength),
            "muscle" => Ok(Goal::Muscle),
            "fat_loss" => Ok(Goal::FatLoss),
            "general_fitness" => Ok(Goal::GeneralFitness),
            _ => Err(Error::InvalidInput(format!("Unknown goal: {}", s))),
        }
    }
}

/// Coarse classification of how training days divide the body
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SplitType {
    FullBody,
    UpperLower,
    PushPullLegs,
}

impl SplitType {
    /// Label embedded in generated plan names
    pub fn label(&self) -> &'static str {
        match self {
            SplitType::FullBody => "fullbody",
            SplitType::UpperLower => "upper-lower",
            SplitType::PushPullLegs => "push-pull-legs",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Exercise Catalog Records
// ============================================================================

/// An immutable catalog exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub muscle_group: MuscleGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_muscle: Option<String>,
    /// 1 = beginner, 2 = intermediate, 3 = advanced
    pub difficulty: u8,
    pub sets: u32,
    pub reps: String,
    /// Empty means bodyweight
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gif_url: Option<String>,
}

impl Exercise {
    pub fn is_bodyweight(&self) -> bool {
        self.equipment.is_empty()
    }
}

/// Ordered, read-only exercise collection
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// Scheduler Input and Generated Plan
// ============================================================================

/// What the user asked for
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SchedulerInput {
    /// Weekday names in the order the user picked them
    pub available_days: Vec<String>,
    pub experience: Experience,
    pub goal: Goal,
    pub minutes_per_session: u32,
}

/// One generated training day
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutDay {
    pub name: String,
    pub focus: Vec<String>,
    pub exercises: Vec<Exercise>,
}

/// A workout day bound to the weekday it was generated for
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScheduledDay {
    pub day: String,
    pub workout: WorkoutDay,
}

/// The generated weekly plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub split: SplitType,
    pub available_days: Vec<String>,
    pub minutes_per_session: u32,
    pub goal: Goal,
    /// One entry per available day, in input order
    pub days: Vec<ScheduledDay>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
    pub difficulty: Experience,
}

impl WorkoutPlan {
    /// Look up the workout for a weekday name
    pub fn day(&self, name: &str) -> Option<&WorkoutDay> {
        self.days
            .iter()
            .find(|d| d.day == name)
            .map(|d| &d.workout)
    }

    /// Total number of exercises across the week
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|d| d.workout.exercises.len()).sum()
    }
}
