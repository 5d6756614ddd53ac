use flexfit_core::input::{check, normalize_weekday};
use flexfit_core::*;
use clap::{ArgGroup, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "flexfit")]
#[command(about = "Weekly workout plan generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Use a JSON exercise catalog instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Read configuration from this file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a weekly plan
    Generate {
        /// Training days, comma separated (e.g. Monday,Wednesday,Friday)
        #[arg(long, required = true, value_delimiter = ',')]
        days: Vec<String>,

        /// Experience level (beginner, intermediate, advanced)
        #[arg(long)]
        experience: Option<Experience>,

        /// Training goal (strength, muscle, fat_loss, general_fitness)
        #[arg(long)]
        goal: Option<Goal>,

        /// Minutes available per session
        #[arg(long)]
        minutes: Option<u32>,

        /// Owner recorded on the plan
        #[arg(long)]
        owner: Option<String>,

        /// Seed exercise sampling for a reproducible plan
        #[arg(long)]
        seed: Option<u64>,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,

        /// Save the plan under the data directory
        #[arg(long)]
        save: bool,
    },

    /// Print a saved plan
    Show {
        /// Path to a saved plan
        path: PathBuf,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Move a saved plan's difficulty one level down or up
    #[command(group(ArgGroup::new("step").required(true).args(["easier", "harder"])))]
    Adjust {
        /// Path to a saved plan
        path: PathBuf,

        /// Step down one level (stays at beginner)
        #[arg(long)]
        easier: bool,

        /// Step up one level (stays at advanced)
        #[arg(long)]
        harder: bool,
    },

    /// List catalog exercises
    Catalog {
        /// Only exercises for this muscle group
        #[arg(long)]
        muscle: Option<MuscleGroup>,

        /// Only exercises at or below this difficulty (1-3)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
        max_difficulty: Option<u8>,

        /// Validate the catalog instead of listing it
        #[arg(long)]
        check: bool,
    },
}

fn main() -> Result<()> {
    // Plans go to stdout, so only warnings and errors are logged by default
    flexfit_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(dir) = cli.data_dir {
        config.data.data_dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }

    match cli.command {
        Commands::Generate {
            days,
            experience,
            goal,
            minutes,
            owner,
            seed,
            json,
            save,
        } => {
            let input = SchedulerInput {
                available_days: days
                    .iter()
                    .map(|d| normalize_weekday(d).map_or_else(|| d.clone(), String::from))
                    .collect(),
                experience: experience.unwrap_or(config.defaults.experience),
                goal: goal.unwrap_or(config.defaults.goal),
                minutes_per_session: minutes.unwrap_or(config.defaults.minutes_per_session),
            };
            let owner = owner.unwrap_or_else(|| config.defaults.owner_id.clone());
            cmd_generate(&config, &input, &owner, seed, json, save)
        }
        Commands::Show { path, json } => cmd_show(&path, json),
        Commands::Adjust { path, easier, .. } => cmd_adjust(&path, easier),
        Commands::Catalog {
            muscle,
            max_difficulty,
            check,
        } => cmd_catalog(&config, muscle, max_difficulty, check),
    }
}

fn load_configured_catalog(config: &Config) -> Result<Catalog> {
    match &config.catalog.path {
        Some(path) => {
            tracing::debug!("Using catalog from {:?}", path);
            load_catalog(path)
        }
        None => Ok(default_catalog().clone()),
    }
}

fn cmd_generate(
    config: &Config,
    input: &SchedulerInput,
    owner: &str,
    seed: Option<u64>,
    json: bool,
    save: bool,
) -> Result<()> {
    check(input)?;

    let catalog = load_configured_catalog(config)?;
    catalog.ensure_valid()?;

    let plan = match seed {
        Some(seed) => {
            generate_plan_with_rng(input, &catalog, owner, &mut StdRng::seed_from_u64(seed))
        }
        None => generate_plan(input, &catalog, owner),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }

    if save {
        let path = save_plan_in(&config.plans_dir(), &plan)?;
        // Keep stdout parseable in JSON mode
        if json {
            eprintln!("Plan saved to {}", path.display());
        } else {
            println!("✓ Plan saved to {}", path.display());
        }
    }

    Ok(())
}

fn cmd_show(path: &Path, json: bool) -> Result<()> {
    let plan = load_plan(path)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        display_plan(&plan);
    }
    Ok(())
}

fn cmd_adjust(path: &Path, easier: bool) -> Result<()> {
    let mut plan = load_plan(path)?;
    let previous = plan.difficulty;
    plan.difficulty = if easier {
        previous.easier()
    } else {
        previous.harder()
    };

    if plan.difficulty == previous {
        println!("Difficulty already {}", previous);
        return Ok(());
    }

    save_plan(path, &plan)?;
    println!("✓ Difficulty {} → {}", previous, plan.difficulty);
    Ok(())
}

fn cmd_catalog(
    config: &Config,
    muscle: Option<MuscleGroup>,
    max_difficulty: Option<u8>,
    check: bool,
) -> Result<()> {
    let catalog = load_configured_catalog(config)?;

    if check {
        let errors = catalog.validate();
        if errors.is_empty() {
            println!("✓ Catalog OK ({} exercises)", catalog.len());
            return Ok(());
        }
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!(
            "{} problems found",
            errors.len()
        )));
    }

    let listed = catalog
        .exercises
        .iter()
        .filter(|e| muscle.map_or(true, |m| e.muscle_group == m))
        .filter(|e| max_difficulty.map_or(true, |d| e.difficulty <= d));

    for exercise in listed {
        let equipment = if exercise.is_bodyweight() {
            "bodyweight".to_string()
        } else {
            exercise.equipment.join(", ")
        };
        println!(
            "{:<28} {:<34} {:<11} L{}  ({})",
            exercise.id,
            exercise.name,
            exercise.muscle_group,
            exercise.difficulty,
            equipment
        );
    }

    Ok(())
}

fn display_plan(plan: &WorkoutPlan) {
    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", plan.name);
    println!("╰─────────────────────────────────────────╯");
    println!(
        "  Level: {}   Goal: {}   {} min/session",
        plan.difficulty, plan.goal, plan.minutes_per_session
    );

    for scheduled in &plan.days {
        let workout = &scheduled.workout;
        println!();
        println!(
            "  {} - {} [{}]",
            scheduled.day,
            workout.name,
            workout.focus.join(", ")
        );

        if workout.exercises.is_empty() {
            println!("    (no matching exercises in catalog)");
        }
        for exercise in &workout.exercises {
            println!(
                "    → {}: {} x {}",
                exercise.name, exercise.sets, exercise.reps
            );
        }
    }

    println!();
}
