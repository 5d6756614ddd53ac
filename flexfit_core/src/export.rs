//! Saving generated plans to disk.
//!
//! Plans are written as pretty JSON documents, one file per plan. Writers
//! serialize on a `<plan file>.lock` sidecar, then write a temp file in the
//! target directory and rename it into place, so a reader never sees a
//! half-written plan.

use crate::{Error, Result, WorkoutPlan};
use fs2::FileExt;
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name a plan is saved under inside a plans directory
pub fn plan_file_name(plan: &WorkoutPlan) -> String {
    format!("{}.json", plan.id)
}

/// Sidecar file writers of `path` lock while replacing it
pub fn lock_path(path: &Path) -> Result<PathBuf> {
    let mut name: OsString = path
        .file_name()
        .ok_or_else(|| Error::Other(format!("Plan path {:?} has no file name", path)))?
        .to_os_string();
    name.push(".lock");
    Ok(path.with_file_name(name))
}

/// Save a plan to `path`, replacing any existing file
pub fn save_plan(path: &Path, plan: &WorkoutPlan) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| Error::Other(format!("Plan path {:?} has no parent", path)))?;
    std::fs::create_dir_all(parent)?;

    let lock = OpenOptions::new()
        .create(true)
        .truncate(false)
        .write(true)
        .open(lock_path(path)?)?;
    lock.lock_exclusive()?;

    let written = write_and_persist(parent, path, plan);
    lock.unlock()?;
    written?;

    tracing::info!("Saved plan '{}' to {:?}", plan.name, path);
    Ok(())
}

fn write_and_persist(parent: &Path, path: &Path, plan: &WorkoutPlan) -> Result<()> {
    let temp = NamedTempFile::new_in(parent)?;
    {
        let mut writer = std::io::BufWriter::new(temp.as_file());
        serde_json::to_writer_pretty(&mut writer, plan)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Save a plan into `dir` under its own id, returning the file path
pub fn save_plan_in(dir: &Path, plan: &WorkoutPlan) -> Result<PathBuf> {
    let path = dir.join(plan_file_name(plan));
    save_plan(&path, plan)?;
    Ok(path)
}

/// Load a previously saved plan
pub fn load_plan(path: &Path) -> Result<WorkoutPlan> {
    let file = File::open(path)?;
    file.lock_shared()?;

    let mut contents = String::new();
    let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
    file.unlock()?;
    read?;

    let plan: WorkoutPlan = serde_json::from_str(&contents)?;
    tracing::debug!("Loaded plan {} from {:?}", plan.id, path);
    Ok(plan)
}
