//! taskdash command implementations
//!
//! Every command resolves the data directory, loads the store from the
//! slot, applies at most one mutation, and mirrors the new snapshot back.
//! Empty text and unknown ids are tolerated no-ops reported as warnings,
//! never as errors.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::persist;
use crate::store::{Task, TaskStats};
use crate::ui;

/// Flags shared by every command
pub struct CommonOptions {
    pub dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

impl CommonOptions {
    fn output(&self) -> OutputOptions {
        OutputOptions {
            json: self.json,
            quiet: self.quiet,
        }
    }
}

/// Options for the add command
pub struct AddOptions {
    pub text: Vec<String>,
    pub common: CommonOptions,
}

/// Options for the toggle command
pub struct ToggleOptions {
    pub id: u64,
    pub common: CommonOptions,
}

/// Options for the rm command
pub struct RmOptions {
    pub id: u64,
    pub common: CommonOptions,
}

/// Options for the list command
pub struct ListOptions {
    pub common: CommonOptions,
}

/// Options for the stats command
pub struct StatsOptions {
    pub common: CommonOptions,
}

#[derive(serde::Serialize)]
struct AddReport {
    task: Option<Task>,
    stats: TaskStats,
}

#[derive(serde::Serialize)]
struct ToggleReport {
    task: Option<Task>,
    stats: TaskStats,
}

#[derive(serde::Serialize)]
struct RmReport {
    removed: Option<Task>,
    stats: TaskStats,
}

#[derive(serde::Serialize)]
struct ListReport {
    tasks: Vec<Task>,
    stats: TaskStats,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options.common)?;
    let mut store = persist::load_or_seed(&data_dir, &config.store.seed_text);

    let raw = options.text.join(" ");
    let added = store.add(&raw).cloned();

    let mut human;
    match &added {
        Some(task) => {
            human = HumanOutput::new("taskdash add: task added");
            human.push_summary("id", task.id.to_string());
            human.push_summary("text", task.text.clone());
            if let Some(warning) = persist::save_best_effort(&data_dir, store.tasks()) {
                human.push_warning(warning);
            }
        }
        None => {
            human = HumanOutput::new("taskdash add: nothing added");
            human.push_warning("task text is empty after trimming");
        }
    }

    let report = AddReport {
        task: added,
        stats: store.stats(),
    };
    emit_success(options.common.output(), "add", &report, Some(&human))?;

    Ok(())
}

pub fn run_toggle(options: ToggleOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options.common)?;
    let mut store = persist::load_or_seed(&data_dir, &config.store.seed_text);

    let toggled = store.toggle(options.id);
    let task = store.get(options.id).cloned();

    let mut human;
    match task.as_ref().filter(|_| toggled) {
        Some(task) => {
            let state = if task.completed { "completed" } else { "open" };
            human = HumanOutput::new("taskdash toggle: task updated");
            human.push_summary("id", task.id.to_string());
            human.push_summary("text", task.text.clone());
            human.push_summary("state", state);
            if let Some(warning) = persist::save_best_effort(&data_dir, store.tasks()) {
                human.push_warning(warning);
            }
        }
        None => {
            human = HumanOutput::new("taskdash toggle: nothing to toggle");
            human.push_warning(format!("no task with id {}", options.id));
            human.push_next_step("taskdash list");
        }
    }

    let report = ToggleReport {
        task,
        stats: store.stats(),
    };
    emit_success(options.common.output(), "toggle", &report, Some(&human))?;

    Ok(())
}

pub fn run_rm(options: RmOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options.common)?;
    let mut store = persist::load_or_seed(&data_dir, &config.store.seed_text);

    let removed = store.get(options.id).cloned();
    let mut human;
    match &removed {
        Some(task) => {
            store.remove(options.id);
            human = HumanOutput::new("taskdash rm: task removed");
            human.push_summary("id", task.id.to_string());
            human.push_summary("text", task.text.clone());
            if let Some(warning) = persist::save_best_effort(&data_dir, store.tasks()) {
                human.push_warning(warning);
            }
        }
        None => {
            human = HumanOutput::new("taskdash rm: nothing to remove");
            human.push_warning(format!("no task with id {}", options.id));
            human.push_next_step("taskdash list");
        }
    }

    let report = RmReport {
        removed,
        stats: store.stats(),
    };
    emit_success(options.common.output(), "rm", &report, Some(&human))?;

    Ok(())
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options.common)?;
    let store = persist::load_or_seed(&data_dir, &config.store.seed_text);

    let stats = store.stats();
    let mut human = HumanOutput::new(format!(
        "taskdash list: {} task{}",
        stats.total,
        if stats.total == 1 { "" } else { "s" }
    ));
    if store.is_empty() {
        human.push_detail(config.ui.placeholder.clone());
    } else {
        for task in store.tasks() {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            human.push_detail(format!("{marker} {:>3}  {}", task.id, task.text));
        }
    }

    let report = ListReport {
        tasks: store.tasks().to_vec(),
        stats,
    };
    emit_success(options.common.output(), "list", &report, Some(&human))?;

    Ok(())
}

pub fn run_stats(options: StatsOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options.common)?;
    let store = persist::load_or_seed(&data_dir, &config.store.seed_text);

    let stats = store.stats();
    let mut human = HumanOutput::new("taskdash stats");
    human.push_summary("open", stats.open.to_string());
    human.push_summary("completed", stats.completed.to_string());
    human.push_summary("total", stats.total.to_string());
    human.push_summary("done", format!("{}%", stats.completion_rate));

    emit_success(options.common.output(), "stats", &stats, Some(&human))?;

    Ok(())
}

pub fn run_ui(options: CommonOptions) -> Result<()> {
    let (config, data_dir) = resolve(&options)?;
    let store = persist::load_or_seed(&data_dir, &config.store.seed_text);
    ui::run(store, data_dir, &config)
}

/// Resolve the config and the data directory for a command.
///
/// An explicitly named config file must exist and parse; a discovered
/// `taskdash.toml` may be absent. The data directory falls back from the
/// `--dir` flag to the config entry to the platform default.
fn resolve(options: &CommonOptions) -> Result<(Config, PathBuf)> {
    let config = match &options.config {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound(path.clone()));
            }
            Config::load(path)?
        }
        None => {
            let candidate = options.dir.clone().or_else(persist::default_data_dir);
            match candidate {
                Some(dir) => Config::load_or_default(&dir)?,
                None => Config::default(),
            }
        }
    };

    let data_dir = persist::resolve_data_dir(options.dir.as_deref(), &config)?;
    Ok((config, data_dir))
}
