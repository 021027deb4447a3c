//! Command dispatch

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::generate;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{AlarmSettings, ApplicationError, RecentList, DEFAULT_CAPACITY};
use crate::cli::args::{Cli, Commands, RecentCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Locations;
use crate::domain::{parse, Entity, Node};
use crate::infrastructure::storage;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let locations = Locations::resolve(cli.settings_file.as_deref(), cli.recent_file.as_deref());
    debug!(
        "settings: {}, recent: {}",
        locations.settings_file.display(),
        locations.recent_file.display()
    );

    match &cli.command {
        Some(Commands::Show) => show(&locations),
        Some(Commands::Set {
            hour,
            minute,
            second,
            timezone,
            file,
            confirm_exit,
        }) => set(
            &locations,
            *hour,
            *minute,
            *second,
            *timezone,
            file.as_deref(),
            *confirm_exit,
        ),
        Some(Commands::Recent { command }) => recent(&locations, command),
        Some(Commands::Dump { file }) => dump(file),
        Some(Commands::Path) => show_paths(&locations),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "chimecfg", &mut io::stdout());
            Ok(())
        }
        None => Ok(()),
    }
}

#[instrument(skip(locations))]
fn show(locations: &Locations) -> CliResult<()> {
    let settings = AlarmSettings::load_or_default(&locations.settings_file);

    output::header("Alarm");
    output::detail(&format!(
        "time:          {:02}:{:02}:{:02}",
        settings.alarm_hour, settings.alarm_minute, settings.alarm_second
    ));
    output::detail(&format!("timezone:      {}", settings.alarm_time_zone));
    output::detail(&format!(
        "file:          {}",
        if settings.alarm_filename.is_empty() {
            "(none)"
        } else {
            settings.alarm_filename.as_str()
        }
    ));
    output::detail(&format!("confirm exit:  {}", settings.confirm_exit));
    Ok(())
}

#[allow(clippy::too_many_arguments)]
#[instrument(skip(locations))]
fn set(
    locations: &Locations,
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
    timezone: Option<usize>,
    file: Option<&Path>,
    confirm_exit: Option<bool>,
) -> CliResult<()> {
    let mut settings = AlarmSettings::load_or_default(&locations.settings_file);

    if let Some(hour) = hour {
        if hour > 23 {
            return Err(CliError::InvalidArgs(format!("hour out of range: {hour}")));
        }
        settings.alarm_hour = hour;
    }
    if let Some(minute) = minute {
        if minute > 59 {
            return Err(CliError::InvalidArgs(format!(
                "minute out of range: {minute}"
            )));
        }
        settings.alarm_minute = minute;
    }
    if let Some(second) = second {
        if second > 59 {
            return Err(CliError::InvalidArgs(format!(
                "second out of range: {second}"
            )));
        }
        settings.alarm_second = second;
    }
    if let Some(timezone) = timezone {
        settings.alarm_time_zone = timezone;
    }
    if let Some(file) = file {
        let filename = file.to_string_lossy().into_owned();
        let mut history = RecentList::load_or_default(&locations.recent_file, DEFAULT_CAPACITY);
        history.store(&filename);
        history.save(&locations.recent_file)?;
        settings.alarm_filename = filename;
    }
    if let Some(confirm) = confirm_exit {
        settings.confirm_exit = confirm;
    }

    settings.save(&locations.settings_file)?;
    output::success(&format!("saved {}", locations.settings_file.display()));
    Ok(())
}

#[instrument(skip(locations))]
fn recent(locations: &Locations, command: &RecentCommands) -> CliResult<()> {
    match command {
        RecentCommands::List => {
            let history = RecentList::load_or_default(&locations.recent_file, DEFAULT_CAPACITY);
            for value in history.values() {
                output::info(value);
            }
            Ok(())
        }
        RecentCommands::Add { value } => {
            let mut history = RecentList::load_or_default(&locations.recent_file, DEFAULT_CAPACITY);
            history.store(value);
            history.save(&locations.recent_file)?;
            output::success(&format!("recorded {value}"));
            Ok(())
        }
        RecentCommands::Clear => {
            let mut history = RecentList::load_or_default(&locations.recent_file, DEFAULT_CAPACITY);
            history.clear();
            history.save(&locations.recent_file)?;
            output::success("cleared recent-file history");
            Ok(())
        }
    }
}

#[instrument]
fn dump(file: &PathBuf) -> CliResult<()> {
    let text = storage::read_document(file).map_err(ApplicationError::from)?;
    let root = parse(&text).ok_or_else(|| CliError::Unparseable(file.clone()))?;
    println!("{}", entity_tree(&root));
    Ok(())
}

fn show_paths(locations: &Locations) -> CliResult<()> {
    output::info(&format!("settings: {}", locations.settings_file.display()));
    output::info(&format!("recent:   {}", locations.recent_file.display()));
    Ok(())
}

/// Render an entity subtree for terminal display. Whitespace-only text runs
/// are omitted so indented hand-authored documents stay readable.
fn entity_tree(entity: &Entity) -> Tree<String> {
    let mut label = entity.name.clone();
    for (name, value) in &entity.attributes {
        label.push_str(&format!(" {name}={value:?}"));
    }

    let leaves: Vec<Tree<String>> = entity
        .children
        .iter()
        .filter_map(|child| match child {
            Node::Element(child) => Some(entity_tree(child)),
            Node::Text(text) if text.trim().is_empty() => None,
            Node::Text(text) => Some(Tree::new(format!("{text:?}"))),
        })
        .collect();

    Tree::new(label).with_leaves(leaves)
}
