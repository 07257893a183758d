use super::args::{Cli, Commands, LexiconCommand, PatientCommand, SessionCommand};
use super::handlers;
use crate::presentation::Renderer;
use anyhow::{Context, Result};
use intend_runtime::{Workspace, WorkspaceOptions, resolve_workspace_path};
use std::path::PathBuf;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let renderer = Renderer::new(cli.format);
    let options = WorkspaceOptions {
        lexicon_path: cli.lexicon.clone(),
        top_n: cli.top,
    };

    match cli.command {
        Commands::Init => handlers::init::handle(&data_dir, &renderer),

        Commands::Analyze { file } => {
            // Analysis alone never touches the database
            let workspace = Workspace::in_memory(data_dir, options)?;
            handlers::analyze::handle(&workspace, file, &renderer)
        }

        Commands::Lexicon { command } => {
            let workspace = Workspace::in_memory(data_dir, options)?;
            match command {
                LexiconCommand::Show => handlers::lexicon::show(&workspace, &renderer),
                LexiconCommand::Export { path } => {
                    handlers::lexicon::export(&workspace, &path, &renderer)
                }
            }
        }

        Commands::Patient { command } => {
            let workspace = open_workspace(data_dir, options)?;
            match command {
                PatientCommand::Add {
                    name,
                    age,
                    gender,
                    occupation,
                    started_on,
                } => handlers::patient::add(
                    &workspace,
                    handlers::patient::NewPatient {
                        name,
                        age,
                        gender,
                        occupation,
                        started_on,
                    },
                    &renderer,
                ),
                PatientCommand::List => handlers::patient::list(&workspace, &renderer),
                PatientCommand::Show { name } => {
                    handlers::patient::show(&workspace, &name, &renderer)
                }
            }
        }

        Commands::Session { command } => {
            let workspace = open_workspace(data_dir, options)?;
            match command {
                SessionCommand::Add {
                    patient,
                    date,
                    transcript,
                    duration_secs,
                    emotions,
                    intensity,
                    speech_rate,
                    video,
                    audio,
                } => handlers::session::add(
                    &workspace,
                    handlers::session::NewSession {
                        patient,
                        key: date,
                        transcript,
                        duration_secs,
                        emotions,
                        intensity,
                        speech_rate,
                        video,
                        audio,
                    },
                    &renderer,
                ),
                SessionCommand::List { patient } => {
                    handlers::session::list(&workspace, &patient, &renderer)
                }
                SessionCommand::Show { id } => handlers::session::show(&workspace, &id, &renderer),
                SessionCommand::Remove { id } => {
                    handlers::session::remove(&workspace, &id, &renderer)
                }
                SessionCommand::Import {
                    patient,
                    dir,
                    recursive,
                } => handlers::session::import(&workspace, &patient, &dir, recursive, &renderer),
            }
        }

        Commands::Overview => {
            let workspace = open_workspace(data_dir, options)?;
            handlers::overview::handle(&workspace, &renderer)
        }

        Commands::Export { path } => {
            let workspace = open_workspace(data_dir, options)?;
            handlers::export::handle(&workspace, &path, &renderer)
        }
    }
}

fn open_workspace(data_dir: PathBuf, options: WorkspaceOptions) -> Result<Workspace> {
    Workspace::open(data_dir.clone(), options)
        .with_context(|| format!("failed to open workspace at {}", data_dir.display()))
}

