//! Interactive prompts for the create flow.
//!
//! Every prompt treats Ctrl-C (an interrupted read) as a clean cancel: the
//! wizard returns `Ok(None)` and the caller exits without writing anything.

use std::io::ErrorKind;
use std::path::PathBuf;

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::app::commands::create::CreateOptions;
use crate::domain::{AppError, EngineVariant, parse_platform_list};

const DEFAULT_PLATFORMS: &str = "Windows,MacOS,Linux";

pub(super) fn run_create_wizard() -> Result<Option<CreateOptions>, AppError> {
    let Some(game_name) = prompt_game_name()? else {
        return Ok(None);
    };
    let Some(root_dir) = prompt_root_dir()? else {
        return Ok(None);
    };
    let Some(engine) = prompt_engine()? else {
        return Ok(None);
    };
    let Some(platforms) = prompt_platforms()? else {
        return Ok(None);
    };

    let platforms = parse_platform_list(&platforms)?;
    Ok(Some(CreateOptions { game_name, root_dir: PathBuf::from(root_dir), engine, platforms }))
}

fn prompt_game_name() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Game name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read game name: {err}"))),
    }
}

fn prompt_root_dir() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Root directory")
        .default(".".to_string())
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read root directory: {err}"))),
    }
}

fn prompt_engine() -> Result<Option<EngineVariant>, AppError> {
    let items: Vec<&str> = EngineVariant::ALL.iter().map(|engine| engine.display_name()).collect();

    match Select::new().with_prompt("Game engine").items(&items).default(0).interact() {
        Ok(selection) => Ok(Some(EngineVariant::ALL[selection])),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Engine selection failed: {err}"))),
    }
}

fn prompt_platforms() -> Result<Option<String>, AppError> {
    match Input::<String>::new()
        .with_prompt("Target platforms (comma-separated)")
        .default(DEFAULT_PLATFORMS.to_string())
        .interact_text()
    {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read platforms: {err}"))),
    }
}
