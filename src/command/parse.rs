use crate::error::{AppError, AppResult};
use crate::route::Location;
use crate::scroll::SectionId;

use super::spec::command_spec;
use super::types::Command;

pub fn parse_command_text(input: &str) -> AppResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_argument("command must not be empty"));
    }

    // A bare path is shorthand for `go <path>`.
    if trimmed.starts_with('/') {
        return parse_go(trimmed);
    }

    let (id, args_text) = match trimmed.find(char::is_whitespace) {
        Some(index) => (&trimmed[..index], trimmed[index..].trim_start()),
        None => (trimmed, ""),
    };

    let Some(spec) = command_spec(id) else {
        return Err(AppError::invalid_argument(format!("unknown command: {id}")));
    };

    match spec.id {
        "go" => parse_go(args_text),
        "back" => parse_no_args(spec.usage, args_text, Command::Back),
        "forward" => parse_no_args(spec.usage, args_text, Command::Forward),
        "scroll" => parse_scroll(args_text),
        "section" => parse_section(args_text),
        "next-section" => parse_no_args(spec.usage, args_text, Command::NextSection),
        "prev-section" => parse_no_args(spec.usage, args_text, Command::PrevSection),
        "contact" => parse_no_args(spec.usage, args_text, Command::OpenContact),
        "quit" => parse_no_args(spec.usage, args_text, Command::Quit),
        _ => Err(AppError::unsupported(
            "command parser is out of sync with registry",
        )),
    }
}

fn parse_no_args(usage: &str, args_text: &str, cmd: Command) -> AppResult<Command> {
    if args_text.is_empty() {
        return Ok(cmd);
    }
    Err(AppError::invalid_argument(format!(
        "{usage} does not accept arguments"
    )))
}

fn parse_go(args_text: &str) -> AppResult<Command> {
    let mut parts = args_text.split_whitespace();
    let Some(path) = parts.next() else {
        return Err(AppError::invalid_argument("go requires 1 argument: path"));
    };
    if parts.next().is_some() {
        return Err(AppError::invalid_argument("go accepts exactly 1 argument"));
    }
    Ok(Command::Navigate {
        location: Location::new(path),
    })
}

fn parse_scroll(args_text: &str) -> AppResult<Command> {
    let mut parts = args_text.split_whitespace();
    let Some(rows_text) = parts.next() else {
        return Err(AppError::invalid_argument("scroll requires 1 argument: rows"));
    };
    if parts.next().is_some() {
        return Err(AppError::invalid_argument(
            "scroll accepts exactly 1 argument",
        ));
    }
    let rows = rows_text
        .parse::<i32>()
        .map_err(|_| AppError::invalid_argument("rows must be an integer"))?;
    Ok(Command::ScrollBy { rows })
}

fn parse_section(args_text: &str) -> AppResult<Command> {
    let name = args_text.trim();
    if name.is_empty() {
        return Err(AppError::invalid_argument("section requires 1 argument: id"));
    }
    let id = SectionId::parse(name)
        .ok_or_else(|| AppError::invalid_argument(format!("unknown section: {name}")))?;
    Ok(Command::ScrollToSection { id })
}
