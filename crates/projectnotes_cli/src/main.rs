//! Line-oriented smoke client for `projectnotes_core`.
//!
//! # Responsibility
//! - Drive the note store the way the list/add/detail/edit screens do.
//! - Keep output deterministic so scripted sessions can be diffed.
//!
//! Commands (one per line on stdin):
//! `list`, `add <header> | <description>`, `show <id>`,
//! `edit <id> <header> | <description>`, `rm <id>`, `route <route>`, `quit`.

use projectnotes_core::{
    core_version, parse_route, CoreConfig, NoteForm, NoteId, NoteStore, ScreenRequest,
};
use std::io::{self, BufRead};

fn main() {
    match CoreConfig::from_env() {
        Ok(config) => {
            if let Err(err) = config.apply_logging() {
                eprintln!("logging disabled: {err}");
            }
        }
        Err(err) => eprintln!("config ignored: {err}"),
    }
    log::info!("event=cli_start module=cli status=ok version={}", core_version());

    let mut store = NoteStore::default();
    let stdin = io::stdin();
    println!("projectnotes {} (type `help`)", core_version());

    for line in stdin.lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }
        println!("{}", run_command(&mut store, line));
    }
}

fn run_command(store: &mut NoteStore, line: &str) -> String {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();
    match command {
        "help" => "commands: list | add <header> | <description> | show <id> | \
                   edit <id> <header> | <description> | rm <id> | route <route> | quit"
            .to_string(),
        "list" => render_list(store),
        "add" => match split_fields(rest) {
            Some((header, description)) => {
                let mut form = NoteForm::add();
                form.set_header(header);
                if !form.set_description(description) {
                    return "error: description input is too long".to_string();
                }
                match form.submit(store) {
                    Ok(note) => format!("added #{}", note.id),
                    Err(_) => format!("error: {}", form.error().unwrap_or("rejected")),
                }
            }
            None => "usage: add <header> | <description>".to_string(),
        },
        "show" => match parse_id(rest) {
            Some(id) => show(store, ScreenRequest::NoteDetail(id)),
            None => "usage: show <id>".to_string(),
        },
        "edit" => {
            let (raw_id, fields) = rest.split_once(' ').unwrap_or((rest, ""));
            match (parse_id(raw_id), split_fields(fields)) {
                (Some(id), Some((header, description))) => edit(store, id, header, description),
                _ => "usage: edit <id> <header> | <description>".to_string(),
            }
        }
        "rm" => match parse_id(rest) {
            Some(id) => match store.remove(id) {
                Ok(note) => format!("removed #{}", note.id),
                Err(err) => format!("error: {err}"),
            },
            None => "usage: rm <id>".to_string(),
        },
        "route" => match parse_route(rest) {
            Ok(request) => show(store, request),
            Err(err) => format!("error: {err}"),
        },
        other => format!("unknown command `{other}` (type `help`)"),
    }
}

fn edit(store: &mut NoteStore, id: NoteId, header: &str, description: &str) -> String {
    let mut form = match NoteForm::edit(store, id) {
        Ok(form) => form,
        Err(err) => return format!("error: {err}"),
    };
    form.set_header(header);
    if !form.set_description(description) {
        return "error: description input is too long".to_string();
    }
    match form.submit(store) {
        Ok(note) => format!("updated #{}", note.id),
        Err(_) => format!("error: {}", form.error().unwrap_or("rejected")),
    }
}

fn show(store: &NoteStore, request: ScreenRequest) -> String {
    match request.resolve(store) {
        ScreenRequest::NotesList => render_list(store),
        ScreenRequest::AddNote => "screen: add note".to_string(),
        ScreenRequest::NoteDetail(id) | ScreenRequest::EditNote(id) => match store.get(id) {
            Ok(note) => format!("{}      ID:{}\n{}", note.header, note.id, note.description),
            Err(err) => format!("error: {err}"),
        },
    }
}

fn render_list(store: &NoteStore) -> String {
    if store.is_empty() {
        return "(no notes)".to_string();
    }
    store
        .list()
        .iter()
        .map(|note| format!("#{} {}", note.id, note.header))
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_id(raw: &str) -> Option<NoteId> {
    raw.trim().parse().ok()
}

fn split_fields(raw: &str) -> Option<(&str, &str)> {
    raw.split_once('|')
        .map(|(header, description)| (header.trim(), description.trim()))
}
