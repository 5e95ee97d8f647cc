//! Interactive terminal front end for the note store.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use notemark_client::api::{HttpNotesApi, NotesApi};
use notemark_client::app::NotesApp;
use notemark_core::{init_logging, NoteId};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[tokio::main]
async fn main() {
    let log_dir = std::env::temp_dir().join("notemark-logs");
    if let Err(err) = init_logging("info", &log_dir.to_string_lossy()) {
        eprintln!("file logging disabled: {err}");
    }

    let base_url = std::env::var("NOTEMARK_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    println!("notemark client, talking to {base_url}");

    let mut app = NotesApp::new(HttpNotesApi::new(base_url));
    app.load().await;
    render(&app);
    print_help();

    loop {
        let Some(line) = prompt("> ") else { break };
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "list" | "ls" => render(&app),
            "search" => {
                app.set_search(rest);
                render(&app);
            }
            "add" => {
                let Some(title) = prompt("Title: ") else { break };
                let Some(content) = prompt("Content: ") else { break };
                app.add_note(&title, &content).await;
                render(&app);
            }
            "edit" => match rest.parse::<NoteId>() {
                Ok(id) => {
                    edit_note(&mut app, id).await;
                    render(&app);
                }
                Err(_) => println!("usage: edit <id>"),
            },
            "rm" | "delete" => match rest.parse::<NoteId>() {
                Ok(id) => {
                    app.delete_note(id).await;
                    render(&app);
                }
                Err(_) => println!("usage: rm <id>"),
            },
            "help" => print_help(),
            "quit" | "exit" => break,
            other => println!("unknown command `{other}`; try `help`"),
        }
    }
}

async fn edit_note<A: NotesApi>(app: &mut NotesApp<A>, id: NoteId) {
    if !app.begin_edit(id) {
        println!("no note with id {id}");
        return;
    }

    let (current_title, current_content) = match app.editor() {
        Some(editor) => (
            editor.title_edit().to_string(),
            editor.content_edit().to_string(),
        ),
        None => return,
    };

    // Empty input keeps the current draft value.
    if let Some(title) = prompt(&format!("Title [{current_title}]: ")) {
        if !title.is_empty() {
            app.edit_title(title);
        }
    }
    if let Some(content) = prompt(&format!("Content [{current_content}]: ")) {
        if !content.is_empty() {
            app.edit_content(content);
        }
    }

    match prompt("Save? [y/N] ") {
        Some(answer) if answer.eq_ignore_ascii_case("y") => app.save_edit().await,
        _ => {
            app.cancel_edit();
            println!("edit cancelled");
        }
    }
}

fn render<A: NotesApi>(app: &NotesApp<A>) {
    let visible = app.visible_notes();
    if visible.is_empty() {
        println!("No notes found. Add one!");
    } else {
        for note in visible {
            println!(
                "[{}] {} ~{}",
                note.id,
                note.title,
                format_created_at(note.created_at)
            );
            println!("    {}", note.content);
        }
    }

    if let Some(err) = &app.state().last_error {
        println!("! last action failed: {err}");
    }
}

fn format_created_at(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|utc| utc.with_timezone(&Local).format("%A, %B %e, %Y").to_string())
        .unwrap_or_else(|| "unknown date".to_string())
}

fn print_help() {
    println!("commands:");
    println!("  list              show notes under the current filter");
    println!("  search <text>     filter notes by title or content");
    println!("  add               create a note (prompts for fields)");
    println!("  edit <id>         edit a note in place");
    println!("  rm <id>           delete a note");
    println!("  help              show this help");
    println!("  quit              exit");
}

fn prompt(label: &str) -> Option<String> {
    print!("{label}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim_end().to_string()),
        Err(_) => None,
    }
}
