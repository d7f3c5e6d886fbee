//! Thin console front-end: reads one line at a time from stdin and prints
//! the interpreter's replies. All the actual behaviour lives in the library.

use std::io::{BufRead, Write};

use corkboard::render;
use corkboard::Interpreter;
use corkboard::Settings;
use corkboard::Storage;
use corkboard::TaskList;

fn main() {
    env_logger::init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Ignoring unusable settings file: {}", err);
            Settings::default()
        }
    };

    let storage = Storage::from_settings(&settings);
    let tasks = match storage.load() {
        Ok(tasks) => tasks,
        Err(err) => {
            // Start usable anyway; the first save will tell us more
            eprintln!("Failed to load tasks: {}", err);
            TaskList::new()
        }
    };

    let mut interpreter = Interpreter::new(tasks, storage);

    println!("{}", render::welcome());
    prompt();

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        if let Some(reply) = interpreter.handle(&line) {
            println!("{}", reply.text);
            if reply.exit {
                return;
            }
        }
        prompt();
    }
}

fn prompt() {
    let mut stdout = std::io::stdout();
    let _ = write!(stdout, "> ");
    let _ = stdout.flush();
}
