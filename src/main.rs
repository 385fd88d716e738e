use std::io;
use std::path::Path;

use taskbook::menu;
use taskbook::store::{STORAGE_FILE, TaskStore};

fn main() {
    let path = Path::new(STORAGE_FILE);
    let mut store = match TaskStore::load(path) {
        Ok(store) => store,
        Err(e) => {
            // Prior data stays on disk; this run starts from scratch.
            eprintln!("warning: could not load tasks: {e}");
            TaskStore::empty(path)
        }
    };
    println!("Loaded {} tasks from storage.", store.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = menu::run(&mut store, stdin.lock(), stdout.lock()) {
        eprintln!("error: {e}");
    }
}
