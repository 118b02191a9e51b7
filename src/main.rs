use std::io::{stdin, Read};

use service::data_manager::DataManager;

mod model;
mod service;
mod ui;

fn main() {
    let result = match DataManager::new() {
        Ok(manager) => ui::repl::run(manager).map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    if let Err(message) = result {
        println!("Error: {}", message);
        println!("Press Enter to exit ...");
        let _ = stdin().read(&mut [0u8]);
    }
}
