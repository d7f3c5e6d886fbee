//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

/// The directory the storage file lives in, relative to the working directory.
/// Feel free to override it when initing this library.
pub static DATA_DIR: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("data".to_string())));

/// The name of the task storage file inside [`DATA_DIR`].
/// Feel free to override it when initing this library.
pub static STORAGE_FILE_NAME: Lazy<Arc<Mutex<String>>> =
    Lazy::new(|| Arc::new(Mutex::new("corkboard.txt".to_string())));

/// The storage path the current configuration resolves to
pub fn default_storage_path() -> PathBuf {
    let dir = DATA_DIR.lock().unwrap().clone();
    let file = STORAGE_FILE_NAME.lock().unwrap().clone();
    PathBuf::from(dir).join(file)
}

/// Where the optional settings file is looked up
pub fn settings_file_path() -> PathBuf {
    let dir = DATA_DIR.lock().unwrap().clone();
    PathBuf::from(dir).join("settings.json")
}
