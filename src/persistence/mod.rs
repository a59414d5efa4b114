use std::{
    fs,
    path::PathBuf,
};

use serde::{
    de::DeserializeOwned,
    Serialize,
};

const APP_NAME: &str = "scholarquest";

pub fn get_app_data_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let app_dir = data_dir.join(APP_NAME);
        let _ = fs::create_dir_all(&app_dir);
        app_dir
    } else {
        PathBuf::from(".")
    }
}

pub fn get_data_file_path(filename: &str) -> PathBuf {
    get_app_data_dir().join(filename)
}

pub fn save_json<T: Serialize>(data: &T, filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&file_path, json)?;
    println!("Saved {}", file_path.display());
    Ok(())
}

/// Ok(None) means the slot has never been written; Err means the file exists
/// but could not be read or parsed.
pub fn load_json<T: DeserializeOwned>(filename: &str) -> Result<Option<T>, Box<dyn std::error::Error>> {
    let file_path = get_data_file_path(filename);

    if !file_path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&file_path)?;
    let data: T = serde_json::from_str(&json)?;
    Ok(Some(data))
}

/// Missing or malformed content quietly falls back to defaults; a broken
/// saved profile must never block startup.
pub fn load_json_or_default<T: DeserializeOwned + Default>(filename: &str) -> T {
    match load_json::<T>(filename) {
        Ok(Some(data)) => {
            println!("Loaded {}", get_data_file_path(filename).display());
            data
        }
        Ok(None) => T::default(),
        Err(e) => {
            eprintln!("Failed to load {}: {}. Using defaults.", filename, e);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::core::Profile;

    use super::*;

    #[test]
    fn save_and_load_round_trip() {
        let filename = "test_profile_round_trip.json";

        let mut profile = Profile::default();
        profile.field_of_study = "Medicine".to_string();
        profile.gpa = 3.6;

        save_json(&profile, filename).unwrap();
        let loaded = load_json_or_default::<Profile>(filename);
        assert_eq!(loaded, profile);

        let _ = fs::remove_file(get_data_file_path(filename));
    }

    #[test]
    fn missing_slot_yields_defaults() {
        let loaded = load_json_or_default::<Profile>("test_profile_never_written.json");
        assert_eq!(loaded, Profile::default());
    }

    #[test]
    fn malformed_slot_yields_defaults() {
        let filename = "test_profile_malformed.json";
        fs::write(get_data_file_path(filename), "{ this is not json").unwrap();

        let loaded = load_json_or_default::<Profile>(filename);
        assert_eq!(loaded, Profile::default());

        let _ = fs::remove_file(get_data_file_path(filename));
    }
}
