use std::fs;
use std::path::{Path, PathBuf};

use pn_core::GeneratorProfile;
use pn_noise::NoiseField;
use serde::Serialize;
use thiserror::Error;

/// Error type for profile and field I/O.
#[derive(Debug, Error)]
pub enum ProfileIoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON serialization error: {0}")]
    Ron(#[from] ron::Error),

    #[error("RON parse error: {0}")]
    RonSpanned(#[from] ron::error::SpannedError),

    #[error("field data has {actual} values, expected {width}x{height}")]
    FieldShape {
        width: usize,
        height: usize,
        actual: usize,
    },
}

fn write_ron<T: Serialize>(path: &Path, value: &T) -> Result<(), ProfileIoError> {
    let pretty_config = ron::ser::PrettyConfig::new().depth_limit(3);
    let ron_string = ron::ser::to_string_pretty(value, pretty_config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

/// Save a generator profile to a RON file.
pub fn save_profile(path: &Path, profile: &GeneratorProfile) -> Result<(), ProfileIoError> {
    write_ron(path, profile)?;
    tracing::debug!(path = %path.display(), name = %profile.name, "saved profile");
    Ok(())
}

/// Load a generator profile from a RON file.
pub fn load_profile(path: &Path) -> Result<GeneratorProfile, ProfileIoError> {
    let contents = fs::read_to_string(path)?;
    let profile: GeneratorProfile = ron::from_str(&contents)?;
    Ok(profile)
}

/// Save a generated field to a RON file.
pub fn save_field(path: &Path, field: &NoiseField) -> Result<(), ProfileIoError> {
    write_ron(path, field)
}

/// Load a field, rejecting data whose length disagrees with its size.
pub fn load_field(path: &Path) -> Result<NoiseField, ProfileIoError> {
    let contents = fs::read_to_string(path)?;
    let field: NoiseField = ron::from_str(&contents)?;

    if field.width.checked_mul(field.height) != Some(field.data.len()) {
        return Err(ProfileIoError::FieldShape {
            width: field.width,
            height: field.height,
            actual: field.data.len(),
        });
    }
    Ok(field)
}

/// List all profile files in `dir`, sorted. A missing directory is empty.
pub fn list_profiles(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) == Some("ron") {
            profiles.push(path);
        }
    }

    profiles.sort();
    Ok(profiles)
}

/// Generate a filename from a profile name.
pub fn profile_filename(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("{}.ron", sanitized.to_lowercase())
}

/// Full path for a named profile inside `dir`.
pub fn profile_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(profile_filename(name))
}
