//! Save and load generator profiles and generated fields as RON.

pub mod profile_io;

pub use profile_io::{
    list_profiles, load_field, load_profile, profile_filename, profile_path, save_field,
    save_profile, ProfileIoError,
};
