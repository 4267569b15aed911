//! Environment loading for the CLI

/// Load `.env` from the current directory, if present.
///
/// Variables already set in the process environment are not overwritten.
/// Runs before tracing is initialised, so the outcome is not logged.
pub fn load_dotenv() -> Option<std::path::PathBuf> {
    dotenvy::dotenv().ok()
}
