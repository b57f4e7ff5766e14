use catbrowse_core::CoreError;
use std::io;

use crate::operations::ValidationError;

/// Map a failed run to user-friendly messages
/// Returns (title, message, details)
pub fn map_run_error(error: &anyhow::Error) -> (String, String, String) {
    let details = format!("{error:#}");

    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<ValidationError>() {
            return (
                "Invalid Selection".to_string(),
                "A --select argument could not be understood.".to_string(),
                err.to_string(),
            );
        }

        let io_err = match cause.downcast_ref::<CoreError>() {
            Some(CoreError::Io(err)) => Some(err),
            Some(CoreError::Feed(_)) => {
                return (
                    "Feed Error".to_string(),
                    "The catalog feed could not be parsed.".to_string(),
                    details,
                );
            }
            Some(CoreError::ConfigParse(_) | CoreError::InvalidConfig(_)) => {
                return (
                    "Configuration Error".to_string(),
                    "The configuration file is invalid.".to_string(),
                    details,
                );
            }
            Some(CoreError::Json(_)) => None,
            None => cause.downcast_ref::<io::Error>(),
        };

        match io_err.map(io::Error::kind) {
            Some(io::ErrorKind::NotFound) => {
                return (
                    "File Not Found".to_string(),
                    "The file could not be found.".to_string(),
                    format!(
                        "{details}\n\nPlease verify the file exists and you have permission to read it."
                    ),
                );
            }
            Some(io::ErrorKind::PermissionDenied) => {
                return (
                    "Permission Denied".to_string(),
                    "Permission denied.".to_string(),
                    details,
                );
            }
            _ => {}
        }
    }

    ("Error".to_string(), "catbrowse failed.".to_string(), details)
}
