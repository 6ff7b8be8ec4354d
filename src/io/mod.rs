//! Reading inputs and exporting plan-view sketches.

#[cfg(feature = "svg-io")]
mod svg;

#[cfg(feature = "dxf-io")]
mod dxf;

use crate::params::WaveDriveInputs;
use std::path::Path;

/// Generic I/O and format‑conversion errors.
///
/// Export formats are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Json(serde_json::Error),

    MalformedInput(String),

    #[cfg(feature = "dxf-io")]
    /// Error bubbled up from the `dxf` crate while writing a drawing.
    Dxf(::dxf::DxfError),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Json(error) => write!(f, "Could not parse inputs: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            #[cfg(feature = "dxf-io")]
            Dxf(error) => write!(f, "DXF error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<serde_json::Error> for IoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[cfg(feature = "dxf-io")]
impl From<::dxf::DxfError> for IoError {
    fn from(value: ::dxf::DxfError) -> Self {
        Self::Dxf(value)
    }
}

/// Load [`WaveDriveInputs`] from a JSON file. Keys that are absent keep their defaults.
pub fn read_inputs(path: impl AsRef<Path>) -> Result<WaveDriveInputs, IoError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    if text.trim().is_empty() {
        return Err(IoError::MalformedInput(format!(
            "{} is empty",
            path.as_ref().display()
        )));
    }
    Ok(WaveDriveInputs::from_json(&text)?)
}
