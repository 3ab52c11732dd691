use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions surfaced by the extraction passes.
///
/// Per-line recognition failures are not errors; unmatched lines are
/// dropped silently. Only unreadable inputs, malformed vlan ranges, and a
/// short vlan map terminate a run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input file could not be opened or read.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A vlan range token had a missing, extra, or non-numeric bound.
    #[error("malformed vlan range `{token}`")]
    VlanRange { token: String },

    /// The vlan map file did not yield three well-formed integer lists.
    #[error("vlan map `{}`: {reason}", path.display())]
    VlanMapSyntax { path: PathBuf, reason: String },
}
