//! Extraction of structured settings from Cisco-style configuration text.
//!
//! This crate provides:
//! - a literal-prefix line matcher with ordered rule dispatch ([`Pattern`])
//! - the global settings pass ([`parse_global_files`])
//! - the interface block pass ([`parse_interface_files`])
//! - the VLAN map parser ([`parse_vlan_map`])
//!
//! Recognition is deliberately narrow: a fixed vocabulary of statement
//! prefixes, tried in a fixed priority order. Lines matching no rule are
//! dropped silently; that is normal control flow, not an error. The two
//! passes are independent products of separate iterations over the same
//! files, and records are never mutated once a file's lines are exhausted.
//!
//! # Example
//!
//! ```rust
//! use confsift_extract::parse_interface_text;
//!
//! let cfg = "interface GigabitEthernet0/1\n switchport access vlan 10\n shutdown\n\n";
//! let records = parse_interface_text(cfg).expect("well-formed vlan lists");
//! let record = &records["GigabitEthernet0/1"];
//! assert_eq!(record.vlans, vec![10]);
//! ```

use std::fs;
use std::path::Path;

mod error;
mod global;
mod interface;
mod matcher;
mod subparse;
mod vlanmap;

pub use error::ExtractError;
pub use global::{parse_global_file, parse_global_files, parse_global_text};
pub use interface::{parse_interface_file, parse_interface_files, parse_interface_text};
pub use matcher::Pattern;
pub use vlanmap::{parse_vlan_map, parse_vlan_map_text};

pub(crate) fn read_source(path: &Path) -> Result<String, ExtractError> {
    fs::read_to_string(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })
}
