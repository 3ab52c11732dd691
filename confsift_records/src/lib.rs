//! Record model for settings extracted from Cisco-style configuration text.
//!
//! This crate provides:
//! - per-file global settings (`GlobalRecord`, `UserEntry`)
//! - per-interface settings (`InterfaceRecord`, `StormControl`, `PortSecurity`)
//! - the categorized VLAN map (`VlanMap`)
//!
//! Records are plain data: they are built once by the extraction pass in
//! `confsift_extract` and never mutated afterwards. All types serialize to
//! stable JSON shapes.
//!
//! # Example
//!
//! ```rust
//! use confsift_records::{InterfaceRecord, Toggle};
//!
//! let record = InterfaceRecord::default();
//! assert_eq!(record.shutdown, Toggle::No);
//! assert!(record.vlans.is_empty());
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Two-state flag serialized as the literal strings `"yes"` / `"no"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Toggle {
    Yes,
    #[default]
    No,
}

/// One `username` statement: secret type plus optional privilege level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub password_type: u32,
    pub privilege: Option<u32>,
}

/// Per-file settings not tied to a specific interface.
///
/// Lists keep statement order from the source file. `users` keys are
/// usernames; a repeated username overwrites the earlier entry (last write
/// wins). `ssh` maps option keywords to their values, with presence-only
/// options stored as `"yes"`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalRecord {
    pub active_services: Vec<String>,
    pub disabled_services: Vec<String>,
    pub users: BTreeMap<String, UserEntry>,
    pub aaa: Vec<String>,
    pub dhcp_relay: Vec<String>,
    pub ssh: BTreeMap<String, String>,
    pub lines: Vec<String>,
}

/// Accumulated `storm-control` settings for one interface block.
///
/// Fields fill in independently as repeated storm-control lines appear;
/// a repeated field overwrites its earlier value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StormControl {
    pub level: Option<Vec<String>>,
    pub action: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub kind: Option<Vec<String>>,
}

/// Accumulated `switchport port-security` settings for one interface block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PortSecurity {
    pub aging: Option<Vec<String>>,
    pub violation: Option<Vec<String>>,
    pub mac_address: Option<Vec<String>>,
    pub maximum: Option<Vec<String>>,
}

/// Settings for one `interface <name>` block.
///
/// `vlans` keeps encounter order and may hold duplicates; range statements
/// are expanded to individual IDs before insertion. `dtp` and `cdp` are
/// only present when the block explicitly disables negotiation or CDP.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InterfaceRecord {
    pub shutdown: Toggle,
    pub description: Option<String>,
    pub mode: Option<String>,
    pub vlans: Vec<u32>,
    pub dtp: Option<Toggle>,
    pub cdp: Option<Toggle>,
    pub storm_control: Option<StormControl>,
    pub port_security: Option<PortSecurity>,
}

/// VLAN IDs categorized by the auxiliary VLAN map file.
///
/// Buckets are positional in the source file: critical first, then
/// unknown, then trusted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VlanMap {
    pub critical: Vec<u32>,
    pub unknown: Vec<u32>,
    pub trusted: Vec<u32>,
}

/// Extraction output for one batch of files: both passes plus the
/// optional VLAN map, keyed by the path strings given by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractReport {
    pub global: BTreeMap<String, GlobalRecord>,
    pub interfaces: BTreeMap<String, BTreeMap<String, InterfaceRecord>>,
    pub vlan_map: Option<VlanMap>,
}
