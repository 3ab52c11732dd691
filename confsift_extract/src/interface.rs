//! Interface pass: one [`InterfaceRecord`] per `interface` block per file.

use std::collections::BTreeMap;
use std::path::Path;

use confsift_records::{InterfaceRecord, PortSecurity, StormControl, Toggle};

use crate::error::ExtractError;
use crate::matcher::Pattern;
use crate::subparse::{self, PortSecurityAttr, StormControlAttr};

const INTERFACE: Pattern = Pattern::new("interface ");
const DESCRIPTION: Pattern = Pattern::new("description ");
const MODE: Pattern = Pattern::new("switchport mode ");
const STORM_CONTROL: Pattern = Pattern::new("storm-control ");
const PORT_SECURITY: Pattern = Pattern::new("switchport port-security ");

// The `add ` form is listed before the plain trunk form because its
// prefix is a superset; both append identically.
const VLAN_RULES: &[Pattern] = &[
    Pattern::new("switchport access vlan "),
    Pattern::new("switchport trunk allowed vlan add "),
    Pattern::new("switchport trunk allowed vlan "),
];

/// Build the interface-record map from configuration text.
///
/// Scans for `interface <name>` headers; each header's following block of
/// body lines is consumed up to the first blank or single-character line,
/// which ends the block and is itself consumed. Body lines run through the
/// interface rule table; unmatched lines are dropped.
pub fn parse_interface_text(
    text: &str,
) -> Result<BTreeMap<String, InterfaceRecord>, ExtractError> {
    let mut records = BTreeMap::new();
    let mut lines = text.lines();
    while let Some(line) = lines.next() {
        let Some(name) = INTERFACE.strip(line) else {
            continue;
        };
        let record = collect_block(&mut lines)?;
        records.insert(name.to_string(), record);
    }
    Ok(records)
}

/// Read one file and build its interface-record map.
pub fn parse_interface_file(
    path: impl AsRef<Path>,
) -> Result<BTreeMap<String, InterfaceRecord>, ExtractError> {
    let text = crate::read_source(path.as_ref())?;
    parse_interface_text(&text)
}

/// Run the interface pass over a batch of files, keyed by path string.
pub fn parse_interface_files<I, P>(
    paths: I,
) -> Result<BTreeMap<String, BTreeMap<String, InterfaceRecord>>, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut results = BTreeMap::new();
    for path in paths {
        let path = path.as_ref();
        let records = parse_interface_file(path)?;
        results.insert(path.display().to_string(), records);
    }
    Ok(results)
}

fn collect_block<'a, I>(lines: &mut I) -> Result<InterfaceRecord, ExtractError>
where
    I: Iterator<Item = &'a str>,
{
    let mut record = InterfaceRecord::default();
    for line in lines {
        if line.len() <= 1 {
            break;
        }
        apply_attribute(&mut record, strip_block_indent(line))?;
    }
    Ok(record)
}

/// Drop the single leading indent character of a block body line.
fn strip_block_indent(line: &str) -> &str {
    line.char_indices()
        .nth(1)
        .map_or("", |(idx, _)| &line[idx..])
}

fn apply_attribute(record: &mut InterfaceRecord, attr: &str) -> Result<(), ExtractError> {
    if attr.trim() == "shutdown" {
        record.shutdown = Toggle::Yes;
        return Ok(());
    }
    if let Some(rest) = DESCRIPTION.strip(attr) {
        record.description = Some(rest.to_string());
        return Ok(());
    }
    if let Some(rest) = MODE.strip(attr) {
        record.mode = Some(rest.to_string());
        return Ok(());
    }
    for rule in VLAN_RULES {
        let Some(rest) = rule.strip(attr) else {
            continue;
        };
        if let Some(ids) = subparse::vlan_list(rest)? {
            record.vlans.extend(ids);
            return Ok(());
        }
        // Non-numeric membership list: fall through to the later rules.
        break;
    }
    if let Some(rest) = STORM_CONTROL.strip(attr)
        && let Some(field) = subparse::storm_control(rest)
    {
        merge_storm_control(record, field);
        return Ok(());
    }
    if attr.trim() == "switchport nonegotiate" {
        record.dtp = Some(Toggle::No);
        return Ok(());
    }
    if attr.trim() == "no cdp enable" {
        record.cdp = Some(Toggle::No);
        return Ok(());
    }
    if let Some(rest) = PORT_SECURITY.strip(attr)
        && let Some(field) = subparse::port_security(rest)
    {
        merge_port_security(record, field);
    }
    Ok(())
}

fn merge_storm_control(record: &mut InterfaceRecord, field: StormControlAttr) {
    let storm = record.storm_control.get_or_insert_with(StormControl::default);
    match field {
        StormControlAttr::Level(value) => storm.level = Some(value),
        StormControlAttr::Action(value) => storm.action = Some(value),
        StormControlAttr::Kind(value) => storm.kind = Some(value),
    }
}

fn merge_port_security(record: &mut InterfaceRecord, field: PortSecurityAttr) {
    let security = record.port_security.get_or_insert_with(PortSecurity::default);
    match field {
        PortSecurityAttr::Aging(value) => security.aging = Some(value),
        PortSecurityAttr::Violation(value) => security.violation = Some(value),
        PortSecurityAttr::MacAddress(value) => security.mac_address = Some(value),
        PortSecurityAttr::Maximum(value) => security.maximum = Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_block_with_vlan_and_shutdown() {
        let text = "interface GigabitEthernet0/1\n switchport access vlan 10\n shutdown\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let record = &records["GigabitEthernet0/1"];
        assert_eq!(record.vlans, vec![10]);
        assert_eq!(record.shutdown, Toggle::Yes);
    }

    #[test]
    fn shutdown_defaults_to_no() {
        let text = "interface Vlan1\n description mgmt\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let record = &records["Vlan1"];
        assert_eq!(record.shutdown, Toggle::No);
        assert_eq!(record.description.as_deref(), Some("mgmt"));
    }

    #[test]
    fn trunk_vlan_lines_accumulate_across_plain_and_add_forms() {
        let text = "interface GigabitEthernet0/2\n switchport mode trunk\n switchport trunk allowed vlan 10,20-22\n switchport trunk allowed vlan add 30\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let record = &records["GigabitEthernet0/2"];
        assert_eq!(record.mode.as_deref(), Some("trunk"));
        assert_eq!(record.vlans, vec![10, 20, 21, 22, 30]);
    }

    #[test]
    fn blank_line_ends_a_block_and_scanning_resumes() {
        let text = "interface Gi0/1\n shutdown\n\ninterface Gi0/2\n description second\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        assert_eq!(records.len(), 2);
        assert_eq!(records["Gi0/1"].shutdown, Toggle::Yes);
        assert_eq!(records["Gi0/2"].description.as_deref(), Some("second"));
    }

    #[test]
    fn block_ends_at_end_of_file_without_a_blank_line() {
        let text = "interface Gi0/3\n switchport access vlan 7";
        let records = parse_interface_text(text).expect("well-formed");
        assert_eq!(records["Gi0/3"].vlans, vec![7]);
    }

    #[test]
    fn nonegotiate_and_no_cdp_set_their_flags() {
        let text = "interface Gi0/1\n switchport nonegotiate\n no cdp enable\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let record = &records["Gi0/1"];
        assert_eq!(record.dtp, Some(Toggle::No));
        assert_eq!(record.cdp, Some(Toggle::No));
    }

    #[test]
    fn storm_control_fields_merge_within_one_block() {
        let text = "interface Gi0/1\n storm-control broadcast level 0.50 0.40\n storm-control action shutdown\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let storm = records["Gi0/1"].storm_control.as_ref().expect("record");
        assert_eq!(
            storm.level,
            Some(vec!["broadcast".to_string(), "0.50 0.40".to_string()])
        );
        assert_eq!(storm.action, Some(vec!["shutdown".to_string()]));
        assert_eq!(storm.kind, None);
    }

    #[test]
    fn port_security_fields_merge_within_one_block() {
        let text = "interface Gi0/1\n switchport port-security maximum 5\n switchport port-security violation restrict\n switchport port-security aging type inactivity\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        let security = records["Gi0/1"].port_security.as_ref().expect("record");
        assert_eq!(security.maximum, Some(vec!["5".to_string()]));
        assert_eq!(security.violation, Some(vec!["restrict".to_string()]));
        assert_eq!(security.aging, Some(vec!["inactivity".to_string()]));
        assert_eq!(security.mac_address, None);
    }

    #[test]
    fn unrecognized_attribute_lines_are_dropped() {
        let text = "interface Gi0/1\n spanning-tree portfast\n ip arp inspection limit rate 100\n\n";
        let records = parse_interface_text(text).expect("well-formed");
        assert_eq!(records["Gi0/1"], InterfaceRecord::default());
    }

    #[test]
    fn non_numeric_vlan_list_drops_the_line_without_partial_ids() {
        let text = "interface Gi0/1\n switchport trunk allowed vlan 10,none\n\n";
        let records = parse_interface_text(text).expect("no range tokens");
        assert!(records["Gi0/1"].vlans.is_empty());
    }

    #[test]
    fn malformed_vlan_range_fails_the_file() {
        let text = "interface Gi0/1\n switchport trunk allowed vlan 10-\n\n";
        assert!(matches!(
            parse_interface_text(text),
            Err(ExtractError::VlanRange { .. })
        ));
    }
}
