//! Global settings pass: one [`GlobalRecord`] per input file.

use std::collections::BTreeMap;
use std::path::Path;

use confsift_records::GlobalRecord;

use crate::error::ExtractError;
use crate::matcher::Pattern;
use crate::subparse;

/// Statement family a matched global line belongs to.
#[derive(Debug, Clone, Copy)]
enum GlobalField {
    ActiveService,
    DisabledService,
    Username,
    Aaa,
    DhcpRelay,
    Ssh,
    Line,
}

/// Global rule table, tried top to bottom. The dhcp rule is anchored so
/// an indented `ip dhcp` sub-statement inside some other block does not
/// count as a top-level relay statement.
const GLOBAL_RULES: &[(Pattern, GlobalField)] = &[
    (Pattern::new("service "), GlobalField::ActiveService),
    (Pattern::new("no service "), GlobalField::DisabledService),
    (Pattern::new("username "), GlobalField::Username),
    (Pattern::new("aaa "), GlobalField::Aaa),
    (Pattern::anchored("ip dhcp "), GlobalField::DhcpRelay),
    (Pattern::new("ip ssh "), GlobalField::Ssh),
    (Pattern::new("line "), GlobalField::Line),
];

/// Build a [`GlobalRecord`] from configuration text.
///
/// Every line runs through the rule table; unmatched lines are dropped.
/// A file of only unrecognized lines yields an empty record, not an
/// error.
pub fn parse_global_text(text: &str) -> GlobalRecord {
    let mut record = GlobalRecord::default();
    for line in text.lines() {
        apply_line(&mut record, line);
    }
    record
}

/// Read one file and build its [`GlobalRecord`].
pub fn parse_global_file(path: impl AsRef<Path>) -> Result<GlobalRecord, ExtractError> {
    let text = crate::read_source(path.as_ref())?;
    Ok(parse_global_text(&text))
}

/// Run the global pass over a batch of files, keyed by path string.
pub fn parse_global_files<I, P>(paths: I) -> Result<BTreeMap<String, GlobalRecord>, ExtractError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut results = BTreeMap::new();
    for path in paths {
        let path = path.as_ref();
        let record = parse_global_file(path)?;
        results.insert(path.display().to_string(), record);
    }
    Ok(results)
}

fn apply_line(record: &mut GlobalRecord, line: &str) {
    for (pattern, field) in GLOBAL_RULES {
        let Some(rest) = pattern.strip(line) else {
            continue;
        };
        match field {
            GlobalField::ActiveService => record.active_services.push(rest.to_string()),
            GlobalField::DisabledService => record.disabled_services.push(rest.to_string()),
            GlobalField::Username => match subparse::username(rest) {
                Some((name, entry)) => {
                    record.users.insert(name, entry);
                }
                // Structural failure: keep trying lower-priority rules.
                None => continue,
            },
            GlobalField::Aaa => record.aaa.push(rest.to_string()),
            GlobalField::DhcpRelay => record.dhcp_relay.push(rest.to_string()),
            GlobalField::Ssh => match subparse::ssh_option(rest) {
                Some((key, value)) => {
                    record.ssh.insert(key, value);
                }
                None => continue,
            },
            GlobalField::Line => record.lines.push(rest.to_string()),
        }
        return;
    }
}
