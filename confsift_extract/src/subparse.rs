//! Sub-parsers for compound statement remainders.
//!
//! Each function takes the remainder of an already-classified line and
//! extracts its mini-grammar. A `None` return is a structural failure:
//! the caller drops the whole line and no partial data reaches the
//! record. Only the vlan list parser can fail hard, on a malformed range
//! token.

use confsift_records::UserEntry;

use crate::error::ExtractError;

/// One recognized storm-control field, merged into the interface record
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StormControlAttr {
    Level(Vec<String>),
    Action(Vec<String>),
    Kind(Vec<String>),
}

/// One recognized port-security field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSecurityAttr {
    Aging(Vec<String>),
    Violation(Vec<String>),
    MacAddress(Vec<String>),
    Maximum(Vec<String>),
}

/// Parse the remainder of a `username ` statement.
///
/// Grammar: `<name> [privilege <N>] secret <D>`, trailing tokens ignored.
/// A missing or malformed `secret <D>` tail fails the whole line.
pub fn username(rest: &str) -> Option<(String, UserEntry)> {
    let mut tokens = rest.split_whitespace();
    let name = tokens.next()?;
    let mut next = tokens.next()?;

    let mut privilege = None;
    if next == "privilege" {
        privilege = Some(all_digits(tokens.next()?)?);
        next = tokens.next()?;
    }

    if next != "secret" {
        return None;
    }
    let password_type = leading_digits(tokens.next()?)?;

    Some((
        name.to_string(),
        UserEntry {
            password_type,
            privilege,
        },
    ))
}

/// Parse the remainder of an `ip ssh ` statement into a key/value pair.
///
/// The keyword is the leading run of letters and hyphens and must be
/// followed by whitespace. `logging` becomes a `logging-events` presence
/// flag; `port` keeps only the first value token; anything else is stored
/// verbatim.
pub fn ssh_option(rest: &str) -> Option<(String, String)> {
    let end = rest
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let keyword = &rest[..end];
    let after = &rest[end..];
    if !after.starts_with(char::is_whitespace) {
        return None;
    }
    let value = after.trim_start();

    match keyword {
        "logging" => Some(("logging-events".to_string(), "yes".to_string())),
        "port" => {
            let first = value.split_whitespace().next()?;
            Some(("port".to_string(), first.to_string()))
        }
        _ => Some((keyword.to_string(), value.to_string())),
    }
}

/// Parse the remainder of a `storm-control ` statement.
///
/// Shapes in priority order: `<word> level <rest>`, `action <word>`,
/// `<word> [include] <word>`. The first shape that fits wins.
pub fn storm_control(rest: &str) -> Option<StormControlAttr> {
    if let Some((word, tail)) = alpha_word(rest)
        && let Some(levels) = tail.trim_start().strip_prefix("level ")
    {
        return Some(StormControlAttr::Level(vec![
            word.to_string(),
            levels.trim_end().to_string(),
        ]));
    }

    if let Some(tail) = rest.trim_start().strip_prefix("action ")
        && let Some((word, _)) = alpha_word(tail)
    {
        return Some(StormControlAttr::Action(vec![word.to_string()]));
    }

    if let Some((first, tail)) = alpha_word(rest)
        && let Some((second, tail)) = alpha_word(tail)
    {
        if second != "include" {
            return Some(StormControlAttr::Kind(vec![
                first.to_string(),
                second.to_string(),
            ]));
        }
        if let Some((third, _)) = alpha_word(tail) {
            return Some(StormControlAttr::Kind(vec![
                first.to_string(),
                third.to_string(),
            ]));
        }
    }

    None
}

/// Parse the remainder of a `switchport port-security ` statement.
///
/// Shapes in priority order: `aging type <rest>`, `violation <rest>`,
/// `mac-address [sticky] <rest>`, `maximum <rest>`.
pub fn port_security(rest: &str) -> Option<PortSecurityAttr> {
    let rest = rest.trim_start();

    if let Some(value) = rest.strip_prefix("aging type ") {
        return Some(PortSecurityAttr::Aging(vec![value.to_string()]));
    }
    if let Some(value) = rest.strip_prefix("violation ") {
        return Some(PortSecurityAttr::Violation(vec![value.to_string()]));
    }
    if let Some(value) = rest.strip_prefix("mac-address ") {
        let value = value.trim_start();
        let mut fields = Vec::new();
        let tail = match value.strip_prefix("sticky") {
            Some(tail) if tail.is_empty() || tail.starts_with(char::is_whitespace) => {
                fields.push("sticky".to_string());
                tail.trim_start()
            }
            _ => value,
        };
        if !tail.is_empty() {
            fields.push(tail.to_string());
        }
        return Some(PortSecurityAttr::MacAddress(fields));
    }
    if let Some(value) = rest.strip_prefix("maximum ") {
        return Some(PortSecurityAttr::Maximum(
            value.split_whitespace().map(str::to_string).collect(),
        ));
    }

    None
}

/// Expand the remainder of a vlan membership statement into integer IDs.
///
/// Tokens are comma-separated: a plain decimal, or an inclusive `low-high`
/// range. `Ok(None)` means a token was not numeric at all and the line is
/// treated as unmatched; a range token with a bad bound is fatal.
pub fn vlan_list(rest: &str) -> Result<Option<Vec<u32>>, ExtractError> {
    let mut ids = Vec::new();
    for token in rest.split(',') {
        let token = token.trim();
        if token.contains('-') {
            let (low, high) = expand_bounds(token)?;
            ids.extend(low..=high);
        } else {
            match all_digits(token) {
                Some(id) => ids.push(id),
                None => return Ok(None),
            }
        }
    }
    Ok(Some(ids))
}

fn expand_bounds(token: &str) -> Result<(u32, u32), ExtractError> {
    let malformed = || ExtractError::VlanRange {
        token: token.to_string(),
    };
    let (low, high) = token.split_once('-').ok_or_else(malformed)?;
    let low = all_digits(low).ok_or_else(malformed)?;
    let high = all_digits(high).ok_or_else(malformed)?;
    Ok((low, high))
}

/// Take the leading run of ASCII letters from `s` (after leading
/// whitespace), returning the word and the tail.
fn alpha_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    if end == 0 {
        None
    } else {
        Some((&s[..end], &s[end..]))
    }
}

fn all_digits(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

fn leading_digits(token: &str) -> Option<u32> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if end == 0 {
        return None;
    }
    token[..end].parse().ok()
}
