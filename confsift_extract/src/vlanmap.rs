//! VLAN map parsing: three positional integer lists from a small file.

use std::path::Path;
use std::sync::LazyLock;

use confsift_records::VlanMap;
use regex::Regex;

use crate::error::ExtractError;

static VLAN_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": ([0-9,]+)").expect("vlan list pattern compiles"));

/// Read and parse a VLAN map file.
///
/// The file must contain three labeled lines of the form
/// `<label>: <comma-separated-integers>`. Lists are taken positionally:
/// critical first, then unknown, then trusted. Label text is not
/// inspected. Fewer than three lists, or a malformed list, is fatal.
pub fn parse_vlan_map(path: impl AsRef<Path>) -> Result<VlanMap, ExtractError> {
    let path = path.as_ref();
    let text = crate::read_source(path)?;
    parse_vlan_map_text(&text, path)
}

/// Parse VLAN map text; `path` is only used for error messages.
pub fn parse_vlan_map_text(text: &str, path: &Path) -> Result<VlanMap, ExtractError> {
    let mut buckets = Vec::with_capacity(3);
    for captures in VLAN_LIST.captures_iter(text).take(3) {
        buckets.push(parse_id_list(&captures[1], path)?);
    }
    if buckets.len() < 3 {
        return Err(ExtractError::VlanMapSyntax {
            path: path.to_path_buf(),
            reason: format!("expected 3 integer lists, found {}", buckets.len()),
        });
    }
    let trusted = buckets.pop().expect("three buckets");
    let unknown = buckets.pop().expect("three buckets");
    let critical = buckets.pop().expect("three buckets");
    Ok(VlanMap {
        critical,
        unknown,
        trusted,
    })
}

fn parse_id_list(list: &str, path: &Path) -> Result<Vec<u32>, ExtractError> {
    list.split(',')
        .map(|id| {
            id.parse::<u32>().map_err(|_| ExtractError::VlanMapSyntax {
                path: path.to_path_buf(),
                reason: format!("invalid vlan id `{id}` in list `{list}`"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<VlanMap, ExtractError> {
        parse_vlan_map_text(text, Path::new("vlanmap.txt"))
    }

    #[test]
    fn three_labeled_lines_fill_the_buckets_positionally() {
        let map = parse("Critical: 10,20\nUnknown: 30\nTrusted: 40,50\n").expect("valid map");
        assert_eq!(map.critical, vec![10, 20]);
        assert_eq!(map.unknown, vec![30]);
        assert_eq!(map.trusted, vec![40, 50]);
    }

    #[test]
    fn label_text_is_not_inspected() {
        let map = parse("a: 1\nb: 2\nc: 3\n").expect("valid map");
        assert_eq!(map.critical, vec![1]);
        assert_eq!(map.trusted, vec![3]);
    }

    #[test]
    fn lines_without_the_list_shape_are_skipped() {
        let map = parse("# comment\nCritical: 1\nnote\nUnknown: 2\nTrusted: 3\n")
            .expect("valid map");
        assert_eq!(map.unknown, vec![2]);
    }

    #[test]
    fn fewer_than_three_lists_is_fatal() {
        let err = parse("Critical: 10\nUnknown: 20\n").expect_err("short map");
        assert!(matches!(err, ExtractError::VlanMapSyntax { .. }));
        assert!(err.to_string().contains("found 2"));
    }

    #[test]
    fn dangling_comma_in_a_list_is_fatal() {
        let err = parse("Critical: 10,\nUnknown: 20\nTrusted: 30\n").expect_err("bad list");
        assert!(matches!(err, ExtractError::VlanMapSyntax { .. }));
    }
}
