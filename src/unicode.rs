//! Character class expansions and the Unicode property oracle.
//!
//! Property lookups are answered from the Unicode tables bundled with
//! `regex-syntax` and cached process-wide. The cache only ever grows, so
//! readers after the initial load never see an entry change.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use regex_syntax::hir::{Class, HirKind};

use crate::error::Error;
use crate::parser::ast::{ClassKind, PosixKind};

/// An inclusive codepoint range.
pub(crate) type CodepointRange = (u32, u32);

static CACHE: OnceLock<Mutex<HashMap<String, Arc<Vec<CodepointRange>>>>> = OnceLock::new();

/// Look up a Unicode property by name. Accepts `key=value` and bare keys
/// (`Greek`, `sc=Greek`, `gc=letter`, `decimal_number`, ...); aggregate
/// categories such as `letter` and `mark` expand to their subcategories.
pub(crate) fn property_ranges(name: &str) -> Result<Arc<Vec<CodepointRange>>, Error> {
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    if let Some(ranges) = cache.lock().unwrap().get(name) {
        return Ok(ranges.clone());
    }

    let ranges = Arc::new(load(name)?);
    let mut cache = cache.lock().unwrap();
    Ok(cache.entry(name.to_owned()).or_insert(ranges).clone())
}

fn load(name: &str) -> Result<Vec<CodepointRange>, Error> {
    let mut parser = regex_syntax::ParserBuilder::new().build();
    let hir = parser
        .parse(&format!(r"\p{{{}}}", name))
        .map_err(|_| Error::UnknownProperty(name.to_owned()))?;

    match hir.into_kind() {
        HirKind::Class(Class::Unicode(class)) => Ok(class
            .iter()
            .map(|range| (range.start() as u32, range.end() as u32))
            .collect()),
        _ => Err(Error::UnknownProperty(name.to_owned())),
    }
}

pub(crate) fn class_ranges(kind: ClassKind) -> Result<Vec<CodepointRange>, Error> {
    match kind {
        ClassKind::Digit => Ok(property_ranges("decimal_number")?.to_vec()),
        ClassKind::Hex => Ok(vec![(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)]),
        ClassKind::Space => Ok(vec![(0x09, 0x0D), (0x20, 0x20)]),
        ClassKind::Word => Ok(vec![(0x30, 0x39), (0x5F, 0x5F), (0x41, 0x5A), (0x61, 0x7A)]),
    }
}

pub(crate) fn posix_ranges(kind: PosixKind) -> Result<Vec<CodepointRange>, Error> {
    match kind {
        PosixKind::Alnum => union(&["letter", "mark", "decimal_number"]),
        PosixKind::Alpha => union(&["letter", "mark"]),
        PosixKind::Ascii => union(&["ascii"]),
        PosixKind::Blank => {
            let mut ranges = union(&["space_separator"])?;
            ranges.push((0x09, 0x09));
            Ok(ranges)
        }
        // the surrogate category is omitted: surrogates have no UTF-8
        // encoding, so no input byte sequence could ever match them
        PosixKind::Cntrl => union(&["control", "format", "unassigned", "private_use"]),
        PosixKind::Digit => union(&["decimal_number"]),
        PosixKind::Graph => Err(Error::Unsupported("POSIX class [:graph:]")),
        PosixKind::Print => Err(Error::Unsupported("POSIX class [:print:]")),
        PosixKind::Lower => union(&["lowercase_letter"]),
        PosixKind::Upper => union(&["uppercase_letter"]),
        // connector_punctuation belongs to [:word:], not here
        PosixKind::Punct => {
            let mut ranges = union(&[
                "dash_punctuation",
                "open_punctuation",
                "close_punctuation",
                "initial_punctuation",
                "final_punctuation",
                "other_punctuation",
            ])?;
            for c in ['$', '+', '<', '=', '>', '^', '`', '|', '~'] {
                ranges.push((c as u32, c as u32));
            }
            Ok(ranges)
        }
        PosixKind::Space => {
            let mut ranges = union(&["space_separator", "line_separator", "paragraph_separator"])?;
            ranges.push((0x09, 0x0D));
            ranges.push((0x85, 0x85));
            Ok(ranges)
        }
        PosixKind::Word => union(&["letter", "mark", "decimal_number", "connector_punctuation"]),
        PosixKind::Xdigit => Ok(vec![(0x30, 0x39), (0x41, 0x46), (0x61, 0x66)]),
    }
}

fn union(names: &[&str]) -> Result<Vec<CodepointRange>, Error> {
    let mut ranges = Vec::new();
    for name in names {
        ranges.extend(property_ranges(name)?.iter().copied());
    }
    Ok(ranges)
}
