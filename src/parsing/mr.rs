/*! Meaning representation parsing

A meaning representation (MR) is a comma-separated list of `key[value]` slots.
MRs have no explicit subject, so one is picked from the slots:

1. the value of the `name` slot (the slot is then removed),
2. otherwise the value of the `eatType` slot (removed as well),
3. otherwise the literal `restaurant`.

A `name` or `eatType` slot with a blank value can't be a subject: it is dropped and
the next candidate is tried.

Remaining slots become `(subject, key, value)` triples, in their original order.
Slot keys can be duplicated, so slots are kept in a list rather than a map.
!*/
use log::debug;

use crate::data::{Triple, TripleSet};
use crate::error::Error;

/// Subject used when the record has neither a `name` nor an `eatType` slot.
pub const FALLBACK_SUBJECT: &str = "restaurant";

const NAME: &str = "name";
const EAT_TYPE: &str = "eatType";

/// Split a MR into its `(key, value)` slots.
///
/// Errors if a slot has no `[` or does not end with `]`.
fn slots(mr: &str) -> Result<Vec<(&str, &str)>, Error> {
    mr.split(',')
        .map(str::trim)
        .map(|item| {
            item.split_once('[')
                .and_then(|(key, val)| val.strip_suffix(']').map(|val| (key, val)))
                .ok_or_else(|| Error::MalformedRecord(mr.to_string()))
        })
        .collect()
}

/// Remove the first slot with key `key`, returning its value.
fn take_slot<'a>(slots: &mut Vec<(&'a str, &'a str)>, key: &str) -> Option<&'a str> {
    slots
        .iter()
        .position(|(k, _)| *k == key)
        .map(|idx| slots.remove(idx).1)
}

/// Remove slots with key `key` until one has a non-blank value, returning that value.
fn take_subject<'a>(slots: &mut Vec<(&'a str, &'a str)>, key: &str) -> Option<&'a str> {
    while let Some(val) = take_slot(slots, key) {
        if !val.trim().is_empty() {
            return Some(val);
        }
        debug!("dropping blank {} slot", key);
    }
    None
}

/// Parse a MR into a [TripleSet].
///
/// A record holding only a `name` slot yields `(name, eatType, restaurant)` so that it is not lost.
/// A record holding only an `eatType` slot yields an empty set: callers decide what to do with it.
pub fn parse(mr: &str) -> Result<TripleSet, Error> {
    let mut slots = slots(mr)?;

    let subj = if let Some(name) = take_subject(&mut slots, NAME) {
        // corrupted case: nothing but a name
        if slots.is_empty() {
            slots.push((EAT_TYPE, FALLBACK_SUBJECT));
        }
        name
    } else if let Some(eat_type) = take_subject(&mut slots, EAT_TYPE) {
        eat_type
    } else {
        debug!("no subject in mr {:?}, using {:?}", mr, FALLBACK_SUBJECT);
        FALLBACK_SUBJECT
    };

    Ok(slots
        .into_iter()
        .map(|(key, val)| Triple::new(subj, key, val))
        .collect())
}
