//! Corpus aggregation: collapse per-document class maps into one.

use crate::record::ClassMap;

/// Merge any number of class maps into one aggregate map.
///
/// For each name appearing in any input, counts are summed and context sets
/// unioned; names present in only one input copy through. Inputs are never
/// mutated, and because addition and set union commute, the result is
/// identical for any input ordering or grouping.
pub fn merge(maps: &[ClassMap]) -> ClassMap {
    let mut merged = ClassMap::new();

    for map in maps {
        for rec in map.records() {
            match merged.get(&rec.name) {
                Some(existing) => {
                    let mut combined = existing.clone();
                    combined.count += rec.count;
                    combined.contexts.extend(rec.contexts.iter().cloned());
                    merged.insert_record(combined);
                }
                None => merged.insert_record(rec.clone()),
            }
        }
    }

    merged
}
