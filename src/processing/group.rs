//! Grouping of records by a derived key.

use std::collections::HashMap;
use std::hash::Hash;

use crate::types::ListingRecord;

use super::sort::{sort_by_field, SortDirection, SortField};

/// Records sharing one grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<K> {
    pub key: K,
    pub records: Vec<ListingRecord>,
}

/// Group records by `key`, preserving the order in which keys are first seen.
///
/// Within a group, records keep their original relative order.
pub fn group_by<K, F>(records: &[ListingRecord], key: F) -> Vec<Group<K>>
where
    K: Eq + Hash + Clone,
    F: Fn(&ListingRecord) -> K,
{
    let mut groups: Vec<Group<K>> = Vec::new();
    let mut positions: HashMap<K, usize> = HashMap::new();

    for record in records {
        let k = key(record);
        match positions.get(&k) {
            Some(&pos) => groups[pos].records.push(record.clone()),
            None => {
                positions.insert(k.clone(), groups.len());
                groups.push(Group {
                    key: k,
                    records: vec![record.clone()],
                });
            }
        }
    }

    groups
}

/// Concatenate grouped records back into one flat collection, group by group.
///
/// Reports only accept flat input; callers holding grouped results flatten them here first.
pub fn flatten<K>(groups: &[Group<K>]) -> Vec<ListingRecord> {
    groups.iter().flat_map(|g| g.records.iter().cloned()).collect()
}

/// Group by BHK (ascending), with each group sorted by ascending size.
///
/// Records with an unparseable BHK are skipped with a warning; records without a valid size are
/// dropped by the size sort.
pub fn group_by_bhk_sorted_by_size(records: &[ListingRecord]) -> Vec<Group<i64>> {
    let valid: Vec<ListingRecord> = records
        .iter()
        .filter(|r| {
            let ok = r.bhk().is_some();
            if !ok {
                log::warn!("skipping listing with invalid BHK '{}' (city='{}')", r.bhk, r.city);
            }
            ok
        })
        .cloned()
        .collect();

    let mut groups: Vec<Group<i64>> = group_by(&valid, |r| r.bhk().unwrap_or_default())
        .into_iter()
        .map(|g| Group {
            records: sort_by_field(&g.records, SortField::Size, SortDirection::Ascending),
            key: g.key,
        })
        .collect();
    groups.sort_by_key(|g| g.key);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(city: &str, bhk: &str, size: &str) -> ListingRecord {
        ListingRecord {
            city: city.to_string(),
            bhk: bhk.to_string(),
            size: size.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn group_by_preserves_first_seen_key_order() {
        let ds = vec![
            listing("Pune", "1", "10"),
            listing("Delhi", "2", "20"),
            listing("pune ", "3", "30"),
            listing("Agra", "4", "40"),
        ];
        let groups = group_by(&ds, |r| r.city_name());
        let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["Pune", "Delhi", "Agra"]);
        assert_eq!(groups[0].records.len(), 2);
        assert_eq!(groups[0].records[1].bhk, "3");
    }

    #[test]
    fn flatten_concatenates_groups_in_order() {
        let ds = vec![
            listing("Pune", "1", "10"),
            listing("Delhi", "2", "20"),
            listing("Pune", "3", "30"),
        ];
        let flat = flatten(&group_by(&ds, |r| r.city_name()));
        let bhks: Vec<&str> = flat.iter().map(|r| r.bhk.as_str()).collect();
        assert_eq!(bhks, vec!["1", "3", "2"]);
    }

    #[test]
    fn bhk_groups_are_ordered_and_sorted_by_size() {
        let ds = vec![
            listing("A", "3", "1500"),
            listing("B", "1", "600"),
            listing("C", "3", "900"),
            listing("D", "bad", "100"),
            listing("E", "1", "0"),
            listing("F", "1", "450"),
        ];
        let groups = group_by_bhk_sorted_by_size(&ds);
        assert_eq!(groups.iter().map(|g| g.key).collect::<Vec<_>>(), vec![1, 3]);
        let cities: Vec<&str> = groups[0].records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["F", "B"]);
        let cities: Vec<&str> = groups[1].records.iter().map(|r| r.city.as_str()).collect();
        assert_eq!(cities, vec!["C", "A"]);
    }

    #[test]
    fn group_by_on_empty_input_is_empty() {
        assert!(group_by(&[], |r: &ListingRecord| r.city_name()).is_empty());
    }
}
