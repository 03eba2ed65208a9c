use ahash::AHashMap;
use itertools::Itertools;
use serde::Serialize;

/// The canonical input of the step planner: field name to trimmed value for one problem.
///
/// Blank names and blank values never make it into the map, and a `%(name)%`
/// wrapper around a field name is removed on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldRecord {
    fields: AHashMap<String, String>,
}

/// Cell text that counts as missing even though it is not blank.
const MISSING_SENTINEL: &str = "nan";
/// Header prefix a spreadsheet tool gives to columns without a name.
const UNNAMED_PREFIX: &str = "Unnamed";

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `name -> value` after normalization. Returns `false` when the pair was dropped.
    pub fn insert(&mut self, name: &str, value: &str) -> bool {
        let name = normalize_field_name(name);
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return false;
        }
        self.fields.insert(name.to_string(), value.to_string());
        true
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in sorted order, for stable diagnostics.
    pub fn names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).sorted().collect()
    }

    /// Keeps only the fields that carry real data: no missing-value sentinels and
    /// no fields named after unnamed spreadsheet columns.
    pub fn meaningful(&self) -> FieldRecord {
        let fields = self
            .fields
            .iter()
            .filter(|(name, value)| {
                value.as_str() != MISSING_SENTINEL && !name.starts_with(UNNAMED_PREFIX)
            })
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();
        FieldRecord { fields }
    }
}

impl<N: AsRef<str>, V: AsRef<str>> FromIterator<(N, V)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut record = FieldRecord::new();
        for (name, value) in iter {
            record.insert(name.as_ref(), value.as_ref());
        }
        record
    }
}

/// Trims a field name and strips an optional `%( ... )%` template wrapper.
pub fn normalize_field_name(raw: &str) -> &str {
    let name = raw.trim();
    name.strip_prefix("%(")
        .and_then(|inner| inner.strip_suffix(")%"))
        .unwrap_or(name)
}
