use log::*;

use std::collections::{HashMap};

///
/// Reference to an entry in a `FloatTable`
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub struct FloatIndex(pub u32);

///
/// A value stored in the float table
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct DataFloat {
    pub value: f32
}

///
/// A deduplicating table of floating point values
///
/// Values are matched by their exact bit pattern: there is no tolerance, so values that differ only by
/// rounding are stored separately. This also means that `0.0` and `-0.0` are distinct entries, and that
/// a NaN is stored once per payload. Entries are never removed, so an index stays valid for the lifetime
/// of the table.
///
#[derive(Clone, Debug, Default)]
pub struct FloatTable {
    /// The values in this table, in the order they were added
    entries: Vec<DataFloat>,

    /// Maps the bit pattern of each value to its index
    index_for_bits: HashMap<u32, FloatIndex>
}

impl FloatTable {
    ///
    /// Creates an empty float table
    ///
    pub fn new() -> FloatTable {
        FloatTable {
            entries:        vec![],
            index_for_bits: HashMap::new()
        }
    }

    ///
    /// Creates a float table from a set of entries (eg, ones that were loaded from a file)
    ///
    /// If the same value appears more than once, `index_for()` will return the first index it appears at.
    ///
    pub fn from_entries(entries: Vec<DataFloat>) -> FloatTable {
        let mut index_for_bits = HashMap::new();

        for (idx, entry) in entries.iter().enumerate() {
            index_for_bits.entry(entry.value.to_bits()).or_insert(FloatIndex(idx as u32));
        }

        FloatTable { entries, index_for_bits }
    }

    ///
    /// Returns the index of the entry for a value, adding a new entry if the value is not already in the table
    ///
    pub fn index_for(&mut self, value: f32) -> FloatIndex {
        let entries = &mut self.entries;

        *self.index_for_bits.entry(value.to_bits())
            .or_insert_with(|| {
                let index = FloatIndex(entries.len() as u32);
                trace!("New float table entry {:?} = {}", index, value);

                entries.push(DataFloat { value });
                index
            })
    }

    ///
    /// Retrieves the value at a particular index, or `None` if the index is not in this table
    ///
    #[inline]
    pub fn try_value_for(&self, index: FloatIndex) -> Option<f32> {
        self.entries.get(index.0 as usize).map(|entry| entry.value)
    }

    ///
    /// Retrieves the value at a particular index
    ///
    /// An index that is not in the table means that the table and whatever is referring to it have been
    /// separated, so this will panic rather than return a made-up value.
    ///
    pub fn value_for(&self, index: FloatIndex) -> f32 {
        match self.try_value_for(index) {
            Some(value) => value,
            None        => {
                error!("Float index {} is not in a table of {} entries", index.0, self.entries.len());
                panic!("Float index {} is out of range (table has {} entries)", index.0, self.entries.len());
            }
        }
    }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    ///
    /// The entries in this table, in index order
    ///
    #[inline]
    pub fn entries(&self) -> &[DataFloat] {
        &self.entries
    }
}
