/// Stable identifier for a normalized record within one dataset.
///
/// Ids are assigned densely in ingest order and are only meaningful relative
/// to the dataset they were assigned from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u32);

impl RecordId {
    pub fn new(index: u32) -> Self {
        RecordId(index)
    }

    pub fn index(self) -> u32 {
        self.0
    }
}
