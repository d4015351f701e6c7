use std::cmp::Ordering;

use crate::model::DatastoreTypeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// Sort and filter settings for a projection.
///
/// The default is what the console shows: ascending by name, enabled types only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewParams {
    pub direction: Direction,
    pub enabled_only: bool,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            direction: Direction::Asc,
            enabled_only: true,
        }
    }
}

/// Filter then stable-sort by `name` using ordinal comparison.
pub fn project(records: &[DatastoreTypeRecord], params: &ViewParams) -> Vec<DatastoreTypeRecord> {
    let mut view: Vec<DatastoreTypeRecord> = records
        .iter()
        .filter(|r| !params.enabled_only || r.is_enabled)
        .cloned()
        .collect();

    view.sort_by(|a, b| compare_names(a, b, params.direction));
    view
}

fn compare_names(a: &DatastoreTypeRecord, b: &DatastoreTypeRecord, direction: Direction) -> Ordering {
    match direction {
        Direction::Asc => a.name.cmp(&b.name),
        Direction::Desc => b.name.cmp(&a.name),
    }
}
