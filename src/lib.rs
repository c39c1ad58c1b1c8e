use serde::Serialize;

pub mod errors;
pub mod models;
pub mod schema;
pub mod modules;

/// status and time of one heat as shown in the report.
/// both fields are `None` when the competitor has no row for the heat
#[derive(Clone, Copy, Serialize, PartialEq, Eq, Debug, Default)]
pub struct HeatOutcome {
    pub status: Option<i32>,
    pub time: Option<i64>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct JoinedRecord {
    pub bib: i32,
    pub last_name: String,
    pub first_name: String,
    pub category: String,
    pub heat1: HeatOutcome,
    pub heat2: HeatOutcome,
    pub total_time: String,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct CategoryGroup {
    pub category: String,
    pub records: Vec<JoinedRecord>,
}

#[derive(Clone, Serialize, PartialEq, Debug)]
pub struct TemplateData {
    pub title: String,
    pub categories: Vec<CategoryGroup>,
}
