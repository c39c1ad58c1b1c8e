use diesel::prelude::*;

/// a single row of one of the heat tables
#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct HeatResult {
    pub bib: i32,
    pub status: Option<i32>,
    pub time: Option<i64>,
}

/// a single row of the competitors table, as stored
#[derive(Queryable, Debug, Clone, PartialEq)]
pub struct CompetitorRow {
    pub bib: i32,
    pub last_name: Option<String>,
    pub first_name: Option<String>,
    pub category: Option<String>,
}
