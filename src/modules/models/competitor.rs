use diesel::prelude::*;
use diesel::SqliteConnection;
use snafu::ResultExt;

use crate::errors::{CustomResult, QuerySnafu};
use crate::models::CompetitorRow;
use crate::schema::competitors;

#[derive(Debug, Clone, PartialEq)]
pub struct Competitor {
    pub bib: i32,
    pub last_name: String,
    pub first_name: String,
    pub category: String,
}

impl From<CompetitorRow> for Competitor {
    fn from(row: CompetitorRow) -> Self {
        Competitor {
            bib: row.bib,
            last_name: row.last_name.unwrap_or_default(),
            first_name: row.first_name.unwrap_or_default(),
            category: row.category.unwrap_or_default(),
        }
    }
}

impl Competitor {
    /// # get all competitors
    /// load the whole roster in the order the database returns it
    ///
    /// ## Arguments
    /// * `conn` - the connection to the competitors database
    ///
    /// ## Returns
    /// * `Vec<Competitor>` - every competitor, empty names and categories for null columns
    pub fn get_all(conn: &mut SqliteConnection) -> CustomResult<Vec<Competitor>> {
        let rows = competitors::table
            .select((
                competitors::bib,
                competitors::last_name,
                competitors::first_name,
                competitors::category,
            ))
            .load::<CompetitorRow>(conn)
            .context(QuerySnafu { table: "TCOMPETITORS" })?;

        Ok(rows.into_iter().map(Competitor::from).collect())
    }
}
