use std::fmt;

use diesel::prelude::*;
use diesel::SqliteConnection;
use snafu::ResultExt;

use crate::errors::{CustomResult, QuerySnafu};
use crate::models::HeatResult;
use crate::schema::{heat1_times, heat2_times};

/// the two runs of the race
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Heat {
    First,
    Second,
}

impl Heat {
    pub fn table_name(&self) -> &'static str {
        match self {
            Heat::First => "TTIMEINFOS_HEAT1",
            Heat::Second => "TTIMEINFOS_HEAT2",
        }
    }
}

impl fmt::Display for Heat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Heat::First => write!(f, "Heat1"),
            Heat::Second => write!(f, "Heat2"),
        }
    }
}

impl HeatResult {
    /// # get all results of a heat
    ///
    /// ## Arguments
    /// * `conn` - the connection to the heats database
    /// * `heat` - the heat to load
    ///
    /// ## Returns
    /// * `Vec<HeatResult>` - every row of the heat table
    pub fn get_all(conn: &mut SqliteConnection, heat: Heat) -> CustomResult<Vec<HeatResult>> {
        let rows = match heat {
            Heat::First => heat1_times::table
                .select((heat1_times::bib, heat1_times::status, heat1_times::time))
                .load::<HeatResult>(conn),
            Heat::Second => heat2_times::table
                .select((heat2_times::bib, heat2_times::status, heat2_times::time))
                .load::<HeatResult>(conn),
        };

        rows.context(QuerySnafu { table: heat.table_name() })
    }
}
