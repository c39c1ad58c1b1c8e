use std::collections::HashMap;

use log::{info, warn};

use crate::errors::CustomResult;
use crate::models::HeatResult;
use crate::modules::helpers::time::TimeHelper;
use crate::modules::models::competitor::Competitor;
use crate::modules::models::general::DataSources;
use crate::modules::models::heat::Heat;
use crate::{HeatOutcome, JoinedRecord};

/// index the rows of a heat by bib. the first row of a bib wins, later ones are logged and ignored
fn index_heat(heat: Heat, rows: &[HeatResult]) -> HashMap<i32, HeatOutcome> {
    let mut by_bib: HashMap<i32, HeatOutcome> = HashMap::with_capacity(rows.len());

    for row in rows {
        if by_bib.contains_key(&row.bib) {
            warn!(target: "join_results", "duplicate {} row for bib {}, keeping the first one", heat, row.bib);
            continue;
        }

        by_bib.insert(row.bib, HeatOutcome { status: row.status, time: row.time });
    }

    by_bib
}

/// # join heat results onto competitors
/// every competitor gets exactly one record, a heat without a row for the bib is left empty
///
/// ## Arguments
/// * `competitors` - the roster, its order is kept
/// * `heat1` - the rows of the first heat
/// * `heat2` - the rows of the second heat
///
/// ## Returns
/// * `Vec<JoinedRecord>` - one record per competitor
pub fn join_results(
    competitors: Vec<Competitor>,
    heat1: &[HeatResult],
    heat2: &[HeatResult],
) -> Vec<JoinedRecord> {
    let heat1 = index_heat(Heat::First, heat1);
    let heat2 = index_heat(Heat::Second, heat2);

    competitors
        .into_iter()
        .map(|competitor| {
            let heat1 = heat1.get(&competitor.bib).copied().unwrap_or_default();
            let heat2 = heat2.get(&competitor.bib).copied().unwrap_or_default();

            JoinedRecord {
                bib: competitor.bib,
                last_name: competitor.last_name,
                first_name: competitor.first_name,
                category: competitor.category,
                total_time: TimeHelper::total_time(&heat1, &heat2),
                heat1,
                heat2,
            }
        })
        .collect()
}

/// # load joined results
/// read the roster and both heats, any failing query aborts before anything is joined
pub fn load_joined_results(sources: &mut DataSources) -> CustomResult<Vec<JoinedRecord>> {
    let competitors = Competitor::get_all(&mut sources.competitors)?;
    let heat1 = HeatResult::get_all(&mut sources.results, Heat::First)?;
    let heat2 = HeatResult::get_all(&mut sources.results, Heat::Second)?;

    info!(
        target: "join_results",
        "loaded {} competitors, {} {} rows and {} {} rows",
        competitors.len(),
        heat1.len(),
        Heat::First,
        heat2.len(),
        Heat::Second
    );

    Ok(join_results(competitors, &heat1, &heat2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn competitor(bib: i32, category: &str) -> Competitor {
        Competitor {
            bib,
            last_name: format!("Last{bib}"),
            first_name: format!("First{bib}"),
            category: category.to_string(),
        }
    }

    fn row(bib: i32, status: i32, time: Option<i64>) -> HeatResult {
        HeatResult { bib, status: Some(status), time }
    }

    #[test]
    fn every_competitor_gets_a_record() {
        let competitors = vec![competitor(1, "A"), competitor(2, "B"), competitor(3, "A")];
        let heat1 = vec![row(3, 0, Some(30_000)), row(1, 1, None)];
        let heat2 = vec![row(3, 0, Some(31_250)), row(99, 0, Some(1))];

        let records = join_results(competitors, &heat1, &heat2);

        assert_eq!(records.len(), 3);
        assert_eq!(records.iter().map(|r| r.bib).collect::<Vec<_>>(), vec![1, 2, 3]);

        assert_eq!(records[0].last_name, "Last1");
        assert_eq!(records[0].heat1, HeatOutcome { status: Some(1), time: None });
        assert_eq!(records[0].heat2, HeatOutcome::default());
        assert_eq!(records[0].total_time, "-");

        assert_eq!(records[1].first_name, "First2");
        assert_eq!(records[1].category, "B");
        assert_eq!(records[1].heat1, HeatOutcome::default());
        assert_eq!(records[1].total_time, "-");

        assert_eq!(records[2].total_time, "1:01.25");
    }

    #[test]
    fn first_heat_row_wins_for_duplicate_bibs() {
        let heat1 = vec![row(5, 0, Some(10_000)), row(5, 2, None)];
        let heat2 = vec![row(5, 0, Some(20_000))];

        let records = join_results(vec![competitor(5, "A")], &heat1, &heat2);

        assert_eq!(records[0].heat1, HeatOutcome { status: Some(0), time: Some(10_000) });
        assert_eq!(records[0].total_time, "0:30.00");
    }

    #[test]
    fn duplicate_competitors_each_get_a_record() {
        let heat1 = vec![row(7, 0, Some(10_000))];

        let records = join_results(vec![competitor(7, "A"), competitor(7, "B")], &heat1, &[]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].heat1.time, Some(10_000));
    }

    #[test]
    fn empty_heats_still_list_the_roster() {
        let records = join_results(vec![competitor(1, "A")], &[], &[]);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].total_time, "-");
    }
}
