use crate::HeatOutcome;

/// shown wherever a time or status is not available
pub const ABSENT: &str = "-";

const MS_PER_MINUTE: i64 = 60_000;
const HUNDREDTHS_PER_MINUTE: i64 = 6_000;

/// outcome of a single heat as recorded by the timing software
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeatStatus {
    Finished,
    DidNotStart,
    DidNotFinish,
    Disqualified,
}

impl HeatStatus {
    /// codes outside of 0..=3 have no status and are treated like a finish
    pub fn from_code(code: i32) -> Option<HeatStatus> {
        match code {
            0 => Some(HeatStatus::Finished),
            1 => Some(HeatStatus::DidNotStart),
            2 => Some(HeatStatus::DidNotFinish),
            3 => Some(HeatStatus::Disqualified),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            HeatStatus::Finished => 0,
            HeatStatus::DidNotStart => 1,
            HeatStatus::DidNotFinish => 2,
            HeatStatus::Disqualified => 3,
        }
    }

    /// the token shown instead of a time, `None` for a finish
    pub fn token(&self) -> Option<&'static str> {
        match self {
            HeatStatus::Finished => None,
            HeatStatus::DidNotStart => Some("DNS"),
            HeatStatus::DidNotFinish => Some("DNF"),
            HeatStatus::Disqualified => Some("DSQ"),
        }
    }
}

pub struct TimeHelper {}

impl TimeHelper {
    /// # format a time
    /// format a time in milliseconds as `m:ss.hh`
    ///
    /// the hundredths are rounded half up on the millisecond and carry into the minutes,
    /// so 59995 ms is shown as `1:00.00`.
    ///
    /// the legacy report rounded the binary float `seconds.toFixed(2)`, which ends up one
    /// hundredth lower for some times ending in 5 ms (15 ms was `0:00.01`, here `0:00.02`).
    /// keep that in mind when comparing both reports side by side
    ///
    /// ## Arguments
    /// * `time_in_ms` - the time to format, `None` if there is no time
    ///
    /// ## Returns
    /// * `String` - the formatted time or `-`
    pub fn format_time(time_in_ms: Option<i64>) -> String {
        let Some(ms) = time_in_ms else {
            return ABSENT.to_string();
        };

        let hundredths = (ms + 5) / 10;
        let minutes = hundredths / HUNDREDTHS_PER_MINUTE;
        let rest = hundredths % HUNDREDTHS_PER_MINUTE;

        format!("{}:{:02}.{:02}", minutes, rest / 100, rest % 100)
    }

    /// # format a heat result
    /// show the status token for a heat that was not finished, or the time otherwise
    ///
    /// ## Arguments
    /// * `status` - the raw status code, `None` if the heat has no row
    /// * `time_in_ms` - the time of the heat
    pub fn format_time_or_status(status: Option<i32>, time_in_ms: Option<i64>) -> String {
        match status.and_then(HeatStatus::from_code).and_then(|s| s.token()) {
            Some(token) => token.to_string(),
            None => TimeHelper::format_time(time_in_ms),
        }
    }

    /// sum of both heats, only when both were finished with a time
    pub fn total_time(heat1: &HeatOutcome, heat2: &HeatOutcome) -> String {
        let finished = Some(HeatStatus::Finished.code());

        match (heat1, heat2) {
            (
                HeatOutcome { status: s1, time: Some(t1) },
                HeatOutcome { status: s2, time: Some(t2) },
            ) if *s1 == finished && *s2 == finished => TimeHelper::format_time(Some(t1 + t2)),
            _ => ABSENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(time: i64) -> HeatOutcome {
        HeatOutcome { status: Some(0), time: Some(time) }
    }

    #[test]
    fn formats_times() {
        assert_eq!(TimeHelper::format_time(None), "-");
        assert_eq!(TimeHelper::format_time(Some(0)), "0:00.00");
        assert_eq!(TimeHelper::format_time(Some(65430)), "1:05.43");
        assert_eq!(TimeHelper::format_time(Some(3_600_000)), "60:00.00");
        assert_eq!(TimeHelper::format_time(Some(9_870)), "0:09.87");
    }

    #[test]
    fn rounds_half_up_and_carries_into_minutes() {
        assert_eq!(TimeHelper::format_time(Some(5_435)), "0:05.44");
        assert_eq!(TimeHelper::format_time(Some(5_434)), "0:05.43");
        assert_eq!(TimeHelper::format_time(Some(59_995)), "1:00.00");
        assert_eq!(TimeHelper::format_time(Some(119_999)), "2:00.00");
        assert_eq!(TimeHelper::format_time(Some(15)), "0:00.02");
        assert_eq!(TimeHelper::format_time(Some(145)), "0:00.15");
    }

    #[test]
    fn resolves_status_tokens() {
        assert_eq!(TimeHelper::format_time_or_status(Some(1), Some(1000)), "DNS");
        assert_eq!(TimeHelper::format_time_or_status(Some(2), None), "DNF");
        assert_eq!(TimeHelper::format_time_or_status(Some(3), Some(42)), "DSQ");
        assert_eq!(TimeHelper::format_time_or_status(Some(0), Some(65430)), "1:05.43");
    }

    #[test]
    fn unknown_or_missing_status_falls_back_to_time() {
        assert_eq!(TimeHelper::format_time_or_status(Some(7), Some(65430)), "1:05.43");
        assert_eq!(TimeHelper::format_time_or_status(Some(-1), None), "-");
        assert_eq!(TimeHelper::format_time_or_status(None, None), "-");
        assert_eq!(TimeHelper::format_time_or_status(None, Some(65430)), "1:05.43");
    }

    #[test]
    fn totals_only_when_both_heats_finished() {
        assert_eq!(TimeHelper::total_time(&finished(30_000), &finished(31_250)), "1:01.25");

        let dns = HeatOutcome { status: Some(1), time: Some(31_250) };
        assert_eq!(TimeHelper::total_time(&finished(30_000), &dns), "-");

        assert_eq!(TimeHelper::total_time(&finished(30_000), &HeatOutcome::default()), "-");

        let no_time = HeatOutcome { status: Some(0), time: None };
        assert_eq!(TimeHelper::total_time(&no_time, &finished(30_000)), "-");

        let unknown = HeatOutcome { status: Some(9), time: Some(30_000) };
        assert_eq!(TimeHelper::total_time(&unknown, &finished(30_000)), "-");
    }

    #[test]
    fn status_codes_round_trip() {
        for code in 0..=3 {
            assert_eq!(HeatStatus::from_code(code).map(|s| s.code()), Some(code));
        }
        assert_eq!(HeatStatus::from_code(4), None);
    }
}
