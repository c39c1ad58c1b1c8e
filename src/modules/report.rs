use handlebars::Handlebars;
use log::info;
use snafu::ResultExt;

use crate::errors::{CustomResult, RenderSnafu, TemplateSnafu};
use crate::modules::helpers::category::CategoryHelper;
use crate::modules::helpers::handelbars::format_heat_result::FormatHeatResultHelper;
use crate::modules::models::general::DataSources;
use crate::modules::results::load_joined_results;
use crate::{CategoryGroup, TemplateData};

const TEMPLATE_NAME: &str = "skiers_data";
const TEMPLATE: &str = include_str!("../../templates/skiers_data.html.hbs");

pub const REPORT_TITLE: &str = "Skiers Data";

pub struct ReportRenderer {
    registry: Handlebars<'static>,
}

impl ReportRenderer {
    /// compile the report template and register the formatting helpers
    pub fn new() -> CustomResult<ReportRenderer> {
        let mut registry = Handlebars::new();
        registry.register_helper("formatHeatResult", Box::new(FormatHeatResultHelper));
        registry.set_strict_mode(true);

        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .context(TemplateSnafu)?;

        Ok(ReportRenderer { registry })
    }

    /// # render the report
    /// one table per category in the order of `groups`. names and categories are html escaped
    ///
    /// ## Arguments
    /// * `groups` - the grouped records
    ///
    /// ## Returns
    /// * `String` - the complete html document
    pub fn render(&self, groups: &[CategoryGroup]) -> CustomResult<String> {
        let data = TemplateData {
            title: REPORT_TITLE.to_string(),
            categories: groups.to_vec(),
        };

        self.registry.render(TEMPLATE_NAME, &data).context(RenderSnafu)
    }
}

/// # build the report
/// load and join everything, group it by category and render the document.
/// nothing is rendered unless all three tables were read
pub fn build_report(sources: &mut DataSources) -> CustomResult<String> {
    let records = load_joined_results(sources)?;
    let groups = CategoryHelper::group_by_category(records);

    info!(target: "build_report", "rendering {} categories", groups.len());

    ReportRenderer::new()?.render(&groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HeatResult;
    use crate::modules::models::competitor::Competitor;
    use crate::modules::results::join_results;

    fn competitor(bib: i32, last: &str, first: &str, category: &str) -> Competitor {
        Competitor {
            bib,
            last_name: last.to_string(),
            first_name: first.to_string(),
            category: category.to_string(),
        }
    }

    fn finished(bib: i32, time: i64) -> HeatResult {
        HeatResult { bib, status: Some(0), time: Some(time) }
    }

    fn render(competitors: Vec<Competitor>, heat1: &[HeatResult], heat2: &[HeatResult]) -> String {
        let groups = CategoryHelper::group_by_category(join_results(competitors, heat1, heat2));
        ReportRenderer::new().unwrap().render(&groups).unwrap()
    }

    /// strip the whitespace between tags so rows can be compared on one line
    fn compact(html: &str) -> String {
        html.lines().map(str::trim).collect::<Vec<_>>().join("")
    }

    #[test]
    fn renders_a_finished_competitor() {
        let html = render(
            vec![competitor(12, "Doe", "Jane", "Junior")],
            &[finished(12, 65_000)],
            &[finished(12, 70_000)],
        );

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Skiers Data</title>"));
        assert!(html.contains("<h2>Category: Junior</h2>"));
        assert!(compact(&html).contains(
            "<tr><td>12</td><td>Doe</td><td>Jane</td><td>1:05.00</td><td>1:10.00</td><td>2:15.00</td></tr>"
        ));
    }

    #[test]
    fn renders_status_tokens_and_missing_heats() {
        let heat1 = vec![
            HeatResult { bib: 1, status: Some(1), time: None },
            HeatResult { bib: 2, status: Some(3), time: Some(50_000) },
        ];
        let heat2 = vec![HeatResult { bib: 1, status: Some(2), time: None }];

        let html = compact(&render(
            vec![competitor(1, "A", "B", "Open"), competitor(2, "C", "D", "Open")],
            &heat1,
            &heat2,
        ));

        assert!(html.contains("<td>1</td><td>A</td><td>B</td><td>DNS</td><td>DNF</td><td>-</td>"));
        assert!(html.contains("<td>2</td><td>C</td><td>D</td><td>DSQ</td><td>-</td><td>-</td>"));
    }

    #[test]
    fn one_table_per_category_in_first_seen_order() {
        let html = render(
            vec![
                competitor(1, "A", "A", "Senior"),
                competitor(2, "B", "B", "Junior"),
                competitor(3, "C", "C", "Senior"),
            ],
            &[],
            &[],
        );

        assert_eq!(html.matches("<table>").count(), 2);
        let senior = html.find("Category: Senior").unwrap();
        let junior = html.find("Category: Junior").unwrap();
        assert!(senior < junior);
    }

    #[test]
    fn escapes_names_and_categories() {
        let html = render(
            vec![competitor(1, "<script>alert(1)</script>", "Ann & Bo", "<b>U16</b>")],
            &[],
            &[],
        );

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Ann &amp; Bo"));
        assert!(html.contains("Category: &lt;b&gt;U16&lt;/b&gt;"));
    }

    #[test]
    fn renders_an_empty_roster() {
        let html = render(Vec::new(), &[], &[]);

        assert!(html.contains("<h1 style=\"text-align: center;\">Skiers Data</h1>"));
        assert!(!html.contains("<table>"));
        assert!(html.trim_end().ends_with("</html>"));
    }
}
