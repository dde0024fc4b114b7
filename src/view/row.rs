//! Table row formatting for the weekly views.
//!
//! Rows follow one control flow: filter the hour records down to the slice
//! a cell covers, aggregate the slice, render the result. Per-date cells
//! include the tag-code breakdown; the row total column leaves it off.

use chrono::NaiveDate;

use crate::hours::{aggregate_hours, render_hours};
use crate::models::{DateRange, HourRecord, TimecardEmployee};

use super::DateBadge;

/// Builds the header badges for each day of a date range.
///
/// # Example
///
/// ```
/// use timecards_viewer::models::DateRange;
/// use timecards_viewer::view::week_badges;
/// use chrono::NaiveDate;
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
/// let badges = week_badges(&DateRange::week_ending(sunday), true);
/// assert_eq!(badges.len(), 7);
/// assert_eq!(badges[0].weekday, "Mon");
/// ```
pub fn week_badges(range: &DateRange, show_month: bool) -> Vec<DateBadge> {
    range
        .days()
        .into_iter()
        .map(|date| DateBadge::new(date, show_month))
        .collect()
}

/// Selects the hour records belonging to one cost code, across all fetched
/// employees.
///
/// This is the slice a [`CostCodeRow`] is built from.
pub fn records_for_cost_code<'a>(
    employees: &'a [TimecardEmployee],
    cost_code_id: &'a str,
) -> impl Iterator<Item = &'a HourRecord> {
    employees
        .iter()
        .flat_map(|employee| employee.hours.iter())
        .filter(move |record| record.cost_code_id == cost_code_id)
}

/// One cost-code row of the weekly table.
///
/// Holds the row's heading fields and the hour records already filtered to
/// this cost code.
///
/// # Example
///
/// ```
/// use timecards_viewer::view::CostCodeRow;
///
/// let row = CostCodeRow::new("101-200", "Formwork to slab edge", "CARP1", vec![]);
/// assert_eq!(row.total(), "");
/// assert_eq!(row.short_description(12), "Formwork ...");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostCodeRow {
    /// The cost code displayed at the head of the row.
    pub cost_code: String,
    /// Full description of the cost code.
    pub description: String,
    /// Pay class code of the employee section the row sits under.
    pub pay_class_code: String,
    /// Hour records filtered to this cost code.
    pub hours: Vec<HourRecord>,
}

impl CostCodeRow {
    /// Creates a row from its heading fields and pre-filtered records.
    pub fn new(
        cost_code: impl Into<String>,
        description: impl Into<String>,
        pay_class_code: impl Into<String>,
        hours: Vec<HourRecord>,
    ) -> Self {
        CostCodeRow {
            cost_code: cost_code.into(),
            description: description.into(),
            pay_class_code: pay_class_code.into(),
            hours,
        }
    }

    /// Renders the cell for one column date, tag breakdown included.
    pub fn cell(&self, date: NaiveDate) -> String {
        let aggregate = aggregate_hours(self.hours.iter().filter(|record| record.date == date));
        render_hours(&aggregate, true)
    }

    /// Renders one cell per column date.
    pub fn cells(&self, dates: &[NaiveDate]) -> Vec<String> {
        dates.iter().map(|date| self.cell(*date)).collect()
    }

    /// Renders the row total across all records, without the tag breakdown.
    pub fn total(&self) -> String {
        render_hours(&aggregate_hours(&self.hours), false)
    }

    /// The description truncated to at most `limit` characters for narrow
    /// layouts. Truncated text ends in `...` when `limit` leaves room for
    /// the marker.
    ///
    /// The full text stays available on [`CostCodeRow::description`] for
    /// tooltips.
    pub fn short_description(&self, limit: usize) -> String {
        truncate(&self.description, limit)
    }
}

/// One employee row of the weekly table.
///
/// Borrows the fetched employee entry and renders cells over its records.
#[derive(Debug, Clone, Copy)]
pub struct EmployeeRow<'a> {
    /// The employee entry the row renders.
    pub employee: &'a TimecardEmployee,
}

impl<'a> EmployeeRow<'a> {
    /// Creates a row over a fetched employee entry.
    pub fn new(employee: &'a TimecardEmployee) -> Self {
        EmployeeRow { employee }
    }

    /// Renders the cell for one column date, tag breakdown included.
    pub fn cell(&self, date: NaiveDate) -> String {
        let aggregate = aggregate_hours(self.employee.hours_on(date));
        render_hours(&aggregate, true)
    }

    /// Renders one cell per column date.
    pub fn cells(&self, dates: &[NaiveDate]) -> Vec<String> {
        dates.iter().map(|date| self.cell(*date)).collect()
    }

    /// Renders the employee's total across the range, without the tag
    /// breakdown.
    pub fn total(&self) -> String {
        render_hours(&aggregate_hours(&self.employee.hours), false)
    }
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    // No room for the marker below three characters; return a bare prefix.
    if limit < 3 {
        return text.chars().take(limit).collect();
    }

    let mut shortened: String = text.chars().take(limit - 3).collect();
    shortened.push_str("...");
    shortened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PayClass;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn record(date: NaiveDate, hours: &str, pay_class: PayClass, tag: Option<&str>) -> HourRecord {
        HourRecord {
            date,
            hours: dec(hours),
            pay_class,
            tag_code: tag.map(str::to_string),
            cost_code_id: "cc_001".to_string(),
        }
    }

    fn make_employee(code: &str, hours: Vec<HourRecord>) -> TimecardEmployee {
        TimecardEmployee {
            id: format!("tce_{code}"),
            timecard_id: "tc_001".to_string(),
            employee_id: format!("emp_{code}"),
            employee_code: code.to_string(),
            employee_name: "Sam Carter".to_string(),
            pay_class_code: "CARP1".to_string(),
            hours,
        }
    }

    /// RW-001: per-date cell aggregates that date only, breakdown included
    #[test]
    fn test_cost_code_cell_for_one_date() {
        let monday = make_date(2024, 1, 1);
        let tuesday = make_date(2024, 1, 2);
        let row = CostCodeRow::new(
            "101-200",
            "Formwork",
            "CARP1",
            vec![
                record(monday, "8.0", PayClass::Regular, None),
                record(monday, "2.0", PayClass::Overtime, None),
                record(monday, "1.0", PayClass::Regular, Some("HOL")),
                record(tuesday, "6.0", PayClass::Regular, None),
            ],
        );

        assert_eq!(row.cell(monday), "10.0 [HOL:1.0]");
        assert_eq!(row.cell(tuesday), "6.0");
    }

    /// RW-002: row total spans all dates and omits the tag breakdown
    #[test]
    fn test_cost_code_total_omits_breakdown() {
        let monday = make_date(2024, 1, 1);
        let tuesday = make_date(2024, 1, 2);
        let row = CostCodeRow::new(
            "101-200",
            "Formwork",
            "CARP1",
            vec![
                record(monday, "8.0", PayClass::Regular, None),
                record(monday, "1.0", PayClass::Regular, Some("HOL")),
                record(tuesday, "6.0", PayClass::Regular, None),
            ],
        );

        assert_eq!(row.total(), "14.0");
    }

    /// RW-003: a date with no records renders the zero token
    #[test]
    fn test_cell_for_empty_date_is_blank() {
        let row = CostCodeRow::new(
            "101-200",
            "Formwork",
            "CARP1",
            vec![record(make_date(2024, 1, 1), "8.0", PayClass::Regular, None)],
        );

        assert_eq!(row.cell(make_date(2024, 1, 3)), "");
    }

    #[test]
    fn test_cells_follow_column_order() {
        let monday = make_date(2024, 1, 1);
        let tuesday = make_date(2024, 1, 2);
        let wednesday = make_date(2024, 1, 3);
        let row = CostCodeRow::new(
            "101-200",
            "Formwork",
            "CARP1",
            vec![
                record(monday, "8.0", PayClass::Regular, None),
                record(wednesday, "4.0", PayClass::Regular, None),
            ],
        );

        let cells = row.cells(&[monday, tuesday, wednesday]);
        assert_eq!(cells, vec!["8.0".to_string(), String::new(), "4.0".to_string()]);
    }

    #[test]
    fn test_short_description_passes_short_text_through() {
        let row = CostCodeRow::new("101-200", "Formwork", "CARP1", vec![]);
        assert_eq!(row.short_description(30), "Formwork");
    }

    #[test]
    fn test_short_description_truncates_long_text() {
        let row = CostCodeRow::new(
            "101-200",
            "Formwork to slab edge including stripping",
            "CARP1",
            vec![],
        );

        let short = row.short_description(20);
        assert_eq!(short, "Formwork to slab ...");
        assert_eq!(short.chars().count(), 20);
    }

    #[test]
    fn test_short_description_respects_tiny_limits() {
        let row = CostCodeRow::new("101-200", "Formwork to slab edge", "CARP1", vec![]);

        assert_eq!(row.short_description(0), "");
        assert_eq!(row.short_description(2), "Fo");
        assert_eq!(row.short_description(3), "...");
        assert!((0..=6).all(|limit| row.short_description(limit).chars().count() <= limit));
    }

    #[test]
    fn test_employee_row_cells_and_total() {
        let monday = make_date(2024, 1, 1);
        let tuesday = make_date(2024, 1, 2);
        let employee = make_employee(
            "E100",
            vec![
                record(monday, "8.0", PayClass::Regular, None),
                record(tuesday, "8.0", PayClass::Regular, None),
                record(tuesday, "2.0", PayClass::Overtime, None),
                record(tuesday, "1.0", PayClass::Regular, Some("HOL")),
            ],
        );
        let row = EmployeeRow::new(&employee);

        assert_eq!(row.cell(monday), "8.0");
        assert_eq!(row.cell(tuesday), "10.0 [HOL:1.0]");
        assert_eq!(row.cells(&[monday, tuesday]), vec!["8.0", "10.0 [HOL:1.0]"]);
        assert_eq!(row.total(), "18.0");
    }

    #[test]
    fn test_records_for_cost_code_spans_employees() {
        let monday = make_date(2024, 1, 1);
        let mut other_code = record(monday, "4.0", PayClass::Regular, None);
        other_code.cost_code_id = "cc_002".to_string();

        let employees = vec![
            make_employee(
                "E100",
                vec![
                    record(monday, "8.0", PayClass::Regular, None),
                    other_code,
                ],
            ),
            make_employee("E200", vec![record(monday, "6.0", PayClass::Regular, None)]),
        ];

        let selected: Vec<&HourRecord> = records_for_cost_code(&employees, "cc_001").collect();
        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|r| r.cost_code_id == "cc_001"));

        let aggregate = aggregate_hours(records_for_cost_code(&employees, "cc_001"));
        assert_eq!(render_hours(&aggregate, false), "14.0");
    }

    #[test]
    fn test_week_badges_cover_the_range() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        let badges = week_badges(&range, true);

        assert_eq!(badges.len(), 7);
        assert_eq!(badges[0].weekday, "Mon");
        assert_eq!(badges[6].weekday, "Sun");
        assert!(badges.iter().all(|badge| badge.month.as_deref() == Some("Jan")));
    }

    #[test]
    fn test_week_badges_without_month() {
        let range = DateRange::week_ending(make_date(2024, 1, 7));
        let badges = week_badges(&range, false);

        assert!(badges.iter().all(|badge| badge.month.is_none()));
    }
}
