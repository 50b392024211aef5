use std::cmp::Ordering;

use super::model::{AbundanceTable, CoreSet, TableRow};

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

/// Which optional stages run after zero-removal.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Keep only rows whose identifier is in this set.
    pub core: Option<CoreSet>,
    /// Minimum percent a row must exceed. `Some(0)` behaves like `None`.
    pub min_percent: Option<u32>,
    /// Order rows by combined bar length before plotting.
    pub sort: bool,
}

/// Run every stage in order and return the surviving rows as a new table.
///
/// Order: zero-removal, core membership, minimum percent, sort.
pub fn apply(table: &AbundanceTable, options: &FilterOptions) -> AbundanceTable {
    let mut rows = remove_zero_rows(&table.rows);
    log::info!("{} of {} rows have both values non-zero", rows.len(), table.len());

    if let Some(core) = &options.core {
        rows = keep_core(&rows, core);
        log::info!("{} rows in the core set ({} core taxa)", rows.len(), core.len());
    }

    if let Some(percent) = options.min_percent.filter(|p| *p != 0) {
        rows = keep_above_percent(&rows, f64::from(percent));
        log::info!("{} rows above {percent}%", rows.len());
    }

    if options.sort {
        rows = sort_by_magnitude(&rows);
        log::debug!("rows sorted by combined abundance");
    }

    table.with_rows(rows)
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

/// Drop rows where either value is exactly zero.
pub fn remove_zero_rows(rows: &[TableRow]) -> Vec<TableRow> {
    rows.iter()
        .filter(|r| r.value1 != 0.0 && r.value2 != 0.0)
        .cloned()
        .collect()
}

/// Keep rows whose identifier appears verbatim in `core`.
pub fn keep_core(rows: &[TableRow], core: &CoreSet) -> Vec<TableRow> {
    rows.iter().filter(|r| core.contains(&r.id)).cloned().collect()
}

/// Keep rows where `value1 > percent` or `value2 > percent`.
///
/// `value2` is already negated here, so for positive thresholds only
/// `value1` can pass.
pub fn keep_above_percent(rows: &[TableRow], percent: f64) -> Vec<TableRow> {
    rows.iter()
        .filter(|r| r.value1 > percent || r.value2 > percent)
        .cloned()
        .collect()
}

/// Stable ascending sort on `|value1| + |value2|`; the largest taxon ends up
/// at the top of the chart.
pub fn sort_by_magnitude(rows: &[TableRow]) -> Vec<TableRow> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| {
        a.magnitude()
            .partial_cmp(&b.magnitude())
            .unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::ColumnHeaders;

    fn table(rows: Vec<TableRow>) -> AbundanceTable {
        let headers = ColumnHeaders {
            id: "OTU ID".into(),
            value1: "SampleA".into(),
            value2: "SampleB".into(),
        };
        AbundanceTable::new(headers, rows)
    }

    /// The three-row example after percent conversion.
    fn example() -> AbundanceTable {
        table(vec![
            TableRow::new("OTU1", 10.0, -5.0),
            TableRow::new("OTU2", 0.0, -20.0),
            TableRow::new("OTU3", 30.0, -0.0),
        ])
    }

    fn ids(table: &AbundanceTable) -> Vec<&str> {
        table.identifiers().collect()
    }

    #[test]
    fn zero_removal_drops_either_zero() {
        let out = apply(&example(), &FilterOptions::default());
        assert_eq!(ids(&out), vec!["OTU1"]);
        assert_eq!(out.headers.value1, "SampleA");
    }

    #[test]
    fn zero_removal_keeps_nonzero_rows() {
        let rows = vec![TableRow::new("a", 1.0, -1.0), TableRow::new("b", 0.5, -0.5)];
        assert_eq!(remove_zero_rows(&rows), rows);
    }

    #[test]
    fn core_filter_matches_identifiers_verbatim() {
        let core: CoreSet = ["OTU1".to_string()].into_iter().collect();
        let options = FilterOptions {
            core: Some(core),
            ..Default::default()
        };
        let rows = table(vec![
            TableRow::new("OTU1", 10.0, -5.0),
            TableRow::new("OTU4", 2.0, -1.0),
            TableRow::new("otu1", 2.0, -1.0),
        ]);
        assert_eq!(ids(&apply(&rows, &options)), vec!["OTU1"]);
    }

    #[test]
    fn percent_filter_threshold() {
        let core: CoreSet = ["OTU1".to_string()].into_iter().collect();
        let keep = FilterOptions {
            core: Some(core.clone()),
            min_percent: Some(5),
            sort: false,
        };
        assert_eq!(ids(&apply(&example(), &keep)), vec!["OTU1"]);

        let drop = FilterOptions {
            core: Some(core),
            min_percent: Some(15),
            sort: false,
        };
        assert!(apply(&example(), &drop).is_empty());
    }

    #[test]
    fn percent_filter_ignores_mirrored_side() {
        // 40% on the second column alone does not pass a 15% threshold.
        let rows = vec![TableRow::new("a", 10.0, -40.0)];
        assert!(keep_above_percent(&rows, 15.0).is_empty());
    }

    #[test]
    fn zero_percent_disables_filter() {
        let rows = table(vec![TableRow::new("a", -3.0, -1.0)]);
        let options = FilterOptions {
            min_percent: Some(0),
            ..Default::default()
        };
        assert_eq!(apply(&rows, &options).len(), 1);
    }

    #[test]
    fn stages_never_add_rows() {
        let rows = table(vec![
            TableRow::new("a", 1.0, -1.0),
            TableRow::new("b", 20.0, -1.0),
            TableRow::new("c", 0.0, -1.0),
            TableRow::new("d", 7.0, -30.0),
        ]);
        let zero_free = remove_zero_rows(&rows.rows);
        let above = keep_above_percent(&zero_free, 5.0);
        assert!(zero_free.len() <= rows.len());
        assert!(above.len() <= zero_free.len());
        assert_eq!(above.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b", "d"]);
    }

    #[test]
    fn sort_orders_by_combined_length() {
        let rows = table(vec![
            TableRow::new("big", 30.0, -20.0),
            TableRow::new("small", 1.0, -1.0),
            TableRow::new("mid", 5.0, -10.0),
        ]);
        let options = FilterOptions {
            sort: true,
            ..Default::default()
        };
        assert_eq!(ids(&apply(&rows, &options)), vec!["small", "mid", "big"]);
    }

    #[test]
    fn sort_uses_absolute_value_of_both_sides() {
        let rows = vec![
            TableRow::new("mid", 5.0, -10.0),
            TableRow::new("negative", -8.0, -1.0),
            TableRow::new("small", 1.0, -1.0),
        ];
        let sorted = sort_by_magnitude(&rows);
        let order: Vec<_> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["small", "negative", "mid"]);
    }

    #[test]
    fn without_sort_order_is_preserved() {
        let rows = table(vec![TableRow::new("z", 30.0, -20.0), TableRow::new("a", 1.0, -1.0)]);
        assert_eq!(ids(&apply(&rows, &FilterOptions::default())), vec!["z", "a"]);
    }
}
