//! CSV result sink.
//!
//! One row per item, in the volume classifier's revenue-descending order:
//! the dense monthly quantity columns, totals, CV, the three classification
//! columns, and the recommendation. Undefined CV/XYZ render as empty
//! fields, not as a placeholder value.

use std::io::Write;

use crate::aggregate::month_domain;
use crate::error::AnalysisResult;
use crate::types::ItemSummary;

fn format_opt_f64(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Write the analysis result table to any writer.
pub fn write_report<W: Write>(writer: W, summaries: &[ItemSummary]) -> AnalysisResult<()> {
    let months = month_domain(summaries);
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header: Vec<String> = vec!["item_id".into()];
    header.extend(months.iter().map(|m| format!("qty_{}", m)));
    header.extend(
        [
            "total_quantity",
            "total_revenue",
            "cv",
            "xyz_class",
            "revenue_share",
            "cumulative_share",
            "abc_class",
            "combined_class",
            "recommendation",
        ]
        .map(String::from),
    );
    csv_writer.write_record(&header)?;

    for summary in summaries {
        let mut row: Vec<String> = vec![summary.item_id.clone()];
        for month in &months {
            let qty = summary.monthly_series.get(month).copied().unwrap_or(0.0);
            row.push(qty.to_string());
        }
        row.push(summary.total_quantity.to_string());
        row.push(summary.total_revenue.to_string());
        row.push(format_opt_f64(summary.cv));
        row.push(
            summary
                .xyz_class
                .map(|c| c.to_string())
                .unwrap_or_default(),
        );
        row.push(summary.revenue_share.to_string());
        row.push(summary.cumulative_share.to_string());
        row.push(
            summary
                .abc_class
                .map(|c| c.to_string())
                .unwrap_or_default(),
        );
        row.push(summary.combined_class.clone().unwrap_or_default());
        row.push(
            summary
                .recommendation
                .map(|r| r.to_string())
                .unwrap_or_default(),
        );
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the analysis result table to a file path.
pub fn write_report_file(path: &str, summaries: &[ItemSummary]) -> AnalysisResult<()> {
    let file = std::fs::File::create(path)?;
    write_report(file, summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AbcClass, MonthlySeries, Recommendation, XyzClass};

    fn classified_summary() -> ItemSummary {
        let mut series = MonthlySeries::new();
        series.insert("01".into(), 100.0);
        series.insert("02".into(), 100.0);
        let mut summary = ItemSummary::new("SKU-001".into(), series);
        summary.total_revenue = 2000.0;
        summary.cv = Some(0.0);
        summary.xyz_class = Some(XyzClass::X);
        summary.revenue_share = 1.0;
        summary.cumulative_share = 1.0;
        summary.abc_class = Some(AbcClass::C);
        summary.combined_class = Some("C-X".into());
        summary.recommendation = Some(Recommendation::Optimize);
        summary
    }

    #[test]
    fn header_carries_the_month_domain() {
        let mut out = Vec::new();
        write_report(&mut out, &[classified_summary()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("item_id,qty_01,qty_02,total_quantity"));
        assert!(header.ends_with("combined_class,recommendation"));
    }

    #[test]
    fn classified_row_renders_all_fields() {
        let mut out = Vec::new();
        write_report(&mut out, &[classified_summary()]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "SKU-001,100,100,200,2000,0,X,1,1,C,C-X,OPTIMIZE"
        );
    }

    #[test]
    fn undefined_variability_renders_empty_fields() {
        let mut summary = classified_summary();
        summary.cv = None;
        summary.xyz_class = None;
        summary.combined_class = None;
        summary.recommendation = None;
        let mut out = Vec::new();
        write_report(&mut out, &[summary]).unwrap();
        let text = String::from_utf8(out).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row, "SKU-001,100,100,200,2000,,,1,1,C,,");
    }
}
