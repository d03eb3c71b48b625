// src/io/reporting.rs

use crate::error::SimResult;
use crate::simulation::engine::{DayRecord, RunSummary};
use serde::Serializer;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::info;

/// Decimal places shown for Forecast and ROP.
pub const DISPLAY_DECIMALS: i32 = 2;

/// Rounds a value for display. Internal series keep full precision.
pub fn round_for_display(value: f64) -> f64 {
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    (value * scale).round() / scale
}

/// serde hook used by [`DayRecord`] so exported tables carry display rounding.
pub fn serialize_rounded<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(round_for_display(*value))
}

/// Writes the per-day table as CSV to any writer.
pub fn write_records<W: io::Write>(writer: W, records: &[DayRecord]) -> SimResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the simulation table to a CSV file.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `records` - The per-day rows of a finished run.
pub fn write_simulation_log(file_path: impl AsRef<Path>, records: &[DayRecord]) -> SimResult<()> {
    let path = file_path.as_ref();
    write_records(File::create(path)?, records)?;

    info!(rows = records.len(), path = %path.display(), "exported simulation table");
    Ok(())
}

/// Aligned text view of the per-day table.
pub struct DailyTable<'a>(pub &'a [DayRecord]);

impl fmt::Display for DailyTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {:>8} {:>10} {:>10} {:>10} {:>7}",
            "Day", "Demand", "Forecast", "ROP", "Inventory", "Order"
        )?;
        for r in self.0 {
            writeln!(
                f,
                "{:>5} {:>8} {:>10.2} {:>10.2} {:>10} {:>7}",
                r.day,
                r.demand,
                round_for_display(r.forecast),
                round_for_display(r.reorder_point),
                r.inventory,
                r.order
            )?;
        }
        Ok(())
    }
}

/// Leads with the recommended order quantity.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recommended EOQ: {} units", self.eoq)?;
        writeln!(
            f,
            "Horizon: {} days, lead time {} days, seed {}",
            self.days, self.lead_time, self.seed
        )?;
        writeln!(f, "Safety stock: {:.2} units", self.safety_stock)?;
        writeln!(
            f,
            "Orders placed: {} ({} units)",
            self.orders_placed, self.units_ordered
        )?;
        writeln!(f, "Units received: {}", self.units_received)?;
        writeln!(
            f,
            "Orders still in transit at horizon: {}",
            self.undelivered_orders
        )?;
        writeln!(f, "Stockout days: {}", self.stockout_days)?;
        writeln!(f, "Lost demand: {} units", self.lost_demand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<DayRecord> {
        vec![
            DayRecord {
                day: 0,
                demand: 21,
                forecast: 21.0,
                reorder_point: 70.123456,
                inventory: 100,
                order: 0,
            },
            DayRecord {
                day: 1,
                demand: 18,
                forecast: 20.666666,
                reorder_point: 69.1,
                inventory: 82,
                order: 31,
            },
        ]
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(round_for_display(20.666666), 20.67);
        assert_eq!(round_for_display(70.123456), 70.12);
        assert_eq!(round_for_display(21.0), 21.0);
    }

    #[test]
    fn csv_has_display_columns_and_rounding() {
        let mut buf = Vec::new();
        write_records(&mut buf, &sample_records()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("Day,Demand,Forecast,ROP,Inventory,Order")
        );
        assert_eq!(lines.next(), Some("0,21,21.0,70.12,100,0"));
        assert_eq!(lines.next(), Some("1,18,20.67,69.1,82,31"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn writes_csv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.csv");
        write_simulation_log(&path, &sample_records()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn table_shows_header_and_rows() {
        let table = DailyTable(&sample_records()).to_string();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Forecast"));
        assert!(lines[2].contains("20.67"));
        assert!(lines[1].contains("70.12"));
    }

    #[test]
    fn summary_leads_with_eoq() {
        let summary = RunSummary {
            days: 30,
            lead_time: 3,
            seed: 42,
            eoq: 31,
            safety_stock: 6.5,
            orders_placed: 3,
            units_ordered: 93,
            units_received: 62,
            undelivered_orders: 1,
            stockout_days: 0,
            lost_demand: 0,
        };
        let text = summary.to_string();
        assert!(text.starts_with("Recommended EOQ: 31 units"));
        assert!(text.contains("Horizon: 30 days, lead time 3 days, seed 42"));
        assert!(text.contains("Orders placed: 3 (93 units)"));
    }
}
