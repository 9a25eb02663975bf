//! Console rankings: best cells by combined, stranded and cooling score

use super::{rank_by, ScoreExporter};
use crate::scorer::{CellScore, RegionScores};
use anyhow::Result;
use std::fmt::Write as _;
use std::io::Write as _;

/// Prints three top-N tables to stdout
pub struct ConsoleReporter {
    pub top_n: usize,
    pub region_name: String,
}

impl ConsoleReporter {
    pub fn new(top_n: usize, region_name: impl Into<String>) -> Self {
        Self {
            top_n,
            region_name: region_name.into(),
        }
    }

    /// Render all three rankings as one block of text
    pub fn render(&self, scores: &[CellScore]) -> String {
        let n = self.top_n;
        let mut out = String::with_capacity(256 + n * 3 * 80);

        // Writing into a String cannot fail
        let _ = writeln!(out, "\n{}", "=".repeat(70));
        let _ = writeln!(out, "TOP {} COMBINED SITES FOR DATA CENTER PLACEMENT IN {}", n, self.region_name);
        let _ = writeln!(out, "{}", "=".repeat(70));
        let _ = writeln!(
            out,
            "{:<5} {:>7} {:>8} {:>9} {:>9} {:>8}",
            "Rank", "Lat", "Lon", "Combined", "Stranded", "Cooling"
        );
        let _ = writeln!(out, "{}", "-".repeat(55));
        for (rank, cell) in rank_by(scores, |c| c.combined, n).into_iter().enumerate() {
            let _ = writeln!(
                out,
                "{:<5} {:>7.3} {:>8.3} {:>9.1} {:>9.1} {:>8.1}",
                rank + 1,
                cell.lat,
                cell.lon,
                cell.combined,
                cell.stranded.composite,
                cell.cooling.composite
            );
        }

        let _ = writeln!(out, "\nTOP {} STRANDED CAPACITY SITES", n);
        let _ = writeln!(out, "{}", "-".repeat(55));
        for (rank, cell) in rank_by(scores, |c| c.stranded.composite, n).into_iter().enumerate() {
            let s = &cell.stranded;
            let _ = writeln!(
                out,
                "{:<5} {:>7.3} {:>8.3} Stranded={:>5.1}  (Sub={:.0} Gen={:.0} TX={:.0})",
                rank + 1,
                cell.lat,
                cell.lon,
                s.composite,
                s.substation,
                s.renewables,
                s.transmission_access
            );
        }

        let _ = writeln!(out, "\nTOP {} WATER+COOLING SITES", n);
        let _ = writeln!(out, "{}", "-".repeat(55));
        for (rank, cell) in rank_by(scores, |c| c.cooling.composite, n).into_iter().enumerate() {
            let c = &cell.cooling;
            let _ = writeln!(
                out,
                "{:<5} {:>7.3} {:>8.3} Cooling={:>5.1}  (Water={:.0} Temp={:.0} Humid={:.0})",
                rank + 1,
                cell.lat,
                cell.lon,
                c.composite,
                c.water_availability,
                c.temperature,
                c.humidity
            );
        }

        out
    }
}

impl ScoreExporter for ConsoleReporter {
    fn export(&self, scores: &RegionScores) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.render(scores).as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
