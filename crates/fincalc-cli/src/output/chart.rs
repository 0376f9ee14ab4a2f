use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use fincalc_core::types::Money;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const BAR_WIDTH: u32 = 40;

/// Slice colours, cycled when a breakdown has more than four slices.
const PALETTE: [(u8, u8, u8); 4] = [
    (0xff, 0x99, 0x99),
    (0x66, 0xb3, 0xff),
    (0x99, 0xff, 0x99),
    (0xff, 0xcc, 0x99),
];

/// Draws a labelled proportional breakdown of non-negative magnitudes.
pub trait ChartRenderer {
    fn render_pie(
        &self,
        out: &mut dyn Write,
        labels: &[&str],
        values: &[Money],
        title: &str,
    ) -> io::Result<()>;
}

/// One horizontal bar per slice, sized by its share of the total.
pub struct TerminalPie {
    width: u32,
}

impl Default for TerminalPie {
    fn default() -> Self {
        Self { width: BAR_WIDTH }
    }
}

impl ChartRenderer for TerminalPie {
    fn render_pie(
        &self,
        out: &mut dyn Write,
        labels: &[&str],
        values: &[Money],
        title: &str,
    ) -> io::Result<()> {
        writeln!(out, "\n{}", title.bold())?;

        let slices: Vec<(&str, Decimal)> = labels
            .iter()
            .zip(values)
            .map(|(label, value)| (*label, (*value).max(Decimal::ZERO)))
            .collect();
        let total: Decimal = slices.iter().map(|(_, v)| *v).sum();
        if total.is_zero() {
            return writeln!(out, "  (nothing to chart: all values are zero)");
        }

        let label_width = slices
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);

        for (i, (label, value)) in slices.iter().enumerate() {
            let share = *value / total;
            let filled = (share * Decimal::from(self.width))
                .round()
                .to_u32()
                .unwrap_or(0)
                .min(self.width);
            let percent = (share * Decimal::ONE_HUNDRED).to_f64().unwrap_or(0.0);

            writeln!(
                out,
                "  {label:<label_width$}  {}{}  {percent:>5.1}%",
                paint(&"█".repeat(filled as usize), i),
                "░".repeat((self.width - filled) as usize).as_str().dimmed(),
            )?;
        }
        Ok(())
    }
}

/// Renders nothing; used when charts are switched off.
pub struct NoChart;

impl ChartRenderer for NoChart {
    fn render_pie(&self, _: &mut dyn Write, _: &[&str], _: &[Money], _: &str) -> io::Result<()> {
        Ok(())
    }
}

pub fn renderer(show_chart: bool) -> Box<dyn ChartRenderer> {
    if show_chart {
        Box::new(TerminalPie::default())
    } else {
        Box::new(NoChart)
    }
}

fn paint(bar: &str, slice: usize) -> ColoredString {
    let (r, g, b) = PALETTE[slice % PALETTE.len()];
    bar.truecolor(r, g, b)
}
