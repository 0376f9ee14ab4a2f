use std::io::{self, BufRead, Write};

use colored::Colorize;
use fincalc_core::interest::{calculate_compound_interest, CompoundInterestInput};
use fincalc_core::investment::{calculate_future_value, FutureValueInput};
use fincalc_core::loan::{calculate_emi, EmiInput};
use fincalc_core::retirement::{calculate_retirement_savings, RetirementInput};
use fincalc_core::types::Breakdown;
use fincalc_core::FinCalcResult;
use tracing::{debug, warn};

use crate::input::prompt::Console;
use crate::output::chart::ChartRenderer;
use crate::output::report;

const MENU: &str = "\n--- Financial Calculator ---\n\
                    1. Calculate Loan EMI\n\
                    2. Calculate Compound Interest\n\
                    3. Calculate Future Value of Investment\n\
                    4. Estimate Retirement Savings\n\
                    5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculation {
    LoanEmi,
    CompoundInterest,
    FutureValue,
    RetirementSavings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate(Calculation),
    Exit,
}

impl MenuChoice {
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "1" => Some(MenuChoice::Calculate(Calculation::LoanEmi)),
            "2" => Some(MenuChoice::Calculate(Calculation::CompoundInterest)),
            "3" => Some(MenuChoice::Calculate(Calculation::FutureValue)),
            "4" => Some(MenuChoice::Calculate(Calculation::RetirementSavings)),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    MenuDisplay,
    AwaitingChoice,
    Calculating(Calculation),
    Exit,
}

/// Figures and chart data ready to print for one calculation.
struct Rendered {
    lines: Vec<String>,
    breakdown: Breakdown,
}

/// Menu-driven request/response loop over the four calculators.
pub struct Session<R, W> {
    console: Console<R, W>,
    chart: Box<dyn ChartRenderer>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(reader: R, writer: W, chart: Box<dyn ChartRenderer>) -> Self {
        Self {
            console: Console::new(reader, writer),
            chart,
        }
    }

    pub fn into_writer(self) -> W {
        self.console.into_parts().1
    }

    /// Run until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::MenuDisplay;
        loop {
            state = match state {
                State::MenuDisplay => {
                    writeln!(self.console.out(), "{MENU}")?;
                    State::AwaitingChoice
                }
                State::AwaitingChoice => self.await_choice()?,
                State::Calculating(calc) => match self.calculate(calc) {
                    Ok(()) => State::MenuDisplay,
                    Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => State::Exit,
                    Err(e) => return Err(e),
                },
                State::Exit => {
                    self.console.out().flush()?;
                    return Ok(());
                }
            };
        }
    }

    fn await_choice(&mut self) -> io::Result<State> {
        let Some(line) = self.console.read_line("Enter your choice (1-5): ")? else {
            writeln!(self.console.out())?;
            return Ok(State::Exit);
        };

        Ok(match MenuChoice::parse(&line) {
            Some(MenuChoice::Calculate(calc)) => State::Calculating(calc),
            Some(MenuChoice::Exit) => {
                writeln!(self.console.out(), "Exiting the calculator. Goodbye!")?;
                State::Exit
            }
            None => {
                writeln!(
                    self.console.out(),
                    "{}",
                    "Invalid choice! Please try again.".red()
                )?;
                State::MenuDisplay
            }
        })
    }

    fn calculate(&mut self, calc: Calculation) -> io::Result<()> {
        debug!(?calc, "dispatching calculation");
        let outcome = match calc {
            Calculation::LoanEmi => self.loan_emi()?,
            Calculation::CompoundInterest => self.compound_interest()?,
            Calculation::FutureValue => self.future_value()?,
            Calculation::RetirementSavings => self.retirement_savings()?,
        };

        let rendered = match outcome {
            Ok(rendered) => rendered,
            Err(e) => {
                warn!(?calc, error = %e, "calculation failed");
                writeln!(self.console.out(), "{}: {}", "error".red().bold(), e)?;
                return Ok(());
            }
        };

        for line in &rendered.lines {
            writeln!(self.console.out(), "{line}")?;
        }
        self.draw(&rendered.breakdown);
        Ok(())
    }

    /// Chart output is best effort; a failed draw never ends the session.
    fn draw(&mut self, breakdown: &Breakdown) {
        let labels = breakdown.labels();
        let values = breakdown.values();
        if let Err(e) =
            self.chart
                .render_pie(self.console.out(), &labels, &values, &breakdown.title)
        {
            warn!(error = %e, title = %breakdown.title, "chart rendering failed");
        }
    }

    fn loan_emi(&mut self) -> io::Result<FinCalcResult<Rendered>> {
        let input = EmiInput {
            principal: self.console.get_amount("Enter loan amount: ")?,
            annual_rate: self.console.get_amount("Enter annual interest rate (%): ")?,
            years: self.console.get_count("Enter loan term (in years): ")?,
        };
        Ok(calculate_emi(&input).map(|out| Rendered {
            lines: report::emi_lines(&out.result),
            breakdown: out.result.breakdown(),
        }))
    }

    fn compound_interest(&mut self) -> io::Result<FinCalcResult<Rendered>> {
        let input = CompoundInterestInput {
            principal: self.console.get_amount("Enter principal amount: ")?,
            annual_rate: self.console.get_amount("Enter annual interest rate (%): ")?,
            frequency: self
                .console
                .get_count("Enter number of times interest compounded per year: ")?,
            years: self.console.get_count("Enter time (in years): ")?,
        };
        Ok(calculate_compound_interest(&input).map(|out| Rendered {
            lines: report::compound_interest_lines(&out.result),
            breakdown: out.result.breakdown(),
        }))
    }

    fn future_value(&mut self) -> io::Result<FinCalcResult<Rendered>> {
        let input = FutureValueInput {
            investment: self.console.get_amount("Enter initial investment: ")?,
            annual_rate: self.console.get_amount("Enter annual interest rate (%): ")?,
            years: self.console.get_count("Enter number of years: ")?,
        };
        Ok(calculate_future_value(&input).map(|out| Rendered {
            lines: report::future_value_lines(&out.result),
            breakdown: out.result.breakdown(),
        }))
    }

    fn retirement_savings(&mut self) -> io::Result<FinCalcResult<Rendered>> {
        let input = RetirementInput {
            monthly_contribution: self.console.get_amount("Enter monthly saving amount: ")?,
            annual_rate: self
                .console
                .get_amount("Enter expected annual return rate (%): ")?,
            years: self
                .console
                .get_count("Enter number of years until retirement: ")?,
        };
        Ok(calculate_retirement_savings(&input).map(|out| Rendered {
            lines: report::retirement_lines(&out.result),
            breakdown: out.result.breakdown(),
        }))
    }
}
