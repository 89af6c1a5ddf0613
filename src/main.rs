//! Savings Projection CLI
//!
//! Command-line interface for projecting savings contracts

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;

use savings_projection::report::csv::{write_monthly_csv, write_yearly_csv};
use savings_projection::report::format::{format_eur, round_money};
use savings_projection::report::{render_report, rounded_yearly};
use savings_projection::scenario::load_scenarios;
use savings_projection::{
    InputHints, ProjectionConfig, ProjectionEngine, ScenarioRunner, SimulationParameters,
};

#[derive(Parser, Debug)]
#[command(
    name = "savings_projection",
    version,
    about = "Savings contract projection with entry and management fees"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the yearly breakdown and the figures at maturity
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Also print the first months of the month-by-month detail
        #[arg(long, default_value_t = 0)]
        months: u32,
    },
    /// Write the projection to a file
    Export {
        #[command(flatten)]
        params: ParamArgs,

        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        #[arg(short, long)]
        output: PathBuf,

        /// Report date for HTML output (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Project every scenario of a CSV file and write one summary line each
    Batch {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,
    },
    /// Compare final capital across gross annual rates
    Sweep {
        #[command(flatten)]
        params: ParamArgs,

        /// Gross annual rates in percent, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        rates: Vec<f64>,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ExportFormat {
    /// Yearly breakdown as CSV
    Csv,
    /// Month-by-month rows as CSV
    MonthlyCsv,
    /// Printable HTML report
    Html,
    /// Full result as JSON
    Json,
}

/// Contract parameters; flags override the JSON file, which overrides defaults
#[derive(Args, Debug)]
struct ParamArgs {
    /// JSON file with a parameter set (missing fields take defaults)
    #[arg(long)]
    params: Option<PathBuf>,

    #[arg(long)]
    age: Option<u32>,

    #[arg(long, help = "Number of years to simulate")]
    years: Option<u32>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Gross annual interest rate in percent, e.g. 2.5"
    )]
    rate: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    monthly: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Entry fee in percent of every contribution")]
    entry_fee: Option<f64>,

    #[arg(long, allow_negative_numbers = true, help = "Annual management fee in percent")]
    management_fee: Option<f64>,

    /// Clamp parameters into the form's min/max ranges before projecting
    #[arg(long)]
    clamp: bool,
}

impl ParamArgs {
    fn resolve(&self) -> Result<SimulationParameters> {
        let mut params = match &self.params {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open parameter file {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("failed to parse parameter file {}", path.display()))?
            }
            None => SimulationParameters::default(),
        };

        if let Some(v) = self.age {
            params.age = v;
        }
        if let Some(v) = self.years {
            params.duration_years = v;
        }
        if let Some(v) = self.rate {
            params.annual_interest_rate_percent = v;
        }
        if let Some(v) = self.initial {
            params.initial_deposit = v;
        }
        if let Some(v) = self.monthly {
            params.monthly_deposit = v;
        }
        if let Some(v) = self.entry_fee {
            params.entry_fee_percent = v;
        }
        if let Some(v) = self.management_fee {
            params.management_fee_percent = v;
        }

        if self.clamp {
            params = InputHints::default().clamp(&params);
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project { params, months } => run_project(&params.resolve()?, months),
        Command::Export { params, format, output, date } => {
            run_export(&params.resolve()?, format, &output, date)
        }
        Command::Batch { input, output } => run_batch(&input, &output),
        Command::Sweep { params, rates } => run_sweep(&params.resolve()?, &rates),
    }
}

fn run_project(params: &SimulationParameters, months: u32) -> Result<()> {
    let config = ProjectionConfig {
        detailed_output: months > 0,
    };
    let result = ProjectionEngine::new(config).project(params);
    let summary = result.summary()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(
        out,
        "{:>5} {:>16} {:>16} {:>14} {:>16}",
        "Year", "Capital", "Gross paid", "Entry fees", "Interest"
    )?;
    writeln!(out, "{}", "-".repeat(71))?;
    for row in rounded_yearly(&result) {
        writeln!(
            out,
            "{:>5} {:>16.2} {:>16.2} {:>14.2} {:>16.2}",
            row.year,
            row.cumulative_capital,
            row.gross_contributions,
            row.entry_fee_total,
            row.interest_generated,
        )?;
    }

    if months > 0 {
        writeln!(
            out,
            "\n{:>5} {:>4} {:>3} {:>14} {:>10} {:>10} {:>14}",
            "Month", "Year", "Age", "BOP", "Interest", "Deposit", "EOP"
        )?;
        for row in result.monthly.iter().take(months as usize) {
            writeln!(
                out,
                "{:>5} {:>4} {:>3} {:>14.2} {:>10.2} {:>10.2} {:>14.2}",
                row.projection_month,
                row.contract_year,
                row.attained_age,
                round_money(row.bop_capital),
                round_money(row.interest),
                round_money(row.net_deposit),
                round_money(row.eop_capital),
            )?;
        }
    }

    writeln!(out, "\nAt maturity ({} years):", summary.duration_years)?;
    writeln!(out, "  Final capital:     {}", format_eur(summary.final_capital))?;
    writeln!(out, "  Net contributions: {}", format_eur(summary.net_contributions))?;
    writeln!(out, "  Interest:          {}", format_eur(summary.interest_generated))?;
    writeln!(out, "  Entry fees:        {}", format_eur(summary.entry_fee_total))?;
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("unable to create output file {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn run_export(
    params: &SimulationParameters,
    format: ExportFormat,
    output: &Path,
    date: Option<NaiveDate>,
) -> Result<()> {
    let config = ProjectionConfig {
        detailed_output: format == ExportFormat::MonthlyCsv || format == ExportFormat::Json,
    };
    let result = ProjectionEngine::new(config).project(params);
    // Every export needs the maturity figures to exist
    result.summary()?;

    match format {
        ExportFormat::Csv => write_yearly_csv(create_output(output)?, &result)?,
        ExportFormat::MonthlyCsv => write_monthly_csv(create_output(output)?, &result)?,
        ExportFormat::Html => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let html = render_report(params, &result, date)?;
            let mut writer = create_output(output)?;
            writer.write_all(html.as_bytes())?;
            writer.flush()?;
        }
        ExportFormat::Json => {
            let mut writer = create_output(output)?;
            serde_json::to_writer_pretty(&mut writer, &result)?;
            writer.flush()?;
        }
    }

    println!("Projection written to: {}", output.display());
    Ok(())
}

fn run_batch(input: &Path, output: &Path) -> Result<()> {
    let scenarios = load_scenarios(input)
        .with_context(|| format!("failed to load scenarios from {}", input.display()))?;
    info!("loaded {} scenarios from {}", scenarios.len(), input.display());

    let outcomes = ScenarioRunner::new().summarize_batch(&scenarios);

    let mut writer = csv::Writer::from_writer(create_output(output)?);
    for outcome in &outcomes {
        writer.serialize(outcome)?;
    }
    writer.flush()?;

    let empty = outcomes.iter().filter(|o| o.final_capital.is_none()).count();
    println!("{} scenarios written to: {}", outcomes.len(), output.display());
    if empty > 0 {
        println!("{} scenarios have no yearly records (duration of 0 years)", empty);
    }
    Ok(())
}

fn run_sweep(params: &SimulationParameters, rates: &[f64]) -> Result<()> {
    let results = ScenarioRunner::new().run_rate_sweep(params, rates);

    println!("{:>8} {:>10} {:>18}", "Rate %", "Net rate %", "Final capital");
    for (rate, result) in rates.iter().zip(&results) {
        let net_annual = result.rates.monthly_net_rate * 12.0 * 100.0;
        match result.final_capital() {
            Some(capital) => {
                println!("{:>8} {:>10.2} {:>18.2}", rate, net_annual, round_money(capital))
            }
            None => println!("{:>8} {:>10.2} {:>18}", rate, net_annual, "-"),
        }
    }
    Ok(())
}
