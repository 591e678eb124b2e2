use clap::{Parser, Subcommand};
use health_core::*;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "healthcalc")]
#[command(about = "Anthropometric health metrics calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute Body Mass Index and its classification
    Bmi {
        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in meters
        #[arg(long)]
        height: f64,
    },

    /// Classify a BMI value
    Classify {
        /// BMI value to classify
        #[arg(long)]
        bmi: f64,
    },

    /// Compute ideal body weight via the Lorentz formula
    Ibw {
        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Gender symbol: H (men) or M (women)
        #[arg(long)]
        gender: char,
    },
}

fn main() -> ExitCode {
    // Initialize logging
    health_core::logging::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let json = cli.json || config.output.json;
    let precision = config.output.precision;

    match cli.command {
        Commands::Bmi { weight, height } => cmd_bmi(weight, height, json, precision),
        Commands::Classify { bmi } => cmd_classify(bmi, json),
        Commands::Ibw { height, gender } => cmd_ibw(height, gender, json, precision),
    }
}

fn cmd_bmi(weight: f64, height: f64, json: bool, precision: usize) -> Result<()> {
    let value = bmi(weight, height)?;
    let category = bmi_classification(value)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "bmi": value,
                "classification": category.label(),
            })
        );
    } else {
        println!("BMI: {value:.precision$}");
        println!("Classification: {category}");
    }
    Ok(())
}

fn cmd_classify(bmi: f64, json: bool) -> Result<()> {
    let category = bmi_classification(bmi)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "bmi": bmi,
                "classification": category.label(),
            })
        );
    } else {
        println!("Classification: {category}");
    }
    Ok(())
}

fn cmd_ibw(height: f64, gender: char, json: bool, precision: usize) -> Result<()> {
    let gender = Gender::from_symbol(gender)?;
    let value = ideal_body_weight(height, gender)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "gender": gender.symbol().to_string(),
                "ideal_body_weight": value,
            })
        );
    } else {
        println!("Ideal body weight: {value:.precision$} kg");
    }
    Ok(())
}
