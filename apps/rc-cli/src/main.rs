use clap::{Parser, Subcommand};
use rc_app::{AppError, AppResult};
use rc_core::UnitQuantity;
use rc_perf::ExecutionMode;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rc-cli")]
#[command(about = "Reciprocating compressor performance and sweep calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a case file with the default session values
    Init {
        /// Path of the case file to create (.yaml or .json)
        case_path: PathBuf,
        /// Case name
        #[arg(long, default_value = "compressor")]
        name: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Show the unit selection of a case and the allowed labels
    Units {
        /// Path to the case file
        case_path: PathBuf,
    },
    /// Evaluate required power at the case's operating point
    Evaluate {
        /// Path to the case file
        case_path: PathBuf,
        /// Override suction pressure
        #[arg(long)]
        suction: Option<f64>,
        /// Override discharge pressure
        #[arg(long)]
        discharge: Option<f64>,
    },
    /// Run the suction × discharge sweep and export the curves as CSV
    Sweep {
        /// Path to the case file
        case_path: PathBuf,
        /// Number of suction samples
        #[arg(long)]
        suction_points: Option<usize>,
        /// Number of discharge samples
        #[arg(long)]
        discharge_points: Option<usize>,
        /// Evaluate on the calling thread only
        #[arg(long)]
        serial: bool,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Evaluate the case and print the performance report
    Report {
        /// Path to the case file
        case_path: PathBuf,
        /// Output text file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Convert a value between two labels of one quantity
    Convert {
        value: f64,
        /// pressure, temperature, length or flow
        quantity: String,
        /// Source unit label
        from: String,
        /// Target unit label
        to: String,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so CSV and report output stay clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            case_path,
            name,
            force,
        } => cmd_init(&case_path, &name, force),
        Commands::Validate { case_path } => cmd_validate(&case_path),
        Commands::Units { case_path } => cmd_units(&case_path),
        Commands::Evaluate {
            case_path,
            suction,
            discharge,
        } => cmd_evaluate(&case_path, suction, discharge),
        Commands::Sweep {
            case_path,
            suction_points,
            discharge_points,
            serial,
            output,
        } => cmd_sweep(
            &case_path,
            suction_points,
            discharge_points,
            serial,
            output.as_deref(),
        ),
        Commands::Report { case_path, output } => cmd_report(&case_path, output.as_deref()),
        Commands::Convert {
            value,
            quantity,
            from,
            to,
        } => cmd_convert(value, &quantity, &from, &to),
    }
}

fn cmd_init(case_path: &Path, name: &str, force: bool) -> AppResult<()> {
    if case_path.exists() && !force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists (use --force to overwrite)",
            case_path.display()
        )));
    }
    let case = rc_app::default_case(name);
    rc_app::save_case(case_path, &case)?;
    println!("✓ Case written: {}", case_path.display());
    Ok(())
}

fn cmd_validate(case_path: &Path) -> AppResult<()> {
    println!("Validating case: {}", case_path.display());
    let case = rc_app::open_case(case_path)?;
    println!("✓ Case is valid");

    let summary = rc_app::summarize(&case);
    println!("  Name: {}", summary.name);
    println!("  Motor: {} @ {} RPM", summary.motor, summary.rpm);
    if summary.cylinders_configured {
        println!(
            "  Cylinders: {} across {} stage(s)",
            summary.num_cylinders, summary.stage_count
        );
    } else {
        println!("  Cylinders: {} (not configured)", summary.num_cylinders);
    }
    println!("  Sweep grid: {} points", summary.grid_points);
    Ok(())
}

fn cmd_units(case_path: &Path) -> AppResult<()> {
    let case = rc_app::open_case(case_path)?;
    println!("Units in case '{}':", case.name);
    for quantity in UnitQuantity::ALL {
        println!(
            "  {:<12} {:<10} allowed: {}",
            quantity.to_string(),
            case.units.label(quantity),
            quantity.allowed_labels().join(", ")
        );
    }
    Ok(())
}

fn cmd_evaluate(case_path: &Path, suction: Option<f64>, discharge: Option<f64>) -> AppResult<()> {
    let case = rc_app::open_case(case_path)?;
    let case = rc_app::with_operating_point(&case, suction, discharge)?;
    let pressure_unit = case.units.label(UnitQuantity::Pressure);

    let run = rc_app::run_performance(&case);
    println!(
        "Operating point: suction {} {unit}, discharge {} {unit}, {} RPM",
        run.result.suction(),
        run.result.discharge(),
        run.result.rpm(),
        unit = pressure_unit
    );
    println!("✓ Required power: {:.2} BHP", run.result.power_bhp());
    if !run.result.is_physical() {
        println!("  Warning: discharge below suction, result is non-physical");
    }
    Ok(())
}

fn cmd_sweep(
    case_path: &Path,
    suction_points: Option<usize>,
    discharge_points: Option<usize>,
    serial: bool,
    output: Option<&Path>,
) -> AppResult<()> {
    let case = rc_app::open_case(case_path)?;
    let case = rc_app::with_resolution(&case, suction_points, discharge_points)?;
    let mode = if serial {
        ExecutionMode::Serial
    } else {
        ExecutionMode::Parallel
    };

    let run = rc_app::run_sweep(&case, mode);
    let csv = rc_app::sweep_to_csv(&run.result);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported to: {}", path.display());
        for curve in &run.result.curves {
            println!("  {}", curve.legend_label());
        }
        if let Some((low, high)) = run.result.power_bounds() {
            println!("  Power range: {:.2} - {:.2} BHP", low, high);
        }
        println!(
            "  {} points in {:.3}s ({})",
            run.result.point_count(),
            run.elapsed_s,
            run.mode
        );
    } else {
        print!("{}", csv);
    }
    Ok(())
}

fn cmd_report(case_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let case = rc_app::open_case(case_path)?;
    let run = rc_app::run_performance(&case);

    if let Some(path) = output {
        std::fs::write(path, &run.report)?;
        println!("✓ Report written: {}", path.display());
    } else {
        print!("{}", run.report);
    }
    Ok(())
}

fn cmd_convert(value: f64, quantity: &str, from: &str, to: &str) -> AppResult<()> {
    let quantity: UnitQuantity = quantity.parse()?;
    let converted = rc_core::convert(value, quantity, from, to)?;
    println!("{} {} = {} {}", value, from, converted, to);
    Ok(())
}
