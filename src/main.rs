use clap::{ArgAction, Parser, Subcommand};
use nxunit::config::{Config, UnitPreferences};
use nxunit::metadata::UnitProcessor;
use nxunit::units::{self, Converter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "nxunit")]
#[command(about = "Unit name standardization and conversion for scattering metadata", long_about = None)]
struct Cli {
    /// Config file with preferred units (default: ./nxunit.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: f64,

        /// Unit the value is stored in (e.g. "mili*metre", "1/A")
        from: String,

        /// Target unit (default: preferred unit from config, else unchanged)
        #[arg(short, long)]
        to: Option<String>,
    },

    /// Print the canonical form of unit names
    Standardize {
        /// Raw unit names
        #[arg(required = true)]
        units: Vec<String>,
    },

    /// List every unit name compatible with the given unit
    Units {
        unit: String,
    },

    /// Print the dimension a unit belongs to
    Dimension {
        unit: String,
    },

    /// Convert quantity strings in a TOML metadata file and print JSON
    Process {
        /// TOML file path
        path: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    init_tracing(cli.verbose, config.log_level.as_deref());

    let result = match cli.command {
        Commands::Convert { value, from, to } => convert(&config, value, &from, to.as_deref()),
        Commands::Standardize { units } => standardize(&units),
        Commands::Units { unit } => list_units(&unit),
        Commands::Dimension { unit } => print_dimension(&unit),
        Commands::Process { path, output } => process_file(&config, &path, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from_file(path)?),
        None => {
            let default_path = std::path::Path::new("nxunit.toml");
            if default_path.exists() {
                Ok(Config::load_from_file(default_path)?)
            } else {
                Ok(Config::empty())
            }
        }
    }
}

/// RUST_LOG wins, then -v, then the config file, then "warn"
fn init_tracing(verbose: u8, configured: Option<&str>) {
    let level = match verbose {
        0 => configured.unwrap_or("warn"),
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn convert(
    config: &Config,
    value: f64,
    from: &str,
    to: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::new(from)?;
    let preferences = config.unit_preferences()?;

    let target = match to {
        Some(unit) => units::standardize(unit),
        None => preferred_target(&converter, &preferences),
    };

    let converted = converter.apply(value, &target)?;
    let unit = if target.is_empty() || converter.is_dimensionless() {
        converter.base().to_string()
    } else {
        target
    };
    println!("{} {}", converted, unit);
    Ok(())
}

fn preferred_target(converter: &Converter, preferences: &UnitPreferences) -> String {
    converter
        .dimension()
        .and_then(|kind| preferences.preferred_unit(kind))
        .unwrap_or("")
        .to_string()
}

fn standardize(raw: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    for unit in raw {
        println!("{} -> {}", unit, units::standardize(unit));
    }
    Ok(())
}

fn list_units(unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::new(unit)?;
    let compatible = converter.compatible_units();

    match converter.dimension() {
        Some(kind) => println!("Dimension: {}", kind),
        None => println!("Dimension: (none)"),
    }
    println!("\nCompatible units ({}):", compatible.len());
    for name in compatible {
        if name.is_empty() {
            println!("  - (empty)");
        } else {
            println!("  - {}", name);
        }
    }
    Ok(())
}

fn print_dimension(unit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::new(unit)?;
    match converter.dimension() {
        Some(kind) => println!("{} ({})", kind, converter.base()),
        None => println!("dimensionless ({})", converter.base()),
    }
    Ok(())
}

fn process_file(
    config: &Config,
    path: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let document: toml::Table = toml::from_str(&content)?;

    let preferences = config.unit_preferences()?;
    let processor = UnitProcessor::new(&preferences);
    let processed = processor.process_table(&document)?;

    let json = serde_json::to_string_pretty(&processed)?;

    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Processed metadata written to {}", output_path);
    } else {
        println!("{}", json);
    }

    Ok(())
}
