//! Circuitscope CLI - compose and inspect resistor circuit diagrams from the
//! command line.

use clap::{Parser, Subcommand, ValueEnum};
use circuitscope::{
    parse_description, primitive_stats, CircuitScope, DrawablePrimitive, GroupState,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "circuitscope")]
#[command(about = "Resistor circuit layout and analysis tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the drawable primitive list for a circuit
    Render {
        /// Path to a resistor file: one series group per line,
        /// whitespace-separated resistances in ohms
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Battery voltage in volts
        #[arg(short, long, default_value_t = 7.0)]
        voltage: f64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Compute the electrical state without layout
    Analyze {
        /// Path to a resistor file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Battery voltage in volts
        #[arg(short, long, default_value_t = 7.0)]
        voltage: f64,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable summary
    Human,
    /// JSON primitive list for a renderer
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Render {
            file,
            voltage,
            format,
        } => handle_render(&file, voltage, format),
        Commands::Analyze { file, voltage } => handle_analyze(&file, voltage),
    };

    process::exit(exit_code);
}

fn read_circuit(file: &PathBuf) -> Result<String, i32> {
    std::fs::read_to_string(file).map_err(|e| {
        eprintln!("Error: cannot read {}: {}", file.display(), e);
        1
    })
}

fn handle_render(file: &PathBuf, voltage: f64, format: OutputFormat) -> i32 {
    let text = match read_circuit(file) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let description = parse_description(&text, voltage);

    let primitives = match CircuitScope::compose(&description) {
        Ok(primitives) => primitives,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match format {
        OutputFormat::Json => match serde_json::to_string_pretty(&primitives) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        },
        OutputFormat::Human => print_summary(&primitives),
    }
    0
}

fn handle_analyze(file: &PathBuf, voltage: f64) -> i32 {
    let text = match read_circuit(file) {
        Ok(text) => text,
        Err(code) => return code,
    };
    let description = parse_description(&text, voltage);

    match CircuitScope::analyze(&description) {
        Ok(state) => {
            println!("Battery voltage:  {:.3} V", description.battery_voltage);
            println!("Total resistance: {:.3} Ohm", state.total_resistance);
            println!("Total current:    {:.1} mA", state.total_current * 1000.0);
            println!();
            for (i, group) in state.groups.iter().enumerate() {
                print_group(i, group);
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

fn print_group(index: usize, group: &GroupState) {
    println!(
        "Group {}: {:.3} Ohm, {:.3} V -> {:.3} V",
        index + 1,
        group.resistance,
        group.voltage_before,
        group.voltage_after
    );
    if group.branch_currents.len() > 1 {
        for (b, current) in group.branch_currents.iter().enumerate() {
            println!("  branch {}: {:.1} mA", b + 1, current * 1000.0);
        }
    }
}

fn print_summary(primitives: &[DrawablePrimitive]) {
    let stats = primitive_stats(primitives);
    println!("Composed {} primitives:", stats.total());
    println!("  symbols:        {}", stats.symbols);
    println!("  wires:          {}", stats.wires);
    println!("  particle paths: {}", stats.particle_paths);
    println!("  labels:         {}", stats.labels);
    for primitive in primitives {
        if let DrawablePrimitive::ParticlePath {
            id,
            voltage,
            current,
            ..
        } = primitive
        {
            println!("  {id}  {voltage:.2} V  {:.1} mA", current * 1000.0);
        }
    }
}
