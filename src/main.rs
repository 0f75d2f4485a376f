//! Phrase Evolver CLI - Evolve a target phrase from JSON configuration.

use std::io::Write;
use std::path::PathBuf;

use phrase_evolver::{
    EvolutionEngine, EvolutionError, EvolverConfig, GenerationReport, StopReason,
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.get(1).is_some_and(|a| a == "--help" || a == "-h") {
        print_usage(&args[0]);
        return;
    }

    if args.get(1).is_some_and(|a| a == "--example") {
        print_example_config();
        return;
    }

    let config = match args.get(1) {
        Some(path) => EvolverConfig::from_json_file(PathBuf::from(path)).unwrap_or_else(|e| {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }),
        None => EvolverConfig::default(),
    };

    if let Err(e) = run(config) {
        println!();
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config: EvolverConfig) -> Result<(), EvolutionError> {
    println!("Phrase Evolver");
    println!("==============");
    println!("Target: {}", config.target);
    println!("Population: {}", config.population.size);
    println!("Mutation rate: {}", config.genetic.mutation_rate);
    if let Some(limit) = config.population.max_generations {
        println!("Generation limit: {}", limit);
    }
    println!();

    let mut engine = EvolutionEngine::new(config)?;
    let result = engine.run_with_callback(print_progress)?;

    println!();
    if result.stats.stop_reason == StopReason::MaxGenerations {
        println!(
            "No match after {} generations (best fitness {:.6})",
            result.stats.generations, result.best.fitness
        );
    }
    println!("Time taken: {:.3}s", result.stats.elapsed_seconds);
    Ok(())
}

fn print_progress(report: &GenerationReport) {
    print!(
        "\r generation: {} | {} | fitness: {:.6}",
        report.generation, report.best.text, report.best.fitness
    );
    let _ = std::io::stdout().flush();
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.json]", program);
    eprintln!();
    eprintln!("Evolve a population of random text into a target phrase.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  config.json  Path to run configuration (default: built-in defaults)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --example    Print the default configuration as JSON");
}

fn print_example_config() {
    let config = EvolverConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}
