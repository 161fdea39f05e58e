//! Command handlers

use std::path::PathBuf;

use haulplan_app::app::{plan, plan_vehicles, PlanningOptions, PlanningReport};
use haulplan_app::config::Config;
use haulplan_app::export::export_to_excel;
use haulplan_app::handoff::PlanningHandoff;
use haulplan_app::repository::{find_order, open_order_repo, open_vehicle_manifest};
use haulplan_domain::repository::OrderRepository;
use haulplan_domain::service::FleetCapacity;
use haulplan_types::{InterleavingPattern, OutputFormat, Result};
use log::{debug, info};

use crate::cli::{Cli, Commands};
use crate::output::{output_orders, output_report};

/// Inputs of the `plan` command after CLI parsing
struct PlanArgs {
    orders: Option<PathBuf>,
    order: Option<String>,
    manifest: Option<PathBuf>,
    capacity: Option<String>,
    pattern: Option<InterleavingPattern>,
    strict: bool,
    handoff: Option<PathBuf>,
    export: Option<PathBuf>,
}

pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Plan {
            orders,
            order,
            manifest,
            capacity,
            pattern,
            strict,
            handoff,
            export,
        } => {
            let config = Config::load()?;
            let output_format = cli.format.unwrap_or(config.output_format);
            let args = PlanArgs {
                orders,
                order,
                manifest,
                capacity,
                pattern,
                strict,
                handoff,
                export,
            };
            cmd_plan(&config, output_format, args)
        }

        Commands::Orders { file } => {
            let config = Config::load()?;
            cmd_orders(file, cli.format.unwrap_or(config.output_format))
        }

        // Loads on its own so --reset works on a malformed file
        Commands::Config {
            show,
            set_capacity,
            set_pattern,
            set_strict,
            set_output,
            reset,
        } => cmd_config(show, set_capacity, set_pattern, set_strict, set_output, reset),
    }
}

fn cmd_plan(config: &Config, output_format: OutputFormat, args: PlanArgs) -> Result<()> {
    // --strict or config.strict_validation
    let strict = args.strict || config.strict_validation;
    let mut options = PlanningOptions::from_config(config).with_strict(strict);

    if let Some(ref raw) = args.capacity {
        let capacity = FleetCapacity::parse(raw, strict)?;
        options = options.with_capacity(capacity.value());
    }
    if let Some(pattern) = args.pattern {
        options = options.with_pattern(pattern);
    }
    debug!("Planning options: {:?}", options);

    let report = match (args.orders, args.order, args.manifest) {
        (Some(orders_path), Some(order_id), _) => {
            let repo = open_order_repo(orders_path)?;
            let order = find_order(&repo, &order_id)?;
            plan(Some(&order), &options)?
        }
        (_, _, Some(manifest_path)) => {
            let vehicles = open_vehicle_manifest(&manifest_path)?;
            let label = manifest_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned());
            plan_vehicles(vehicles, label, &options)?
        }
        _ => {
            info!("No order given, planning the built-in sample list");
            plan(None, &options)?
        }
    };

    output_report(output_format, &report)?;
    write_outputs(&report, args.handoff, args.export)
}

fn write_outputs(
    report: &PlanningReport,
    handoff: Option<PathBuf>,
    export: Option<PathBuf>,
) -> Result<()> {
    if let Some(path) = handoff {
        let payload = PlanningHandoff::from_report(report);
        payload.save(&path)?;
        eprintln!("Handoff {} written to {}", payload.plan_id, path.display());
    }

    if let Some(path) = export {
        export_to_excel(report, &path)?;
        eprintln!("Load manifest exported to {}", path.display());
    }

    Ok(())
}

fn cmd_orders(file: PathBuf, output_format: OutputFormat) -> Result<()> {
    let repo = open_order_repo(file)?;
    let orders = repo.find_all()?;
    output_orders(output_format, &orders)
}

fn cmd_config(
    show: bool,
    set_capacity: Option<f64>,
    set_pattern: Option<InterleavingPattern>,
    set_strict: Option<bool>,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(capacity) = set_capacity {
        // Stored capacities must be usable regardless of mode
        config.default_capacity_m3 = FleetCapacity::strict(capacity)?.value();
        modified = true;
    }

    if let Some(pattern) = set_pattern {
        config.default_pattern = pattern;
        modified = true;
    }

    if let Some(strict) = set_strict {
        config.strict_validation = strict;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
