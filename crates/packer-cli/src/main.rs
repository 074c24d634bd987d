use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use packer_core::{Packer, PackingRequest, PackingResult};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "packer")]
#[command(about = "Container Packing Calculator - How many units fit into a shipping container", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate packing for a container load
    Pack {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Quick feasibility check without running the allocation
    Validate {
        /// Input file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate SVG report from result
    Generate {
        /// Input result file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output SVG file
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pack { input, output } => {
            pack_command(input, output)?;
        }
        Commands::Validate { input } => {
            validate_command(input)?;
        }
        Commands::Generate { input, output } => {
            generate_command(input, output)?;
        }
    }

    Ok(())
}

fn read_request(input: &PathBuf) -> Result<PackingRequest> {
    let content = std::fs::read_to_string(input)?;
    let request: PackingRequest = if input.extension().and_then(|s| s.to_str()) == Some("yaml")
        || input.extension().and_then(|s| s.to_str()) == Some("yml")
    {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    Ok(request)
}

fn pack_command(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    println!("{}", "🔍 Loading request...".bright_blue());

    let request = read_request(&input)?;

    println!(
        "  container type: {}",
        request.container_type.bright_white().bold()
    );
    println!(
        "  {} item types to load",
        request.items.len().to_string().bright_white().bold()
    );
    println!();

    println!("{}", "🚀 Running packing calculation...".bright_blue());

    let packer = Packer::new(request)?;
    let result = packer.calculate()?;

    println!();
    println!("{}", "✅ Calculation complete!".bright_green().bold());
    println!();

    // Display results
    println!("{}", "📦 Results:".bright_yellow().bold());
    for item in &result.items {
        let fitted = if item.unfitted == 0 {
            item.fitted.to_string().bright_green()
        } else {
            item.fitted.to_string().bright_red()
        };
        println!(
            "    • {}: {} of {} units ({}, {} per layer, {} layers)",
            item.name.bright_white(),
            fitted,
            item.requested,
            item.orientation,
            item.units_per_layer,
            item.layers
        );
    }
    println!();
    println!(
        "  Total fitted: {} / {} units",
        result.total_fitted.to_string().bright_white().bold(),
        result.total_requested
    );
    println!(
        "  Volume used: {:.1}% ({} of {} CBM)",
        result.utilization.volume_percent,
        result.utilization.used_cbm.to_string().bright_white(),
        result.utilization.container_cbm
    );
    println!(
        "  Weight used: {:.1}% ({} of {} kg)",
        result.utilization.weight_percent,
        result.utilization.used_weight_kg.to_string().bright_white(),
        result.utilization.container_weight_kg
    );

    if !result.warnings.is_empty() {
        println!();
        for warning in &result.warnings {
            println!("  {} {}", "⚠️".bright_yellow(), warning.bright_yellow());
        }
    }

    println!();

    // Save output
    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&output_path, json)?;
        println!(
            "💾 Saved result to {}",
            output_path.display().to_string().bright_white()
        );
    } else {
        // Print to stdout
        let json = serde_json::to_string_pretty(&result)?;
        println!("{}", json);
    }

    Ok(())
}

fn validate_command(input: PathBuf) -> Result<()> {
    println!("{}", "🔍 Loading request...".bright_blue());

    let request = read_request(&input)?;

    println!("{}", "🚀 Running feasibility check...".bright_blue());
    println!();

    let packer = Packer::new(request)?;
    let validation = packer.validate()?;

    if validation.valid {
        println!("{}", "✅ Load is feasible".bright_green().bold());
    } else {
        println!("{}", "❌ Load is not feasible".bright_red().bold());
    }
    println!();
    println!(
        "  Requested volume: {} CBM of {} CBM ({:.1}%)",
        validation.total_cbm.to_string().bright_white(),
        validation.container_cbm,
        validation.cbm_utilization_percent
    );
    println!(
        "  Requested weight: {} kg of {} kg ({:.1}%)",
        validation.total_weight_kg.to_string().bright_white(),
        validation.max_weight_kg,
        validation.weight_utilization_percent
    );

    if !validation.oversized_items.is_empty() {
        println!();
        println!("  Oversized items:");
        for item in &validation.oversized_items {
            println!(
                "    • {} ({})",
                item.name.bright_red(),
                item.dimensions
            );
        }
    }

    if !validation.warnings.is_empty() {
        println!();
        for warning in &validation.warnings {
            println!("  {} {}", "⚠️".bright_yellow(), warning.bright_yellow());
        }
    }

    println!();

    Ok(())
}

fn generate_command(input: PathBuf, output: PathBuf) -> Result<()> {
    println!("{}", "🔍 Loading result...".bright_blue());

    // Read result file
    let content = std::fs::read_to_string(&input)?;
    let result: PackingResult = serde_json::from_str(&content)?;

    println!("{}", "🎨 Generating SVG...".bright_blue());

    // Generate SVG (simple version for now)
    let svg = generate_simple_svg(&result)?;

    // Save SVG
    std::fs::write(&output, svg)?;

    println!();
    println!(
        "{} Saved SVG to {}",
        "✅".bright_green(),
        output.display().to_string().bright_white()
    );

    Ok(())
}

fn generate_simple_svg(result: &PackingResult) -> Result<String> {
    use std::fmt::Write;

    let mut svg = String::new();
    let margin = 20.0;
    let label_width = 170.0;
    let bar_width = 420.0;
    let row_height = 28.0;

    let svg_width = label_width + bar_width + (2.0 * margin);
    let svg_height = (result.items.len() as f64 * row_height) + 100.0;

    writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
    writeln!(
        &mut svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        svg_width, svg_height, svg_width, svg_height
    )?;
    writeln!(
        &mut svg,
        r##"  <rect width="100%" height="100%" fill="#f5f5f5"/>"##
    )?;

    writeln!(
        &mut svg,
        r##"  <text x="{}" y="{}" font-family="Arial" font-size="14" fill="#333">Container {} | Fitted {} / {}</text>"##,
        margin,
        margin + 10.0,
        result.container_type,
        result.total_fitted,
        result.total_requested
    )?;

    let mut y_offset = margin + 30.0;

    for item in &result.items {
        let fraction = if item.requested > 0 {
            f64::from(item.fitted) / f64::from(item.requested)
        } else {
            0.0
        };

        writeln!(
            &mut svg,
            r##"  <text x="{}" y="{}" font-family="Arial" font-size="12" fill="#333">{}</text>"##,
            margin,
            y_offset + 14.0,
            item.name
        )?;
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="18" fill="#E57373"/>"##,
            margin + label_width,
            y_offset,
            bar_width
        )?;
        writeln!(
            &mut svg,
            r##"  <rect x="{}" y="{}" width="{}" height="18" fill="#4CAF50"/>"##,
            margin + label_width,
            y_offset,
            fraction * bar_width
        )?;

        y_offset += row_height;
    }

    writeln!(&mut svg, "</svg>")?;

    Ok(svg)
}
