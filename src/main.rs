use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use nplot::cli_main::{Cli, ReportFormat};
use nplot::error::Result;
use nplot::io::lengths::read_lengths;
use nplot::profile::{normalize, LengthProfile};
use nplot::report;
use nplot::visualize::plot::{render, PlotConfig};

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    let mut profiles = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let lengths = read_lengths(path)?;
        let profile = LengthProfile::new(path.display().to_string(), lengths, cli.pre_sorted);
        info!(
            "read {} lengths (total {}) from {}",
            profile.count(),
            profile.total_length(),
            path.display()
        );
        profiles.push(profile);
    }

    let genome_length = normalize(&mut profiles, cli.genome_length)?;
    info!("genome length denominator: {genome_length}");

    if cli.report_n50_values {
        let summaries = profiles
            .iter()
            .map(report::summarize)
            .collect::<Result<Vec<_>>>()?;
        match cli.report_format {
            ReportFormat::Text => report::print_text(&summaries),
            ReportFormat::Json => report::print_json(&summaries)?,
        }
    }

    let cfg = PlotConfig {
        title: cli.title.clone(),
        xlabel: cli.xlabel.clone(),
        log_scale: cli.log_scale(),
        n50_line: cli.n50_line,
        dpi: cli.dpi,
    };
    let written = render(&profiles, &cfg, &cli.out_base(), cli.out_format)?;
    for path in &written {
        info!("wrote {}", path.display());
    }

    Ok(())
}
