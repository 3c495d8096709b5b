use std::path::PathBuf;

use chaintable::ChainedTable;
use clap::Parser;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

/// Fill a table with random keys and plot how long its chains grow
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of buckets in the table
    #[arg(short, long, default_value_t = 101)]
    buckets: usize,

    /// Number of random keys to insert
    #[arg(short, long, default_value_t = 1000)]
    keys: usize,

    /// Where to write the histogram
    #[arg(short, long, default_value = "chain_lengths.png")]
    output: PathBuf,
}

/// Generates a random alphanumeric key of 4 to 16 characters
fn random_key(rng: &mut impl Rng) -> String {
    let len = rng.random_range(4..=16);
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

/// Counts how many buckets have each chain length; index = chain length
fn histogram(table: &ChainedTable) -> Vec<u32> {
    let mut counts: Vec<u32> = Vec::new();
    for len in table.chain_lengths() {
        if counts.len() <= len {
            counts.resize(len.saturating_add(1), 0);
        }
        if let Some(count) = counts.get_mut(len) {
            *count = count.saturating_add(1);
        }
    }
    counts
}

#[allow(clippy::cast_possible_truncation)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let mut table = ChainedTable::with_buckets(args.buckets)?;

    let mut rng = rand::rng();
    for i in 0..args.keys {
        table.insert(&random_key(&mut rng), &i.to_string())?;
    }

    let counts = histogram(&table);
    let longest = counts.len().saturating_sub(1);
    let empty = counts.first().copied().unwrap_or(0);

    println!(
        "{} records over {} buckets: load factor {:.2}, longest chain {longest}, {empty} empty buckets",
        table.len(),
        table.bucket_count(),
        table.load_factor(),
    );

    let font_family = "sans-serif";
    let max_count = counts.iter().copied().max().unwrap_or(0);

    let root = BitMapBackend::new(&args.output, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Chain lengths, {} keys over {} buckets", table.len(), table.bucket_count()),
            (font_family, 35),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (0u32..(longest as u32).saturating_add(1)).into_segmented(),
            0u32..max_count.saturating_add(1),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Chain length")
        .y_desc("Buckets")
        .axis_desc_style((font_family, 16))
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(RGBColor(50, 90, 220).filled())
            .margin(4)
            .data(counts.iter().enumerate().map(|(len, &count)| (len as u32, count))),
    )?;

    root.present()?;
    println!("Generated plot image: {}", args.output.display());

    table.destroy();
    Ok(())
}
