use chaintable::{ChainedTable, Removal};
use clap::Parser;

/// Sample records inserted into the table
const RECORDS: [(&str, &str); 4] = [
    ("Charlie", "(634) 466-1630"),
    ("Mac", "1-436-705-3673"),
    ("Dee", "1-214-717-1808"),
    ("Dennis", "(491) 584-6065"),
];

/// Fill a small phone book, look names up, print the buckets and delete entries
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of buckets in the table
    #[arg(short, long, default_value_t = 101)]
    buckets: usize,
}

/// Prints the result of looking up `name`
fn report_lookup(table: &ChainedTable, name: &str) {
    match table.get(name) {
        Some(number) => println!("Found {name}: {number}"),
        None => println!("{name} not found"),
    }
}

/// Deletes `name` and prints what happened
fn report_delete(table: &mut ChainedTable, name: &str) {
    match table.remove(name) {
        Removal::Removed(_) => println!("Deleted key: {name}"),
        Removal::EmptyBucket => println!("No nodes to delete"),
        Removal::NotFound => println!("Key not found: {name}"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env().init();

    let args = Args::parse();
    let mut table = ChainedTable::with_buckets(args.buckets)?;

    for (name, number) in RECORDS {
        table.insert(name, number)?;
    }

    report_lookup(&table, "Agamemnon");
    report_lookup(&table, "Dennis");

    print!("{table}");

    report_delete(&mut table, "Agamemnon");
    report_delete(&mut table, "Dennis");

    print!("{table}");

    log::info!("released {} records", table.destroy());
    Ok(())
}
