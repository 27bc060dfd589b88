//! Sync an agenda from in-memory sheets and print the result

use pallet_agenda::utils::{MemorySheetSource, MemoryStorage, SheetValues};
use pallet_agenda::AgendaSync;
use tracing_subscriber::EnvFilter;

const BASE1: &str = r#"{
    "range": "Base1!A1:C4",
    "majorDimension": "ROWS",
    "values": [
        ["Status", "Data Agenda", "Pallet"],
        ["Aprovado", "05/03/2024", "10"],
        ["Reprovado", "05/03/2024", "8"],
        ["Aprovado", "06/03/2024", "12"]
    ]
}"#;

const BASE2: &str = r#"{
    "values": [
        ["Status", "Data Agenda", "Pallet"],
        ["aprovado", "08/03/2024", "5"],
        ["aprovado", "", "40"]
    ]
}"#;

const BASE3: &str = r#"{
    "values": [
        ["Data", "Pallet"],
        ["05/03/2024", "3"],
        ["08/03/2024", "n/a"]
    ]
}"#;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let source = MemorySheetSource::new()
        .with_values("Base1", SheetValues::from_json(BASE1)?)
        .with_values("Base2", SheetValues::from_json(BASE2)?)
        .with_values("Base3", SheetValues::from_json(BASE3)?);

    let mut sync = AgendaSync::new(MemoryStorage::new(), source);
    let report = sync.sync().await?;
    println!("{}\n", report.message);

    for record in sync.consolidated().await? {
        println!(
            "  {:<12} base1={:>4} base2={:>4} base3={:>4} total={:>4}",
            record.date_key,
            record.base1_pallets,
            record.base2_pallets,
            record.base3_pallets,
            record.total_pallets
        );
    }

    let stats = sync.stats().await?;
    println!(
        "\n  dates={} total={} average={} max={} min={}",
        stats.count, stats.total, stats.average, stats.maximum, stats.minimum
    );

    Ok(())
}
