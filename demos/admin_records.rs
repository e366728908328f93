//! Admin records example: manage farms and partners in a throwaway store,
//! then export them.
//!
//! Run from the project root:
//!   cargo run --example admin_records

use std::path::Path;

use vanilla_farm_portal::io::{JsonFormat, RecordReader, RecordWriter};
use vanilla_farm_portal::models::{Farm, FarmStatus, Partner, PartnerKind};
use vanilla_farm_portal::store::{MemoryStore, Portal};
use vanilla_farm_portal::visualization::{format_farms_table, format_partners_table};

fn main() {
    let mut portal = Portal::open(MemoryStore::new()).expect("Failed to open portal");
    println!(
        "Seeded {} farms and {} partners",
        portal.farms().len(),
        portal.partners().len()
    );

    let farm = Farm {
        status: FarmStatus::Active,
        established_year: Some(2024),
        ..Farm::new("Vohemar Plot", "Vohemar, Madagascar", 3.0, 6000, 5000, 22.0)
    };
    let added = portal.add_farm(farm).expect("Failed to add farm");
    println!("Added {} raising ${:.0}", added.name, added.token_raise());

    // Invalid records are refused with every problem listed.
    let broken = Farm::new("", "Nowhere", -1.0, 10, 50, 0.5);
    if let Err(e) = portal.add_farm(broken) {
        println!("Rejected: {e}");
    }

    let partner = Partner {
        website: Some("https://vanilla-labs.example".to_string()),
        ..Partner::new("Vanilla Labs", PartnerKind::Technology, "Kenya")
    };
    portal.add_partner(partner).expect("Failed to add partner");

    print!("{}", format_farms_table(portal.farms().list()));
    print!("{}", format_partners_table(portal.partners().list()));

    let json_path = Path::new("portal_export.json");
    JsonFormat { pretty: true }
        .write(&portal.snapshot(), json_path)
        .expect("Failed to write JSON");
    let reloaded = JsonFormat::default()
        .read(json_path)
        .expect("Failed to read back JSON");
    println!(
        "\nWrote {} with {} farms and {} partners",
        json_path.display(),
        reloaded.farms.len(),
        reloaded.partners.len()
    );
}
