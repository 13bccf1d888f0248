#![allow(dead_code)]

use order_pricing::domain::catalog::{Extra, Flavor, FlavorCatalog, Intensity, Protein};
use order_pricing::domain::money::Price;
use std::io::Error;
use std::path::Path;

pub const FIXTURE_CATALOG: &str = "tests/fixtures/catalog";
pub const FIXTURE_ORDERS: &str = "tests/fixtures/orders.jsonl";

pub fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub fn flavor(id: &str, intensity: Intensity) -> Flavor {
    let surcharge = match intensity {
        Intensity::Normal => 5,
        Intensity::Extreme => 10,
    };
    Flavor {
        id: id.to_string(),
        name: id.to_string(),
        intensity,
        price_extra: Price::pesos(surcharge),
        available: true,
    }
}

pub fn flavor_catalog(flavors: impl IntoIterator<Item = Flavor>) -> FlavorCatalog {
    flavors.into_iter().map(|f| (f.id.clone(), f)).collect()
}

pub fn protein(base: u32, double: u32, light: u32) -> Protein {
    Protein {
        id: "beef".to_string(),
        name: "Res".to_string(),
        price_base: Price::pesos(base),
        price_double: Price::pesos(double),
        price_light: Price::pesos(light),
        available: true,
    }
}

pub fn extra(id: &str, price: u32) -> Extra {
    Extra {
        id: id.to_string(),
        name: id.to_string(),
        price: Price::pesos(price),
        available: true,
    }
}

/// Writes only the required catalog files into `dir`.
pub fn write_minimal_catalog(dir: &Path) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(dir.join("proteins.csv"))?;
    wtr.write_record(["id", "name", "price_base", "price_double", "price_light", "available"])?;
    wtr.write_record(["beef", "Res", "80", "120", "70", "true"])?;
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(dir.join("flavors.csv"))?;
    wtr.write_record(["id", "name", "intensity", "price_extra", "available"])?;
    wtr.write_record(["bbq", "BBQ", "normal", "", "true"])?;
    wtr.write_record(["habanero", "Habanero", "extreme", "", "true"])?;
    wtr.flush()?;

    let mut wtr = csv::Writer::from_path(dir.join("extras.csv"))?;
    wtr.write_record(["id", "name", "price", "available"])?;
    wtr.write_record(["cheese", "Queso", "15", "true"])?;
    wtr.flush()?;

    Ok(())
}
