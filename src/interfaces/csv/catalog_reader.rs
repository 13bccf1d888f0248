use crate::config::SurchargeSchedule;
use crate::domain::catalog::{
    Catalog, Extra, Flavor, FlavorId, HouseBurger, Intensity, Protein, ProteinId, Side, Tower,
};
use crate::domain::money::Price;
use crate::error::Result;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

pub const PROTEINS_FILE: &str = "proteins.csv";
pub const FLAVORS_FILE: &str = "flavors.csv";
pub const EXTRAS_FILE: &str = "extras.csv";
pub const HOUSES_FILE: &str = "houses.csv";
pub const TOWERS_FILE: &str = "towers.csv";
pub const SIDES_FILE: &str = "sides.csv";
pub const PROTEIN_DEFAULTS_FILE: &str = "protein_defaults.csv";

fn available_by_default() -> bool {
    true
}

/// Flavor row as exported from the menu database. `price_extra` may be left
/// blank, in which case it is derived from the intensity.
#[derive(Debug, Deserialize)]
struct FlavorRecord {
    id: FlavorId,
    name: String,
    intensity: Intensity,
    #[serde(default)]
    price_extra: Option<Price>,
    #[serde(default = "available_by_default")]
    available: bool,
}

#[derive(Debug, Deserialize)]
struct HouseRecord {
    id: String,
    name: String,
    price: Price,
    /// Space-separated flavor ids.
    #[serde(default)]
    included_flavors: String,
    #[serde(default = "available_by_default")]
    available: bool,
}

#[derive(Debug, Deserialize)]
struct ProteinDefaultRecord {
    protein_id: ProteinId,
    flavor_id: FlavorId,
}

/// Loads a menu catalog from a directory of CSV files.
///
/// `proteins.csv`, `flavors.csv` and `extras.csv` are required; houses,
/// towers, sides and per-protein default flavors are optional.
pub struct CatalogReader {
    schedule: SurchargeSchedule,
}

impl CatalogReader {
    pub fn new(schedule: SurchargeSchedule) -> Self {
        Self { schedule }
    }

    pub fn load_dir(&self, dir: &Path) -> Result<Catalog> {
        let mut catalog = Catalog::new();

        for protein in read_records::<Protein, _>(File::open(dir.join(PROTEINS_FILE))?)? {
            catalog.add_protein(protein);
        }
        for flavor in self.read_flavors(File::open(dir.join(FLAVORS_FILE))?)? {
            catalog.add_flavor(flavor);
        }
        for extra in read_records::<Extra, _>(File::open(dir.join(EXTRAS_FILE))?)? {
            catalog.add_extra(extra);
        }

        if let Some(file) = open_optional(&dir.join(HOUSES_FILE))? {
            for house in read_houses(file)? {
                catalog.add_house(house);
            }
        }
        if let Some(file) = open_optional(&dir.join(TOWERS_FILE))? {
            for tower in read_records::<Tower, _>(file)? {
                catalog.add_tower(tower);
            }
        }
        if let Some(file) = open_optional(&dir.join(SIDES_FILE))? {
            for side in read_records::<Side, _>(file)? {
                catalog.add_side(side);
            }
        }
        if let Some(file) = open_optional(&dir.join(PROTEIN_DEFAULTS_FILE))? {
            for row in read_records::<ProteinDefaultRecord, _>(file)? {
                catalog.add_protein_default(row.protein_id, row.flavor_id);
            }
        }

        info!(
            proteins = catalog.proteins.len(),
            flavors = catalog.flavors.len(),
            extras = catalog.extras.len(),
            houses = catalog.houses.len(),
            towers = catalog.towers.len(),
            sides = catalog.sides.len(),
            "Loaded catalog from {}",
            dir.display()
        );
        Ok(catalog)
    }

    /// Reads flavors, filling blank surcharges from the schedule.
    pub fn read_flavors<R: Read>(&self, source: R) -> Result<Vec<Flavor>> {
        Ok(read_records::<FlavorRecord, _>(source)?
            .into_iter()
            .map(|record| Flavor {
                price_extra: record
                    .price_extra
                    .unwrap_or_else(|| self.schedule.for_intensity(record.intensity)),
                id: record.id,
                name: record.name,
                intensity: record.intensity,
                available: record.available,
            })
            .collect())
    }
}

pub fn read_houses<R: Read>(source: R) -> Result<Vec<HouseBurger>> {
    Ok(read_records::<HouseRecord, _>(source)?
        .into_iter()
        .map(|record| HouseBurger {
            id: record.id,
            name: record.name,
            price: record.price,
            included_flavors: record
                .included_flavors
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            available: record.available,
        })
        .collect())
}

/// Deserializes every row of a headed CSV source, trimming whitespace.
pub fn read_records<T: DeserializeOwned, R: Read>(source: R) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(source);
    let records = reader.deserialize().collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}

fn open_optional(path: &Path) -> Result<Option<File>> {
    if path.exists() {
        Ok(Some(File::open(path)?))
    } else {
        debug!("{} not present, skipping", path.display());
        Ok(None)
    }
}
