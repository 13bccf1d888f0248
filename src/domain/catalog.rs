use super::money::Price;
use super::order::VariantKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ProteinId = String;
pub type FlavorId = String;
pub type ExtraId = String;

/// Flavors keyed by id, the lookup the pricing engine resolves selections against.
pub type FlavorCatalog = HashMap<FlavorId, Flavor>;

fn available_by_default() -> bool {
    true
}

/// Flavor strength. Determines which fixed surcharge a flavor carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Normal,
    Extreme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Protein {
    pub id: ProteinId,
    pub name: String,
    pub price_base: Price,
    pub price_double: Price,
    pub price_light: Price,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

impl Protein {
    /// Base price of a burger built on this protein.
    ///
    /// Only `Double` and `Light` have their own column; every other variant
    /// falls back to `price_base`.
    pub fn price_for(&self, variant: VariantKind) -> Price {
        match variant {
            VariantKind::Double => self.price_double,
            VariantKind::Light => self.price_light,
            _ => self.price_base,
        }
    }
}

/// A selectable flavor modifier (sauce, seasoning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flavor {
    pub id: FlavorId,
    pub name: String,
    pub intensity: Intensity,
    /// Surcharge already resolved from `intensity` when the catalog was loaded.
    pub price_extra: Price,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

impl Flavor {
    pub fn surcharge(&self) -> Price {
        self.price_extra
    }
}

/// A flat-priced add-on, independent of flavor selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extra {
    pub id: ExtraId,
    pub name: String,
    pub price: Price,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

/// A fixed-price house burger with its own complimentary flavors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseBurger {
    pub id: String,
    pub name: String,
    pub price: Price,
    pub included_flavors: Vec<FlavorId>,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

/// Fixed-price tower. Its flavor is bundled into the price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: String,
    pub name: String,
    pub price: Price,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Side {
    pub id: String,
    pub name: String,
    pub price: Price,
    #[serde(default = "available_by_default")]
    pub available: bool,
}

/// Snapshot of everything needed to price an order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub proteins: HashMap<ProteinId, Protein>,
    pub flavors: FlavorCatalog,
    pub extras: HashMap<ExtraId, Extra>,
    pub houses: HashMap<String, HouseBurger>,
    pub towers: HashMap<String, Tower>,
    pub sides: HashMap<String, Side>,
    /// Per-protein flavors that are always free, in configured order.
    pub protein_defaults: HashMap<ProteinId, Vec<FlavorId>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_protein(&mut self, protein: Protein) {
        self.proteins.insert(protein.id.clone(), protein);
    }

    pub fn add_flavor(&mut self, flavor: Flavor) {
        self.flavors.insert(flavor.id.clone(), flavor);
    }

    pub fn add_extra(&mut self, extra: Extra) {
        self.extras.insert(extra.id.clone(), extra);
    }

    pub fn add_house(&mut self, house: HouseBurger) {
        self.houses.insert(house.id.clone(), house);
    }

    pub fn add_tower(&mut self, tower: Tower) {
        self.towers.insert(tower.id.clone(), tower);
    }

    pub fn add_side(&mut self, side: Side) {
        self.sides.insert(side.id.clone(), side);
    }

    pub fn add_protein_default(&mut self, protein_id: ProteinId, flavor_id: FlavorId) {
        self.protein_defaults
            .entry(protein_id)
            .or_default()
            .push(flavor_id);
    }
}
