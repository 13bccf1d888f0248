//! Order pricing engine.
//!
//! Pure functions over catalog snapshots: no I/O, no logging, no hidden state.
//! Every function is total. Flavor ids that are not in the supplied catalog are
//! dropped from the result instead of failing the computation; validating the
//! selection against business rules is the caller's job (see
//! [`crate::application::quote`]).

use crate::domain::breakdown::{ChargedExtra, ChargedFlavor, PriceBreakdown};
use crate::domain::catalog::{Extra, FlavorCatalog, FlavorId, Protein};
use crate::domain::money::Price;
use crate::domain::order::VariantKind;
use std::collections::HashSet;

/// Result of splitting a flavor selection into free and surcharged flavors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlavorCharges {
    pub included: Vec<FlavorId>,
    pub charged: Vec<ChargedFlavor>,
}

/// Splits `selected` into included and charged flavors, preserving selection order.
///
/// Ids missing from `flavors` appear in neither list. Every occurrence of a
/// repeated selection is priced, landing in the same list each time.
pub fn resolve_flavor_charges(
    selected: &[FlavorId],
    included: &HashSet<&str>,
    flavors: &FlavorCatalog,
) -> FlavorCharges {
    let mut charges = FlavorCharges::default();

    for id in selected {
        let Some(flavor) = flavors.get(id) else {
            continue;
        };
        if included.contains(id.as_str()) {
            charges.included.push(id.clone());
        } else {
            charges.charged.push(ChargedFlavor {
                flavor_id: id.clone(),
                amount: flavor.surcharge(),
            });
        }
    }

    charges
}

pub fn sum_extras(extras: &[Extra]) -> Price {
    extras.iter().map(|e| e.price).sum()
}

/// Prices a burger built on a protein.
///
/// A non-empty `default_included` list decides which flavors are free. Without
/// one, the first `variant.free_flavor_slots()` resolvable selections are free.
pub fn compute_classic_burger_price(
    protein: &Protein,
    variant: VariantKind,
    selected: &[FlavorId],
    default_included: &[FlavorId],
    flavors: &FlavorCatalog,
    extras: &[Extra],
) -> PriceBreakdown {
    let base = protein.price_for(variant);
    let included = if default_included.is_empty() {
        first_resolvable(selected, flavors, variant.free_flavor_slots())
    } else {
        default_included.iter().map(String::as_str).collect()
    };

    assemble(base, resolve_flavor_charges(selected, &included, flavors), extras)
}

/// Prices a house burger. `included` lists the house's complimentary flavors.
pub fn compute_house_burger_price(
    house_price: Price,
    selected: &[FlavorId],
    included: &[FlavorId],
    flavors: &FlavorCatalog,
    extras: &[Extra],
) -> PriceBreakdown {
    let included = included.iter().map(String::as_str).collect();
    assemble(
        house_price,
        resolve_flavor_charges(selected, &included, flavors),
        extras,
    )
}

/// Prices a tower. The tower's own flavor is part of its price, so every
/// additional flavor is charged.
pub fn compute_tower_price(
    tower_price: Price,
    additional: &[FlavorId],
    flavors: &FlavorCatalog,
    extras: &[Extra],
) -> PriceBreakdown {
    assemble(
        tower_price,
        resolve_flavor_charges(additional, &HashSet::new(), flavors),
        extras,
    )
}

/// Prices a side dish: the first flavor is free, the rest are charged.
///
/// Repeats of the free flavor stay free so a flavor never shows up as both
/// included and charged.
pub fn compute_side_with_flavors_price(
    side_price: Price,
    flavor_ids: &[FlavorId],
    flavors: &FlavorCatalog,
) -> PriceBreakdown {
    let included = first_resolvable(flavor_ids, flavors, 1);
    assemble(
        side_price,
        resolve_flavor_charges(flavor_ids, &included, flavors),
        &[],
    )
}

/// A fully resolved product, ready to be priced.
#[derive(Debug, Clone, Copy)]
pub enum ProductConfiguration<'a> {
    Classic {
        protein: &'a Protein,
        variant: VariantKind,
        selected: &'a [FlavorId],
        default_included: &'a [FlavorId],
        extras: &'a [Extra],
    },
    House {
        price: Price,
        selected: &'a [FlavorId],
        included: &'a [FlavorId],
        extras: &'a [Extra],
    },
    Tower {
        price: Price,
        additional: &'a [FlavorId],
        extras: &'a [Extra],
    },
    Side {
        price: Price,
        flavors: &'a [FlavorId],
    },
}

impl ProductConfiguration<'_> {
    pub fn price(&self, flavors: &FlavorCatalog) -> PriceBreakdown {
        match *self {
            ProductConfiguration::Classic {
                protein,
                variant,
                selected,
                default_included,
                extras,
            } => compute_classic_burger_price(
                protein,
                variant,
                selected,
                default_included,
                flavors,
                extras,
            ),
            ProductConfiguration::House {
                price,
                selected,
                included,
                extras,
            } => compute_house_burger_price(price, selected, included, flavors, extras),
            ProductConfiguration::Tower {
                price,
                additional,
                extras,
            } => compute_tower_price(price, additional, flavors, extras),
            ProductConfiguration::Side {
                price,
                flavors: selected,
            } => compute_side_with_flavors_price(price, selected, flavors),
        }
    }
}

/// Ids of the first `n` selections that exist in the catalog. A repeated
/// selection occupies a slot each time it appears.
fn first_resolvable<'a>(
    selected: &'a [FlavorId],
    flavors: &FlavorCatalog,
    n: usize,
) -> HashSet<&'a str> {
    selected
        .iter()
        .map(String::as_str)
        .filter(|id| flavors.contains_key(*id))
        .take(n)
        .collect()
}

fn assemble(base: Price, charges: FlavorCharges, extras: &[Extra]) -> PriceBreakdown {
    let extras = extras
        .iter()
        .map(|e| ChargedExtra {
            extra_id: e.id.clone(),
            amount: e.price,
        })
        .collect();
    PriceBreakdown::new(base, charges.included, charges.charged, extras)
}
