use super::catalog::{ExtraId, FlavorId};
use super::money::Price;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargedFlavor {
    pub flavor_id: FlavorId,
    pub amount: Price,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargedExtra {
    pub extra_id: ExtraId,
    pub amount: Price,
}

/// Itemized price of a single product.
///
/// `total` is derived in [`PriceBreakdown::new`] and always equals
/// `base + Σ charged + Σ extras`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base: Price,
    pub included: Vec<FlavorId>,
    pub charged: Vec<ChargedFlavor>,
    pub extras: Vec<ChargedExtra>,
    pub total: Price,
}

impl PriceBreakdown {
    pub fn new(
        base: Price,
        included: Vec<FlavorId>,
        charged: Vec<ChargedFlavor>,
        extras: Vec<ChargedExtra>,
    ) -> Self {
        let mut breakdown = Self {
            base,
            included,
            charged,
            extras,
            total: base,
        };
        breakdown.total += breakdown.flavor_charges() + breakdown.extras_total();
        breakdown
    }

    /// Sum of flavor surcharges only.
    pub fn flavor_charges(&self) -> Price {
        self.charged.iter().map(|c| c.amount).sum()
    }

    pub fn extras_total(&self) -> Price {
        self.extras.iter().map(|e| e.amount).sum()
    }
}
