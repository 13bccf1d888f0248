use super::catalog::{ExtraId, FlavorId, ProteinId};
use serde::{Deserialize, Serialize};

/// Size/style tier of a burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    #[default]
    Normal,
    Double,
    Light,
    House,
    Tower,
}

impl VariantKind {
    /// Number of selected flavors a classic burger gets for free when its
    /// protein has no default flavors configured.
    pub fn free_flavor_slots(self) -> usize {
        match self {
            VariantKind::Double => 2,
            _ => 1,
        }
    }

    /// Whether this variant is priced from a protein's price table.
    pub fn is_classic(self) -> bool {
        matches!(
            self,
            VariantKind::Normal | VariantKind::Double | VariantKind::Light
        )
    }
}

/// An order line as submitted by the point-of-sale, referencing catalog ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "product", rename_all = "lowercase")]
pub enum OrderRequest {
    Classic {
        protein: ProteinId,
        #[serde(default)]
        variant: VariantKind,
        #[serde(default)]
        flavors: Vec<FlavorId>,
        #[serde(default)]
        extras: Vec<ExtraId>,
    },
    House {
        house: String,
        #[serde(default)]
        flavors: Vec<FlavorId>,
        #[serde(default)]
        extras: Vec<ExtraId>,
    },
    Tower {
        tower: String,
        #[serde(default)]
        flavors: Vec<FlavorId>,
        #[serde(default)]
        extras: Vec<ExtraId>,
    },
    Side {
        side: String,
        #[serde(default)]
        flavors: Vec<FlavorId>,
    },
}

impl OrderRequest {
    pub fn flavors(&self) -> &[FlavorId] {
        match self {
            OrderRequest::Classic { flavors, .. }
            | OrderRequest::House { flavors, .. }
            | OrderRequest::Tower { flavors, .. }
            | OrderRequest::Side { flavors, .. } => flavors,
        }
    }
}
