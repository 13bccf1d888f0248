use crate::application::pricing::{ProductConfiguration, sum_extras};
use crate::domain::breakdown::PriceBreakdown;
use crate::domain::catalog::{Extra, ExtraId, FlavorCatalog, FlavorId};
use crate::domain::order::OrderRequest;
use crate::domain::ports::CatalogStoreBox;
use crate::error::{PricingError, Result};
use tracing::{debug, warn};

/// Prices order requests against a catalog store.
///
/// `QuoteService` owns the business rules the pricing engine deliberately
/// leaves to its callers: referenced products must exist and be available,
/// burgers need at least one flavor, and classic burgers only come in the
/// protein-priced variants. Once an order passes these checks it is handed to
/// the engine with a fresh catalog snapshot.
pub struct QuoteService {
    catalog: CatalogStoreBox,
}

impl QuoteService {
    /// Creates a new `QuoteService` reading from `catalog`.
    pub fn new(catalog: CatalogStoreBox) -> Self {
        Self { catalog }
    }

    /// Validates `order` and computes its price breakdown.
    pub async fn quote(&self, order: &OrderRequest) -> Result<PriceBreakdown> {
        let flavors = self.catalog.flavors().await?;
        let resolved_flavors = check_flavors(order.flavors(), &flavors)?;

        let breakdown = match order {
            OrderRequest::Classic {
                protein,
                variant,
                flavors: selected,
                extras,
            } => {
                let protein = require("protein", protein, self.catalog.protein(protein).await?)?;
                ensure_available("protein", &protein.id, protein.available)?;
                if !variant.is_classic() {
                    return Err(PricingError::ValidationError(format!(
                        "{variant:?} is not a variant of a protein burger"
                    )));
                }
                require_flavor_selection(resolved_flavors)?;
                let extras = self.resolve_extras(extras).await?;
                let defaults = self.catalog.default_flavors(&protein.id).await?;

                ProductConfiguration::Classic {
                    protein: &protein,
                    variant: *variant,
                    selected,
                    default_included: &defaults,
                    extras: &extras,
                }
                .price(&flavors)
            }
            OrderRequest::House {
                house,
                flavors: selected,
                extras,
            } => {
                let house = require("house burger", house, self.catalog.house(house).await?)?;
                ensure_available("house burger", &house.id, house.available)?;
                require_flavor_selection(resolved_flavors)?;
                let extras = self.resolve_extras(extras).await?;

                ProductConfiguration::House {
                    price: house.price,
                    selected,
                    included: &house.included_flavors,
                    extras: &extras,
                }
                .price(&flavors)
            }
            OrderRequest::Tower {
                tower,
                flavors: additional,
                extras,
            } => {
                let tower = require("tower", tower, self.catalog.tower(tower).await?)?;
                ensure_available("tower", &tower.id, tower.available)?;
                let extras = self.resolve_extras(extras).await?;

                ProductConfiguration::Tower {
                    price: tower.price,
                    additional,
                    extras: &extras,
                }
                .price(&flavors)
            }
            OrderRequest::Side {
                side,
                flavors: selected,
            } => {
                let side = require("side", side, self.catalog.side(side).await?)?;
                ensure_available("side", &side.id, side.available)?;

                ProductConfiguration::Side {
                    price: side.price,
                    flavors: selected,
                }
                .price(&flavors)
            }
        };

        debug!(total = %breakdown.total, charged = breakdown.charged.len(), "Priced order");
        Ok(breakdown)
    }

    async fn resolve_extras(&self, ids: &[ExtraId]) -> Result<Vec<Extra>> {
        let mut extras = Vec::with_capacity(ids.len());
        for id in ids {
            let extra = require("extra", id, self.catalog.extra(id).await?)?;
            ensure_available("extra", &extra.id, extra.available)?;
            extras.push(extra);
        }
        if !extras.is_empty() {
            debug!(count = extras.len(), subtotal = %sum_extras(&extras), "Resolved extras");
        }
        Ok(extras)
    }
}

fn require<T>(kind: &'static str, id: &str, found: Option<T>) -> Result<T> {
    found.ok_or_else(|| PricingError::NotFound {
        kind,
        id: id.to_string(),
    })
}

fn ensure_available(kind: &'static str, id: &str, available: bool) -> Result<()> {
    if available {
        Ok(())
    } else {
        Err(PricingError::Unavailable {
            kind,
            id: id.to_string(),
        })
    }
}

fn require_flavor_selection(resolved: usize) -> Result<()> {
    if resolved == 0 {
        Err(PricingError::ValidationError(
            "select at least one flavor".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Rejects unavailable flavors and returns how many selections resolved.
/// Unknown ids are left for the engine to drop, but are logged since they
/// change what the customer is charged.
fn check_flavors(selected: &[FlavorId], flavors: &FlavorCatalog) -> Result<usize> {
    let mut resolved = 0;
    for id in selected {
        match flavors.get(id) {
            Some(flavor) => {
                ensure_available("flavor", id, flavor.available)?;
                resolved += 1;
            }
            None => warn!(
                flavor_id = %id,
                "Selected flavor not in catalog, it will not be priced"
            ),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{Catalog, Flavor, HouseBurger, Intensity, Protein, Side, Tower};
    use crate::domain::money::Price;
    use crate::domain::order::VariantKind;
    use crate::infrastructure::in_memory::InMemoryCatalogStore;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn flavor(id: &str, surcharge: u32, available: bool) -> Flavor {
        Flavor {
            id: id.to_string(),
            name: id.to_string(),
            intensity: if surcharge > 5 {
                Intensity::Extreme
            } else {
                Intensity::Normal
            },
            price_extra: Price::pesos(surcharge),
            available,
        }
    }

    fn service() -> QuoteService {
        let mut catalog = Catalog::new();
        catalog.add_protein(Protein {
            id: "beef".to_string(),
            name: "Res".to_string(),
            price_base: Price::pesos(80),
            price_double: Price::pesos(120),
            price_light: Price::pesos(70),
            available: true,
        });
        catalog.add_protein(Protein {
            id: "chicken".to_string(),
            name: "Pollo".to_string(),
            price_base: Price::pesos(75),
            price_double: Price::pesos(110),
            price_light: Price::pesos(65),
            available: true,
        });
        catalog.add_protein(Protein {
            id: "shrimp".to_string(),
            name: "Camarón".to_string(),
            price_base: Price::pesos(110),
            price_double: Price::pesos(160),
            price_light: Price::pesos(95),
            available: false,
        });
        catalog.add_flavor(flavor("a", 5, true));
        catalog.add_flavor(flavor("b", 5, true));
        catalog.add_flavor(flavor("c", 5, true));
        catalog.add_flavor(flavor("z", 10, true));
        catalog.add_flavor(flavor("seasonal", 5, false));
        catalog.add_extra(Extra {
            id: "cheese".to_string(),
            name: "Queso".to_string(),
            price: Price::pesos(15),
            available: true,
        });
        catalog.add_house(HouseBurger {
            id: "house".to_string(),
            name: "La de la casa".to_string(),
            price: Price::pesos(95),
            included_flavors: ids(&["a", "b"]),
            available: true,
        });
        catalog.add_tower(Tower {
            id: "tower".to_string(),
            name: "Torre".to_string(),
            price: Price::pesos(150),
            available: true,
        });
        catalog.add_side(Side {
            id: "fries".to_string(),
            name: "Papas".to_string(),
            price: Price::pesos(45),
            available: true,
        });
        catalog.add_protein_default("chicken".to_string(), "c".to_string());

        QuoteService::new(Box::new(InMemoryCatalogStore::from_catalog(catalog)))
    }

    fn classic(protein: &str, variant: VariantKind, flavors: &[&str]) -> OrderRequest {
        OrderRequest::Classic {
            protein: protein.to_string(),
            variant,
            flavors: ids(flavors),
            extras: vec![],
        }
    }

    #[tokio::test]
    async fn test_classic_quote() {
        let breakdown = service()
            .quote(&classic("beef", VariantKind::Normal, &["a", "b", "c"]))
            .await
            .unwrap();
        assert_eq!(breakdown.total, Price::pesos(90));
    }

    #[tokio::test]
    async fn test_classic_uses_protein_defaults() {
        let breakdown = service()
            .quote(&classic("chicken", VariantKind::Normal, &["a", "c"]))
            .await
            .unwrap();
        assert_eq!(breakdown.included, ids(&["c"]));
        assert_eq!(breakdown.total, Price::pesos(80));
    }

    #[tokio::test]
    async fn test_classic_with_extras() {
        let order = OrderRequest::Classic {
            protein: "beef".to_string(),
            variant: VariantKind::Double,
            flavors: ids(&["a"]),
            extras: ids(&["cheese", "cheese"]),
        };
        let breakdown = service().quote(&order).await.unwrap();
        assert_eq!(breakdown.extras.len(), 2);
        assert_eq!(breakdown.total, Price::pesos(150));
    }

    #[tokio::test]
    async fn test_classic_requires_a_flavor() {
        let result = service()
            .quote(&classic("beef", VariantKind::Normal, &[]))
            .await;
        assert!(matches!(result, Err(PricingError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_classic_rejects_house_variant() {
        let result = service()
            .quote(&classic("beef", VariantKind::House, &["a"]))
            .await;
        assert!(matches!(result, Err(PricingError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_unknown_and_unavailable_products() {
        let service = service();

        let missing = service
            .quote(&classic("tofu", VariantKind::Normal, &["a"]))
            .await;
        assert!(matches!(
            missing,
            Err(PricingError::NotFound { kind: "protein", .. })
        ));

        let unavailable = service
            .quote(&classic("shrimp", VariantKind::Normal, &["a"]))
            .await;
        assert!(matches!(
            unavailable,
            Err(PricingError::Unavailable { kind: "protein", .. })
        ));
    }

    #[tokio::test]
    async fn test_unavailable_flavor_is_rejected() {
        let result = service()
            .quote(&classic("beef", VariantKind::Normal, &["a", "seasonal"]))
            .await;
        assert!(matches!(
            result,
            Err(PricingError::Unavailable { kind: "flavor", .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_flavor_is_dropped() {
        let breakdown = service()
            .quote(&classic("beef", VariantKind::Normal, &["ghost", "a", "z"]))
            .await
            .unwrap();
        assert_eq!(breakdown.included, ids(&["a"]));
        assert_eq!(breakdown.total, Price::pesos(90));
    }

    #[tokio::test]
    async fn test_only_unknown_flavors_count_as_no_selection() {
        let service = service();

        let classic = service
            .quote(&classic("beef", VariantKind::Normal, &["ghost"]))
            .await;
        assert!(matches!(classic, Err(PricingError::ValidationError(_))));

        let house = OrderRequest::House {
            house: "house".to_string(),
            flavors: ids(&["ghost", "phantom"]),
            extras: vec![],
        };
        assert!(matches!(
            service.quote(&house).await,
            Err(PricingError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_extra_is_rejected() {
        let order = OrderRequest::Tower {
            tower: "tower".to_string(),
            flavors: vec![],
            extras: ids(&["bacon"]),
        };
        let result = service().quote(&order).await;
        assert!(matches!(
            result,
            Err(PricingError::NotFound { kind: "extra", .. })
        ));
    }

    #[tokio::test]
    async fn test_house_tower_and_side() {
        let service = service();

        let house = OrderRequest::House {
            house: "house".to_string(),
            flavors: ids(&["a", "b", "z"]),
            extras: vec![],
        };
        assert_eq!(service.quote(&house).await.unwrap().total, Price::pesos(105));

        let tower = OrderRequest::Tower {
            tower: "tower".to_string(),
            flavors: ids(&["z"]),
            extras: vec![],
        };
        assert_eq!(service.quote(&tower).await.unwrap().total, Price::pesos(160));

        let side = OrderRequest::Side {
            side: "fries".to_string(),
            flavors: vec![],
        };
        assert_eq!(service.quote(&side).await.unwrap().total, Price::pesos(45));
    }
}
