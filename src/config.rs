use crate::domain::catalog::Intensity;
use crate::domain::money::Price;
use crate::error::Result;
use clap::Args;
use rust_decimal::Decimal;

/// Command-line / environment form of the surcharge schedule.
#[derive(Args, Debug, Clone)]
pub struct SurchargeArgs {
    /// Surcharge for a normal-intensity flavor
    #[arg(long, env = "PRICING_NORMAL_SURCHARGE", default_value = "5")]
    pub normal_surcharge: Decimal,

    /// Surcharge for an extreme-intensity flavor
    #[arg(long, env = "PRICING_EXTREME_SURCHARGE", default_value = "10")]
    pub extreme_surcharge: Decimal,
}

/// Fixed flavor surcharge per intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurchargeSchedule {
    pub normal: Price,
    pub extreme: Price,
}

impl SurchargeSchedule {
    pub fn new(normal: Decimal, extreme: Decimal) -> Result<Self> {
        Ok(Self {
            normal: Price::new(normal)?,
            extreme: Price::new(extreme)?,
        })
    }

    pub fn for_intensity(&self, intensity: Intensity) -> Price {
        match intensity {
            Intensity::Normal => self.normal,
            Intensity::Extreme => self.extreme,
        }
    }
}

impl Default for SurchargeSchedule {
    fn default() -> Self {
        Self {
            normal: Price::pesos(5),
            extreme: Price::pesos(10),
        }
    }
}

impl TryFrom<&SurchargeArgs> for SurchargeSchedule {
    type Error = crate::error::PricingError;

    fn try_from(args: &SurchargeArgs) -> Result<Self> {
        Self::new(args.normal_surcharge, args.extreme_surcharge)
    }
}
