//! Flat per-hop fare model.

use crate::domain::{Fare, Path};

use super::error::PlanError;

/// Fare charged per hop unless configured otherwise.
pub const DEFAULT_FARE_PER_HOP: Fare = Fare::new(5);

/// Prices a path at a flat rate per hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareCalculator {
    per_hop: Fare,
}

impl FareCalculator {
    pub fn new(per_hop: Fare) -> Self {
        Self { per_hop }
    }

    pub fn per_hop(&self) -> Fare {
        self.per_hop
    }

    /// `hops * per_hop`. A zero-hop path is free.
    ///
    /// # Errors
    ///
    /// `FareOverflow` if the product does not fit in a [`Fare`]; the fare is
    /// never clamped.
    pub fn price(&self, path: &Path) -> Result<Fare, PlanError> {
        let hops = path.hops();
        u32::try_from(hops)
            .ok()
            .and_then(|n| self.per_hop.checked_mul(n))
            .ok_or(PlanError::FareOverflow {
                hops,
                per_hop: self.per_hop,
            })
    }
}

impl Default for FareCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_FARE_PER_HOP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StationId;

    fn path(ids: &[&str]) -> Path {
        Path::new(ids.iter().map(|s| StationId::parse(s).unwrap()).collect()).unwrap()
    }

    #[test]
    fn default_rate() {
        assert_eq!(FareCalculator::default().per_hop(), Fare::new(5));
    }

    #[test]
    fn zero_hops_is_free() {
        let fares = FareCalculator::default();
        assert_eq!(fares.price(&path(&["S1"])).unwrap(), Fare::ZERO);
    }

    #[test]
    fn price_scales_with_hops() {
        let fares = FareCalculator::default();
        assert_eq!(fares.price(&path(&["S1", "S2"])).unwrap(), Fare::new(5));
        assert_eq!(fares.price(&path(&["S1", "S2", "S4"])).unwrap(), Fare::new(10));
        assert_eq!(fares.price(&path(&["S1", "S2", "S3", "S4", "S5"])).unwrap(), Fare::new(20));
    }

    #[test]
    fn overflow_is_an_error() {
        let fares = FareCalculator::new(Fare::new(u32::MAX));
        assert_eq!(fares.price(&path(&["S1", "S2"])).unwrap(), Fare::new(u32::MAX));
        assert_eq!(
            fares.price(&path(&["S1", "S2", "S3"])).unwrap_err(),
            PlanError::FareOverflow {
                hops: 2,
                per_hop: Fare::new(u32::MAX)
            }
        );
    }

    #[test]
    fn custom_rate() {
        let fares = FareCalculator::new(Fare::new(3));
        assert_eq!(fares.price(&path(&["S1", "S2", "S3"])).unwrap(), Fare::new(6));
    }
}
