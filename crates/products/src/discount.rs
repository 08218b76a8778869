use rust_decimal::Decimal;

use catalog_core::{DomainError, DomainResult, ValueObject};

/// A discount percentage in the closed range `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountPercent(Decimal);

impl DiscountPercent {
    pub const NONE: DiscountPercent = DiscountPercent(Decimal::ZERO);
    pub const FULL: DiscountPercent = DiscountPercent(Decimal::ONE_HUNDRED);

    pub fn new(percent: Decimal) -> DomainResult<Self> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(DomainError::invalid_argument(
                "percent",
                format!("discount must be between 0 and 100 (got {percent})"),
            ));
        }
        Ok(Self(percent))
    }

    pub fn value(self) -> Decimal {
        self.0
    }

    /// `amount * (1 - percent / 100)`, unrounded.
    pub fn apply_to(self, amount: Decimal) -> Decimal {
        amount * (Decimal::ONE - self.0 / Decimal::ONE_HUNDRED)
    }
}

impl ValueObject for DiscountPercent {}

impl TryFrom<Decimal> for DiscountPercent {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_both_bounds() {
        assert_eq!(DiscountPercent::new(Decimal::ZERO).unwrap(), DiscountPercent::NONE);
        assert_eq!(DiscountPercent::new(Decimal::ONE_HUNDRED).unwrap(), DiscountPercent::FULL);
    }

    #[test]
    fn rejects_out_of_range_percentages() {
        for raw in [Decimal::new(-1, 2), Decimal::new(10001, 2), Decimal::new(150, 0)] {
            let err = DiscountPercent::new(raw).unwrap_err();
            assert!(matches!(err, DomainError::InvalidArgument { name: "percent", .. }));
        }
    }

    #[test]
    fn apply_to_scales_the_amount() {
        let amount = Decimal::new(8000, 2);
        let quarter = DiscountPercent::new(Decimal::new(25, 0)).unwrap();
        assert_eq!(quarter.apply_to(amount), Decimal::new(60, 0));
        assert_eq!(DiscountPercent::NONE.apply_to(amount), amount);
        assert_eq!(DiscountPercent::FULL.apply_to(amount), Decimal::ZERO);
    }
}
