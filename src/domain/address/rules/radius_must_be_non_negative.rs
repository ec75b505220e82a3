use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::infrastructure::error::{AppError, AppResult};

pub struct RadiusMustBeNonNegative {
    pub radius_km: f64,
}

impl BusinessRuleInterface for RadiusMustBeNonNegative {
    fn check_broken(&self) -> AppResult<()> {
        if !self.radius_km.is_finite() || self.radius_km < 0.0 {
            return Err(AppError::BadRequestError(format!(
                "Distance must be a non-negative number of kilometers, got {}",
                self.radius_km
            )));
        }
        Ok(())
    }
}
