use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::geo::distance::{MAX_LONGITUDE, MIN_LONGITUDE};
use crate::infrastructure::error::{AppError, AppResult};

pub struct LongitudeMustBeInRange {
    pub longitude: f64,
}

impl BusinessRuleInterface for LongitudeMustBeInRange {
    fn check_broken(&self) -> AppResult<()> {
        if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&self.longitude) {
            return Err(AppError::BadRequestError(format!(
                "Longitude must be between {MIN_LONGITUDE} and {MAX_LONGITUDE}, got {}",
                self.longitude
            )));
        }
        Ok(())
    }
}
