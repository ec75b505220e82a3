use crate::api::domain::business_rule_interface::BusinessRuleInterface;
use crate::domain::geo::distance::{MAX_LATITUDE, MIN_LATITUDE};
use crate::infrastructure::error::{AppError, AppResult};

pub struct LatitudeMustBeInRange {
    pub latitude: f64,
}

impl BusinessRuleInterface for LatitudeMustBeInRange {
    fn check_broken(&self) -> AppResult<()> {
        // NaN fails the range check as well.
        if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&self.latitude) {
            return Err(AppError::BadRequestError(format!(
                "Latitude must be between {MIN_LATITUDE} and {MAX_LATITUDE}, got {}",
                self.latitude
            )));
        }
        Ok(())
    }
}
