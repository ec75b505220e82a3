use crate::infrastructure::error::AppResult;

/// A single domain invariant; `check_broken` returns the error describing the violation.
pub trait BusinessRuleInterface {
    fn check_broken(&self) -> AppResult<()>;
}
