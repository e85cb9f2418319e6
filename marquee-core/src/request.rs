use crate::{CoreError, CoreResult, CustomerId};

/// Checks shared by every book/cancel request, before any catalog lookup:
/// the customer id must be well-formed and at least one ticket requested.
pub fn validate_request(customer: &str, quantity: u32) -> CoreResult<CustomerId> {
    let customer = CustomerId::parse(customer)?;
    if quantity == 0 {
        return Err(CoreError::ValidationError(
            "Number of tickets must be at least 1.".to_string(),
        ));
    }
    Ok(customer)
}
