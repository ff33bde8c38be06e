//! Builders for domain values and request bodies used across tests.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::domain::{Dealer, OpportunityDraft};

/// Close date used by every generated draft.
pub fn close_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or_default()
}

/// Amount used by every generated draft: 12500.50.
pub fn amount() -> Decimal {
    Decimal::new(1_250_050, 2)
}

/// A complete draft with the given probability.
pub fn draft(probability: i64) -> OpportunityDraft {
    OpportunityDraft {
        name: "Fleet renewal".to_string(),
        close_date: close_date(),
        amount: amount(),
        description: Some("Twelve vans".to_string()),
        probability,
        next_step: Some("Send quote".to_string()),
    }
}

/// A `POST /new_customer` body for `account_name` on behalf of `dealer`.
pub fn create_payload(account_name: &str, dealer: &Dealer, probability: i64) -> Value {
    json!({
        "account_name": account_name,
        "dealer_id": dealer.id.as_str(),
        "dealer_code": dealer.code,
        "dealer_name_or_opportunity_owner": dealer.owner,
        "opportunity_name": "Fleet renewal",
        "close_date": "2026-12-31",
        "amount": 12500.5,
        "description": "Twelve vans",
        "probability": probability,
        "next_step": "Send quote",
    })
}

/// Query string carrying `dealer`'s identity triple.
pub fn dealer_query(dealer: &Dealer) -> String {
    format!(
        "dealer_id={}&dealer_code={}&opportunity_owner={}",
        dealer.id, dealer.code, dealer.owner
    )
}
