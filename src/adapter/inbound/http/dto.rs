//! Wire types for the HTTP surface.
//!
//! Field names are the public JSON and query-string contract and must not
//! change.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    AccountId, DealerId, DealerIdentity, Opportunity, OpportunityDraft, OpportunityId,
    OpportunitySummary, Stage,
};

/// Text format for `created_date` in responses.
pub const CREATED_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Text format for `close_date` in responses.
pub const CLOSE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Body of `POST /new_customer`.
///
/// A `stage` key, if present, is ignored: the stage is always derived.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOpportunityRequest {
    pub account_name: String,
    pub dealer_id: String,
    pub dealer_code: String,
    pub dealer_name_or_opportunity_owner: String,
    pub opportunity_name: String,
    /// `YYYY-MM-DD`.
    pub close_date: NaiveDate,
    /// JSON number or decimal string.
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
    pub probability: i64,
    #[serde(default)]
    pub next_step: Option<String>,
}

impl CreateOpportunityRequest {
    /// Split into the account name, the dealer identity and the draft.
    #[must_use]
    pub fn into_parts(self) -> (String, DealerIdentity, OpportunityDraft) {
        let identity = DealerIdentity::new(
            self.dealer_id,
            self.dealer_code,
            self.dealer_name_or_opportunity_owner,
        );
        let draft = OpportunityDraft {
            name: self.opportunity_name,
            close_date: self.close_date,
            amount: self.amount,
            description: self.description,
            probability: self.probability,
            next_step: self.next_step,
        };
        (self.account_name, identity, draft)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOpportunityResponse {
    pub message: String,
    pub opportunity_id: OpportunityId,
}

impl CreateOpportunityResponse {
    pub const MESSAGE: &'static str = "Customer (opportunity) created successfully";

    #[must_use]
    pub fn created(opportunity_id: OpportunityId) -> Self {
        Self {
            message: Self::MESSAGE.to_owned(),
            opportunity_id,
        }
    }
}

/// Query string of `GET /get_customers`.
#[derive(Debug, Clone, Deserialize)]
pub struct DealerQuery {
    pub dealer_id: String,
    pub dealer_code: String,
    pub opportunity_owner: String,
}

impl DealerQuery {
    #[must_use]
    pub fn identity(&self) -> DealerIdentity {
        DealerIdentity::new(
            self.dealer_id.as_str(),
            self.dealer_code.as_str(),
            self.opportunity_owner.as_str(),
        )
    }
}

/// Query string of `GET /single-customer`.
#[derive(Debug, Clone, Deserialize)]
pub struct SingleOpportunityQuery {
    pub dealer_id: String,
    pub dealer_code: String,
    pub opportunity_owner: String,
    pub opportunity_id: String,
}

impl SingleOpportunityQuery {
    #[must_use]
    pub fn identity(&self) -> DealerIdentity {
        DealerIdentity::new(
            self.dealer_id.as_str(),
            self.dealer_code.as_str(),
            self.opportunity_owner.as_str(),
        )
    }

    #[must_use]
    pub fn opportunity_id(&self) -> OpportunityId {
        OpportunityId::from(self.opportunity_id.as_str())
    }
}

/// One element of the `GET /get_customers` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunitySummaryView {
    pub opportunity_name: String,
    pub account_id: AccountId,
    pub close_date: NaiveDate,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub stage: Stage,
}

impl From<OpportunitySummary> for OpportunitySummaryView {
    fn from(summary: OpportunitySummary) -> Self {
        Self {
            opportunity_name: summary.name,
            account_id: summary.account_id,
            close_date: summary.close_date,
            amount: summary.amount,
            description: summary.description,
            stage: summary.stage,
        }
    }
}

/// Response of `GET /single-customer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityView {
    pub opportunity_id: OpportunityId,
    pub opportunity_name: String,
    pub account_id: AccountId,
    pub close_date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub description: Option<String>,
    pub dealer_id: DealerId,
    pub dealer_code: String,
    pub dealer_name_or_opportunity_owner: String,
    pub stage: Stage,
    pub probability: i64,
    pub next_step: Option<String>,
    pub created_date: String,
}

impl From<Opportunity> for OpportunityView {
    fn from(opp: Opportunity) -> Self {
        Self {
            opportunity_id: opp.id,
            opportunity_name: opp.name,
            account_id: opp.account_id,
            close_date: opp.close_date.format(CLOSE_DATE_FORMAT).to_string(),
            amount: opp.amount,
            description: opp.description,
            dealer_id: opp.dealer_id,
            dealer_code: opp.dealer_code,
            dealer_name_or_opportunity_owner: opp.owner,
            stage: opp.stage,
            probability: opp.probability,
            next_step: opp.next_step,
            created_date: opp.created_at.format(CREATED_DATE_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDateTime;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::domain::{Account, Dealer};

    fn request_json() -> serde_json::Value {
        json!({
            "account_name": "Acme",
            "dealer_id": "D1",
            "dealer_code": "C1",
            "dealer_name_or_opportunity_owner": "Alice",
            "opportunity_name": "Fleet renewal",
            "close_date": "2026-12-31",
            "amount": 12500.5,
            "description": "Twelve vans",
            "probability": 65,
            "next_step": "Send quote"
        })
    }

    #[test]
    fn request_splits_into_identity_and_draft() {
        let req: CreateOpportunityRequest = serde_json::from_value(request_json()).unwrap();
        let (account, identity, draft) = req.into_parts();

        assert_eq!(account, "Acme");
        assert_eq!(identity, DealerIdentity::new("D1", "C1", "Alice"));
        assert_eq!(draft.amount, dec!(12500.5));
        assert_eq!(draft.probability, 65);
        assert_eq!(draft.close_date, NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn request_accepts_amount_as_string() {
        let mut body = request_json();
        body["amount"] = json!("999.10");
        let req: CreateOpportunityRequest = serde_json::from_value(body).unwrap();
        assert_eq!(req.amount, dec!(999.10));
    }

    #[test]
    fn request_ignores_caller_stage() {
        let mut body = request_json();
        body["stage"] = json!("Closed Won");
        assert!(serde_json::from_value::<CreateOpportunityRequest>(body).is_ok());
    }

    #[test]
    fn request_optional_text_fields_may_be_absent() {
        let mut body = request_json();
        body.as_object_mut().unwrap().remove("description");
        body.as_object_mut().unwrap().remove("next_step");
        let req: CreateOpportunityRequest = serde_json::from_value(body).unwrap();
        assert!(req.description.is_none());
        assert!(req.next_step.is_none());
    }

    #[test]
    fn request_rejects_missing_required_field() {
        let mut body = request_json();
        body.as_object_mut().unwrap().remove("probability");
        assert!(serde_json::from_value::<CreateOpportunityRequest>(body).is_err());
    }

    #[test]
    fn request_rejects_malformed_date() {
        let mut body = request_json();
        body["close_date"] = json!("31/12/2026");
        assert!(serde_json::from_value::<CreateOpportunityRequest>(body).is_err());
    }

    #[test]
    fn view_renders_numbers_and_text_dates() {
        let created =
            NaiveDateTime::parse_from_str("2026-10-14 08:05:09.250000", "%Y-%m-%d %H:%M:%S%.f")
                .unwrap();
        let draft = OpportunityDraft {
            name: "Fleet renewal".into(),
            close_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            amount: dec!(12500.50),
            description: None,
            probability: 65,
            next_step: None,
        };
        let (account, dealer) = (Account::new("Acme"), Dealer::new("C1", "Alice"));
        let opp = Opportunity::open(draft, &account, &dealer, created);

        let value = serde_json::to_value(OpportunityView::from(opp)).unwrap();
        assert_eq!(value["amount"], json!(12500.5));
        assert_eq!(value["close_date"], json!("2026-12-31"));
        assert_eq!(value["created_date"], json!("2026-10-14 08:05:09.250000"));
        assert_eq!(value["stage"], json!("Value Proposition"));
        assert_eq!(value["probability"], json!(65));
        assert!(value["description"].is_null());
    }

    #[test]
    fn summary_view_has_listed_keys_only() {
        let draft = OpportunityDraft {
            name: "Fleet renewal".into(),
            close_date: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap(),
            amount: dec!(10),
            description: Some("Twelve vans".into()),
            probability: 0,
            next_step: None,
        };
        let created = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let (account, dealer) = (Account::new("Acme"), Dealer::new("C1", "Alice"));
        let opp = Opportunity::open(draft, &account, &dealer, created);

        let value = serde_json::to_value(OpportunitySummaryView::from(opp.summary())).unwrap();
        let mut keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec!["account_id", "amount", "close_date", "description", "opportunity_name", "stage"]
        );
        assert_eq!(value["stage"], json!("Closed Lost"));
        assert_eq!(value["close_date"], json!("2026-12-31"));
    }
}
