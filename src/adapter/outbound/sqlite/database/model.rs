//! Database model types for Diesel ORM.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use super::schema::{account, dealer, opportunity};

/// Database row for an account.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = account)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccountRow {
    pub account_id: String,
    pub account_name: String,
}

/// Database row for a dealer.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = dealer)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DealerRow {
    pub dealer_id: String,
    pub dealer_code: String,
    pub opportunity_owner: String,
}

/// Database row for an opportunity.
///
/// `amount` is kept as decimal text so no precision is lost in SQLite.
#[derive(Queryable, Selectable, Insertable, Debug, Clone)]
#[diesel(table_name = opportunity)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct OpportunityRow {
    pub opportunity_id: String,
    pub opportunity_name: String,
    pub account_id: String,
    pub close_date: NaiveDate,
    pub amount: String,
    pub description: Option<String>,
    pub dealer_id: String,
    pub dealer_code: String,
    pub dealer_name_or_opportunity_owner: String,
    pub stage: String,
    pub probability: i64,
    pub next_step: Option<String>,
    pub created_date: NaiveDateTime,
}
