// Mirrors sql/schema.sql.

diesel::table! {
    account (account_id) {
        account_id -> Text,
        account_name -> Text,
    }
}

diesel::table! {
    dealer (dealer_id) {
        dealer_id -> Text,
        dealer_code -> Text,
        opportunity_owner -> Text,
    }
}

diesel::table! {
    opportunity (opportunity_id) {
        opportunity_id -> Text,
        opportunity_name -> Text,
        account_id -> Text,
        close_date -> Date,
        amount -> Text,
        description -> Nullable<Text>,
        dealer_id -> Text,
        dealer_code -> Text,
        dealer_name_or_opportunity_owner -> Text,
        stage -> Text,
        probability -> BigInt,
        next_step -> Nullable<Text>,
        created_date -> Timestamp,
    }
}

diesel::joinable!(opportunity -> account (account_id));
diesel::joinable!(opportunity -> dealer (dealer_id));

diesel::allow_tables_to_appear_in_same_query!(account, dealer, opportunity);

/// DDL for the tables above, for provisioning scratch databases.
#[cfg(any(test, feature = "testkit"))]
pub const SCHEMA_SQL: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/sql/schema.sql"));
