//! Output data types for an extracted credit report.
//!
//! Field names serialize in camelCase so the record can be stored and
//! displayed as-is.

use serde::{Deserialize, Serialize};

/// Canonical flat record built from one bureau document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedReport {
    /// Applicant first and last name, `"Unknown"` when blank.
    pub name: String,

    pub mobile_phone: String,

    /// Tax identifier, taken from the applicant block or the first account holder.
    pub pan: String,

    pub credit_score: i64,

    pub report_summary: ReportSummary,

    /// One entry per account node, in source order.
    pub credit_accounts: Vec<CreditAccount>,

    /// Holder address of the first account, when it has any address line.
    pub addresses: Vec<Address>,
}

/// Account counts and outstanding balances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_accounts: i64,
    pub active_accounts: i64,
    pub closed_accounts: i64,
    pub current_balance_amount: f64,
    pub secured_accounts_amount: f64,
    pub unsecured_accounts_amount: f64,
    #[serde(rename = "last7DaysCreditEnquiries")]
    pub last_7_days_credit_enquiries: i64,
}

/// A single credit account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditAccount {
    /// Bureau account type code, `"Unknown"` when absent.
    #[serde(rename = "type")]
    pub account_type: String,

    /// Subscriber (lender) name, trimmed.
    pub bank: String,

    pub account_number: String,
    pub amount_overdue: f64,
    pub current_balance: f64,
}

/// Postal address of the account holder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Non-empty address-line fragments joined with `", "`.
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ExtractedReport {
    /// Whether the report carries any account detail.
    #[must_use]
    pub fn has_accounts(&self) -> bool {
        !self.credit_accounts.is_empty()
    }

    /// The single holder address, if one was derived.
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.addresses.first()
    }

    /// Sum of overdue amounts across all accounts.
    #[must_use]
    pub fn total_overdue(&self) -> f64 {
        self.credit_accounts.iter().map(|a| a.amount_overdue).sum()
    }
}
