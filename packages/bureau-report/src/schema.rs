//! Declarative field table for the Experian profile response.
//!
//! Every source value the extractor reads is declared here once, with its
//! path relative to the block it lives in and the value used when the path
//! is absent or cannot be coerced. The extractor only names fields.

use crate::coerce::{to_decimal, to_integer};
use crate::tree::GenericNode;

/// A value type that can be read from element text.
pub trait Coerce: Sized {
    /// Representation of the declared default.
    type Default: Copy;

    /// Materialize the declared default.
    fn from_default(default: Self::Default) -> Self;

    /// Convert element text, falling back to the declared default.
    fn coerce(raw: &str, default: Self::Default) -> Self;
}

impl Coerce for String {
    type Default = &'static str;

    fn from_default(default: &'static str) -> Self {
        default.to_string()
    }

    /// Text is returned unmodified; callers trim where needed.
    fn coerce(raw: &str, _default: &'static str) -> Self {
        raw.to_string()
    }
}

impl Coerce for i64 {
    type Default = i64;

    fn from_default(default: i64) -> Self {
        default
    }

    fn coerce(raw: &str, default: i64) -> Self {
        to_integer(raw).unwrap_or(default)
    }
}

impl Coerce for f64 {
    type Default = f64;

    fn from_default(default: f64) -> Self {
        default
    }

    fn coerce(raw: &str, default: f64) -> Self {
        to_decimal(raw).unwrap_or(default)
    }
}

/// A source field: a path of tag names plus its default.
pub struct Field<T: Coerce> {
    /// Tag names from the enclosing block down to the value element.
    pub path: &'static [&'static str],

    /// Value used when the path is absent or the text cannot be coerced.
    pub default: T::Default,
}

impl<T: Coerce> Field<T> {
    /// Read this field from a block, which may itself be missing.
    ///
    /// When the value element repeats, the first occurrence is used. An
    /// element without text reads as the empty string.
    ///
    /// # Examples
    /// ```
    /// use bureau_report::schema::score;
    /// use bureau_report::tree::parse_document;
    ///
    /// let block = parse_document("<SCORE><BureauScore>742</BureauScore></SCORE>").unwrap();
    /// assert_eq!(score::BUREAU_SCORE.read(Some(&block)), 742);
    /// assert_eq!(score::BUREAU_SCORE.read(None), 0);
    /// ```
    #[must_use]
    pub fn read(&self, block: Option<&GenericNode>) -> T {
        match block.and_then(|node| node.lookup(self.path)) {
            Some(node) => T::coerce(node.text().unwrap_or_default(), self.default),
            None => T::from_default(self.default),
        }
    }
}

/// Block paths, relative to the effective root.
pub mod blocks {
    pub const APPLICANT: &[&str] = &[
        "Current_Application",
        "Current_Application_Details",
        "Current_Applicant_Details",
    ];
    pub const SCORE: &[&str] = &["SCORE"];
    pub const CAIS_ACCOUNT: &[&str] = &["CAIS_Account"];
    pub const CAPS_SUMMARY: &[&str] = &["TotalCAPS_Summary"];

    /// Relative to `CAIS_Account`.
    pub const CREDIT_ACCOUNT_SUMMARY: &[&str] = &["CAIS_Summary", "Credit_Account"];
    /// Relative to `CAIS_Account`.
    pub const OUTSTANDING_BALANCE: &[&str] = &["CAIS_Summary", "Total_Outstanding_Balance"];
    /// Repeated under `CAIS_Account`, one per account.
    pub const ACCOUNT_DETAILS: &str = "CAIS_Account_DETAILS";

    /// Relative to an account node.
    pub const HOLDER_DETAILS: &[&str] = &["CAIS_Holder_Details"];
    /// Relative to an account node.
    pub const HOLDER_ADDRESS: &[&str] = &["CAIS_Holder_Address_Details"];
}

/// Fields of `Current_Applicant_Details`.
pub mod applicant {
    use super::Field;

    pub const FIRST_NAME: Field<String> = Field { path: &["First_Name"], default: "" };
    pub const LAST_NAME: Field<String> = Field { path: &["Last_Name"], default: "" };
    pub const MOBILE_PHONE: Field<String> = Field { path: &["MobilePhoneNumber"], default: "" };
    pub const PAN: Field<String> = Field { path: &["IncomeTaxPan"], default: "" };
}

/// Fields of `SCORE`.
pub mod score {
    use super::Field;

    pub const BUREAU_SCORE: Field<i64> = Field { path: &["BureauScore"], default: 0 };
}

/// Fields of `CAIS_Summary`.
pub mod summary {
    use super::Field;

    pub const TOTAL_ACCOUNTS: Field<i64> = Field { path: &["CreditAccountTotal"], default: 0 };
    pub const ACTIVE_ACCOUNTS: Field<i64> = Field { path: &["CreditAccountActive"], default: 0 };
    pub const CLOSED_ACCOUNTS: Field<i64> = Field { path: &["CreditAccountClosed"], default: 0 };

    pub const SECURED_BALANCE: Field<f64> = Field {
        path: &["Outstanding_Balance_Secured"],
        default: 0.0,
    };
    pub const UNSECURED_BALANCE: Field<f64> = Field {
        path: &["Outstanding_Balance_UnSecured"],
        default: 0.0,
    };
    pub const TOTAL_BALANCE: Field<f64> = Field {
        path: &["Outstanding_Balance_All"],
        default: 0.0,
    };
}

/// Fields of a single `CAIS_Account_DETAILS` node and its holder blocks.
pub mod account {
    use super::Field;

    pub const TYPE: Field<String> = Field { path: &["Account_Type"], default: "Unknown" };
    pub const SUBSCRIBER_NAME: Field<String> = Field { path: &["Subscriber_Name"], default: "" };
    pub const NUMBER: Field<String> = Field { path: &["Account_Number"], default: "" };
    pub const AMOUNT_PAST_DUE: Field<f64> = Field { path: &["Amount_Past_Due"], default: 0.0 };
    pub const CURRENT_BALANCE: Field<f64> = Field { path: &["Current_Balance"], default: 0.0 };

    /// Relative to `CAIS_Holder_Details`.
    pub const HOLDER_PAN: Field<String> = Field { path: &["Income_TAX_PAN"], default: "" };
}

/// Fields of `CAIS_Holder_Address_Details`.
pub mod address {
    use super::Field;

    pub const LINES: [Field<String>; crate::config::ADDRESS_LINE_COUNT] = [
        Field { path: &["First_Line_Of_Address_non_normalized"], default: "" },
        Field { path: &["Second_Line_Of_Address_non_normalized"], default: "" },
        Field { path: &["Third_Line_Of_Address_non_normalized"], default: "" },
    ];
    pub const CITY: Field<String> = Field { path: &["City_non_normalized"], default: "" };
    pub const STATE: Field<String> = Field { path: &["State_non_normalized"], default: "" };
    pub const PINCODE: Field<String> = Field { path: &["ZIP_Postal_Code_non_normalized"], default: "" };
}

/// Fields of `TotalCAPS_Summary`.
pub mod caps {
    use super::Field;

    pub const LAST_7_DAYS: Field<i64> = Field { path: &["TotalCAPSLast7Days"], default: 0 };
}
