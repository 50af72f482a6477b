//! Field extraction from a parsed Experian profile response.
//!
//! Extraction is total: missing blocks and unparseable values resolve to the
//! defaults declared in [`crate::schema`]. The only way to fail is upstream,
//! when the XML text itself is malformed.

use crate::config::{ADDRESS_SEPARATOR, UNKNOWN_NAME, WRAPPER_TAG};
use crate::error::Result;
use crate::schema::{account, address, applicant, blocks, caps, score, summary};
use crate::tree::{parse_document, GenericNode};
use crate::types::{Address, CreditAccount, ExtractedReport, ReportSummary};

/// Parse XML text and extract a report from it.
///
/// # Errors
/// Returns `ReportError::MalformedDocument` when the text is not well-formed XML.
///
/// # Examples
/// ```
/// use bureau_report::parse_report;
///
/// let report = parse_report("<INProfileResponse><SCORE><BureauScore>742</BureauScore></SCORE></INProfileResponse>").unwrap();
/// assert_eq!(report.credit_score, 742);
/// assert_eq!(report.name, "Unknown");
/// ```
pub fn parse_report(xml: &str) -> Result<ExtractedReport> {
    let tree = parse_document(xml)?;
    Ok(extract(&tree))
}

/// Build an [`ExtractedReport`] from a generic tree.
#[must_use]
pub fn extract(tree: &GenericNode) -> ExtractedReport {
    let root = resolve_root(tree);

    let applicant_block = root.lookup(blocks::APPLICANT);
    tracing::debug!(present = applicant_block.is_some(), "Applicant block");
    let mut pan = applicant::PAN.read(applicant_block);
    let mobile_phone = applicant::MOBILE_PHONE.read(applicant_block);
    let name = join_name(
        &applicant::FIRST_NAME.read(applicant_block),
        &applicant::LAST_NAME.read(applicant_block),
    );

    let score_block = root.lookup(blocks::SCORE);
    let credit_score = score::BUREAU_SCORE.read(score_block);
    tracing::debug!(present = score_block.is_some(), credit_score, "Score block");

    let cais = root.lookup(blocks::CAIS_ACCOUNT);
    let mut report_summary = extract_summary(cais);

    let caps_block = root.lookup(blocks::CAPS_SUMMARY);
    report_summary.last_7_days_credit_enquiries = caps::LAST_7_DAYS.read(caps_block);
    tracing::debug!(
        present = caps_block.is_some(),
        enquiries = report_summary.last_7_days_credit_enquiries,
        "CAPS summary block"
    );

    let account_nodes = cais.map(|c| c.all(blocks::ACCOUNT_DETAILS)).unwrap_or_default();
    tracing::debug!(
        present = cais.is_some(),
        accounts = account_nodes.len(),
        "CAIS account block"
    );
    let mut credit_accounts = Vec::with_capacity(account_nodes.len());
    for node in account_nodes {
        credit_accounts.push(extract_account(node));
        if pan.is_empty() {
            if let Some(holder) = node.lookup(blocks::HOLDER_DETAILS) {
                pan = account::HOLDER_PAN.read(Some(holder));
            }
        }
    }

    let addresses: Vec<Address> = account_nodes
        .first()
        .and_then(|first| first.lookup(blocks::HOLDER_ADDRESS))
        .and_then(extract_address)
        .into_iter()
        .collect();

    let report = ExtractedReport {
        name: if name.trim().is_empty() {
            UNKNOWN_NAME.to_string()
        } else {
            name
        },
        mobile_phone,
        pan,
        credit_score,
        report_summary,
        credit_accounts,
        addresses,
    };

    tracing::info!(
        accounts = report.credit_accounts.len(),
        addresses = report.addresses.len(),
        score = report.credit_score,
        "Extracted credit report"
    );

    report
}

/// Pick the effective root: the `INProfileResponse` element when present.
///
/// A tree that is itself the wrapper, or holds it as a child, descends into
/// it. Anything else is used as-is, so unwrapped documents extract the same
/// way as wrapped ones.
#[must_use]
pub fn resolve_root(tree: &GenericNode) -> &GenericNode {
    if tree.name == WRAPPER_TAG {
        return tree;
    }
    match tree.first(WRAPPER_TAG) {
        Some(wrapper) => {
            tracing::debug!("Descending into {WRAPPER_TAG}");
            wrapper
        }
        None => tree,
    }
}

/// Join trimmed first and last names with a single space.
fn join_name(first: &str, last: &str) -> String {
    format!("{} {}", first.trim(), last.trim()).trim().to_string()
}

fn extract_summary(cais: Option<&GenericNode>) -> ReportSummary {
    let counts = cais.and_then(|c| c.lookup(blocks::CREDIT_ACCOUNT_SUMMARY));
    let balances = cais.and_then(|c| c.lookup(blocks::OUTSTANDING_BALANCE));

    ReportSummary {
        total_accounts: summary::TOTAL_ACCOUNTS.read(counts),
        active_accounts: summary::ACTIVE_ACCOUNTS.read(counts),
        closed_accounts: summary::CLOSED_ACCOUNTS.read(counts),
        current_balance_amount: summary::TOTAL_BALANCE.read(balances),
        secured_accounts_amount: summary::SECURED_BALANCE.read(balances),
        unsecured_accounts_amount: summary::UNSECURED_BALANCE.read(balances),
        last_7_days_credit_enquiries: 0,
    }
}

fn extract_account(node: &GenericNode) -> CreditAccount {
    let node = Some(node);
    CreditAccount {
        account_type: account::TYPE.read(node),
        bank: account::SUBSCRIBER_NAME.read(node).trim().to_string(),
        account_number: account::NUMBER.read(node),
        amount_overdue: account::AMOUNT_PAST_DUE.read(node),
        current_balance: account::CURRENT_BALANCE.read(node),
    }
}

/// Build the holder address; `None` when no address line survives trimming.
fn extract_address(details: &GenericNode) -> Option<Address> {
    let block = Some(details);
    let fragments: Vec<String> = address::LINES
        .iter()
        .map(|line| line.read(block).trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    if fragments.is_empty() {
        return None;
    }

    Some(Address {
        address_line: fragments.join(ADDRESS_SEPARATOR),
        city: address::CITY.read(block),
        state: address::STATE.read(block),
        pincode: address::PINCODE.read(block),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn applicant_tree(first: &str, last: &str) -> GenericNode {
        GenericNode::new("INProfileResponse").with_child(
            GenericNode::new("Current_Application").with_child(
                GenericNode::new("Current_Application_Details").with_child(
                    GenericNode::new("Current_Applicant_Details")
                        .with_child(GenericNode::leaf("First_Name", first))
                        .with_child(GenericNode::leaf("Last_Name", last)),
                ),
            ),
        )
    }

    #[test]
    fn test_empty_tree_yields_defaults() {
        let report = extract(&GenericNode::default());
        assert_eq!(
            report,
            ExtractedReport {
                name: "Unknown".to_string(),
                ..ExtractedReport::default()
            }
        );
    }

    #[test]
    fn test_join_name_trims_independently() {
        assert_eq!(join_name(" Jane ", ""), "Jane");
        assert_eq!(join_name("", " Doe"), "Doe");
        assert_eq!(join_name(" Jane ", " Doe "), "Jane Doe");
        assert_eq!(join_name("  ", "  "), "");
    }

    #[test]
    fn test_name_from_applicant_block() {
        assert_eq!(extract(&applicant_tree(" Jane ", "")).name, "Jane");
        assert_eq!(extract(&applicant_tree("  ", " ")).name, "Unknown");
    }

    #[test]
    fn test_resolve_root_variants() {
        let wrapper = GenericNode::new("INProfileResponse");
        assert_eq!(resolve_root(&wrapper).name, "INProfileResponse");

        let envelope = GenericNode::new("Envelope").with_child(wrapper.clone());
        assert_eq!(resolve_root(&envelope).name, "INProfileResponse");

        let bare = GenericNode::new("Report");
        assert_eq!(resolve_root(&bare).name, "Report");
    }

    #[test]
    fn test_address_requires_a_line() {
        let details = GenericNode::new("CAIS_Holder_Address_Details")
            .with_child(GenericNode::leaf("First_Line_Of_Address_non_normalized", "  "))
            .with_child(GenericNode::leaf("City_non_normalized", "Pune"));
        assert!(extract_address(&details).is_none());
    }

    #[test]
    fn test_address_skips_empty_fragments() {
        let details = GenericNode::new("CAIS_Holder_Address_Details")
            .with_child(GenericNode::leaf("First_Line_Of_Address_non_normalized", " 12 MG Road "))
            .with_child(GenericNode::leaf("Second_Line_Of_Address_non_normalized", ""))
            .with_child(GenericNode::leaf("Third_Line_Of_Address_non_normalized", "Camp"))
            .with_child(GenericNode::leaf("City_non_normalized", " Pune"));

        let address = extract_address(&details).unwrap();
        assert_eq!(address.address_line, "12 MG Road, Camp");
        assert_eq!(address.city, " Pune");
        assert_eq!(address.state, "");
        assert_eq!(address.pincode, "");
    }

    #[test]
    fn test_account_defaults() {
        let account = extract_account(&GenericNode::new("CAIS_Account_DETAILS"));
        assert_eq!(account.account_type, "Unknown");
        assert_eq!(account.bank, "");
        assert_eq!(account.account_number, "");
        assert_eq!(account.amount_overdue, 0.0);
        assert_eq!(account.current_balance, 0.0);
    }
}
