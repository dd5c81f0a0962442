// Categorical code books - Czech abbreviation -> canonical English label
// Codes live in data tables, not conditional chains; each book carries an
// explicit policy for codes it does not know.

use crate::store::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// SENTINELS
// ============================================================================

/// Map the source's in-band "no value" placeholders to the real absent
/// marker: `'?'`, the empty string, and whitespace-only cells all become
/// `Value::Null`. Anything else is returned unchanged.
pub fn normalize_sentinel(raw: &Value) -> Value {
    match raw {
        Value::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() || trimmed == "?" {
                Value::Null
            } else {
                raw.clone()
            }
        }
        other => other.clone(),
    }
}

// ============================================================================
// CODE BOOK
// ============================================================================

/// What to do with a code that is not in the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnmappedPolicy {
    /// Unknown codes become the absent marker (the default for every book).
    Absent,
    /// Unknown codes pass through unchanged. Only Account.frequency does
    /// this, preserved as observed in the source data.
    Passthrough,
}

/// Immutable code -> label table for one categorical column.
pub struct CodeBook {
    /// Column this book applies to, for audit messages.
    pub field: &'static str,
    pub unmapped: UnmappedPolicy,
    labels: HashMap<&'static str, &'static str>,
}

impl CodeBook {
    fn new(
        field: &'static str,
        unmapped: UnmappedPolicy,
        pairs: &[(&'static str, &'static str)],
    ) -> Self {
        CodeBook {
            field,
            unmapped,
            labels: pairs.iter().copied().collect(),
        }
    }

    /// Translate one raw cell. Sentinels normalize to Null before lookup;
    /// unknown codes follow the book's policy.
    pub fn recode(&self, raw: &Value) -> Value {
        let normalized = normalize_sentinel(raw);
        if normalized.is_null() {
            return Value::Null;
        }

        let code = normalized.as_text().map(str::trim);

        match code.and_then(|c| self.labels.get(c)) {
            Some(label) => Value::Text((*label).to_string()),
            None => match self.unmapped {
                UnmappedPolicy::Absent => Value::Null,
                UnmappedPolicy::Passthrough => raw.clone(),
            },
        }
    }

    /// True when the code has a label in this book.
    pub fn knows(&self, code: &str) -> bool {
        self.labels.contains_key(code)
    }
}

// ============================================================================
// THE SIX VOCABULARIES
// ============================================================================

/// Account.frequency - statement issuance frequency.
/// The only Passthrough book: the source leaves unknown frequencies as-is.
pub fn account_frequency() -> CodeBook {
    CodeBook::new(
        "frequency",
        UnmappedPolicy::Passthrough,
        &[
            ("POPLATEK MESICNE", "Monthly Issuance"),
            ("POPLATEK TYDNE", "Weekly Issuance"),
            ("POPLATEK PO OBRATU", "Issuance After Transaction"),
        ],
    )
}

/// Loan.status - repayment status of the contract.
pub fn loan_status() -> CodeBook {
    CodeBook::new(
        "status",
        UnmappedPolicy::Absent,
        &[
            ("A", "Contract finished, no problems"),
            ("B", "Contract finished, loan not paid"),
            ("C", "Running contract, OK thus-far"),
            ("D", "Running contract, client in debt"),
        ],
    )
}

/// Order.k_symbol - payment purpose (blank-padded sentinel in the source).
pub fn order_k_symbol() -> CodeBook {
    CodeBook::new(
        "k_symbol",
        UnmappedPolicy::Absent,
        &[
            ("LEASING", "Leasing Payment"),
            ("POJISTNE", "Insurance Payment"),
            ("SIPO", "Household Payment"),
            ("UVER", "Loan Payment"),
        ],
    )
}

/// Transaction.type - credit/debit direction.
pub fn trans_type() -> CodeBook {
    CodeBook::new(
        "type",
        UnmappedPolicy::Absent,
        &[
            ("PRIJEM", "Credit"),
            ("VYDAJ", "Debit"),
            ("VYBER", "Cash withdrawal"),
        ],
    )
}

/// Transaction.operation - mode of the transaction.
pub fn trans_operation() -> CodeBook {
    CodeBook::new(
        "operation",
        UnmappedPolicy::Absent,
        &[
            ("PREVOD NA UCET", "Remittance to Another Bank"),
            ("VKLAD", "Credit in Cash"),
            ("VYBER", "Cash withdrawal"),
            ("VYBER KARTOU", "Credit Card withdrawal"),
            ("PREVOD Z UCTU", "Collection from Another Bank"),
        ],
    )
}

/// Transaction.k_symbol - characterization of the transaction.
pub fn trans_k_symbol() -> CodeBook {
    CodeBook::new(
        "k_symbol",
        UnmappedPolicy::Absent,
        &[
            ("UROK", "Interest Credited"),
            ("UVER", "Loan Payment"),
            ("SLUZBY", "Payment of Statement"),
            ("SANKC. UROK", "Sanction Interest if Negative Balance"),
            ("SIPO", "Household Payment"),
            ("POJISTNE", "Insurance Payment"),
            ("DUCHOD", "Old-age Pension Payment"),
        ],
    )
}

// ============================================================================
// TESTS
// ============================================================================
