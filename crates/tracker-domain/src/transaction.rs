//! Domain models for income and expense transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// Distinguishes money coming in from money going out.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(self) -> bool {
        matches!(self, TransactionKind::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// A recorded transaction as persisted by the record store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Builds a stored transaction from its fields and an already minted id.
    pub fn from_new(id: Uuid, fields: NewTransaction) -> Self {
        Self {
            id,
            kind: fields.kind,
            amount: fields.amount,
            category: fields.category,
            description: fields.description,
            date: fields.date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        !self.is_income()
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Transaction fields supplied by callers before an identifier is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            kind,
            amount,
            category: category.into(),
            description: String::new(),
            date,
        }
    }

    pub fn expense(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Expense, amount, category, date)
    }

    pub fn income(amount: f64, category: impl Into<String>, date: NaiveDate) -> Self {
        Self::new(TransactionKind::Income, amount, category, date)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kind_under_type_field() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let txn = Transaction::from_new(
            Uuid::nil(),
            NewTransaction::expense(50.0, "Food", date).with_description("Lunch"),
        );
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["type"], "expense");
        assert_eq!(value["date"], "2024-01-01");
        assert_eq!(value["description"], "Lunch");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let raw = r#"{"id":"00000000-0000-0000-0000-000000000000","type":"income","amount":10,"category":"Salary","date":"2024-02-03"}"#;
        let txn: Transaction = serde_json::from_str(raw).unwrap();
        assert!(txn.is_income());
        assert_eq!(txn.amount, 10.0);
        assert!(txn.description.is_empty());
    }
}
