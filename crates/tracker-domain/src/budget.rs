use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// A spending limit for a single expense category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    pub amount: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    pub fn from_new(id: Uuid, fields: NewBudget) -> Self {
        Self {
            id,
            category: fields.category,
            amount: fields.amount,
            period: fields.period,
        }
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// Budget fields supplied by callers before an identifier is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBudget {
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub period: BudgetPeriod,
}

impl NewBudget {
    pub fn new(category: impl Into<String>, amount: f64, period: BudgetPeriod) -> Self {
        Self {
            category: category.into(),
            amount,
            period,
        }
    }

    pub fn monthly(category: impl Into<String>, amount: f64) -> Self {
        Self::new(category, amount, BudgetPeriod::Monthly)
    }
}

/// Budget cadence. Informational only: no window or rollover is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        };
        f.write_str(label)
    }
}
