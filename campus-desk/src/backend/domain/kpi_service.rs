//! KPI aggregation for the ERP dashboard.
//!
//! Every figure is a plain reduction over the current store contents and is
//! recomputed after each mutation; nothing is cached between calls.

use shared::{FinanceEntry, FinanceType, InventoryItem, KpiSnapshot, StaffMember};

use super::record_store::RecordStore;
use super::values::Scalar;

/// Sum of values coerced to numbers; non-numeric values count as `0`
pub fn sum<I>(values: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Scalar>,
{
    values.into_iter().map(|value| value.into().as_number()).sum()
}

/// Total income minus total expense
pub fn net_balance(finance: &RecordStore<FinanceEntry>) -> f64 {
    let total_for = |kind: FinanceType| {
        sum(finance
            .iter()
            .filter(|entry| entry.entry_type == kind)
            .map(|entry| entry.amount))
    };
    total_for(FinanceType::Income) - total_for(FinanceType::Expense)
}

/// Total quantity on hand across all inventory lines
pub fn inventory_quantity(inventory: &RecordStore<InventoryItem>) -> f64 {
    sum(inventory.iter().map(|item| item.qty))
}

/// Format a number with Indian digit grouping (`1,23,456`), up to three decimals.
/// Infinite values print as `∞`.
pub fn format_indian(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let magnitude = value.abs();
    // Beyond 1e15 an f64 has no fractional digits left to round
    let rounded = if magnitude < 1e15 {
        (magnitude * 1000.0).round() / 1000.0
    } else {
        magnitude
    };
    let negative = value < 0.0 && rounded != 0.0;
    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction.trim_start_matches('0').trim_start_matches('.').trim_end_matches('0');

    let digits = format!("{:.0}", rounded.trunc());
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups = Vec::new();
        let mut end = head.len();
        while end > 0 {
            let start = end.saturating_sub(2);
            groups.push(&head[start..end]);
            end = start;
        }
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    let sign = if negative { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Computes the dashboard KPI cards
#[derive(Debug, Clone)]
pub struct KpiService {
    currency_symbol: String,
}

impl KpiService {
    pub fn new(currency_symbol: &str) -> Self {
        Self {
            currency_symbol: currency_symbol.to_string(),
        }
    }

    /// Budget card text, e.g. "₹ 88,000"
    pub fn format_budget(&self, amount: f64) -> String {
        format!("{} {}", self.currency_symbol, format_indian(amount))
    }

    pub fn snapshot(
        &self,
        finance: &RecordStore<FinanceEntry>,
        staff: &RecordStore<StaffMember>,
        inventory: &RecordStore<InventoryItem>,
    ) -> KpiSnapshot {
        let net_balance = net_balance(finance);
        KpiSnapshot {
            net_balance,
            formatted_budget: self.format_budget(net_balance),
            staff_count: staff.len(),
            inventory_quantity: inventory_quantity(inventory),
        }
    }
}

impl Default for KpiService {
    fn default() -> Self {
        Self::new("₹")
    }
}
