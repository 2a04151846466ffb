use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::statement::income::{IncomeStatement, StatementInput};

/// Maximum number of past simulations retained.
pub const HISTORY_CAPACITY: usize = 20;

/// A recorded simulation: the parameters used and the statement produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub saved_at: DateTime<Utc>,
    pub input: StatementInput,
    pub statement: IncomeStatement,
}

/// Append-only bounded log of past simulations.
///
/// Owned by the calling layer; the calculator itself never reads or
/// writes it. Once the cap is reached the oldest entries are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationHistory {
    entries: Vec<HistoryEntry>,
}

impl SimulationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a simulation, dropping the oldest entries past the cap.
    pub fn record(&mut self, input: StatementInput, statement: IncomeStatement) {
        self.entries.push(HistoryEntry {
            saved_at: Utc::now(),
            input,
            statement,
        });
        if self.entries.len() > HISTORY_CAPACITY {
            let excess = self.entries.len() - HISTORY_CAPACITY;
            self.entries.drain(..excess);
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::income::calculate_statement;
    use rust_decimal_macros::dec;

    fn sample_input(quantity: u32) -> StatementInput {
        StatementInput {
            product_name: "Margherita".to_string(),
            unit_cost: dec!(15.50),
            markup_pct: dec!(100),
            quantity,
            tax_sales_pct: dec!(8.5),
            cancellations_pct: dec!(2),
            returns_pct: dec!(1),
            platform_fee_pct: dec!(12),
            rent_utilities: dec!(3000),
            salaries: dec!(5000),
            marketing: dec!(500),
            other_expenses: dec!(500),
            financial_expenses: dec!(200),
            irpj_pct: dec!(15),
            csll_pct: dec!(9),
        }
    }

    #[test]
    fn test_record_and_latest() {
        let mut history = SimulationHistory::new();
        assert!(history.is_empty());

        let input = sample_input(100);
        let statement = calculate_statement(&input).result;
        history.record(input, statement);

        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().input.quantity, 100);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = SimulationHistory::new();
        for quantity in 1..=25 {
            let input = sample_input(quantity);
            let statement = calculate_statement(&input).result;
            history.record(input, statement);
        }
        assert_eq!(history.len(), HISTORY_CAPACITY);
        // the first five runs fell off the front
        assert_eq!(history.entries()[0].input.quantity, 6);
        assert_eq!(history.latest().unwrap().input.quantity, 25);
    }

    #[test]
    fn test_clear() {
        let mut history = SimulationHistory::new();
        let input = sample_input(100);
        let statement = calculate_statement(&input).result;
        history.record(input, statement);
        history.clear();
        assert!(history.is_empty());
    }
}
