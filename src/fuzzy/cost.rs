/// An edit applied while matching a query against the lexicon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// The word has a letter the query lacks.
    Insertion,
    /// The word omits a letter of the query.
    Deletion,
    /// The word has a different letter in place of the query's.
    Substitution,
}

/// Prices each edit operation. Costs are non-negative by construction.
///
/// Implemented for closures, so `|_| 1` is a valid cost function.
pub trait CostFn {
    /// Cost of one application of `op`.
    fn cost(&self, op: Operation) -> u32;
}

impl<F: Fn(Operation) -> u32> CostFn for F {
    #[inline]
    fn cost(&self, op: Operation) -> u32 {
        self(op)
    }
}

/// Classic Levenshtein pricing: every operation costs 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnitCost;

impl CostFn for UnitCost {
    #[inline]
    fn cost(&self, _op: Operation) -> u32 {
        1
    }
}

/// Per-operation weights, loadable from configuration with the `serde`
/// feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostTable {
    /// Cost of [`Operation::Insertion`].
    pub insertion: u32,
    /// Cost of [`Operation::Deletion`].
    pub deletion: u32,
    /// Cost of [`Operation::Substitution`].
    pub substitution: u32,
}

impl Default for CostTable {
    fn default() -> Self {
        CostTable {
            insertion: 1,
            deletion: 1,
            substitution: 1,
        }
    }
}

impl CostFn for CostTable {
    #[inline]
    fn cost(&self, op: Operation) -> u32 {
        match op {
            Operation::Insertion => self.insertion,
            Operation::Deletion => self.deletion,
            Operation::Substitution => self.substitution,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn table_defaults_to_unit() {
        let table = CostTable::default();
        for op in [Operation::Insertion, Operation::Deletion, Operation::Substitution] {
            assert_eq!(table.cost(op), UnitCost.cost(op));
        }
    }

    #[test]
    fn closures_are_cost_functions() {
        let cheap_subs = |op: Operation| match op {
            Operation::Substitution => 0,
            _ => 2,
        };
        assert_eq!(cheap_subs.cost(Operation::Substitution), 0);
        assert_eq!(cheap_subs.cost(Operation::Deletion), 2);
        assert_eq!((&cheap_subs).cost(Operation::Insertion), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn table_from_config() {
        let table: CostTable = serde_json::from_str(r#"{"substitution": 3}"#).unwrap();
        assert_eq!(
            table,
            CostTable {
                insertion: 1,
                deletion: 1,
                substitution: 3,
            }
        );
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(serde_json::from_str::<CostTable>(&json).unwrap(), table);
    }
}
