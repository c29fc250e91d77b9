//! Weighted edit distance between two strings.
//!
//! The fuzzy search never reports distances. Callers that need the cost of a
//! match recompute it here with the same [`CostFn`].

use super::cost::{CostFn, Operation};

/// Minimum total cost of the edits turning `query` into `word`.
///
/// An [`Operation::Insertion`] adds a letter of `word`, a
/// [`Operation::Deletion`] drops a letter of `query`, and a
/// [`Operation::Substitution`] replaces one letter with a different one.
/// Equal letters match for free.
///
/// ```
/// use lexdawg::fuzzy::{edit_distance, UnitCost};
///
/// assert_eq!(edit_distance("HELLO", "HALO", UnitCost), 2);
/// ```
pub fn edit_distance(query: &str, word: &str, cost: impl CostFn) -> u64 {
    let ins = u64::from(cost.cost(Operation::Insertion));
    let del = u64::from(cost.cost(Operation::Deletion));
    let sub = u64::from(cost.cost(Operation::Substitution));

    let word: Vec<char> = word.chars().collect();
    let mut row: Vec<u64> = (0..=word.len() as u64).map(|j| j * ins).collect();

    for qc in query.chars() {
        let mut diag = row[0];
        row[0] += del;
        for (j, &wc) in word.iter().enumerate() {
            let above = row[j + 1];
            let replace = if qc == wc { diag } else { diag + sub };
            row[j + 1] = (above + del).min(row[j] + ins).min(replace);
            diag = above;
        }
    }
    row[word.len()]
}

#[cfg(test)]
mod test {
    use super::super::cost::{CostTable, UnitCost};
    use super::*;

    #[test]
    fn unit_cost_levenshtein() {
        assert_eq!(edit_distance("", "", UnitCost), 0);
        assert_eq!(edit_distance("CAT", "CAT", UnitCost), 0);
        assert_eq!(edit_distance("CAT", "COT", UnitCost), 1);
        assert_eq!(edit_distance("CAT", "CATS", UnitCost), 1);
        assert_eq!(edit_distance("CAT", "AT", UnitCost), 1);
        assert_eq!(edit_distance("CAT", "DOG", UnitCost), 3);
        assert_eq!(edit_distance("", "DOG", UnitCost), 3);
        assert_eq!(edit_distance("KITTEN", "SITTING", UnitCost), 3);
    }

    #[test]
    fn weights_are_directional() {
        let table = CostTable {
            insertion: 5,
            deletion: 2,
            substitution: 3,
        };
        // CAT -> CATS inserts, CATS -> CAT deletes.
        assert_eq!(edit_distance("CAT", "CATS", table), 5);
        assert_eq!(edit_distance("CATS", "CAT", table), 2);
        // Deleting then inserting beats a substitution only when cheaper.
        assert_eq!(edit_distance("CAT", "COT", table), 3);
        let cheap_indels = CostTable {
            insertion: 1,
            deletion: 1,
            substitution: 10,
        };
        assert_eq!(edit_distance("CAT", "COT", cheap_indels), 2);
    }
}
