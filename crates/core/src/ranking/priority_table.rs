use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::UNRANKED_PRIORITY;

/// Display priority per blockchain. Higher sorts first.
///
/// Lookup is total: any blockchain missing from the table gets
/// `unranked_priority`. Names are matched exactly (case-sensitive).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PriorityTable {
    priorities: BTreeMap<String, i32>,
    unranked_priority: i32,
}

impl PriorityTable {
    /// An empty table: every blockchain is unranked.
    pub fn empty() -> Self {
        Self {
            priorities: BTreeMap::new(),
            unranked_priority: UNRANKED_PRIORITY,
        }
    }

    pub fn from_priorities<I, S>(priorities: I, unranked_priority: i32) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: Into<String>,
    {
        Self {
            priorities: priorities
                .into_iter()
                .map(|(chain, rank)| (chain.into(), rank))
                .collect(),
            unranked_priority,
        }
    }

    pub fn with_priority(mut self, blockchain: &str, priority: i32) -> Self {
        self.priorities.insert(blockchain.to_string(), priority);
        self
    }

    pub fn priority(&self, blockchain: &str) -> i32 {
        self.priorities
            .get(blockchain)
            .copied()
            .unwrap_or(self.unranked_priority)
    }

    /// Whether a priority value marks a blockchain that should be shown.
    pub fn is_ranked(&self, priority: i32) -> bool {
        priority > self.unranked_priority
    }

    pub fn unranked_priority(&self) -> i32 {
        self.unranked_priority
    }

    pub fn priorities(&self) -> &BTreeMap<String, i32> {
        &self.priorities
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::from_priorities(
            [
                ("Osmosis", 100),
                ("Ethereum", 50),
                ("Arbitrum", 30),
                ("Zilliqa", 20),
                ("Neo", 20),
            ],
            UNRANKED_PRIORITY,
        )
    }
}
