use serde::{Deserialize, Serialize};

/// Which extreme a heap keeps at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Min,
    Max,
}

impl Polarity {
    pub fn reverse(self) -> Self {
        match self {
            Polarity::Min => Polarity::Max,
            Polarity::Max => Polarity::Min,
        }
    }
    /// Whether `a` belongs strictly above `b`.
    #[inline(always)]
    pub fn prior<K: Ord>(self, a: &K, b: &K) -> bool {
        match self {
            Polarity::Min => a < b,
            Polarity::Max => a > b,
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub fn reverse(self) -> Self {
        match self {
            Order::Asc => Order::Desc,
            Order::Desc => Order::Asc,
        }
    }
    /// Whether `a` must be placed strictly before `b`.
    #[inline(always)]
    pub fn before<K: Ord>(self, a: &K, b: &K) -> bool {
        match self {
            Order::Asc => a < b,
            Order::Desc => a > b,
        }
    }
    /// The heap polarity whose pops come out in this order.
    pub fn polarity(self) -> Polarity {
        match self {
            Order::Asc => Polarity::Min,
            Order::Desc => Polarity::Max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    /// Quicksort with an explicit range stack.
    #[default]
    Quick,
    Heap,
    QuickRecursive,
    Shell,
    Bubble,
}

impl SortMethod {
    pub const ALL: [SortMethod; 5] = [
        SortMethod::Quick,
        SortMethod::Heap,
        SortMethod::QuickRecursive,
        SortMethod::Shell,
        SortMethod::Bubble,
    ];

    pub fn is_stable(self) -> bool {
        matches!(self, SortMethod::Bubble)
    }
}
