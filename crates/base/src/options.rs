use crate::order::{Order, Polarity, SortMethod};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct HeapOptions {
    #[serde(default = "HeapOptions::default_capacity")]
    #[validate(range(min = 1, max = 2_147_483_648u32))]
    pub capacity: u32,
    #[serde(default)]
    pub polarity: Polarity,
}

impl HeapOptions {
    pub fn default_capacity() -> u32 {
        32
    }
}

impl Default for HeapOptions {
    fn default() -> Self {
        Self {
            capacity: Self::default_capacity(),
            polarity: Polarity::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SortOptions {
    #[serde(default)]
    pub method: SortMethod,
    #[serde(default)]
    pub order: Order,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SelectOptions {
    #[validate(range(min = 1, max = 2_147_483_648u32))]
    pub k: u32,
    #[serde(default = "SelectOptions::default_want")]
    pub want: Polarity,
}

impl SelectOptions {
    pub fn default_want() -> Polarity {
        Polarity::Max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SampleOptions {
    #[serde(default = "SampleOptions::default_amount")]
    #[validate(range(min = 1, max = 2_147_483_648u32))]
    pub amount: u32,
    #[serde(default)]
    pub keep_order: bool,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SampleOptions {
    pub fn default_amount() -> u32 {
        1
    }
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            amount: Self::default_amount(),
            keep_order: false,
            seed: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_from_empty_toml() {
        let heap: HeapOptions = toml::from_str("").unwrap();
        assert_eq!(heap.capacity, 32);
        assert_eq!(heap.polarity, Polarity::Min);
        assert!(heap.validate().is_ok());
        let sort: SortOptions = toml::from_str("").unwrap();
        assert_eq!(sort.method, SortMethod::Quick);
        assert_eq!(sort.order, Order::Asc);
        let sample: SampleOptions = toml::from_str("").unwrap();
        assert_eq!(sample.amount, 1);
        assert!(!sample.keep_order);
        assert_eq!(sample.seed, None);
    }

    #[test]
    fn parse_and_validate() {
        let sort: SortOptions = toml::from_str(
            r#"
            method = "quick_recursive"
            order = "desc"
            "#,
        )
        .unwrap();
        assert_eq!(sort.method, SortMethod::QuickRecursive);
        assert_eq!(sort.order, Order::Desc);
        let select: SelectOptions = toml::from_str("k = 3").unwrap();
        assert_eq!(select.want, Polarity::Max);
        assert!(select.validate().is_ok());
        let select: SelectOptions = toml::from_str("k = 0\nwant = \"min\"").unwrap();
        assert!(select.validate().is_err());
        let heap: HeapOptions = toml::from_str("capacity = 0").unwrap();
        assert!(heap.validate().is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<SortOptions>("stable = true").is_err());
        assert!(toml::from_str::<SampleOptions>("amount = 2\nweights = []").is_err());
    }
}
