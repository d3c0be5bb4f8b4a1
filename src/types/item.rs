use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PricedItem {
    #[serde(flatten)]
    pub item: Item,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

impl Item {
    /// Adds `price_with_tax` only when a tax is present, zero included.
    pub fn with_tax(self) -> PricedItem {
        let price_with_tax = self.tax.map(|tax| self.price + tax);
        PricedItem { item: self, price_with_tax }
    }
}

#[derive(Serialize, Debug)]
pub struct ItemWithId {
    pub item_id: i64,
    #[serde(flatten)]
    pub item: Item,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeItem {
    pub id: i64,
    pub name: &'static str,
}

pub static FAKE_ITEMS: [FakeItem; 7] = [
    FakeItem { id: 1, name: "iPhone" },
    FakeItem { id: 2, name: "iPad" },
    FakeItem { id: 3, name: "iToilet" },
    FakeItem { id: 4, name: "iPod" },
    FakeItem { id: 5, name: "iJoke" },
    FakeItem { id: 6, name: "iLamp" },
    FakeItem { id: 7, name: "iOven" },
];

// Slice bound with negative indices counted from the end, clamped to `len`.
fn slice_bound(index: i64, len: usize) -> usize {
    let len = len as i64;
    let resolved = if index < 0 { len + index } else { index };
    resolved.clamp(0, len) as usize
}

/// `FAKE_ITEMS[skip:skip + limit]` with slice semantics: negative bounds
/// count from the end, out-of-range bounds are clamped, and an inverted
/// range is empty.
pub fn page(skip: i64, limit: i64) -> &'static [FakeItem] {
    let len = FAKE_ITEMS.len();
    let start = slice_bound(skip, len);
    let end = slice_bound(skip.saturating_add(limit), len);
    if end <= start {
        return &[];
    }
    &FAKE_ITEMS[start..end]
}

pub fn find_fake_item(id: i64) -> Option<FakeItem> {
    FAKE_ITEMS.iter().copied().find(|i| i.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(tax: Option<f64>) -> Item {
        Item { name: "Foo".into(), description: None, price: 10.0, tax }
    }

    #[test]
    fn tax_is_added_when_present() {
        assert_eq!(item(Some(1.0)).with_tax().price_with_tax, Some(11.0));
        assert_eq!(item(Some(0.0)).with_tax().price_with_tax, Some(10.0));
    }

    #[test]
    fn missing_tax_leaves_no_key() {
        let json = serde_json::to_value(item(None).with_tax()).unwrap();
        assert!(json.get("price_with_tax").is_none());
        assert!(json["tax"].is_null());
        assert!(json["description"].is_null());
        assert_eq!(json["price"], 10.0);
    }

    fn ids(items: &[FakeItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn page_is_clamped() {
        assert_eq!(ids(page(5, 10)), vec![6, 7]);
        assert!(page(100, 3).is_empty());
        assert_eq!(page(0, i64::MAX).len(), 7);
        assert!(page(2, 0).is_empty());
    }

    #[test]
    fn page_counts_negative_bounds_from_the_end() {
        assert_eq!(ids(page(0, -1)), vec![1, 2, 3, 4, 5, 6]);
        assert!(page(-2, 7).is_empty());
        assert_eq!(ids(page(-3, 5)), vec![5, 6, 7]);
        assert_eq!(ids(page(-100, 102)), vec![1, 2]);
        assert!(page(4, -5).is_empty());
        assert!(page(i64::MIN, i64::MIN).is_empty());
    }

    #[test]
    fn fake_item_lookup() {
        assert_eq!(find_fake_item(3).map(|i| i.name), Some("iToilet"));
        assert_eq!(find_fake_item(42), None);
    }
}
