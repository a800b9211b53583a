//! Composite: products and boxes priced through one interface.
//!
//! A [`PackageBox`] owns its children, so a box can never end up inside
//! itself and pricing always terminates.

use rust_decimal::Decimal;

/// Anything that can be put into an order.
pub trait OrderComponent {
    fn name(&self) -> &str;
    fn price(&self) -> Decimal;
}

// =============================================================================
// Leaf
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    price: Decimal,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl OrderComponent for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        self.price
    }
}

// =============================================================================
// Container
// =============================================================================

/// A box of products and other boxes, in insertion order.
pub struct PackageBox {
    name: String,
    children: Vec<Box<dyn OrderComponent>>,
}

impl PackageBox {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, component: impl OrderComponent + 'static) {
        self.children.push(Box::new(component));
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, component: impl OrderComponent + 'static) -> Self {
        self.add(component);
        self
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn OrderComponent>> {
        if index < self.children.len() {
            Some(self.children.remove(index))
        } else {
            None
        }
    }

    /// Removes the first child called `name`.
    pub fn remove_named(&mut self, name: &str) -> Option<Box<dyn OrderComponent>> {
        let index = self.children.iter().position(|child| child.name() == name)?;
        Some(self.children.remove(index))
    }

    pub fn children(&self) -> impl Iterator<Item = &dyn OrderComponent> {
        self.children.iter().map(|child| &**child)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl OrderComponent for PackageBox {
    fn name(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Decimal {
        let total: Decimal = self.children.iter().map(|child| child.price()).sum();
        tracing::debug!(name = %self.name, children = self.children.len(), %total, "box priced");
        total
    }
}

// =============================================================================
// Order
// =============================================================================

#[derive(Default)]
pub struct Order {
    components: Vec<Box<dyn OrderComponent>>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_component(&mut self, component: impl OrderComponent + 'static) {
        self.components.push(Box::new(component));
    }

    pub fn components(&self) -> impl Iterator<Item = &dyn OrderComponent> {
        self.components.iter().map(|component| &**component)
    }

    pub fn calculate_total(&self) -> Decimal {
        self.components.iter().map(|component| component.price()).sum()
    }
}

/// Laptop, peripherals and a cable packed the way the demo ships them.
///
/// Small box {Mouse, Keyboard} goes into a medium box with Headphones, which
/// goes into a large box with the Laptop. The USB cable travels loose.
pub fn sample_order() -> Order {
    let small_box = PackageBox::new("Small Box")
        .with(Product::new("Mouse", Decimal::from(25)))
        .with(Product::new("Keyboard", Decimal::from(75)));

    let medium_box = PackageBox::new("Medium Box")
        .with(small_box)
        .with(Product::new("Headphones", Decimal::from(100)));

    let large_box = PackageBox::new("Large Box")
        .with(medium_box)
        .with(Product::new("Laptop", Decimal::from(1500)));

    let mut order = Order::new();
    order.add_component(large_box);
    order.add_component(Product::new("USB Cable", Decimal::from(10)));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn money(amount: &str) -> Decimal {
        Decimal::from_str(amount).unwrap()
    }

    #[test]
    fn test_leaf_price() {
        let mouse = Product::new("Mouse", Decimal::from(25));
        assert_eq!(mouse.price(), money("25"));
        assert_eq!(mouse.name(), "Mouse");
    }

    #[test]
    fn test_empty_box_is_free() {
        let empty = PackageBox::new("Empty");
        assert!(empty.is_empty());
        assert_eq!(empty.price(), Decimal::ZERO);
    }

    #[test]
    fn test_sample_order_total() {
        let order = sample_order();
        assert_eq!(order.calculate_total(), money("1710"));
        assert_eq!(order.components().count(), 2);
    }

    #[test]
    fn test_nested_box_sums_children() {
        let small = PackageBox::new("Small")
            .with(Product::new("Mouse", Decimal::from(25)))
            .with(Product::new("Keyboard", Decimal::from(75)));
        assert_eq!(small.price(), money("100"));

        let medium = PackageBox::new("Medium")
            .with(small)
            .with(Product::new("Headphones", Decimal::from(100)));
        assert_eq!(medium.price(), money("200"));
        let child_sum: Decimal = medium.children().map(|c| c.price()).sum();
        assert_eq!(medium.price(), child_sum);
    }

    #[test]
    fn test_remove_by_index() {
        let mut parcel = PackageBox::new("Parcel");
        parcel.add(Product::new("Mouse", Decimal::from(25)));
        parcel.add(Product::new("Keyboard", Decimal::from(75)));

        let removed = parcel.remove(0).unwrap();
        assert_eq!(removed.name(), "Mouse");
        assert_eq!(parcel.len(), 1);
        assert_eq!(parcel.price(), money("75"));
        assert!(parcel.remove(5).is_none());
    }

    #[test]
    fn test_remove_named_takes_first_match() {
        let mut parcel = PackageBox::new("Parcel")
            .with(Product::new("Cable", money("10")))
            .with(Product::new("Cable", money("12")));

        let removed = parcel.remove_named("Cable").unwrap();
        assert_eq!(removed.price(), money("10"));
        assert_eq!(parcel.price(), money("12"));
        assert!(parcel.remove_named("Laptop").is_none());
    }

    #[test]
    fn test_fractional_prices_add_exactly() {
        let parcel = PackageBox::new("Parcel")
            .with(Product::new("Sticker", money("0.10")))
            .with(Product::new("Pen", money("0.20")));
        assert_eq!(parcel.price(), money("0.3"));
        assert_eq!(parcel.price().to_string(), "0.30");

        let mut order = Order::new();
        order.add_component(parcel);
        order.add_component(Product::new("Clip", money("0.05")));
        assert_eq!(order.calculate_total(), money("0.35"));
    }

    #[test]
    fn test_total_is_idempotent() {
        let order = sample_order();
        let first = order.calculate_total();
        assert_eq!(order.calculate_total(), first);
        assert_eq!(order.calculate_total(), first);
    }

    // Whole cents, as a shop would price them.
    fn price() -> impl Strategy<Value = Decimal> {
        (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
    }

    proptest! {
        #[test]
        fn prop_box_price_is_sum_of_leaves(prices in prop::collection::vec(price(), 0..20)) {
            let mut parcel = PackageBox::new("Parcel");
            for (i, p) in prices.iter().enumerate() {
                parcel.add(Product::new(format!("item-{}", i), *p));
            }
            prop_assert_eq!(parcel.price(), prices.iter().sum::<Decimal>());
        }

        #[test]
        fn prop_nesting_preserves_total(
            inner in prop::collection::vec(price(), 0..10),
            outer in prop::collection::vec(price(), 0..10),
        ) {
            let mut inner_box = PackageBox::new("Inner");
            for p in &inner {
                inner_box.add(Product::new("inner", *p));
            }
            let inner_total = inner_box.price();

            let mut outer_box = PackageBox::new("Outer");
            outer_box.add(inner_box);
            for p in &outer {
                outer_box.add(Product::new("outer", *p));
            }

            let expected = inner_total + outer.iter().sum::<Decimal>();
            prop_assert_eq!(outer_box.price(), expected);
        }
    }
}
