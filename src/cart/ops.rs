//! Pure cart operations.
//!
//! Every function here is synchronous and touches nothing but the item list
//! it is handed. Lookups that miss are silent no-ops rather than errors;
//! a malformed product id simply behaves as "not found".

use super::models::CartItem;
use crate::catalog::models::Product;

/// Adds one unit of `product` to the cart.
///
/// If a line for the same product id already exists its quantity is
/// incremented; otherwise a new line with quantity 1 is appended. The cart
/// never carries two lines for the same product id.
pub fn add_to_cart(items: &mut Vec<CartItem>, product: &Product) {
    if let Some(existing) = items.iter_mut().find(|i| i.product.id == product.id) {
        existing.quantity += 1;
    } else {
        items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
    }
}

/// Removes the line matching `product_id`, if any.
pub fn remove_from_cart(items: &mut Vec<CartItem>, product_id: &str) {
    items.retain(|i| i.product.id != product_id);
}

/// Adjusts the quantity of the line matching `product_id` by `delta`.
///
/// The resulting quantity is clamped to a minimum of 1; dropping a line
/// entirely requires an explicit [`remove_from_cart`]. Unknown ids are
/// ignored.
pub fn update_quantity(items: &mut [CartItem], product_id: &str, delta: i64) {
    if let Some(item) = items.iter_mut().find(|i| i.product.id == product_id) {
        let next = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = next.min(i64::from(u32::MAX)) as u32;
    }
}

/// Total price across all lines; 0 for an empty cart.
pub fn cart_total(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Total unit count across all lines; 0 for an empty cart. Drives the cart
/// badge in the widget.
pub fn cart_count(items: &[CartItem]) -> u64 {
    items.iter().map(|i| u64::from(i.quantity)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Category;

    fn product(id: &str, price: u32) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            category: Category::Electronics,
            price,
            description: String::new(),
            rating: 4.0,
            stock: 10,
            image: String::new(),
        }
    }

    #[test]
    fn repeated_add_aggregates_into_one_line() {
        let mut items = Vec::new();
        let a = product("a", 100);

        add_to_cart(&mut items, &a);
        add_to_cart(&mut items, &a);

        assert_eq!(items.len(), 1, "same product id must never produce two lines");
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let mut items = Vec::new();
        let a = product("a", 100);
        add_to_cart(&mut items, &a);
        update_quantity(&mut items, "a", 2); // quantity 3

        update_quantity(&mut items, "a", -100);

        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn update_on_missing_id_is_a_noop() {
        let mut items = Vec::new();
        add_to_cart(&mut items, &product("a", 100));

        update_quantity(&mut items, "ghost", 5);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn remove_on_missing_id_leaves_cart_unchanged() {
        let mut items = Vec::new();
        add_to_cart(&mut items, &product("a", 100));
        let before = items.clone();

        remove_from_cart(&mut items, "ghost");

        assert_eq!(items, before);
    }

    #[test]
    fn remove_deletes_the_matching_line() {
        let mut items = Vec::new();
        add_to_cart(&mut items, &product("a", 100));
        add_to_cart(&mut items, &product("b", 200));

        remove_from_cart(&mut items, "a");

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.id, "b");
    }

    #[test]
    fn totals_follow_price_times_quantity() {
        let mut items = Vec::new();
        let a = product("a", 100);
        let b = product("b", 200);

        add_to_cart(&mut items, &a);
        add_to_cart(&mut items, &a);
        add_to_cart(&mut items, &b);

        assert_eq!(cart_total(&items), 400);
        assert_eq!(cart_count(&items), 3);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let items: Vec<CartItem> = Vec::new();
        assert_eq!(cart_total(&items), 0);
        assert_eq!(cart_count(&items), 0);
    }
}
