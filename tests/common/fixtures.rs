use cartview::{CartItem, CartStore, EnquiryForm, EnquiryPayload};
use tempfile::TempDir;

/// Creates a CartStore backed by a scratch SQLite file.
/// Returns both the store and the temp directory (which must be kept alive).
pub fn create_test_store() -> (CartStore, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let store = CartStore::open(dir.path().join("cart.db"));
    (store, dir)
}

pub fn make_item(id: &str, title: &str, category: &str) -> CartItem {
    CartItem::new(id, title, category)
}

/// Three items in a fixed insertion order.
pub fn sample_cart() -> Vec<CartItem> {
    vec![
        make_item("sku-1", "Bench Lathe", "tools"),
        make_item("sku-2", "Oak Shelf", "furniture"),
        make_item("sku-3", "Desk Lamp", "lighting"),
    ]
}

/// A fully filled enquiry payload over the sample cart.
pub fn sample_payload() -> EnquiryPayload {
    let contact = EnquiryForm {
        name: "Ada".to_string(),
        mobile_no: "0123456789".to_string(),
        email: "ada@example.com".to_string(),
        address: "1 Analytical Lane".to_string(),
    };
    EnquiryPayload::new(contact, sample_cart())
}
