mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from cartview for tests
pub use cartview::{
    CART_KEY, CartItem, CartRepository, CartStore, EnquiryClient, EnquiryForm, EnquiryPayload,
    EnquiryResponse, MemoryCartStore,
};
