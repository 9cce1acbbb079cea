pub mod core;
pub mod models;

pub use crate::core::enquiry::{EnquiryClient, EnquiryResponse};
pub use crate::core::store::{CART_KEY, CartRepository, CartStore, MemoryCartStore};
pub use models::{CartItem, EnquiryForm, EnquiryPayload};

#[cfg(feature = "gui")]
pub mod gui;
