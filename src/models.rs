use serde::{Deserialize, Serialize};

/// A single product in the persisted cart.
///
/// Only `id`, `title` and `category` are interpreted; any other fields the
/// upstream writer stored alongside them are carried through `extra` so they
/// survive a load/save cycle and end up in the enquiry payload untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CartItem {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Contact details collected by the enquiry popup.
///
/// All four fields are required before a submission is attempted. The state
/// is deliberately not cleared after a successful send; only the popup
/// closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    #[serde(rename = "mobileNo")]
    pub mobile_no: String,
    pub email: String,
    pub address: String,
}

impl EnquiryForm {
    /// All required fields are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.mobile_no.is_empty()
            && !self.email.is_empty()
            && !self.address.is_empty()
    }
}

/// Body of the enquiry POST: the contact fields at the top level plus the
/// cart snapshot taken at send time under `product`.
#[derive(Debug, Clone, Serialize)]
pub struct EnquiryPayload {
    #[serde(flatten)]
    pub contact: EnquiryForm,
    pub product: Vec<CartItem>,
}

impl EnquiryPayload {
    pub fn new(contact: EnquiryForm, product: Vec<CartItem>) -> Self {
        Self { contact, product }
    }
}
