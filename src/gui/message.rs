use crate::core::enquiry::EnquiryResponse;
use crate::models::CartItem;

/// The enquiry form field an input event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    MobileNo,
    Email,
    Address,
}

#[derive(Debug, Clone)]
pub enum Message {
    CartLoaded(Vec<CartItem>),
    CartSaved(Result<(), String>),
    RemoveItem(String),
    OpenEnquiry,
    CloseEnquiry,
    FormChanged(FormField, String),
    SubmitEnquiry,
    EnquiryFinished {
        generation: u64,
        result: Result<EnquiryResponse, String>,
    },
    ToastDismissed(u64),
}
