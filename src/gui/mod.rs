mod app;
mod message;
mod toast;
mod widgets;

pub use app::{CartApp, SEND_FAILURE_MESSAGE};
pub use message::{FormField, Message};
pub use toast::{Toast, ToastKind};

use std::path::PathBuf;

use crate::core::enquiry::EnquiryClient;
use crate::core::store::CartStore;

/// Open the cart window. Blocks until the window is closed.
pub fn run(store_path: PathBuf, endpoint: String) -> iced::Result {
    iced::application(
        move || {
            CartApp::new(
                CartStore::open(&store_path),
                EnquiryClient::new(endpoint.clone()),
            )
        },
        CartApp::update,
        CartApp::view,
    )
    .title("Cartview - Shopping Cart")
    .theme(CartApp::theme)
    .window_size(iced::Size::new(520.0, 680.0))
    .run()
}
