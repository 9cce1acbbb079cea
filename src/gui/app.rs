use iced::widget::{
    button, column, container, row, scrollable, space, stack, text, text_input,
};
use iced::{Alignment, Element, Length, Task, Theme};

use crate::core::enquiry::{EnquiryClient, EnquiryResponse};
use crate::core::store::CartRepository;
use crate::models::{CartItem, EnquiryForm, EnquiryPayload};

use super::message::{FormField, Message};
use super::toast::{self, TOAST_TTL, Toast, ToastKind};
use super::widgets::modal;

/// Shown when the request never produced a usable JSON reply.
pub const SEND_FAILURE_MESSAGE: &str = "Failed to send enquiry. Please try again.";

/// The cart view: persisted item list, removal, and the enquiry popup.
///
/// Storage goes through the injected repository so tests can substitute an
/// in-memory one. `generation` is bumped on every accepted submission and on
/// popup close; a finished request whose generation no longer matches is
/// discarded, which both enforces a single in-flight submission and drops
/// late responses the user is no longer interested in.
pub struct CartApp<R: CartRepository> {
    repo: R,
    client: EnquiryClient,
    items: Vec<CartItem>,
    enquiry_open: bool,
    form: EnquiryForm,
    sending: bool,
    generation: u64,
    toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl<R: CartRepository> CartApp<R> {
    pub fn new(repo: R, client: EnquiryClient) -> (Self, Task<Message>) {
        let load = {
            let repo = repo.clone();
            Task::perform(async move { repo.load().await }, |result| match result {
                Ok(items) => Message::CartLoaded(items),
                Err(error) => {
                    eprintln!("Warning: failed to load cart, starting empty: {error:#}");
                    Message::CartLoaded(Vec::new())
                }
            })
        };

        (
            Self {
                repo,
                client,
                items: Vec::new(),
                enquiry_open: false,
                form: EnquiryForm::default(),
                sending: false,
                generation: 0,
                toasts: Vec::new(),
                next_toast_id: 0,
            },
            load,
        )
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// The payload a submission issued right now would carry.
    fn submission_payload(&self) -> EnquiryPayload {
        EnquiryPayload::new(self.form.clone(), self.items.clone())
    }

    fn push_toast(&mut self, kind: ToastKind, message: String) -> Task<Message> {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(Toast { id, kind, message });
        Task::perform(
            async { tokio::time::sleep(TOAST_TTL).await },
            move |_| Message::ToastDismissed(id),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CartLoaded(items) => {
                self.items = items;
                Task::none()
            }
            Message::RemoveItem(id) => {
                self.items.retain(|item| item.id != id);
                let repo = self.repo.clone();
                let items = self.items.clone();
                Task::perform(async move { repo.save(items).await }, |result| {
                    Message::CartSaved(result.map_err(|error| format!("{error:#}")))
                })
            }
            Message::CartSaved(Ok(())) => Task::none(),
            Message::CartSaved(Err(error)) => {
                eprintln!("Warning: failed to persist cart: {error}");
                Task::none()
            }
            Message::OpenEnquiry => {
                self.enquiry_open = true;
                Task::none()
            }
            Message::CloseEnquiry => {
                self.enquiry_open = false;
                if self.sending {
                    // Invalidate the in-flight request; its response will
                    // arrive with a stale generation and be dropped.
                    self.generation += 1;
                    self.sending = false;
                }
                Task::none()
            }
            Message::FormChanged(field, value) => {
                match field {
                    FormField::Name => self.form.name = value,
                    FormField::MobileNo => self.form.mobile_no = value,
                    FormField::Email => self.form.email = value,
                    FormField::Address => self.form.address = value,
                }
                Task::none()
            }
            Message::SubmitEnquiry => {
                if self.sending || !self.form.is_complete() {
                    return Task::none();
                }
                self.sending = true;
                self.generation += 1;
                let generation = self.generation;
                let payload = self.submission_payload();
                let client = self.client.clone();
                Task::perform(
                    async move { client.send(&payload).await.map_err(|error| format!("{error:#}")) },
                    move |result| Message::EnquiryFinished { generation, result },
                )
            }
            Message::EnquiryFinished { generation, result } => {
                if generation != self.generation {
                    return Task::none();
                }
                self.sending = false;
                match result {
                    Ok(EnquiryResponse::Accepted { message }) => {
                        self.enquiry_open = false;
                        self.push_toast(ToastKind::Success, message)
                    }
                    Ok(EnquiryResponse::Rejected { message }) => {
                        self.push_toast(ToastKind::Error, message)
                    }
                    Err(error) => {
                        eprintln!("Error sending enquiry: {error}");
                        self.push_toast(ToastKind::Error, SEND_FAILURE_MESSAGE.to_string())
                    }
                }
            }
            Message::ToastDismissed(id) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let page = self.cart_page();

        let page = if self.enquiry_open {
            modal(page, self.enquiry_popup(), Message::CloseEnquiry)
        } else {
            page
        };

        if self.toasts.is_empty() {
            page
        } else {
            stack![page, toast::stacked(&self.toasts, Message::ToastDismissed)].into()
        }
    }

    fn cart_page(&self) -> Element<'_, Message> {
        let heading = text("Shopping Cart").size(28);

        let content: Element<'_, Message> = if self.items.is_empty() {
            text("Your cart is empty.").into()
        } else {
            let rows = self.items.iter().map(|item| {
                row![
                    text(format!("{} ({})", item.title, item.category)),
                    space::horizontal(),
                    button(text("Remove"))
                        .style(button::danger)
                        .on_press(Message::RemoveItem(item.id.clone())),
                ]
                .spacing(12)
                .align_y(Alignment::Center)
                .into()
            });

            column![
                scrollable(column(rows).spacing(8)).height(Length::Fill),
                button(text("Enquire")).on_press(Message::OpenEnquiry),
            ]
            .spacing(16)
            .into()
        };

        container(column![heading, content].spacing(20).padding(20))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn enquiry_popup(&self) -> Element<'_, Message> {
        let field = |label: &'static str, placeholder: &'static str, value: &str, kind: FormField| {
            column![
                text(label).size(14),
                text_input(placeholder, value)
                    .on_input(move |value| Message::FormChanged(kind, value)),
            ]
            .spacing(4)
        };

        let send_label = if self.sending { "Sending..." } else { "Send" };
        let can_send = !self.sending && self.form.is_complete();

        container(
            column![
                row![
                    text("Enquire About Cart Items").size(22),
                    space::horizontal(),
                    button(text("X"))
                        .style(button::danger)
                        .on_press(Message::CloseEnquiry),
                ]
                .align_y(Alignment::Center),
                field("Name", "Enter Name", &self.form.name, FormField::Name),
                field(
                    "Mobile No.",
                    "Enter Mobile No.",
                    &self.form.mobile_no,
                    FormField::MobileNo
                ),
                field("Email", "Enter Email", &self.form.email, FormField::Email),
                field(
                    "Address",
                    "Enter Address",
                    &self.form.address,
                    FormField::Address
                ),
                button(text(send_label))
                    .on_press_maybe(can_send.then_some(Message::SubmitEnquiry)),
            ]
            .spacing(12),
        )
        .width(Length::Fixed(360.0))
        .padding(20)
        .style(container::bordered_box)
        .into()
    }
}
