//! Askama templates for the storefront pages.

use askama::Template;
use askama_web::WebTemplate;
use storefront_core::{
    faq::{Accordion, FAQ_ENTRIES},
    order::Confirmation,
    terms::TermsSection,
};

/// FAQ page with a single-expansion accordion.
#[derive(Template, WebTemplate)]
#[template(path = "faq.html")]
pub struct FaqTemplate {
    pub title: &'static str,
    pub items: Vec<FaqItem>,
}

pub struct FaqItem {
    pub index: usize,
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
    /// Link to the state reached by toggling this item.
    pub toggle_href: String,
}

impl FaqTemplate {
    pub fn new(accordion: Accordion) -> Self {
        let items = FAQ_ENTRIES
            .iter()
            .enumerate()
            .map(|(index, entry)| FaqItem {
                index,
                question: entry.question,
                answer: entry.answer,
                expanded: accordion.is_open(index),
                toggle_href: match accordion.toggled(index).open() {
                    Some(open) => format!("/faq?open={open}"),
                    None => "/faq".to_string(),
                },
            })
            .collect();

        Self {
            title: "Frequently Asked Questions",
            items,
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "terms.html")]
pub struct TermsTemplate {
    pub title: &'static str,
    pub sections: &'static [TermsSection],
}

/// Order placed successfully.
#[derive(Template, WebTemplate)]
#[template(path = "confirmation.html")]
pub struct ConfirmationTemplate {
    pub title: &'static str,
    pub order: Confirmation,
}

/// Shown when the confirmation page is reached without order details.
#[derive(Template, WebTemplate)]
#[template(path = "no_order.html")]
pub struct NoOrderTemplate {
    pub title: &'static str,
    pub message: String,
}
