pub mod faq;
pub mod order;
pub mod terms;

/// Formats an amount in Nepalese rupees with two decimals, e.g. `Rs. 4500.00`.
pub fn format_rupees(amount: f64) -> String {
    format!("Rs. {:.2}", amount)
}
