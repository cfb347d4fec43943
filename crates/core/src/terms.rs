#[derive(Debug, Clone, Copy)]
pub struct TermsSection {
    pub heading: &'static str,
    pub items: &'static [&'static str],
}

pub const TERMS_SECTIONS: &[TermsSection] = &[
    TermsSection {
        heading: "1. Acceptance of terms",
        items: &[
            "By using the marketplace you agree to these terms and to our privacy policy.",
            "We may update these terms. Continued use after an update means you accept the new version.",
        ],
    },
    TermsSection {
        heading: "2. Accounts",
        items: &[
            "You are responsible for keeping your login details confidential.",
            "Accounts used for fraud or abuse may be suspended without notice.",
        ],
    },
    TermsSection {
        heading: "3. Orders and payments",
        items: &[
            "All prices are listed in Nepalese rupees and include applicable taxes.",
            "Payments are processed by Khalti. An order is confirmed only after the payment succeeds.",
            "We may cancel an order if a product is out of stock or the price was listed in error, with a full refund.",
        ],
    },
    TermsSection {
        heading: "4. Vendors",
        items: &[
            "Vendors must only list products they make themselves or in their own workshop.",
            "Vendors are responsible for accurate descriptions, photos and dispatch times.",
        ],
    },
    TermsSection {
        heading: "5. Shipping and returns",
        items: &[
            "Delivery times shown at checkout are estimates, not guarantees.",
            "Unused items may be returned within 7 days of delivery. Custom orders are final unless damaged on arrival.",
        ],
    },
    TermsSection {
        heading: "6. Liability",
        items: &[
            "The marketplace connects buyers and vendors and is not the manufacturer of listed products.",
            "Our liability for any order is limited to the amount paid for that order.",
        ],
    },
];
