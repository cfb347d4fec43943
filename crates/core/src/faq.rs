#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Questions shown on the FAQ page, in display order.
pub const FAQ_ENTRIES: [FaqEntry; 9] = [
    FaqEntry {
        question: "What kind of products can I find here?",
        answer: "Every item in the marketplace is handmade by independent artisans: thangka paintings, pashmina, pottery, metalwork, felt goods and more.",
    },
    FaqEntry {
        question: "Who are the sellers?",
        answer: "Sellers are verified vendors who make their products themselves or run small family workshops. Each product page links to the vendor profile.",
    },
    FaqEntry {
        question: "How do I pay for my order?",
        answer: "Payments are processed through Khalti. You are redirected to Khalti to complete the payment and brought back to the store once it is confirmed.",
    },
    FaqEntry {
        question: "Is my payment information safe?",
        answer: "Card and wallet details are entered on Khalti and never reach our servers. We only store the transaction reference needed to match your order.",
    },
    FaqEntry {
        question: "How long does delivery take?",
        answer: "Orders inside the Kathmandu valley usually arrive within 3 to 5 working days. Deliveries outside the valley take 5 to 10 working days.",
    },
    FaqEntry {
        question: "Can I return a product?",
        answer: "Unused items in their original condition can be returned within 7 days of delivery. Custom made orders cannot be returned unless they arrive damaged.",
    },
    FaqEntry {
        question: "How do I track my order?",
        answer: "Open the My Orders page after signing in. Each order shows its current status and the courier reference once it has shipped.",
    },
    FaqEntry {
        question: "Can I request a custom piece?",
        answer: "Many vendors accept custom requests. Use the contact button on the vendor profile to discuss size, colours and delivery time before ordering.",
    },
    FaqEntry {
        question: "How do I become a vendor?",
        answer: "Apply through the Sell With Us page. We review every application and contact you to verify your workshop before your shop goes live.",
    },
];

/// Single-expansion accordion: at most one item is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Restores a previously rendered state. Indices past the end collapse everything.
    pub fn with_open(len: usize, open: Option<usize>) -> Self {
        Self {
            len,
            open: open.filter(|i| *i < len),
        }
    }

    /// Opens `index`, or closes it if it is already open. Returns `false` for
    /// indices outside the list, leaving the state untouched.
    pub fn toggle(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        true
    }

    /// State reached by toggling `index`, without mutating `self`.
    pub fn toggled(mut self, index: usize) -> Self {
        self.toggle(index);
        self
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open(&self) -> Option<usize> {
        self.open
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
