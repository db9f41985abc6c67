/// Detailed merchant category assigned to a transaction.
///
/// `All` only ever appears as a filter value; enrichment never assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    All,
    Transport,
    Food,
    Shopping,
    Travel,
    Utilities,
    ApplePay,
    PayPal,
    ForeignFee,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Transport => "Transport",
            Self::Food => "Food",
            Self::Shopping => "Shopping",
            Self::Travel => "Travel",
            Self::Utilities => "Utilities",
            Self::ApplePay => "ApplePay",
            Self::PayPal => "PayPal",
            Self::ForeignFee => "ForeignFee",
            Self::Other => "Other",
        }
    }

    /// Filter tabs in the order they are bound to the number keys 1-7.
    pub(crate) fn filters() -> &'static [Category] {
        &[
            Self::All,
            Self::Food,
            Self::Transport,
            Self::Shopping,
            Self::Travel,
            Self::Utilities,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Payment-provider bucket used by the summary view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Provider {
    ApplePay,
    PayPal,
    LinePay,
    Jkopay,
    ForeignFee,
    Other,
}

impl Provider {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::ApplePay => "Apple Pay",
            Self::PayPal => "PayPal",
            Self::LinePay => "LINE Pay",
            Self::Jkopay => "Jkopay",
            Self::ForeignFee => "Foreign Fee",
            Self::Other => "Other",
        }
    }

    pub(crate) fn all() -> &'static [Provider] {
        &[
            Self::ApplePay,
            Self::PayPal,
            Self::LinePay,
            Self::Jkopay,
            Self::ForeignFee,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
