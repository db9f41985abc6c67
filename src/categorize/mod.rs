mod enrich;

use regex::Regex;
use std::sync::LazyLock;

use crate::models::{Category, Provider, FOREIGN_FEE_PREFIX};
use crate::normalize::{APPLE_PAY_PREFIX, JKOPAY_PREFIX, LINE_PAY_PREFIX};

pub(crate) use enrich::enrich;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchKind {
    Prefix,
    Contains,
}

struct Rule {
    kind: MatchKind,
    tag: &'static str,
    category: Category,
}

impl Rule {
    fn matches(&self, desc_upper: &str) -> bool {
        match self.kind {
            MatchKind::Prefix => desc_upper.starts_with(self.tag),
            MatchKind::Contains => desc_upper.contains(self.tag),
        }
    }
}

macro_rules! rules {
    ($kind:ident => $category:ident: [$($tag:literal),* $(,)?]) => {
        [$(Rule { kind: MatchKind::$kind, tag: $tag, category: Category::$category }),*]
    };
}

const TRANSPORT: [Rule; 13] = rules!(Prefix => Transport: [
    "LIME", "UBER", "UBR*", "FREENOW", "ZITY", "FLIXBUS", "FNM*", "FNM ", "TRENITALIA",
    "TRENORD", "TRAIN", "SCOOTER", "RAILWAY",
]);

const FOOD: [Rule; 34] = rules!(Contains => Food: [
    "CIBO", "PANIFICIO", "DELIVEROO", "CAFE", "CAFFE", "MACELLERIA",
    "ESSELUNGA", "MERCATO", "MERCADO", "RISTORANTE", "RESTAURANT", "OSTERIA", "GELATERIA",
    "GELATO", "GELATI", "PIZZA", "PIZZERIA", "BURGER", "CONAD", "CARREFOUR", "EATALY", "BAR",
    "TRATTORIA", "DM-", "GLOVO", "KFC", "MCDONALDS", "NESPRESSO", "PASTICCERIA",
    "PRETAMANGER", "FIVEGUYS", "AUTOGRILL", "STARBUCKS", "DRINK",
]);

const SHOPPING: [Rule; 7] = rules!(Contains => Shopping: [
    "AMAZON*", "WWW.AMAZON", "DECATHLON", "BRICOCENTER", "TIGROS", "TEMU.COM", "UNIQLO",
]);

const TRAVEL: [Rule; 13] = rules!(Contains => Travel: [
    "AIRBNB", "ALBERGO", "AIRPORT", "EASYJET", "TRIP.COM", "EVAAIR", "RYANAIR", "FLYSCOOT",
    "GOTOGATE", "BOOKINGCOM", "HOTEL", "KKDAY", "KIWICOM",
]);

const UTILITIES: [Rule; 10] = rules!(Contains => Utilities: [
    "APPLE.COM", "VODAFONE", "AWS", "AMAZONWEBSERVICES", "1PASSWORD", "POLITECNICO",
    "POSTEITALIA", "OPENAI", "POLISPORTIVA", "PORKBUN",
]);

/// Rule groups in precedence order. The first matching rule wins, so a
/// description hitting both a food and a shopping tag is food.
const RULE_GROUPS: [&[Rule]; 5] = [&TRANSPORT, &FOOD, &SHOPPING, &TRAVEL, &UTILITIES];

/// Provider markers, tested in order against the normalized description.
const PROVIDER_PREFIXES: [(&str, Provider); 6] = [
    (APPLE_PAY_PREFIX, Provider::ApplePay),
    ("PAYPAL*", Provider::PayPal),
    ("PP*", Provider::PayPal),
    (LINE_PAY_PREFIX, Provider::LinePay),
    (JKOPAY_PREFIX, Provider::Jkopay),
    (FOREIGN_FEE_PREFIX, Provider::ForeignFee),
];

#[allow(clippy::expect_used)]
static APPLE_PAY_CARD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^APE([0-9]{4})").expect("Apple Pay card pattern is valid"));

/// Detect the merchant category of a clean description.
pub(crate) fn detect_category(clean_desc: &str) -> Category {
    let desc = clean_desc.to_uppercase();

    RULE_GROUPS
        .iter()
        .flat_map(|group| group.iter())
        .find(|rule| rule.matches(&desc))
        .map_or(Category::Other, |rule| rule.category)
}

/// Detect the payment provider from a normalized (not cleaned) description.
pub(crate) fn detect_provider(normalized_desc: &str) -> Provider {
    PROVIDER_PREFIXES
        .iter()
        .find(|(prefix, _)| normalized_desc.starts_with(prefix))
        .map_or(Provider::Other, |(_, provider)| *provider)
}

/// Card last-4 digits embedded in an Apple Pay description, e.g. "APE5678STORE".
pub(crate) fn apple_pay_card_last4(normalized_desc: &str) -> Option<String> {
    APPLE_PAY_CARD
        .captures(normalized_desc)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
