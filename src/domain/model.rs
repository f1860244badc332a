use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One row of the breeds resource: a breed and what each service costs for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedPriceEntry {
    pub breed: String,
    /// Service key to price. A missing key (or a `null` value) means the
    /// service is not offered for this breed.
    #[serde(default)]
    pub prices: HashMap<String, Option<f64>>,
}

impl BreedPriceEntry {
    pub fn price_for(&self, service_key: &str) -> Option<f64> {
        self.prices
            .get(service_key)
            .copied()
            .flatten()
            .filter(|p| is_valid_price(*p))
    }
}

/// One row of the add-ons resource. Only the first price tier is used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddonEntry {
    pub addon: String,
    #[serde(default)]
    pub prices: Vec<f64>,
}

impl AddonEntry {
    pub fn first_price(&self) -> Option<f64> {
        self.prices.first().copied().filter(|p| is_valid_price(*p))
    }
}

// negative or non-finite prices are treated as no price at all
fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// Both reference tables, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub breeds: Vec<BreedPriceEntry>,
    pub addons: Vec<AddonEntry>,
}

impl Catalog {
    pub fn new(breeds: Vec<BreedPriceEntry>, addons: Vec<AddonEntry>) -> Self {
        Self { breeds, addons }
    }

    pub fn breed(&self, name: &str) -> Option<&BreedPriceEntry> {
        self.breeds.iter().find(|b| b.breed == name)
    }

    pub fn addon(&self, name: &str) -> Option<&AddonEntry> {
        self.addons.iter().find(|a| a.addon == name)
    }

    pub fn has_addon(&self, name: &str) -> bool {
        self.addon(name).is_some()
    }

    /// Base price of `service_key` for `breed`, if the breed offers it.
    pub fn base_price(&self, breed: &str, service_key: &str) -> Option<f64> {
        self.breed(breed).and_then(|b| b.price_for(service_key))
    }

    pub fn addon_price(&self, name: &str) -> Option<f64> {
        self.addon(name).and_then(AddonEntry::first_price)
    }
}

/// The grooming tiers the salon sells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    BathBrush,
    BathTidy,
    CutStyle,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::BathBrush,
        ServiceKind::BathTidy,
        ServiceKind::CutStyle,
    ];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "bath_brush" => Some(ServiceKind::BathBrush),
            "bath_tidy" => Some(ServiceKind::BathTidy),
            "cut_style" => Some(ServiceKind::CutStyle),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ServiceKind::BathBrush => "bath_brush",
            ServiceKind::BathTidy => "bath_tidy",
            ServiceKind::CutStyle => "cut_style",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::BathBrush => "Bath & Brush",
            ServiceKind::BathTidy => "Bath & Tidy",
            ServiceKind::CutStyle => "Cut & Style",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the user has picked so far. Only the estimator mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_breed: String,
    selected_service: String,
    selected_addons: Vec<String>,
    notes: String,
}

impl SelectionState {
    pub fn selected_breed(&self) -> &str {
        &self.selected_breed
    }

    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    /// Selected add-ons in the order they were picked.
    pub fn selected_addons(&self) -> &[String] {
        &self.selected_addons
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn is_addon_selected(&self, name: &str) -> bool {
        self.selected_addons.iter().any(|a| a == name)
    }

    pub(crate) fn set_breed(&mut self, breed: &str) {
        self.selected_breed = breed.to_string();
    }

    pub(crate) fn set_service(&mut self, service_key: &str) {
        self.selected_service = service_key.to_string();
    }

    pub(crate) fn set_notes(&mut self, notes: &str) {
        self.notes = notes.to_string();
    }

    /// Flips membership and returns whether the add-on is now selected.
    pub(crate) fn toggle_addon(&mut self, name: &str) -> bool {
        if let Some(pos) = self.selected_addons.iter().position(|a| a == name) {
            self.selected_addons.remove(pos);
            false
        } else {
            self.selected_addons.push(name.to_string());
            true
        }
    }
}

pub const TOTAL_PREFIX: &str = "Estimated total: ";
pub const UNAVAILABLE_TEXT: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TotalResult {
    Available { amount: f64 },
    Unavailable,
}

impl TotalResult {
    pub fn is_available(&self) -> bool {
        matches!(self, TotalResult::Available { .. })
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            TotalResult::Available { amount } => Some(*amount),
            TotalResult::Unavailable => None,
        }
    }

    /// `$55.00` or `N/A`.
    pub fn quote_text(&self) -> String {
        match self {
            TotalResult::Available { amount } => format_currency(*amount),
            TotalResult::Unavailable => UNAVAILABLE_TEXT.to_string(),
        }
    }

    /// The full line shown next to the picker, e.g. `Estimated total: $55.00`.
    pub fn display_text(&self) -> String {
        format!("{}{}", TOTAL_PREFIX, self.quote_text())
    }
}

/// Two-decimal dollar amount. Exact half-cent values round up, so
/// `45.125` shows as `$45.13`.
pub fn format_currency(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => format!(
            "${:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        // out of Decimal's range; no salon charges this much
        None => format!("${:.2}", amount),
    }
}

/// Composed inquiry message, one entry per line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    lines: Vec<String>,
}

impl Inquiry {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn body(&self) -> String {
        self.lines.join("\n")
    }
}
