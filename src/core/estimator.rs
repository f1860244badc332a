use crate::core::inquiry;
use crate::domain::model::{Catalog, Inquiry, SelectionState, TotalResult, TOTAL_PREFIX};

/// Holds the catalog and the current selection, and keeps the displayed
/// total in step with every change to the selection.
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: Catalog,
    selection: SelectionState,
    total: TotalResult,
    displayed: String,
}

impl Estimator {
    pub fn new(catalog: Catalog) -> Self {
        tracing::debug!(
            "Estimator ready with {} breeds and {} add-ons",
            catalog.breeds.len(),
            catalog.addons.len()
        );

        let mut estimator = Self {
            catalog,
            selection: SelectionState::default(),
            total: TotalResult::Unavailable,
            displayed: TotalResult::Unavailable.display_text(),
        };
        estimator.refresh();
        estimator
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn select_breed(&mut self, breed: &str) -> TotalResult {
        self.selection.set_breed(breed);
        self.refresh()
    }

    pub fn select_service(&mut self, service_key: &str) -> TotalResult {
        self.selection.set_service(service_key);
        self.refresh()
    }

    /// Adds the add-on if it is not selected, removes it otherwise.
    /// Names missing from the catalog are ignored.
    pub fn toggle_addon(&mut self, name: &str) -> TotalResult {
        if !self.catalog.has_addon(name) {
            tracing::warn!("Ignoring unknown add-on '{}'", name);
            return self.total;
        }

        let selected = self.selection.toggle_addon(name);
        tracing::debug!(
            "Add-on '{}' {}",
            name,
            if selected { "selected" } else { "deselected" }
        );
        self.refresh()
    }

    pub fn set_notes(&mut self, notes: &str) {
        self.selection.set_notes(notes);
    }

    /// Prices the current selection from scratch.
    pub fn compute_total(&self) -> TotalResult {
        let base = self
            .catalog
            .base_price(
                self.selection.selected_breed(),
                self.selection.selected_service(),
            )
            .unwrap_or(0.0);

        let addons: f64 = self
            .selection
            .selected_addons()
            .iter()
            .map(|name| self.catalog.addon_price(name).unwrap_or(0.0))
            .sum();

        // no base price means no quote, whatever the add-ons come to
        if base == 0.0 {
            return TotalResult::Unavailable;
        }

        TotalResult::Available {
            amount: base + addons,
        }
    }

    /// Result of the last recomputation.
    pub fn current_total(&self) -> TotalResult {
        self.total
    }

    /// Text for the total display, e.g. `Estimated total: $55.00`.
    pub fn displayed_total(&self) -> &str {
        &self.displayed
    }

    /// The displayed total without its label, as quoted in an inquiry.
    pub fn quote_text(&self) -> &str {
        self.displayed
            .strip_prefix(TOTAL_PREFIX)
            .unwrap_or(&self.displayed)
    }

    pub fn build_inquiry(&self) -> Inquiry {
        inquiry::compose(&self.selection, self.quote_text())
    }

    /// Breed names in catalog order.
    pub fn breed_options(&self) -> Vec<&str> {
        self.catalog.breeds.iter().map(|b| b.breed.as_str()).collect()
    }

    /// `(name, label)` for each add-on, labelled like `Nail Trim (+$10)` or
    /// `Blueberry Facial (+$8.5)`.
    pub fn addon_options(&self) -> Vec<(&str, String)> {
        self.catalog
            .addons
            .iter()
            .map(|a| {
                let label = match a.first_price() {
                    Some(price) => format!("{} (+{})", a.addon, format_price_tag(price)),
                    None => a.addon.clone(),
                };
                (a.addon.as_str(), label)
            })
            .collect()
    }

    fn refresh(&mut self) -> TotalResult {
        self.total = self.compute_total();
        self.displayed = self.total.display_text();
        tracing::debug!("{}", self.displayed);
        self.total
    }
}

// shortest form of the catalog number: $10, $8.5
fn format_price_tag(price: f64) -> String {
    format!("${}", price)
}
