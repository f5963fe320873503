//! State machine behind the creation view.
//!
//! Every user and network event of the view is reduced through [`Creator`],
//! so the "a style change invalidates any scaled recipe" rule lives in one
//! place instead of being scattered over callbacks.

use models::{Catalog, ScaledRecipe};

/// Volume field content on a fresh view.
const DEFAULT_VOLUME_FIELD: &str = "20";

/// Result of the load-on-mount catalog fetch. `Failed` keeps the style
/// selector empty on purpose.
#[derive(Debug, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(Catalog),
    Failed,
}

/// Where the creation flow currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// No style selected yet.
    Idle,
    /// A style is selected but nothing has been generated for it.
    Selected,
    /// The artificial scaling delay is running.
    Scaling,
    /// A scaled recipe is on screen.
    Displayed,
}

/// Reducer state of the creation view.
pub struct Creator {
    catalog: CatalogState,
    style: Option<String>,
    volume_field: String,
    phase: Phase,
    /// Selection snapshot taken when scaling began.
    pending: Option<(String, f64)>,
    recipe: Option<ScaledRecipe>,
}

impl Creator {
    pub fn new() -> Self {
        Self {
            catalog: CatalogState::Loading,
            style: None,
            volume_field: DEFAULT_VOLUME_FIELD.to_string(),
            phase: Phase::Idle,
            pending: None,
            recipe: None,
        }
    }

    pub fn catalog_loaded(&mut self, catalog: Catalog) {
        self.catalog = CatalogState::Ready(catalog);
    }

    pub fn catalog_failed(&mut self) {
        self.catalog = CatalogState::Failed;
    }

    /// Select `name`, dropping any displayed recipe and any snapshot of an
    /// in-flight generation. Re-selecting the current style is a no-op.
    pub fn select_style(&mut self, name: String) {
        if self.style.as_deref() == Some(name.as_str()) {
            return;
        }

        self.style = Some(name);
        self.pending = None;
        self.recipe = None;
        self.phase = Phase::Selected;
    }

    /// Record the raw volume field. Validation happens on read so the field
    /// may hold intermediate input.
    pub fn set_volume(&mut self, raw: String) {
        self.volume_field = raw;
    }

    /// Snapshot the current selection and enter `Scaling`. Returns false when
    /// generation is not currently allowed.
    pub fn begin_scaling(&mut self) -> bool {
        if !self.can_generate() {
            return false;
        }

        match (self.style.clone(), self.liters()) {
            (Some(name), Some(liters)) => {
                self.pending = Some((name, liters));
                self.phase = Phase::Scaling;
                true
            }
            _ => false,
        }
    }

    /// Complete the artificial delay: scale the snapshot taken by
    /// [`Creator::begin_scaling`]. A snapshot that no longer matches any
    /// catalog entry displays nothing. Ticks arriving after the flow left
    /// `Scaling` are stale and ignored.
    pub fn finish_scaling(&mut self) {
        if self.phase != Phase::Scaling {
            return;
        }

        self.recipe = match (&self.catalog, self.pending.take()) {
            (CatalogState::Ready(catalog), Some((name, liters))) => {
                catalog.find(&name).map(|style| style.scale(liters))
            }
            _ => None,
        };

        self.phase = match self.recipe {
            Some(_) => Phase::Displayed,
            None => Phase::Selected,
        };
    }

    /// Style names for the selector; empty while loading or after a failure.
    pub fn styles(&self) -> Vec<String> {
        match &self.catalog {
            CatalogState::Ready(catalog) => catalog.style_names(),
            _ => Vec::new(),
        }
    }

    pub fn selected_style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    pub fn volume_field(&self) -> &str {
        &self.volume_field
    }

    /// Parsed batch volume, if the field holds a number at all.
    pub fn liters(&self) -> Option<f64> {
        self.volume_field.trim().parse().ok()
    }

    pub fn scaling(&self) -> bool {
        self.phase == Phase::Scaling
    }

    pub fn recipe(&self) -> Option<&ScaledRecipe> {
        self.recipe.as_ref()
    }

    /// Generation needs a loaded catalog, a selected style, an in-range
    /// volume and no generation already in flight.
    pub fn can_generate(&self) -> bool {
        matches!(self.catalog, CatalogState::Ready(_))
            && self.phase != Phase::Scaling
            && self.style.is_some()
            && self.liters().map_or(false, models::valid_batch_volume)
    }

    /// The export control is enabled exactly while a recipe exists.
    pub fn can_export(&self) -> bool {
        self.recipe.is_some()
    }
}

impl Default for Creator {
    fn default() -> Self {
        Self::new()
    }
}
