//! Service catalog reader
//!
//! Fetches the establishment/event lists and the four service-category
//! catalogs. Pure read; the fetched lists live for the form session.

use crate::{ClientResult, HttpClient};
use shared::models::{
    AdditionalServiceRow, CateringRow, DecorationRow, EntertainmentRow, Establishment, EventType,
};
use tracing::debug;

/// Everything the reservation form needs to render its pickers
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub establishments: Vec<Establishment>,
    pub event_types: Vec<EventType>,
    pub entertainment: Vec<EntertainmentRow>,
    pub decoration: Vec<DecorationRow>,
    pub catering: Vec<CateringRow>,
    pub additional: Vec<AdditionalServiceRow>,
}

impl Catalog {
    /// Look up an establishment by id
    pub fn establishment(&self, id: &str) -> Option<&Establishment> {
        self.establishments.iter().find(|e| e.id == id)
    }

    /// Flat fee of the chosen establishment, zero when none is chosen or
    /// the row carries no cost
    pub fn establishment_fee(&self, id: Option<&str>) -> f64 {
        id.and_then(|id| self.establishment(id))
            .map(|e| e.cost)
            .unwrap_or(0.0)
    }
}

/// Reader over the six catalog endpoints
#[derive(Clone)]
pub struct CatalogReader {
    http: HttpClient,
}

impl CatalogReader {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    pub async fn fetch_establishments(&self) -> ClientResult<Vec<Establishment>> {
        self.http.get("/establishments").await
    }

    pub async fn fetch_event_types(&self) -> ClientResult<Vec<EventType>> {
        self.http.get("/events").await
    }

    pub async fn fetch_entertainment(&self) -> ClientResult<Vec<EntertainmentRow>> {
        self.http.get("/entertainment").await
    }

    pub async fn fetch_decoration(&self) -> ClientResult<Vec<DecorationRow>> {
        self.http.get("/decoration").await
    }

    pub async fn fetch_catering(&self) -> ClientResult<Vec<CateringRow>> {
        self.http.get("/catering").await
    }

    pub async fn fetch_additional(&self) -> ClientResult<Vec<AdditionalServiceRow>> {
        self.http.get("/additional").await
    }

    /// Load the whole catalog
    ///
    /// Two concurrent batches: establishments + event types first, then the
    /// four service categories. The ordering is a scheduling convenience
    /// carried over from the form's mount sequence, not a data dependency.
    pub async fn load(&self) -> ClientResult<Catalog> {
        let (establishments, event_types) =
            tokio::try_join!(self.fetch_establishments(), self.fetch_event_types())?;

        let (entertainment, decoration, catering, additional) = tokio::try_join!(
            self.fetch_entertainment(),
            self.fetch_decoration(),
            self.fetch_catering(),
            self.fetch_additional(),
        )?;

        debug!(
            establishments = establishments.len(),
            event_types = event_types.len(),
            entertainment = entertainment.len(),
            decoration = decoration.len(),
            catering = catering.len(),
            additional = additional.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            establishments,
            event_types,
            entertainment,
            decoration,
            catering,
            additional,
        })
    }
}
