//! DTOs for tours_sea adapter.

/// DTO for creating a new tour.
#[derive(Debug, Clone)]
pub struct TourCreate {
    pub name: String,
}

impl TourCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
