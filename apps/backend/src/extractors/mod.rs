pub mod round_id;
pub mod tour_id;
pub mod validated_json;

pub use round_id::RoundId;
pub use tour_id::TourId;
pub use validated_json::ValidatedJson;
