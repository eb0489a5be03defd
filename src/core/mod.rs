pub mod curve;
pub mod labels;
pub mod magnitude;
pub mod path;
pub mod place;
pub mod record;
pub mod scale;
pub mod types;
pub mod wave;

pub use labels::{LabelConnector, PlacedLabel};
pub use magnitude::MagnitudeScale;
pub use place::{Legend, PersonSettings, Place, PlaceIndex};
pub use record::{DateAccuracy, NormalizedEvent, TrajectoryRecord};
pub use scale::TemporalScale;
pub use types::Point;
pub use wave::WaveParams;
