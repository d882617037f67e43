pub mod arc_length;
pub mod curve;
pub mod curve_model;

pub use arc_length::ArcLengthTable;
pub use curve::{CatmullRom, Curve, CurveDomain, CurveType};
pub use curve_model::CurveModel;
