// File: crates/sungraph-core/src/lib.rs
// Summary: Core library entry point; exports public API for building render plans.

pub mod chart;
pub mod error;
pub mod grid;
pub mod palette;
pub mod record;
pub mod scale;
pub mod series;
pub mod types;

pub use chart::{build_chart, ChartConfig, LegendEntry, RenderPlan, SeriesPlan};
pub use error::ChartError;
pub use grid::linspace;
pub use palette::Palette;
pub use record::{RawRow, Record};
pub use scale::{TimeScale, ValueScale};
pub use series::partition_by_group;
pub use types::{Insets, Rgb};
