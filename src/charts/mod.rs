//! Lazy chart construction for the stats cards.
//!
//! Charts are described declaratively, built into the configuration shape the
//! charting engine expects and handed to a [`ChartBackend`] exactly once.

mod backend;
mod config;
mod definition;
mod registry;
mod renderers;
mod style;

pub use backend::{ChartBackend, NullChartBackend};
pub use config::{
    AnimationOptions, AxisOptions, ChartConfig, ChartData, ChartOptions, ChartType, ColorSpec,
    Dataset, FontOptions, GridOptions, IndexAxis, LegendLabels, LegendOptions, LegendPosition,
    PluginOptions, TickFormat, TickOptions, TooltipLabelFormat, TooltipOptions,
};
pub use definition::{
    ChartDefinition, ChartKind, SeriesDefinition, client_growth, efficiency, industry,
    site_charts, tax_savings,
};
pub use registry::ChartRegistry;
pub use style::ChartStyle;
