use indexmap::IndexMap;

use crate::error::MotionResult;

use super::config::{
    ChartConfig, ChartData, ChartOptions, ChartType, Dataset, IndexAxis, PluginOptions,
};
use super::definition::{ChartDefinition, ChartKind};
use super::style::ChartStyle;

impl ChartKind {
    /// Builds the engine configuration for `definition` with this kind's
    /// presentation rules.
    pub fn build_config(
        self,
        definition: &ChartDefinition,
        style: &ChartStyle,
    ) -> MotionResult<ChartConfig> {
        let config = match self {
            Self::Bar => build_bar(definition, style),
            Self::HorizontalBar => build_horizontal_bar(definition, style),
            Self::Doughnut => build_doughnut(definition, style),
        };
        config.validate()?;
        Ok(config)
    }
}

fn bar_dataset(definition: &ChartDefinition, style: &ChartStyle) -> Dataset {
    let series = &definition.series;
    Dataset {
        label: series.label.clone(),
        data: series.values.clone(),
        background_color: series.background.clone(),
        border_color: series.border.clone(),
        border_width: 1.0,
        border_radius: Some(style.bar_border_radius),
        hover_background_color: series.hover_background,
        hover_offset: None,
    }
}

fn base_options(style: &ChartStyle, plugins: PluginOptions) -> ChartOptions {
    ChartOptions {
        index_axis: None,
        responsive: true,
        maintain_aspect_ratio: false,
        cutout: None,
        animation: style.animation(),
        plugins,
        scales: None,
    }
}

fn build_bar(definition: &ChartDefinition, style: &ChartStyle) -> ChartConfig {
    let mut scales = IndexMap::new();
    scales.insert("y".to_owned(), style.value_axis(definition.value_ticks));
    scales.insert("x".to_owned(), style.category_axis());

    let plugins = PluginOptions {
        legend: style.hidden_legend(),
        tooltip: style.tooltip(definition.tooltip_label),
    };
    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: definition.labels.clone(),
            datasets: vec![bar_dataset(definition, style)],
        },
        options: ChartOptions {
            scales: Some(scales),
            ..base_options(style, plugins)
        },
    }
}

fn build_horizontal_bar(definition: &ChartDefinition, style: &ChartStyle) -> ChartConfig {
    let mut scales = IndexMap::new();
    scales.insert("x".to_owned(), style.value_axis(definition.value_ticks));
    scales.insert("y".to_owned(), style.category_axis());

    let plugins = PluginOptions {
        legend: style.hidden_legend(),
        tooltip: style.tooltip(definition.tooltip_label),
    };
    ChartConfig {
        chart_type: ChartType::Bar,
        data: ChartData {
            labels: definition.labels.clone(),
            datasets: vec![bar_dataset(definition, style)],
        },
        options: ChartOptions {
            index_axis: Some(IndexAxis::Y),
            scales: Some(scales),
            ..base_options(style, plugins)
        },
    }
}

fn build_doughnut(definition: &ChartDefinition, style: &ChartStyle) -> ChartConfig {
    let series = &definition.series;
    let plugins = PluginOptions {
        legend: style.bottom_legend(),
        tooltip: style.tooltip(definition.tooltip_label),
    };
    ChartConfig {
        chart_type: ChartType::Doughnut,
        data: ChartData {
            labels: definition.labels.clone(),
            datasets: vec![Dataset {
                label: series.label.clone(),
                data: series.values.clone(),
                background_color: series.background.clone(),
                border_color: series.border.clone(),
                border_width: 1.0,
                border_radius: None,
                hover_background_color: series.hover_background,
                hover_offset: Some(10.0),
            }],
        },
        options: ChartOptions {
            cutout: Some(style.doughnut_cutout.clone()),
            ..base_options(style, plugins)
        },
    }
}
