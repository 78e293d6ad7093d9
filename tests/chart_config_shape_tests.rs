use serde_json::json;
use site_motion::charts::{
    ChartStyle, ChartType, IndexAxis, TickFormat, TooltipLabelFormat, client_growth, efficiency,
    industry, tax_savings,
};

#[test]
fn client_growth_bar_config_matches_chart_js_shape() {
    let definition = client_growth();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    assert_eq!(config.chart_type, ChartType::Bar);

    let value = config.to_json_value().expect("json");
    assert_eq!(value["type"], "bar");
    assert_eq!(value["data"]["labels"], json!(["2020", "2021", "2022", "2023"]));

    let dataset = &value["data"]["datasets"][0];
    assert_eq!(dataset["label"], "Client Count");
    assert_eq!(dataset["data"], json!([120.0, 160.0, 190.0, 230.0]));
    assert_eq!(dataset["backgroundColor"][0], "rgba(59, 130, 246, 0.7)");
    assert_eq!(dataset["backgroundColor"][3], "rgba(59, 130, 246, 1)");
    assert_eq!(dataset["borderColor"], "rgba(59, 130, 246, 1)");
    assert_eq!(dataset["borderRadius"], 6.0);
    assert_eq!(dataset["hoverBackgroundColor"], "rgba(6, 182, 212, 0.8)");

    let options = &value["options"];
    assert_eq!(options["responsive"], true);
    assert_eq!(options["maintainAspectRatio"], false);
    assert_eq!(options["animation"], json!({"duration": 2000, "easing": "easeOutQuart"}));
    assert_eq!(options["plugins"]["legend"], json!({"display": false}));
    assert_eq!(options["scales"]["y"]["beginAtZero"], true);
    assert_eq!(options["scales"]["y"]["grid"]["color"], "rgba(255, 255, 255, 0.1)");
    assert_eq!(options["scales"]["x"]["grid"]["display"], false);
    assert!(options.get("indexAxis").is_none());
    assert!(options.get("cutout").is_none());
}

#[test]
fn shared_tooltip_style_is_dark() {
    let definition = tax_savings();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    let tooltip = &config.to_json_value().expect("json")["options"]["plugins"]["tooltip"];
    assert_eq!(
        *tooltip,
        json!({
            "backgroundColor": "rgba(15, 22, 41, 0.9)",
            "titleColor": "#fff",
            "bodyColor": "#fff",
            "borderColor": "rgba(59, 130, 246, 0.5)",
            "borderWidth": 1.0,
            "padding": 10.0,
            "cornerRadius": 8.0
        })
    );
}

#[test]
fn doughnut_config_has_cutout_offset_and_bottom_legend() {
    let definition = tax_savings();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    assert_eq!(config.chart_type, ChartType::Doughnut);
    assert!(config.options.scales.is_none());

    let value = config.to_json_value().expect("json");
    assert_eq!(value["type"], "doughnut");
    assert_eq!(value["options"]["cutout"], "70%");
    assert_eq!(value["options"]["plugins"]["legend"]["position"], "bottom");
    assert_eq!(value["options"]["plugins"]["legend"]["labels"]["font"]["size"], 12.0);
    assert_eq!(value["data"]["datasets"][0]["hoverOffset"], 10.0);
    assert_eq!(value["data"]["datasets"][0]["data"], json!([23.0, 77.0]));
    assert!(value["data"]["datasets"][0].get("label").is_none());

    assert_eq!(
        config.tooltip_label_format(),
        Some(TooltipLabelFormat::LabelPercent)
    );
    assert_eq!(
        TooltipLabelFormat::LabelPercent.format("Tax Saved", "", 23.0),
        "Tax Saved: 23%"
    );
}

#[test]
fn horizontal_bar_uses_y_index_axis_and_percent_ticks() {
    let definition = industry();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    assert_eq!(config.chart_type, ChartType::Bar);
    assert_eq!(config.options.index_axis, Some(IndexAxis::Y));

    let value = config.to_json_value().expect("json");
    assert_eq!(value["options"]["indexAxis"], "y");
    assert_eq!(value["options"]["scales"]["x"]["beginAtZero"], true);
    assert_eq!(value["options"]["scales"]["y"]["grid"]["display"], false);
    assert_eq!(
        value["data"]["datasets"][0]["backgroundColor"]
            .as_array()
            .map(Vec::len),
        Some(5)
    );

    let ticks: Vec<(&str, TickFormat)> = config.tick_formats().collect();
    assert_eq!(ticks, vec![("x", TickFormat::PercentSuffix)]);
    assert_eq!(TickFormat::PercentSuffix.format(35.0), "35%");
    assert_eq!(
        config
            .tooltip_label_format()
            .map(|f| f.format("Technology", "Client Distribution", 35.0)),
        Some("Client Distribution: 35%".to_owned())
    );
}

#[test]
fn callbacks_are_not_serialized_as_json() {
    let definition = industry();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    let text = config.to_json_pretty().expect("json");
    assert!(!text.contains("labelFormat"));
    assert!(!text.contains("callback"));
    assert!(!text.contains("format\""));
}

#[test]
fn efficiency_doughnut_carries_literal_data() {
    let definition = efficiency();
    let config = definition
        .kind
        .build_config(&definition, &ChartStyle::default())
        .expect("config");
    assert_eq!(config.data.labels, vec!["Time Saved", "Remaining Process"]);
    assert_eq!(config.data.datasets[0].data, vec![65.0, 35.0]);
    assert_eq!(config.options.cutout.as_deref(), Some("70%"));
}

#[test]
fn style_overrides_flow_into_every_chart() {
    let style = ChartStyle {
        animation_duration_ms: 500,
        doughnut_cutout: "60%".to_owned(),
        ..ChartStyle::default()
    };
    let definition = efficiency();
    let config = definition.kind.build_config(&definition, &style).expect("config");
    assert_eq!(config.options.animation.duration, 500);
    assert_eq!(config.options.cutout.as_deref(), Some("60%"));
}
