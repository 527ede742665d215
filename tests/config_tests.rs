use svg_chart::{
    BarChartConfig, BarChartOptions, ChartError, ChartMargin, DataValue, LineChartOptions,
};

#[test]
fn test_defaults_fill_omitted_fields() {
    let options = BarChartOptions::from_json(
        r##"{ "selector": "#chart-1", "data": [{ "x": 12, "y": "Acme" }] }"##,
    )
    .unwrap();
    let config = BarChartConfig::from_options(options);

    assert_eq!(config.width, 500.0);
    assert_eq!(config.height, 300.0);
    assert_eq!(config.margin, ChartMargin::new(20.0, 20.0, 20.0, 160.0));
    assert!(config.show_mid_line);
    assert_eq!(config.data[0].x, DataValue::Number(12.0));
    assert_eq!(config.data[0].y, DataValue::Category("Acme".into()));
}

#[test]
fn test_margin_is_replaced_not_merged() {
    let options = BarChartOptions::from_json(
        r##"{
            "selector": "#chart-1",
            "width": 800,
            "showMidLine": false,
            "margin": { "left": 10, "right": 0, "top": 5, "bottom": 0 }
        }"##,
    )
    .unwrap();
    let config = BarChartConfig::from_options(options);

    assert_eq!(config.width, 800.0);
    assert_eq!(config.height, 300.0);
    assert!(!config.show_mid_line);
    assert_eq!(config.margin, ChartMargin::new(5.0, 0.0, 0.0, 10.0));
}

#[test]
fn test_partial_margin_is_rejected() {
    let result = BarChartOptions::from_json(
        r##"{ "selector": "#chart-1", "margin": { "left": 10 } }"##,
    );
    assert!(matches!(result, Err(ChartError::Config(_))));
}

#[test]
fn test_dates_parse_from_rfc3339() {
    let options = LineChartOptions::from_json(
        r##"{ "selector": "#line", "data": [{ "x": "2024-03-01T00:00:00Z", "y": 4 }] }"##,
    )
    .unwrap();
    assert!(options.data[0].x.as_date().is_some());
    assert_eq!(options.data[0].y.as_number(), Some(4.0));
}
