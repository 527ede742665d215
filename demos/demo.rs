use chrono::{Duration, Utc};
use eyre::WrapErr;
use svg_chart::{testdata, BarChart, BarChartConfig, BarEvent, LineChart, LineChartConfig, Page};
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let page = Page::new().with_mount("chart-1").with_mount("chart-2");
    let mut rng = rand::rng();

    let bar_config = BarChartConfig::new("#chart-1", testdata::categorical(&mut rng, 20))
        .on_click(|item| tracing::info!(?item, "bar clicked"));
    let mut bars = BarChart::new(&page, bar_config).wrap_err("building bar chart")?;
    bars.handle_event(BarEvent::Click(0));

    let start = Utc::now() - Duration::days(30);
    let line_config = LineChartConfig::new("#chart-2", testdata::time_series(&mut rng, start, 30));
    let line = LineChart::new(&page, line_config).wrap_err("building line chart")?;

    println!("{}", page.render(&[&bars, &line]));
    Ok(())
}
