use agroclimate_risk::{
    load_daily_csv, AgroRiskError, LatLon, OpenMeteoClient, PipelineConfig, RiskPipeline,
    WeatherDataLoader,
};
use std::env;
use std::path::Path;

/// Scores a daily CSV given as first argument, or downloads Banjul when no
/// argument is given. A pipeline config JSON may follow as second argument.
#[tokio::main]
async fn main() -> Result<(), AgroRiskError> {
    configure_polars_display();
    let args: Vec<String> = env::args().skip(1).collect();

    let config = match args.get(1) {
        Some(path) => PipelineConfig::from_json_file(Path::new(path))?,
        None => PipelineConfig::default(),
    };
    let pipeline = RiskPipeline::new(config)?;

    let report = match args.first() {
        Some(csv) => pipeline.run(&load_daily_csv(Path::new(csv))?)?,
        None => {
            let loader = WeatherDataLoader::with_default_cache(OpenMeteoClient::new()).await?;
            pipeline
                .run_for_location(&loader, LatLon(13.4549, -16.5790))
                .await?
        }
    };

    println!("{}", report.risk_frame()?);
    println!("{}", report.final_scores.frame);

    let mut final_scores = report.final_scores;
    final_scores.write_csv(Path::new("final_scores.csv"))?;
    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    // show 20 rows
    env::set_var("POLARS_FMT_MAX_ROWS", "20");
}
