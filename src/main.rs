use tally::{average, values, DataProcessor};

fn main() -> tally::Result<()> {
    env_logger::builder()
        .filter_module("tally", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let data = values![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    let result = DataProcessor::new(data).process()?;
    log::info!("Data processing results: {result}");

    let avg = average(data);
    log::info!("Direct average calculation: {avg}");

    log::info!("Square root of average: {}", avg.sqrt());

    Ok(())
}
