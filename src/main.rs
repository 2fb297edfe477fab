use std::time::Instant;
use unistat::{Max, Min, Statistic, Value};

fn main() {
    env_logger::builder()
        .filter_module("unistat", log::LevelFilter::Trace)
        .parse_default_env()
        .init();

    let samples = {
        use rand::Rng;

        let mut rng = rand::thread_rng();

        (0..1_000_000)
            .map(|_| rng.gen_range(-1_000.0..1_000.0))
            .collect::<Vec<Value>>()
    };

    let mut min = Min::new();
    let mut max = Max::new();

    let start = Instant::now();

    for &value in &samples {
        min.increment(value);
        max.increment(value);
    }

    log::info!("streamed {} samples in {:?}", min.count(), start.elapsed());
    log::info!("min = {}, max = {}", min.result(), max.result());

    let start = Instant::now();

    let batch_min = Min::new().evaluate_all(&samples);
    let batch_max = Max::new().evaluate_all(&samples);

    log::info!("batch pass in {:?}", start.elapsed());
    log::info!("batch min = {batch_min}, batch max = {batch_max}");
}
