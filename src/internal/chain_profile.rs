#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::pedantic)]

use chained::hashers::{self, HashFn};
use chained::ChainedHashMap;
use plotters::prelude::*;
use rand::Rng;

// Keys inserted per hash function and how often the table is sampled
const KEYS_TOTAL: usize = 5_000;
const CHECKPOINT_EVERY: usize = 100;
const INITIAL_CAPACITY: usize = 53;

// Hash functions to compare
const FUNCTIONS: [(&str, HashFn); 3] = [
    ("char_sum", hashers::char_sum),
    ("weighted_sum", hashers::weighted_sum),
    ("sip", hashers::sip),
];

// One snapshot of the table while an experiment runs
struct Sample {
    inserted: usize,
    capacity: usize,
    load_factor: f64,
    empty_fraction: f64,
    mean_chain: f64,
}

// Fills a map with random keys and samples its bucket statistics along the way
fn run_experiment(hash_function: HashFn) -> Vec<Sample> {
    let mut rng = rand::rng();
    let mut map: ChainedHashMap<usize> =
        ChainedHashMap::with_capacity_and_hasher(INITIAL_CAPACITY, hash_function);
    let mut samples = Vec::with_capacity(KEYS_TOTAL / CHECKPOINT_EVERY);

    let mut inserted = 0;
    while inserted < KEYS_TOTAL {
        let key = format!("key-{}", rng.random_range(1..100_000_000));
        if map.insert(key, inserted).is_some() {
            // Random key already present; try another one
            continue;
        }
        inserted += 1;

        if inserted % CHECKPOINT_EVERY == 0 {
            let capacity = map.capacity();
            let empty = map.empty_buckets();
            let occupied = capacity - empty;
            let mean_chain =
                if occupied == 0 { 0.0 } else { map.len() as f64 / occupied as f64 };

            samples.push(Sample {
                inserted,
                capacity,
                load_factor: map.load_factor(),
                empty_fraction: empty as f64 / capacity as f64,
                mean_chain,
            });
        }
    }

    samples
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!(
        "Inserting {} random keys per hash function, starting from {} buckets",
        KEYS_TOTAL, INITIAL_CAPACITY
    );

    let mut results: Vec<(&str, Vec<Sample>)> = Vec::new();
    for (name, hash_function) in FUNCTIONS {
        let samples = run_experiment(hash_function);
        if let Some(last) = samples.last() {
            println!(
                "  {}: capacity = {}, load factor = {:.2}, empty buckets = {:.1}%, entries per occupied bucket = {:.2}",
                name,
                last.capacity,
                last.load_factor,
                last.empty_fraction * 100.0,
                last.mean_chain
            );
        }
        results.push((name, samples));
    }

    draw_chart(
        "empty_buckets.png",
        "Empty Buckets by Hash Function",
        "Fraction of buckets left empty",
        &results,
        |sample| sample.empty_fraction,
    )?;

    draw_chart(
        "chain_occupancy.png",
        "Chain Occupancy by Hash Function",
        "Entries per occupied bucket",
        &results,
        |sample| sample.mean_chain,
    )?;

    println!("Generated plots: empty_buckets.png, chain_occupancy.png");

    Ok(())
}

// Renders one metric of every experiment as a line chart with point markers
fn draw_chart(
    path: &str,
    caption: &str,
    y_desc: &str,
    results: &[(&str, Vec<Sample>)],
    metric: impl Fn(&Sample) -> f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let font_family = "sans-serif";
    let colors = [
        RGBColor(220, 50, 50), // Bright red
        RGBColor(50, 90, 220), // Bright blue
        RGBColor(50, 180, 50), // Bright green
    ];
    let line_width = 2;
    let marker_size = 3;
    let text_size = 16;
    let title_size = 35;

    let max_y = results
        .iter()
        .flat_map(|(_, samples)| samples.iter().map(&metric))
        .fold(0.0_f64, f64::max) *
        1.1; // Add 10% margin

    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..KEYS_TOTAL + CHECKPOINT_EVERY, 0.0..max_y)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc(y_desc)
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (idx, (name, samples)) in results.iter().enumerate() {
        let color = colors[idx % colors.len()];
        let line_style = ShapeStyle::from(&color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                samples.iter().map(|sample| (sample.inserted, metric(sample))),
                line_style,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(samples.iter().map(|sample| {
            Circle::new((sample.inserted, metric(sample)), marker_size, color.filled())
        }))?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    Ok(())
}
