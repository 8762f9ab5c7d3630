use rayon::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use qrstyle::{EcLevel, Encoder, QrcodeEncoder, StyleParameters};

use crate::utils::print_table;

pub const SIZES: [u32; 4] = [128, 256, 512, 1024];
pub const RADII: [f32; 3] = [1.0, 4.0, 8.0];
const RUNS: u32 = 5;

/// Average render time in microseconds for each canvas size and dot radius.
pub fn benchmark_rendering(text: &str) {
    let encoder = QrcodeEncoder::default();
    let results = Arc::new(Mutex::new(HashMap::<String, HashMap<String, f64>>::new()));

    let cases: Vec<(u32, f32)> =
        SIZES.iter().flat_map(|&s| RADII.iter().map(move |&r| (s, r))).collect();

    cases.par_iter().for_each(|&(size, radius)| {
        let matrix = encoder.encode(text, EcLevel::H, size).unwrap();
        let style = StyleParameters { output_size: size, dot_radius: radius, ..Default::default() };

        let start = Instant::now();
        for _ in 0..RUNS {
            std::hint::black_box(qrstyle::render(&matrix, &style).unwrap());
        }
        let avg = start.elapsed().as_micros() as f64 / RUNS as f64;

        let mut results = results.lock().unwrap();
        results.entry(size.to_string()).or_default().insert(format!("r={radius}"), avg);
    });

    let rows = SIZES.map(|s| s.to_string());
    let rows = rows.iter().map(String::as_str).collect::<Vec<_>>();
    let columns = RADII.map(|r| format!("r={r}"));
    let mut header = vec!["size"];
    header.extend(columns.iter().map(String::as_str));

    let results = results.lock().unwrap();
    print_table(&results, &rows, &header);
}
