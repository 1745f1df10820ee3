use csv::{ReaderBuilder, Trim};
use std::fs::File;

use crate::kmeans::Observation;
use crate::utils::LibData;

/// Reads a trip fixture whose first column is the clustering feature; every
/// further column becomes an auxiliary metric named after its header.
pub fn read_trips<A: LibData>(file_path: &str) -> Vec<Observation<A>> {
    let file = File::open(file_path).unwrap();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(|header| header.to_string())
        .collect();

    reader
        .records()
        .enumerate()
        .map(|(row, record)| {
            let record = record.unwrap();
            let values: Vec<A> = record
                .iter()
                .map(|raw| A::from_str(raw).ok().expect("could not parse numeric field"))
                .collect();

            let mut fields = values.into_iter();
            let feature = fields.next().unwrap();
            let mut observation = Observation::new(row as i64, feature);
            for (name, value) in headers.iter().skip(1).zip(fields) {
                observation = observation.with_metric(name, value);
            }
            observation
        })
        .collect()
}

pub fn close_l1<A: LibData>(a: A, b: A, tolerance: A) {
    assert!((a - b).abs() < tolerance, "{} and {} are not close", a, b);
}
