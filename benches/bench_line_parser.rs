use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use num_rational::Ratio;

use westergaard_lines::context::GlobalContext;
use westergaard_lines::io::{RawEvent, RawPart, RawScore};
use westergaard_lines::line::{BranchLimits, LineParser, LineType};

fn primary_line() -> RawScore {
    let pitches = ["D4", "E4", "F4", "D4", "E4", "F4", "G4", "F4", "E4", "D4"];

    RawScore {
        parts: vec![RawPart {
            events: pitches
                .iter()
                .enumerate()
                .map(|(i, &pitch)| RawEvent {
                    pitch: pitch.to_owned(),
                    onset: Ratio::from_integer(i as i64),
                    duration: Ratio::from_integer(1),
                    measure: i as u32,
                    tied_to_next: false,
                })
                .collect(),
        }],
    }
}

fn parse_primary_line(c: &mut Criterion) {
    let score = primary_line();
    let ctx = GlobalContext::build(&score, None).expect("valid descending primary line");
    let limits = BranchLimits::default();

    c.bench_function("LineParser::parse, primary descent", |b| {
        b.iter(|| LineParser::parse(black_box(&ctx), 0, LineType::Primary, limits))
    });
}

fn parse_all_line_types(c: &mut Criterion) {
    let score = primary_line();
    let ctx = GlobalContext::build(&score, None).expect("valid descending primary line");
    let limits = BranchLimits::default();

    c.bench_function("LineParser::parse_all, single part", |b| {
        b.iter(|| LineParser::parse_all(black_box(&ctx), 0, limits))
    });
}

criterion_group!(benches, parse_primary_line, parse_all_line_types);
criterion_main!(benches);
