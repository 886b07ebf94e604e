use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use eddn_decoder::EddnDecoder;
use eddn_tests::{commodity_payload, docked_payload, message, shipyard_payload};
use serde_json::json;

fn bench_decode_schemas(c: &mut Criterion) {
    let cases = [
        ("commodity", message("commodity/3", &commodity_payload())),
        ("shipyard", message("shipyard/2", &shipyard_payload())),
        ("journal_docked", message("journal/1", &docked_payload())),
        (
            "journal_scan_star",
            message("journal/1", &json!({"event": "Scan", "StarType": "K"})),
        ),
    ];

    let mut group = c.benchmark_group("decode_schema");
    for (name, payload) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), payload, |b, p| {
            b.iter(|| EddnDecoder::decode(p).unwrap());
        });
    }
    group.finish();
}

fn bench_decode_refused(c: &mut Criterion) {
    let test_traffic = message("commodity/3/test", &commodity_payload());
    c.bench_function("decode_refused_test_traffic", |b| {
        b.iter(|| EddnDecoder::decode(&test_traffic).unwrap_err());
    });
}

fn bench_decode_market_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_market_size");

    for items in [10, 100, 400] {
        let mut payload = commodity_payload();
        let template = payload["commodities"][1].clone();
        payload["commodities"] = (0..items)
            .map(|i| {
                let mut item = template.clone();
                item["name"] = json!(format!("Commodity {i}"));
                item
            })
            .collect();
        let compressed = message("commodity/3", &payload);

        group.throughput(Throughput::Bytes(compressed.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{items}_items")),
            &compressed,
            |b, p| b.iter(|| EddnDecoder::decode(p).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_decode_schemas,
    bench_decode_refused,
    bench_decode_market_size
);
criterion_main!(benches);
