use std::path::Path;
use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use supplyrisk_ai::{BasicModel, ConstantModel, ExtendedModel};
use supplyrisk_pipeline::{BasicPipeline, BasicRequest, ExtendedPipeline, ExtendedRequest};
use supplyrisk_risk::compute_risk_percent;

fn shipped_model(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../models").join(name)
}

fn bench_risk_score(c: &mut Criterion) {
    c.bench_function("compute_risk_percent", |b| {
        b.iter(|| {
            compute_risk_percent(
                black_box(3.0),
                black_box(0.6),
                black_box(1),
                black_box(-250.0),
                black_box(0.05),
            )
        })
    });
}

fn bench_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let basic_req = BasicRequest {
        delay_days: 3.0,
        geo: 0.6,
        transport_status: 1,
        required_material: 1000.0,
    };
    let extended_req = ExtendedRequest {
        defective_rate: 0.05,
        delay_days: 3.0,
        geo: 0.6,
        transport_status: 2,
        supplier_reliability: 0.8,
        required_material: 1000.0,
    };

    let stub_basic = BasicPipeline::new(BasicModel::new(Arc::new(ConstantModel::new(1000.0, 3))).unwrap());
    let stub_extended =
        ExtendedPipeline::new(ExtendedModel::new(Arc::new(ConstantModel::new(1000.0, 5))).unwrap());

    group.bench_with_input(BenchmarkId::new("basic", "constant"), &basic_req, |b, req| {
        b.iter(|| stub_basic.run(black_box(req)).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("extended", "constant"), &extended_req, |b, req| {
        b.iter(|| stub_extended.run(black_box(req)).unwrap())
    });

    let linear = BasicPipeline::new(BasicModel::load(shipped_model("model.json")).unwrap());
    let forest = ExtendedPipeline::new(ExtendedModel::load(shipped_model("body_chain_model.json")).unwrap());

    group.bench_with_input(BenchmarkId::new("basic", "linear"), &basic_req, |b, req| {
        b.iter(|| linear.run(black_box(req)).unwrap())
    });
    group.bench_with_input(BenchmarkId::new("extended", "tree_ensemble"), &extended_req, |b, req| {
        b.iter(|| forest.run(black_box(req)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_risk_score, bench_pipelines);
criterion_main!(benches);
