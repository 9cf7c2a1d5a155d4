//! Encode/decode throughput for glossary terms with growing relationship lists.

use catalog_codec::{Codec, encode};
use catalog_model::relations::{IsA, Synonym};
use catalog_model::{AtlasGlossary, AtlasGlossaryTerm, Entity, SchemaCatalog};
use catalog_types::{Field, SemanticTag};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn term_with_relationships(count: usize) -> AtlasGlossaryTerm {
    let mut term =
        AtlasGlossaryTerm::creator("Customer", AtlasGlossary::ref_by_guid("glossary-guid"));
    term.description = Field::Value("Someone who buys things".into());
    term.classifies = Field::Value(
        (0..count)
            .map(|i| {
                IsA::new()
                    .description("is-a")
                    .classifies(AtlasGlossaryTerm::ref_by_guid(format!("c{i}")), SemanticTag::Replace)
            })
            .collect(),
    );
    term.synonyms = Field::Value(
        (0..count)
            .map(|i| {
                let semantic = if i % 2 == 0 {
                    SemanticTag::Append
                } else {
                    SemanticTag::Remove
                };
                Synonym::new().synonyms(AtlasGlossaryTerm::ref_by_guid(format!("s{i}")), semantic)
            })
            .collect(),
    );
    term
}

fn bench_encode(c: &mut Criterion) {
    let codec = Codec::new(SchemaCatalog::builtin());
    let mut group = c.benchmark_group("encode_term");
    for count in [0, 10, 100] {
        let term = term_with_relationships(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &term, |b, term| {
            b.iter(|| codec.encode(black_box(term)).unwrap())
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let codec = Codec::new(SchemaCatalog::builtin());
    let mut group = c.benchmark_group("decode_term");
    for count in [0, 10, 100] {
        let bytes = encode(&term_with_relationships(count)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(count), &bytes, |b, bytes| {
            b.iter(|| codec.decode::<AtlasGlossaryTerm>(black_box(bytes)).unwrap())
        });
    }
    group.finish();
}

fn bench_codec_lookup(c: &mut Criterion) {
    let codec = Codec::new(SchemaCatalog::builtin());
    codec.for_type("AtlasGlossaryTerm").unwrap();
    c.bench_function("for_type_cached", |b| {
        b.iter(|| codec.for_type(black_box("AtlasGlossaryTerm")).unwrap())
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_codec_lookup);
criterion_main!(benches);
