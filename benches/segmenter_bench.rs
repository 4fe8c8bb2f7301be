use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sentseg::paragraphs::Pipeline;
use sentseg::segmenter::{split, SegmenterConfig};
use sentseg::tokenizer::Tokenizer;

const SIMPLE_TEXT: &str = "Hello world. This is a test. How are you?";
const COMPLEX_TEXT: &str = r#"This is Mr. Motto here. And here is Mrs. Smithers. Let's meet at 14.10 in N.Y.. (A) First things here.
Four patients (67%) with an average response of 3.3 mos. (range 6 wks. to 12 mos.) This is one. (Here is another view
of the same. And then there is a different case here.) "He said it." The U.S. Air Force was called in."#;

fn long_text() -> String {
    let mut text = String::new();
    for i in 0..200 {
        text.push_str(COMPLEX_TEXT);
        text.push_str(if i % 10 == 9 { "\n\n" } else { " " });
    }
    text
}

fn bench_tokenizer(c: &mut Criterion) {
    let tokenizer = Tokenizer::new().unwrap();
    let mut group = c.benchmark_group("tokenizer");

    group.bench_function("construction", |b| b.iter(|| black_box(Tokenizer::new().unwrap())));

    group.bench_function("simple_text", |b| {
        b.iter(|| black_box(tokenizer.split(black_box(SIMPLE_TEXT))))
    });

    group.bench_function("complex_text", |b| {
        b.iter(|| black_box(tokenizer.split(black_box(COMPLEX_TEXT))))
    });

    group.finish();
}

fn bench_segmenter(c: &mut Criterion) {
    let tokenizer = Tokenizer::new().unwrap();
    let config = SegmenterConfig::default();
    let simple = tokenizer.split(SIMPLE_TEXT);
    let complex = tokenizer.split(COMPLEX_TEXT);

    let mut group = c.benchmark_group("segmenter");

    group.bench_function("simple_tokens", |b| {
        b.iter(|| black_box(split(simple.iter().cloned(), &config)))
    });

    group.bench_function("complex_tokens", |b| {
        b.iter(|| black_box(split(complex.iter().cloned(), &config)))
    });

    group.finish();
}

fn bench_document_throughput(c: &mut Criterion) {
    let text = long_text();
    let pipeline = Pipeline::new(SegmenterConfig::default()).unwrap();

    let mut group = c.benchmark_group("document_throughput");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("process", |b| {
        b.iter(|| pipeline.process(black_box(&text)).flatten().count())
    });

    group.bench_function("analyze", |b| {
        b.iter(|| pipeline.analyze(black_box(&text)).flatten().count())
    });

    group.finish();
}

criterion_group!(benches, bench_tokenizer, bench_segmenter, bench_document_throughput);
criterion_main!(benches);
