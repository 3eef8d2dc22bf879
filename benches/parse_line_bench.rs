use criterion::{Criterion, black_box, criterion_group, criterion_main};
use weblog_parser::{LineParser, MemorySink, WeblogParser, try_parse_line};

const FULL_LINE: &str = r#"203.0.113.7 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 2326 "http://example.com/" "Mozilla/5.0 (X11; Linux x86_64)" "198.51.100.2""#;
const MINIMAL_LINE: &str = r#"127.0.0.1 - - [01/Jan/2022:00:00:00 +0000] "GET / HTTP/1.1" 200 10 "-" "-""#;
const BAD_TIMESTAMP: &str = r#"127.0.0.1 - - [01/Foo/2022:00:00:00 +0000] "GET / HTTP/1.1" 200 10 "-" "-""#;

/// Benchmark 严格解析
fn bench_try_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("try_parse_line");

    group.bench_function("full", |b| {
        b.iter(|| try_parse_line(black_box(FULL_LINE.as_bytes())))
    });

    group.bench_function("minimal", |b| {
        b.iter(|| try_parse_line(black_box(MINIMAL_LINE.as_bytes())))
    });

    group.bench_function("unrecognized", |b| {
        b.iter(|| try_parse_line(black_box(b"not a log line".as_slice())))
    });

    group.finish();
}

/// Benchmark 带诊断的解析（失败路径会写入 MemorySink）
fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");
    let parser = WeblogParser::with_sink(MemorySink::new());

    group.bench_function("full", |b| {
        b.iter(|| parser.parse_line(black_box(FULL_LINE.as_bytes())))
    });

    group.bench_function("bad_timestamp", |b| {
        b.iter(|| {
            let result = parser.parse_line(black_box(BAD_TIMESTAMP.as_bytes()));
            parser.sink().clear();
            result
        })
    });

    group.finish();
}

criterion_group!(benches, bench_try_parse_line, bench_parse_line);
criterion_main!(benches);
