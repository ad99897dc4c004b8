// benches/report.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use quotes_scrape::data::{MainCrawl, QuoteRecord, TagCrawl};
use quotes_scrape::report::Report;

// Roughly one full site: 100 main quotes, ~50 authors, 12 tags.
fn sample() -> (MainCrawl, Vec<TagCrawl>) {
    let mut main = MainCrawl::new();
    for i in 0..100 {
        main.accept_quote(&format!("quote {i}, with a comma"), &format!("Author {}", i % 50));
    }
    let tags = (0..12)
        .map(|t| {
            let mut crawl = TagCrawl::new(&format!("tag{t}"));
            for i in 0..30 {
                crawl.quotes.push(QuoteRecord::new(format!("tag quote {i}"), format!("Author {}", (i * 7 + t) % 60)));
            }
            crawl
        })
        .collect();
    (main, tags)
}

fn bench_report(c: &mut Criterion) {
    let (main, tags) = sample();

    c.bench_function("report_tally", |b| {
        b.iter(|| {
            let r = Report::from_crawls(black_box(&main), black_box(&tags));
            black_box(r.unique_authors())
        })
    });

    let report = Report::from_crawls(&main, &tags);
    c.bench_function("report_top5", |b| {
        b.iter(|| black_box(report.top(5).len()))
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
