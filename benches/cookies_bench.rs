use chromejar::cookies::monster::CookieMonster;
use chromejar::cookies::parsedcookie::ParsedCookie;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use time::OffsetDateTime;
use url::Url;

fn benchmark_cookie_insert(c: &mut Criterion) {
    let store = CookieMonster::new();
    let url = Url::parse("https://example.com").unwrap();
    let now = OffsetDateTime::now_utc();

    c.bench_function("cookie_parse_and_save", |b| {
        b.iter(|| {
            store
                .set_cookie_line_for_url(
                    black_box(&url),
                    black_box("foo=bar; Path=/; Secure"),
                    now,
                ).unwrap();
        })
    });
}

fn benchmark_cookie_get(c: &mut Criterion) {
    let store = CookieMonster::new();
    let url = Url::parse("https://example.com/foo/bar").unwrap();
    let now = OffsetDateTime::now_utc();
    // Pre-populate
    for i in 0..100 {
        store.set_cookie_line_for_url(&url, &format!("cookie{}=val; Path=/foo", i), now).unwrap();
    }

    c.bench_function("cookie_get_for_url", |b| {
        b.iter(|| {
            black_box(store.cookies_for_url(black_box(&url), now).unwrap());
        })
    });
}

fn benchmark_set_cookie_parsed(c: &mut Criterion) {
    let store = CookieMonster::new();
    let now = OffsetDateTime::now_utc();
    let mut cookie = ParsedCookie::new("sid", "abc");
    cookie.domain = ".example.com".to_string();

    c.bench_function("set_cookie_domain_scoped", |b| {
        b.iter(|| {
            store.set_cookie("https", black_box("www.example.com"), "/", &cookie, now).unwrap();
        })
    });
}

fn benchmark_parse_line(c: &mut Criterion) {
    let line = "NID=99=YsDT5i3E-CXax-; expires=Wed, 23-Nov-2011 01:05:03 UTC; path=/; domain=.google.ch; HttpOnly";

    c.bench_function("parse_set_cookie_line", |b| {
        b.iter(|| black_box(ParsedCookie::parse(black_box(line)).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_cookie_insert,
    benchmark_cookie_get,
    benchmark_set_cookie_parsed,
    benchmark_parse_line
);
criterion_main!(benches);
