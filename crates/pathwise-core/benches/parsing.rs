use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pathwise_core::bank::QuestionBank;
use pathwise_core::parser::{parse_answers_str, parse_question_bank_str, question_bank_to_toml};

fn bench_bank_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_parsing");

    let standard_toml =
        question_bank_to_toml(&QuestionBank::standard()).expect("standard bank serializes");
    let large_toml = generate_bank_toml(600);

    group.bench_function("standard_90", |b| {
        b.iter(|| {
            parse_question_bank_str(
                black_box(&standard_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("600_questions", |b| {
        b.iter(|| {
            parse_question_bank_str(black_box(&large_toml), black_box("bench.toml".as_ref()))
        })
    });

    group.finish();
}

fn bench_answer_parsing(c: &mut Criterion) {
    let json = {
        let entries: Vec<String> = (1..=90).map(|id| format!("\"{id}\": {}", id % 5 + 1)).collect();
        format!("{{{}}}", entries.join(", "))
    };

    c.bench_function("answers_90", |b| {
        b.iter(|| parse_answers_str(black_box(&json), black_box("bench.json".as_ref())))
    });
}

fn generate_bank_toml(n: u32) -> String {
    const INTERESTS: [&str; 6] = [
        "REALISTIC",
        "INVESTIGATIVE",
        "ARTISTIC",
        "SOCIAL",
        "ENTERPRISING",
        "CONVENTIONAL",
    ];
    let mut s = String::new();
    s.push_str(
        r#"[bank]
name = "Benchmark"
version = "1.0"
"#,
    );
    for id in 1..=n {
        s.push_str(&format!(
            r#"
[[questions]]
id = {id}
text = "Benchmark statement {id}"
category = "INTEREST"
sub_category = "{}"
"#,
            INTERESTS[(id % 6) as usize]
        ));
    }
    s
}

criterion_group!(benches, bench_bank_parsing, bench_answer_parsing);
criterion_main!(benches);
