use criterion::{black_box, criterion_group, criterion_main, Criterion};

use aeon_core::analyzer::analyze;
use aeon_core::model::Category;

const SHORT_ANSWER: &str = "C'est un projet excellent et motivant";

const LONG_ANSWER: &str = "Je suis passionné par l'innovation et la création de \
solutions qui ont un impact positif. Dans le travail, j'aime collaborer avec des \
équipes talentueuses et résoudre des défis complexes. Mon plan suit une stratégie \
claire, une méthode et une analyse posée, mais je garde de la flexibilité et je \
fais confiance à mon intuition quand la situation change. J'ai appris de mes \
erreurs, j'ai persévéré et j'ai surmonté chaque obstacle pour améliorer et \
optimiser ce que nous construisons ensemble, en équipe.";

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    group.bench_function("short/personality", |b| {
        b.iter(|| analyze(black_box(SHORT_ANSWER), black_box(Category::Personality)))
    });

    for category in Category::all() {
        group.bench_function(format!("long/{category}"), |b| {
            b.iter(|| analyze(black_box(LONG_ANSWER), black_box(category)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analyze);
criterion_main!(benches);
