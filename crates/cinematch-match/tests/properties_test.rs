//! Behavioural properties of normalization, scoring and selection checked
//! over a fixed corpus of real-world titles.

use cinematch_match::{is_title_match, normalize, score, select_best, CandidateMovie};

const TITLES: &[&str] = &[
    "Inception",
    "The Shawshank Redemption",
    "La vita è bella",
    "Life Is Beautiful",
    "Amélie",
    "Le Fabuleux Destin d'Amélie Poulain",
    "Spider-Man: Into the Spider-Verse",
    "WALL-E",
    "Mission: Impossible - Dead Reckoning Part One",
    "Léon: The Professional",
    "Crouching Tiger, Hidden Dragon",
    "8½",
    "  padded  ",
    "",
    "!!!",
    "Ünïcödé Tïtlé",
];

#[test]
fn normalize_is_idempotent() {
    for title in TITLES {
        let once = normalize(title);
        assert_eq!(normalize(&once), once, "not idempotent for {title:?}");
    }
}

#[test]
fn title_match_is_symmetric() {
    for a in TITLES {
        for b in TITLES {
            assert_eq!(
                is_title_match(a, b),
                is_title_match(b, a),
                "asymmetric for {a:?} / {b:?}"
            );
        }
    }
}

#[test]
fn title_match_is_reflexive() {
    for title in TITLES {
        assert!(is_title_match(title, title));
    }
}

#[test]
fn exact_partial_none_ordering_holds_for_every_year_and_vote_count() {
    let years = [None, Some("1999"), Some("2010")];
    let votes = [None, Some("1"), Some("999"), Some("1,234,567")];

    for year in years {
        for vote in votes {
            let with_votes = |c: CandidateMovie| match vote {
                Some(v) => c.with_votes(v),
                None => c,
            };
            let exact = with_votes(CandidateMovie::new("The Matrix", "1999", "a"));
            let partial = with_votes(CandidateMovie::new("The Matrix Reloaded", "1999", "b"));
            let neither = with_votes(CandidateMovie::new("Ronin", "1999", "c"));

            let q = normalize("The Matrix");
            let e = score(&exact, &q, year);
            let p = score(&partial, &q, year);
            let n = score(&neither, &q, year);
            assert!(e >= p, "exact < partial for {year:?}/{vote:?}");
            assert!(p >= n, "partial < none for {year:?}/{vote:?}");
        }
    }
}

#[test]
fn selection_is_order_sensitive_only_on_ties() {
    let a = CandidateMovie::new("Solaris", "1972", "tt0069293");
    let b = CandidateMovie::new("Solaris", "2002", "tt0307479");

    let forward = [a.clone(), b.clone()];
    let backward = [b.clone(), a.clone()];

    // Tie without a year: the first occurrence wins either way round.
    assert_eq!(select_best(&forward, "Solaris", None).unwrap(), &a);
    assert_eq!(select_best(&backward, "Solaris", None).unwrap(), &b);

    // A year breaks the tie independently of order.
    assert_eq!(select_best(&forward, "Solaris", Some("2002")).unwrap(), &b);
    assert_eq!(select_best(&backward, "Solaris", Some("2002")).unwrap(), &b);
}
