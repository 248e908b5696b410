use minibayes::prelude::*;

use rand::Rng;
use rand::rngs::StdRng;
use rand::SeedableRng;


const ROUND_TRIP_TOLERANCE: f64 = 1e-8;
const ROW_SUM_TOLERANCE: f64 = 1e-6;


/// A 6 x 100 matrix of small non-negative integer counts with
/// three balanced classes.
/// Each class gets extra counts on its own block of features,
/// so the training set is cleanly separable.
fn count_fixture() -> (DenseMatrix, Vec<i64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let y = vec![1, 1, 2, 2, 3, 3];

    let rows = (0..6).map(|i| {
            let class = i / 2;
            (0..100).map(|j| {
                    let base = rng.gen_range(0..5) as f64;
                    let boost = if (j / 33).min(2) == class { 5.0 } else { 0.0 };
                    base + boost
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    (DenseMatrix::from_rows(&rows).unwrap(), y)
}


#[test]
fn multinomial_nb_recovers_training_labels() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new();
    let predictions = clf.fit(&x, &y)
        .unwrap()
        .predict(&x)
        .unwrap();

    assert_eq!(predictions, y);
}


#[test]
fn multinomial_nb_log_proba_agrees_with_proba() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new();
    clf.fit(&x, &y).unwrap();

    let proba = clf.predict_proba(&x).unwrap();
    let log_proba = clf.predict_log_proba(&x).unwrap();

    assert_eq!(proba.shape(), (6, 3));

    for (&p, &lp) in proba.as_slice().iter().zip(log_proba.as_slice()) {
        assert!(
            (p.ln() - lp).abs() < ROUND_TRIP_TOLERANCE,
            "p = {p}, ln(p) = {}, log_proba = {lp}", p.ln(),
        );
    }
}


#[test]
fn multinomial_nb_proba_rows_sum_to_one() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new();
    clf.fit(&x, &y).unwrap();

    let proba = clf.predict_proba(&x).unwrap();
    for row in proba.rows() {
        let total = row.iter().sum::<f64>();
        assert!((total - 1f64).abs() < ROW_SUM_TOLERANCE, "sum = {total}");
    }
}


#[test]
fn multinomial_nb_predict_matches_argmax_of_log_proba() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new();
    clf.fit(&x, &y).unwrap();

    let classes = clf.classes().unwrap().to_vec();
    let log_proba = clf.predict_log_proba(&x).unwrap();
    let predictions = clf.predict(&x).unwrap();

    for (row, &prediction) in log_proba.rows().zip(&predictions) {
        let mut best = 0;
        for (k, &score) in row.iter().enumerate().skip(1) {
            if score > row[best] { best = k; }
        }
        assert_eq!(classes[best], prediction);
    }
}


#[test]
fn multinomial_nb_refit_is_idempotent() {
    let (x, y) = count_fixture();

    let mut once = MultinomialNB::new();
    once.fit(&x, &y).unwrap();

    let mut twice = MultinomialNB::new();
    twice.fit(&x, &y).unwrap();
    twice.fit(&x, &y).unwrap();

    assert_eq!(once, twice);
    assert_eq!(
        once.predict_proba(&x).unwrap(),
        twice.predict_proba(&x).unwrap(),
    );
}


#[test]
fn multinomial_nb_lidstone_smoothing_is_accepted() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new().alpha(0.5);
    let predictions = clf.fit(&x, &y)
        .unwrap()
        .predict(&x)
        .unwrap();

    assert_eq!(predictions, y);
}


#[test]
fn multinomial_nb_rejects_zero_alpha() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new().alpha(0.0);
    assert_eq!(
        clf.fit(&x, &y).err(),
        Some(NaiveBayesError::InvalidSmoothing { alpha: 0.0 }),
    );
}


#[test]
fn multinomial_nb_rejects_negative_alpha() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new().alpha(-1.0);
    assert_eq!(
        clf.fit(&x, &y).err(),
        Some(NaiveBayesError::InvalidSmoothing { alpha: -1.0 }),
    );
}


#[test]
fn multinomial_nb_unfitted_prediction_fails() {
    let (x, _) = count_fixture();
    let clf = MultinomialNB::<i64>::new();

    assert_eq!(clf.predict(&x).err(), Some(NaiveBayesError::NotFitted));
    assert_eq!(clf.predict_proba(&x).err(), Some(NaiveBayesError::NotFitted));
    assert_eq!(
        clf.predict_log_proba(&x).err(),
        Some(NaiveBayesError::NotFitted),
    );
}


#[test]
fn multinomial_nb_rejects_mismatched_feature_count() {
    let (x, y) = count_fixture();

    let mut clf = MultinomialNB::new();
    clf.fit(&x, &y).unwrap();

    let narrow = DenseMatrix::from_rows(&[[1.0, 2.0]]).unwrap();
    assert_eq!(
        clf.predict(&narrow).err(),
        Some(NaiveBayesError::FeatureCountMismatch { expected: 100, got: 2 }),
    );
}


#[test]
fn multinomial_nb_rejects_mismatched_target_length() {
    let (x, _) = count_fixture();
    let y = vec![1, 2];

    let mut clf = MultinomialNB::new();
    assert_eq!(
        clf.fit(&x, &y).err(),
        Some(NaiveBayesError::TargetLenMismatch { rows: 6, targets: 2 }),
    );
}
