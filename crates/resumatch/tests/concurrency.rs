//! Concurrency tests.
//!
//! One analyzer is shared by every thread; results must not depend on
//! interleaving.

use resumatch::{AnalysisResult, Analyzer, analyze_resume_against_job};
use std::sync::Arc;
use std::thread;

mod helpers;

use helpers::{COMPANY, CORPUS, JOB_POSTING, RESUME, init_tracing};

#[test]
fn test_shared_analyzer_across_threads() {
    init_tracing();

    let analyzer = Arc::new(Analyzer::with_defaults().unwrap());
    let expected = analyzer.analyze(RESUME, JOB_POSTING, Some(COMPANY)).unwrap();

    let results: Vec<AnalysisResult> = thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let analyzer = Arc::clone(&analyzer);
                scope.spawn(move || analyzer.analyze(RESUME, JOB_POSTING, Some(COMPANY)).unwrap())
            })
            .collect();

        handles.into_iter().map(|h| h.join().expect("analysis thread panicked")).collect()
    });

    for result in results {
        assert_eq!(result, expected);
    }
}

#[test]
fn test_default_entry_point_concurrent_first_use() {
    let results: Vec<AnalysisResult> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| analyze_resume_against_job(RESUME, JOB_POSTING, Some(COMPANY)).unwrap()))
            .collect();

        handles.into_iter().map(|h| h.join().expect("analysis thread panicked")).collect()
    });

    assert!(results.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn test_batch_matches_sequential() {
    let analyzer = Analyzer::with_defaults().unwrap();

    let pairs: Vec<(&str, &str)> = CORPUS
        .iter()
        .flat_map(|resume| CORPUS.iter().map(move |job| (*resume, *job)))
        .collect();

    let batch = analyzer.analyze_batch(&pairs, Some(COMPANY)).unwrap();
    let sequential: Vec<AnalysisResult> = pairs
        .iter()
        .map(|(resume, job)| analyzer.analyze(resume, job, Some(COMPANY)).unwrap())
        .collect();

    assert_eq!(batch.len(), pairs.len());
    assert_eq!(batch, sequential);
}

#[test]
fn test_batch_small_inputs() {
    let analyzer = Analyzer::with_defaults().unwrap();

    assert!(analyzer.analyze_batch(&[], None).unwrap().is_empty());

    let single = analyzer.analyze_batch(&[(RESUME, JOB_POSTING)], None).unwrap();
    assert_eq!(single, vec![analyzer.analyze(RESUME, JOB_POSTING, None).unwrap()]);
}
