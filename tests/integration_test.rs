// Integration tests for CineMatch
use cinematch::prelude::*;
use cinematch::{ExplainedRecommendation, RecommendResponse, SELF_MATCH};
use std::path::PathBuf;
use std::sync::Arc;

fn sample_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/movies.json");
    Catalog::from_path(path).unwrap()
}

fn ids(results: &[Recommendation<'_>]) -> Vec<u64> {
    results.iter().map(|r| r.item.id).collect()
}

#[test]
fn test_sample_catalog_loads() {
    let catalog = sample_catalog();
    assert_eq!(catalog.len(), 10);
    assert_eq!(catalog.resolve(1).unwrap().title, "Vikram");
    assert!(matches!(catalog.resolve(999), Err(Error::ItemNotFound(999))));
}

#[test]
fn test_recommendations_for_vikram() {
    let catalog = sample_catalog();
    let source = catalog.resolve(1).unwrap();

    let results = recommend(source, &catalog, DEFAULT_LIMIT);

    // Andhadhun, Drishyam, Baahubali and K.G.F all score 15; the first three
    // keep catalog order and K.G.F falls past the limit.
    assert_eq!(ids(&results), vec![2, 3, 4, 10, 8, 5, 6, 7]);
    let scores: Vec<i32> = results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![65, 59, 45, 30, 18, 15, 15, 15]);
}

#[test]
fn test_recommendation_invariants_for_every_source() {
    let catalog = sample_catalog();

    for source in &catalog {
        assert_eq!(score(source, source), SELF_MATCH);

        for limit in [0, 1, 3, DEFAULT_LIMIT, 100] {
            let results = recommend(source, &catalog, limit);
            assert!(results.len() <= limit);
            assert!(results.iter().all(|r| r.item.id != source.id));
            assert!(results.iter().all(|r| (1..=100).contains(&r.score)));
            assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        }
    }
}

#[test]
fn test_explained_recommendations() {
    let catalog = sample_catalog();
    let source = catalog.resolve(1).unwrap();
    let results = recommend(source, &catalog, 2);

    let explained = ExplainedRecommendation::from_list(source, &results);
    assert_eq!(explained[0].title, "Kaithi");
    assert_eq!(explained[0].reasons, vec!["Same Director", "Action, Thriller", "Same Language"]);
    assert_eq!(explained[1].title, "Master");
    assert_eq!(
        explained[1].reasons,
        vec!["Same Director", "Action", "Shared Cast: Vijay Sethupathi", "Same Language"]
    );
}

#[test]
fn test_response_json_shape() {
    let catalog = sample_catalog();
    let source = catalog.resolve(5).unwrap();
    let results = recommend(source, &catalog, 3);

    let response = RecommendResponse::new(source, &results, catalog.len());
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["source"]["title"], "Andhadhun");
    assert_eq!(json["result"].as_array().unwrap().len(), 3);
    // Drishyam shares Tabu, two genres and the language
    assert_eq!(json["result"][0]["id"], 6);
    assert_eq!(json["stats"]["candidates_count"], 10);
}

#[test]
fn test_custom_weights_change_ranking() {
    let catalog = sample_catalog();
    let source = catalog.resolve(1).unwrap();

    // Cast only: the two films sharing Vijay Sethupathi tie and keep catalog order
    let recommender = Recommender::new(SimilarityScorer::new(FeatureWeights::new(0, 0, 1, 0)));
    let results = recommender.recommend(source, &catalog);
    assert_eq!(ids(&results), vec![3, 4]);
}

#[test]
fn test_browse_then_recommend() {
    let catalog = sample_catalog();
    let telugu = BrowseQuery::new().language("Telugu").sort(SortKey::Year).apply(&catalog);
    assert_eq!(telugu.iter().map(|i| i.id).collect::<Vec<_>>(), vec![8, 7]);

    let results = recommend(telugu[0], &catalog, 1);
    assert_eq!(ids(&results), vec![7]);
    assert_eq!(explain(telugu[0], results[0].item)[0], "Same Director");
}

#[test]
fn test_concurrent_requests_share_snapshot() {
    let handle = CatalogHandle::new(sample_catalog());
    let snapshot: Arc<Catalog> = handle.snapshot();

    let expected: Vec<Vec<u64>> = snapshot
        .iter()
        .map(|source| ids(&recommend(source, &*snapshot, DEFAULT_LIMIT)))
        .collect();

    std::thread::scope(|scope| {
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let catalog = handle.snapshot();
                scope.spawn(move || {
                    catalog
                        .iter()
                        .map(|source| ids(&recommend(source, &*catalog, DEFAULT_LIMIT)))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        // Swapping the catalog does not disturb readers holding the old snapshot
        handle.replace(Catalog::empty());

        for worker in workers {
            assert_eq!(worker.join().unwrap(), expected);
        }
    });

    assert!(handle.snapshot().is_empty());
}
