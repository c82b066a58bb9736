// Unit tests for the recommendation scorer

use freelance_recommender::core::{
    rank_by_rating,
    scoring::{calculate_recommendation_score, DEFAULT_EXPERIENCE_CAP},
    skills::RequiredSkills,
    Recommender,
};
use freelance_recommender::models::{Freelancer, Ranking, Requirement, ScoringWeights};

fn create_freelancer(id: &str, skills: &[&str], rating: f64, completeness: f64, projects: u32) -> Freelancer {
    Freelancer::new(id)
        .with_skills(skills.iter().copied())
        .with_rating(rating)
        .with_profile_completeness(completeness)
        .with_completed_projects(projects)
}

fn sample_pool() -> Vec<Freelancer> {
    vec![
        create_freelancer("1", &["React", "TypeScript"], 4.2, 80.0, 12),
        create_freelancer("2", &["Python", "Django"], 4.9, 95.0, 40),
        create_freelancer("3", &["react native", "Swift"], 3.1, 40.0, 3),
        create_freelancer("4", &["Node.js", "Express", "MongoDB"], 4.6, 70.0, 22),
        create_freelancer("5", &[], 2.0, 10.0, 0),
        create_freelancer("6", &["React", "Node"], 4.6, 100.0, 18),
        create_freelancer("7", &["figma"], 5.0, 100.0, 60),
    ]
}

#[test]
fn test_null_requirements_is_rating_permutation() {
    let pool = sample_pool();
    let ranking = Recommender::with_default_weights().rank(&pool, None);

    let ranked = match ranking {
        Ranking::Rating(list) => list,
        Ranking::Skills(_) => panic!("expected rating ranking"),
    };

    assert_eq!(ranked.len(), pool.len());
    for pair in ranked.windows(2) {
        assert!(pair[0].rating >= pair[1].rating, "Not sorted by rating");
    }

    let mut input_ids: Vec<_> = pool.iter().map(|f| f.id.clone()).collect();
    let mut output_ids: Vec<_> = ranked.iter().map(|f| f.id.clone()).collect();
    input_ids.sort();
    output_ids.sort();
    assert_eq!(input_ids, output_ids);

    // Equal ratings (4 and 6) keep input order
    let pos4 = ranked.iter().position(|f| f.id == "4").unwrap();
    let pos6 = ranked.iter().position(|f| f.id == "6").unwrap();
    assert!(pos4 < pos6);
}

#[test]
fn test_null_requirements_adds_no_score_fields() {
    let ranking = Recommender::with_default_weights().rank(&sample_pool(), None);
    let value = serde_json::to_value(&ranking).unwrap();

    for item in value.as_array().unwrap() {
        assert!(item.get("recommendationScore").is_none());
        assert!(item.get("skillMatchCount").is_none());
    }
}

#[test]
fn test_rating_scenario_order() {
    let freelancers = vec![
        create_freelancer("a", &[], 4.8, 0.0, 0),
        create_freelancer("b", &[], 3.2, 0.0, 0),
    ];
    let ranked = rank_by_rating(&freelancers);
    assert_eq!(ranked[0].rating, 4.8);
    assert_eq!(ranked[1].rating, 3.2);
}

#[test]
fn test_scored_output_above_threshold_and_reproducible() {
    let recommender = Recommender::with_default_weights();
    let requirement = Requirement::new(["React", "Node"]);
    let required = RequiredSkills::from_requirement(&requirement).unwrap();
    let pool = sample_pool();

    let scored = match recommender.rank(&pool, Some(&requirement)) {
        Ranking::Skills(list) => list,
        Ranking::Rating(_) => panic!("expected skill ranking"),
    };

    assert!(!scored.is_empty());
    for item in &scored {
        assert!(item.recommendation_score > 30);
        let again = calculate_recommendation_score(
            &item.freelancer,
            &required,
            &ScoringWeights::default(),
            DEFAULT_EXPERIENCE_CAP,
        );
        assert_eq!(again.recommendation_score, item.recommendation_score);
        assert_eq!(again.skill_match_count, item.skill_match_count);
        assert_eq!(item.total_required_skills, 2);
    }

    for pair in scored.windows(2) {
        assert!(pair[0].recommendation_score >= pair[1].recommendation_score);
    }
}

#[test]
fn test_ranking_is_deterministic() {
    let recommender = Recommender::with_default_weights();
    let requirement = Requirement::new(["react", "python", "node"]);
    let pool = sample_pool();

    let first = recommender.rank(&pool, Some(&requirement));
    let second = recommender.rank(&pool, Some(&requirement));

    assert_eq!(first, second);
}

#[test]
fn test_exact_skill_match_without_experience_scores_65() {
    let freelancer = create_freelancer("f", &["Rust"], 5.0, 0.0, 0);
    let ranking = Recommender::with_default_weights().rank(&[freelancer], Some(&Requirement::new(["rust"])));

    match ranking {
        Ranking::Skills(list) => {
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].recommendation_score, 65);
        }
        Ranking::Rating(_) => panic!("expected skill ranking"),
    }
}

#[test]
fn test_no_overlap_scores_zero_and_is_excluded() {
    let freelancer = create_freelancer("f", &["Photoshop"], 0.0, 0.0, 0);
    let required = RequiredSkills::new(&["rust"]).unwrap();

    let score = calculate_recommendation_score(&freelancer, &required, &ScoringWeights::default(), DEFAULT_EXPERIENCE_CAP);
    assert_eq!(score.recommendation_score, 0);

    let ranking = Recommender::with_default_weights().rank(&[freelancer], Some(&Requirement::new(["rust"])));
    assert!(ranking.is_empty());
}

#[test]
fn test_full_profile_scores_100() {
    let freelancer = create_freelancer("f", &["React", "Node"], 5.0, 100.0, 25);
    let ranking = Recommender::with_default_weights().rank(&[freelancer], Some(&Requirement::new(["react"])));

    match ranking {
        Ranking::Skills(list) => {
            assert_eq!(list[0].recommendation_score, 100);
            assert_eq!(list[0].skill_match_count, 1);
            assert_eq!(list[0].total_required_skills, 1);
        }
        Ranking::Rating(_) => panic!("expected skill ranking"),
    }
}

#[test]
fn test_input_not_mutated() {
    let pool = sample_pool();
    let snapshot = pool.clone();

    let _ = Recommender::with_default_weights().rank(&pool, Some(&Requirement::new(["react"])));
    let _ = Recommender::with_default_weights().rank(&pool, None);

    assert_eq!(pool, snapshot);
}

#[test]
fn test_padded_required_skill_matches_literally() {
    let freelancer = create_freelancer("f", &["Django"], 5.0, 0.0, 0);
    let required = RequiredSkills::new(&[" go"]).unwrap();

    // " go" is not a substring of "django": only the rating counts
    let score = calculate_recommendation_score(&freelancer, &required, &ScoringWeights::default(), DEFAULT_EXPERIENCE_CAP);
    assert_eq!(score.skill_match_count, 0);
    assert_eq!(score.recommendation_score, 25);

    let ranking = Recommender::with_default_weights().rank(&[freelancer], Some(&Requirement::new([" go"])));
    assert!(ranking.is_empty());
}

#[test]
fn test_rating_ranking_survives_nan() {
    let pool: Vec<Freelancer> = (0..40)
        .map(|i| {
            let rating = if i % 3 == 0 { f64::NAN } else { 1.0 + (i % 4) as f64 };
            create_freelancer(&i.to_string(), &[], rating, 0.0, 0)
        })
        .collect();

    let ranking = Recommender::default().rank(&pool, None);
    assert_eq!(ranking.len(), 40);

    // Real ratings first, NaN ratings last in input order
    let ids: Vec<String> = ranking.ids().into_iter().map(String::from).collect();
    let nan_ids: Vec<String> = (0..40).filter(|i| i % 3 == 0).map(|i| i.to_string()).collect();
    assert_eq!(ids[ids.len() - nan_ids.len()..], nan_ids[..]);
}
