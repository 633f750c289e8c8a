use apest_score::scoring::{score, ApestDimension, InvalidInputError, Question, Response};

fn tagged(id: &str, dimension: ApestDimension) -> Question {
    Question::new(id).with_dimension(dimension)
}

fn full_assessment() -> Vec<Question> {
    vec![
        tagged("a1", ApestDimension::Apostolic),
        tagged("a2", ApestDimension::Apostolic).reversed(),
        tagged("p1", ApestDimension::Prophetic).with_weight(2.0),
        tagged("e1", ApestDimension::Evangelistic),
        tagged("s1", ApestDimension::Shepherding).with_weight(0.5),
        tagged("t1", ApestDimension::Teaching),
        Question::new("general").optional(),
    ]
}

fn full_responses() -> Vec<Response> {
    vec![
        Response::answered("a1", 5.0),
        Response::answered("a2", 2.0),
        Response::answered("p1", 3.0),
        Response::answered("e1", 1.0),
        Response::answered("s1", 4.0),
        Response::skipped("t1"),
        Response::answered("general", 3.0),
    ]
}

#[test]
fn two_apostolic_questions_average() {
    let questions = vec![
        tagged("q1", ApestDimension::Apostolic),
        tagged("q2", ApestDimension::Apostolic),
    ];
    let responses = vec![Response::answered("q1", 5.0), Response::answered("q2", 3.0)];

    let result = score(&questions, &responses).expect("valid input");
    assert_eq!(result.dimension_score(ApestDimension::Apostolic), Some(4));
    assert_eq!(result.total_score, 8);
    assert_eq!(result.max_possible_score, 10);
}

#[test]
fn reverse_scored_weighted_prophetic_question() {
    let questions = vec![tagged("q1", ApestDimension::Prophetic).with_weight(2.0).reversed()];
    let responses = vec![Response::answered("q1", 2.0)];

    let result = score(&questions, &responses).expect("valid input");
    assert_eq!(result.total_score, 8);
    assert_eq!(result.max_possible_score, 10);
    assert_eq!(result.dimension_score(ApestDimension::Prophetic), Some(4));
}

#[test]
fn skipped_question_leaves_two_dimensions() {
    let questions = vec![
        tagged("q1", ApestDimension::Apostolic),
        tagged("q2", ApestDimension::Evangelistic),
        tagged("q3", ApestDimension::Teaching),
    ];
    let responses = vec![
        Response::answered("q1", 3.0),
        Response::skipped("q2"),
        Response::answered("q3", 4.0),
    ];

    let result = score(&questions, &responses).expect("valid input");
    assert_eq!(result.dimension_scores.len(), 2);
    assert_eq!(result.total_score, 7);
    assert!(result.dimension_score(ApestDimension::Evangelistic).is_none());
}

#[test]
fn nothing_answered_yields_empty_result() {
    let questions = full_assessment();
    let responses = vec![Response::skipped("a1"), Response::unanswered("p1")];

    let result = score(&questions, &responses).expect("valid input");
    assert_eq!(result.total_score, 0);
    assert_eq!(result.max_possible_score, 0);
    assert!(result.dimension_scores.is_empty());
    assert_eq!(result.primary_gift, None);
    assert_eq!(result.secondary_gift, None);
    assert_eq!(result.completion_percentage, 100);
}

#[test]
fn top_tie_resolves_by_declaration_order() {
    let questions = vec![
        tagged("t", ApestDimension::Teaching),
        tagged("s", ApestDimension::Shepherding),
    ];
    let responses = vec![Response::answered("t", 5.0), Response::answered("s", 5.0)];

    let result = score(&questions, &responses).expect("valid input");
    assert_eq!(result.primary_gift, Some(ApestDimension::Shepherding));
    assert_eq!(result.secondary_gift, Some(ApestDimension::Teaching));
}

#[test]
fn scoring_is_deterministic() {
    let questions = full_assessment();
    let responses = full_responses();

    let first = score(&questions, &responses).expect("valid input");
    let second = score(&questions, &responses).expect("valid input");
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn skipping_equals_omitting() {
    let questions = full_assessment();
    let with_skip = full_responses();
    let without: Vec<Response> = with_skip.iter().filter(|r| !r.skipped).cloned().collect();

    assert_eq!(score(&questions, &with_skip), score(&questions, &without));
}

#[test]
fn full_assessment_is_bounded_and_gifts_distinct() {
    let result = score(&full_assessment(), &full_responses()).expect("valid input");

    // a1 5, a2 6-2=4, p1 3*2, e1 1, s1 4*0.5, general 3 -> 21
    assert_eq!(result.total_score, 21);
    // weights 1+1+2+1+0.5+1 = 6.5 -> 32.5 -> 33
    assert_eq!(result.max_possible_score, 33);
    assert!(result.total_score <= result.max_possible_score);

    assert_eq!(result.dimension_score(ApestDimension::Apostolic), Some(5));
    assert_eq!(result.dimension_score(ApestDimension::Shepherding), Some(4));
    assert_eq!(result.primary_gift, Some(ApestDimension::Apostolic));
    assert_eq!(result.secondary_gift, Some(ApestDimension::Shepherding));
    assert_ne!(result.primary_gift, result.secondary_gift);
}

#[test]
fn invalid_inputs_are_rejected() {
    let questions = full_assessment();

    assert_eq!(score(&[], &full_responses()), Err(InvalidInputError::NoQuestions));

    for bad in [6.0, 0.0, 3.5] {
        let responses = vec![Response::answered("e1", bad)];
        let err = score(&questions, &responses).expect_err("out of range");
        assert_eq!(err.question_id(), Some("e1"));
    }

    let responses = vec![Response::answered("missing", 3.0)];
    let err = score(&questions, &responses).expect_err("orphan");
    assert!(err.to_string().contains("missing"));
}

#[test]
fn totals_scale_linearly_with_weight() {
    for weight in [1.0, 2.0, 3.0, 7.0] {
        for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
            for reversed in [false, true] {
                let mut question = tagged("q", ApestDimension::Evangelistic);
                if reversed {
                    question = question.reversed();
                }
                let responses = [Response::answered("q", value)];

                let base = score(&[question.clone().with_weight(weight)], &responses)
                    .expect("valid input");
                let tripled = score(&[question.with_weight(3.0 * weight)], &responses)
                    .expect("valid input");

                let case = format!("weight {weight}, value {value}, reversed {reversed}");
                assert_eq!(tripled.total_score, 3 * base.total_score, "{case}");
                assert_eq!(tripled.max_possible_score, 3 * base.max_possible_score, "{case}");
                assert_eq!(tripled.dimension_scores, base.dimension_scores, "{case}");
            }
        }
    }
}

#[test]
fn results_stay_within_bounds_across_mixed_inputs() {
    let weights = [0.0, 0.25, 1.0, 1.5, 4.0];
    for (shift, weight) in weights.iter().enumerate() {
        let questions: Vec<Question> = ApestDimension::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, dimension)| {
                let plain = tagged(&format!("{i}-plain"), *dimension).with_weight(*weight);
                let mirrored = tagged(&format!("{i}-reverse"), *dimension)
                    .with_weight(1.0 + i as f64)
                    .reversed();
                [plain, mirrored]
            })
            .collect();
        let responses: Vec<Response> = questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let value = ((i + shift) % 5 + 1) as f64;
                Response::answered(question.id.clone(), value)
            })
            .collect();

        let result = score(&questions, &responses).expect("valid input");
        assert!(result.total_score <= result.max_possible_score, "weight {weight}");
        assert_eq!(result.dimension_scores.len(), 5, "weight {weight}");
        for (dimension, dimension_score) in &result.dimension_scores {
            assert!(
                (1..=5).contains(dimension_score),
                "{dimension} scored {dimension_score} with weight {weight}"
            );
        }
        assert!(result.primary_gift.is_some());
        assert_ne!(result.primary_gift, result.secondary_gift);
    }
}

#[test]
fn oversized_weights_are_rejected_not_saturated() {
    let questions = vec![
        tagged("a1", ApestDimension::Apostolic).with_weight(1e308),
        tagged("a2", ApestDimension::Apostolic).with_weight(1e308),
        tagged("t1", ApestDimension::Teaching),
    ];
    let responses = vec![
        Response::answered("a1", 5.0),
        Response::answered("a2", 5.0),
        Response::answered("t1", 2.0),
    ];

    let err = score(&questions, &responses).expect_err("totals overflow");
    assert!(matches!(err, InvalidInputError::ScoreOverflow { .. }));
    assert_eq!(err.question_id(), Some("a1"));
}
