//! End-to-end session flows: mutate, validate, project.

use ldcraft_session::{
    DiagnosticLevel, FieldPath, FormSession, IdentifierKey, Mutation, MutationOutcome,
    NumberField, ReviewTextField, TextField,
};

#[test]
fn test_dependent_revalidation_on_bound_change() {
    let mut session = FormSession::new();

    session.apply(Mutation::AddReview);
    session.apply(Mutation::SetReviewRating {
        index: 0,
        raw: "4".to_string(),
    });
    assert!(session
        .diagnostics_for(FieldPath::ReviewRating { index: 0 })
        .is_empty());

    // No direct edit to the review: lowering the ceiling must re-flag it.
    session.apply(Mutation::SetNumber {
        field: NumberField::HighestRatingAllowed,
        raw: "3".to_string(),
    });

    let diagnostics = session.diagnostics_for(FieldPath::ReviewRating { index: 0 });
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message, "Rating must be at most 3");

    // Raising it back clears the message, again without touching the review.
    session.apply(Mutation::SetNumber {
        field: NumberField::HighestRatingAllowed,
        raw: "5".to_string(),
    });
    assert!(session
        .diagnostics_for(FieldPath::ReviewRating { index: 0 })
        .is_empty());
}

#[test]
fn test_review_removal_reindexes_diagnostics() {
    let mut session = FormSession::new();

    session.apply(Mutation::AddReview);
    session.apply(Mutation::AddReview);
    session.apply(Mutation::SetReviewRating {
        index: 1,
        raw: "9".to_string(),
    });

    assert!(session
        .diagnostics_for(FieldPath::ReviewRating { index: 1 })
        .len() == 1);

    // Removing the first review shifts the offender to index 0; the
    // diagnostics must follow.
    session.apply(Mutation::RemoveReview { index: 0 });

    assert!(session
        .diagnostics_for(FieldPath::ReviewRating { index: 1 })
        .is_empty());
    assert_eq!(
        session
            .diagnostics_for(FieldPath::ReviewRating { index: 0 })
            .len(),
        1
    );
}

#[test]
fn test_inverted_scale_warns_without_blocking() {
    let mut session = FormSession::new();

    session.apply(Mutation::SetNumber {
        field: NumberField::LowestRatingAllowed,
        raw: "4".to_string(),
    });
    session.apply(Mutation::SetNumber {
        field: NumberField::HighestRatingAllowed,
        raw: "2".to_string(),
    });

    let warnings: Vec<_> = session
        .diagnostics()
        .iter()
        .filter(|d| d.level == DiagnosticLevel::Warning)
        .collect();
    assert_eq!(warnings.len(), 1);

    // The session keeps working; the document still projects.
    assert_eq!(session.document()["aggregateRating"]["bestRating"], 2);
    assert_eq!(session.document()["aggregateRating"]["worstRating"], 4);
}

#[test]
fn test_projection_purity_through_session() {
    let mut session = FormSession::new();
    session.apply(Mutation::SetText {
        field: TextField::ProductName,
        value: "Shoe".to_string(),
    });

    let first = session.snippet();
    let second = session.snippet();

    assert_eq!(first, second);
    assert_eq!(session.version(), 1);
}

#[test]
fn test_end_to_end_scenario() {
    let mut session = FormSession::new();

    let edits = vec![
        Mutation::SetText {
            field: TextField::ProductName,
            value: "Shoe".to_string(),
        },
        Mutation::SetText {
            field: TextField::ImageUrl,
            value: "https://x.com/a.jpg".to_string(),
        },
        Mutation::ToggleIdentifier {
            key: IdentifierKey::Sku,
        },
        Mutation::SetIdentifierValue {
            key: IdentifierKey::Sku,
            value: "S-1".to_string(),
        },
        Mutation::SetNumber {
            field: NumberField::RatingValue,
            raw: "4".to_string(),
        },
        Mutation::SetNumber {
            field: NumberField::RatingCount,
            raw: "10".to_string(),
        },
        Mutation::AddReview,
        Mutation::SetReviewText {
            index: 0,
            field: ReviewTextField::Title,
            value: "Great".to_string(),
        },
        Mutation::SetReviewRating {
            index: 0,
            raw: "5".to_string(),
        },
    ];

    for edit in edits {
        assert_eq!(session.apply(edit), MutationOutcome::Applied);
    }

    assert!(session.diagnostics().is_empty());

    let doc = session.document();
    assert_eq!(doc["name"], "Shoe");
    assert_eq!(doc["image"], "https://x.com/a.jpg");
    assert_eq!(doc["sku"], "S-1");
    assert_eq!(doc["aggregateRating"]["ratingValue"], 4);
    assert_eq!(doc["aggregateRating"]["reviewCount"], 10);

    let reviews = doc["review"].as_array().unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0]["name"], "Great");
    assert_eq!(reviews[0]["reviewRating"]["ratingValue"], 5);
}
