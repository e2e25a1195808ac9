use prepnote_core::{
    cosine_similarity, embed, rank_documents, Document, SimilarityError, EMBEDDING_DIM,
};

#[test]
fn embed_is_unit_length_except_for_blank_text() {
    let vector = embed("fundamental rights and duties");
    assert_eq!(vector.len(), EMBEDDING_DIM);
    let norm: f64 = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
    assert!((norm - 1.0).abs() < 1e-9);

    let blank = embed("   \n\t");
    assert_eq!(blank.len(), EMBEDDING_DIM);
    assert!(blank.iter().all(|v| *v == 0.0));
}

#[test]
fn case_only_differences_embed_identically() {
    assert_eq!(embed("UPSC Polity"), embed("UPSC polity"));
}

#[test]
fn federalism_documents_outrank_banking_reforms() {
    let documents: Vec<Document> = vec![
        Document::new("federalism in india"),
        Document::new("banking reforms"),
        Document::new("indian federal structure"),
    ];

    let results = rank_documents("federalism india", documents, 2);
    let texts: Vec<&str> = results
        .iter()
        .map(|ranked| ranked.document.text.as_str())
        .collect();

    assert_eq!(results.len(), 2);
    assert!(texts.contains(&"federalism in india"));
    assert!(texts.contains(&"indian federal structure"));
    assert!(!texts.contains(&"banking reforms"));
}

#[test]
fn ranking_is_pure_and_restartable() {
    let build_documents = || -> Vec<Document> {
        vec![
            Document::new("ancient history of india"),
            Document::new("medieval trade routes"),
            Document::new("history of ancient rome"),
        ]
    };

    let first = rank_documents("ancient history", build_documents(), 3);
    let second = rank_documents("ancient history", build_documents(), 3);
    assert_eq!(first, second);
}

#[test]
fn cosine_similarity_of_a_vector_with_itself_is_one() {
    let vector = embed("disaster management framework");
    let score = cosine_similarity(&vector, &vector).unwrap();
    assert!((score - 1.0).abs() < 1e-9);
}

#[test]
fn cosine_similarity_rejects_mismatched_dimensions() {
    let err = cosine_similarity(&[1.0, 2.0, 3.0], &[1.0, 2.0]).unwrap_err();
    assert_eq!(
        err,
        SimilarityError::DimensionMismatch { left: 3, right: 2 }
    );
}
