//! End-to-end classification tests
//!
//! Trains small English/German models through the public API and checks
//! the observable guarantees: correct labels for characteristic text,
//! undecidable for no signal, deterministic tie-breaking.

use langprofile::classifier::{Model, ModelSet};
use langprofile::models::{Language, Undecidable};
use langprofile::preprocess::Cleaner;

const ENGLISH: &str = "The children are playing in the garden with the dog. \
    The weather is nice and the sun is shining over the houses. \
    We walked through the park and then went home for dinner. \
    My brother thinks that the train will be late again this evening. \
    They talked about the work they had done together that week.";

const GERMAN: &str = "Die Kinder spielen im Garten mit dem Hund. \
    Das Wetter ist schön und die Sonne scheint über den Häusern. \
    Wir gingen durch den Park und dann nach Hause zum Abendessen. \
    Mein Bruder glaubt, dass der Zug heute Abend wieder zu spät kommt. \
    Sie sprachen über die Arbeit, die sie zusammen gemacht hatten.";

fn corpora() -> Vec<(Language, String)> {
    let cleaner = Cleaner::default();
    vec![
        (Language::new("en"), cleaner.clean(ENGLISH)),
        (Language::new("de"), cleaner.clean(GERMAN)),
    ]
}

fn classify(model: &Model, text: &str) -> Result<Language, Undecidable> {
    model.classify(&Cleaner::default().clean(text))
}

#[test]
fn test_english_sentence_is_english() {
    let model = Model::build(3, &corpora()).unwrap();
    assert_eq!(
        classify(&model, "The dog is playing with the children"),
        Ok(Language::new("en"))
    );
}

#[test]
fn test_german_sentence_is_german() {
    let model = Model::build(3, &corpora()).unwrap();
    assert_eq!(
        classify(&model, "Die Sonne scheint über dem Garten"),
        Ok(Language::new("de"))
    );
}

#[test]
fn test_empty_query_is_undecidable() {
    let model = Model::build(3, &corpora()).unwrap();
    assert_eq!(classify(&model, ""), Err(Undecidable { order: 3 }));
    assert_eq!(classify(&model, "  123 !!! "), Err(Undecidable { order: 3 }));
}

#[test]
fn test_known_ngram_always_gives_configured_language() {
    let corpora = corpora();
    let model = Model::build(2, &corpora).unwrap();
    for text in ["hund", "the", "garten park"] {
        let language = classify(&model, text).unwrap();
        assert!(corpora.iter().any(|(l, _)| *l == language));
    }
    // neither corpus contains q, x or j
    for text in ["qqq", "xq jx"] {
        assert_eq!(classify(&model, text), Err(Undecidable { order: 2 }));
    }
}

#[test]
fn test_distinguishing_trigram_wins_between_near_identical_languages() {
    let base = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do eiusmod tempor";
    let corpora = vec![
        (Language::new("mm"), format!("{} mom mom mom", base)),
        (Language::new("zz"), format!("{} zap zap zap", base)),
    ];
    let model = Model::build(3, &corpora).unwrap();

    assert_eq!(model.classify("zap dolor"), Ok(Language::new("zz")));
    assert_eq!(model.classify("mom dolor"), Ok(Language::new("mm")));

    let ranked = model.rank("zap dolor").unwrap();
    assert_eq!(ranked[0].language, Language::new("zz"));
    assert!(ranked[0].distance < ranked[1].distance);
}

#[test]
fn test_identical_corpora_tie_to_first_language() {
    let text = Cleaner::default().clean(ENGLISH);
    let forward = Model::build(
        3,
        &[(Language::new("en"), text.as_str()), (Language::new("en-gb"), text.as_str())],
    )
    .unwrap();
    let backward = Model::build(
        3,
        &[(Language::new("en-gb"), text.as_str()), (Language::new("en"), text.as_str())],
    )
    .unwrap();

    assert_eq!(forward.classify("the weather"), Ok(Language::new("en")));
    assert_eq!(backward.classify("the weather"), Ok(Language::new("en-gb")));
}

#[test]
fn test_vocabulary_grows_with_order() {
    let models = ModelSet::build(&[1, 2, 3, 4], &corpora()).unwrap();
    let sizes: Vec<usize> = models
        .models()
        .iter()
        .map(|m| m.vocabulary().len())
        .collect();
    // growth only holds until a small corpus runs out of distinct n-grams
    assert!(sizes[..3].windows(2).all(|w| w[0] < w[1]), "sizes: {:?}", sizes);
    assert!(sizes[3] > sizes[0], "sizes: {:?}", sizes);
}

#[test]
fn test_observed_dimensions_bounded_by_vocabulary() {
    let models = ModelSet::build(&[1, 2, 3, 5], &corpora()).unwrap();
    for model in models.models() {
        let query = model.weigh_query("the children went home");
        assert!(query.support_len() <= model.vocabulary().len());
        assert!(query.support_len() < model.vocabulary().len());
    }
}

#[test]
fn test_classification_is_deterministic() {
    let model = Model::build(3, &corpora()).unwrap();
    let texts = ["the park", "der park", "garten garden", "sonne sun"];
    let first: Vec<_> = texts.iter().map(|t| model.classify(t)).collect();
    for _ in 0..5 {
        let again: Vec<_> = texts.iter().map(|t| model.classify(t)).collect();
        assert_eq!(again, first);
        assert_eq!(model.classify_batch(&texts), first);
    }
}

#[test]
fn test_models_of_different_orders_are_independent() {
    let corpora = corpora();
    let set = ModelSet::build(&[2, 3], &corpora).unwrap();
    assert_eq!(set.get(3), Some(&Model::build(3, &corpora).unwrap()));
    assert_ne!(
        set.get(2).unwrap().vocabulary().len(),
        set.get(3).unwrap().vocabulary().len()
    );
}
