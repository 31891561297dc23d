use lipsum_core::{
	generate_paragraph, generate_paragraphs, generate_sentence, generate_sentences, generate_words,
	GenerationConfig, GenerationError, Generator, LinePrefix, ParagraphSeparator, Vocabulary,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn word_count(sentence: &str) -> usize {
	sentence.split_whitespace().count()
}

fn sentences_of(paragraph: &str) -> Vec<&str> {
	paragraph
		.split_inclusive('.')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.collect()
}

#[test]
fn sentences_stay_within_bounds_for_many_configs() {
	let generator = Generator::default();
	let mut rng = StdRng::seed_from_u64(2024);

	for min in 1..=6 {
		for max in min..=min + 5 {
			let config = GenerationConfig::default().with_words_per_sentence(min, max);
			for _ in 0..20 {
				let sentence = generator.sentence(&config, &mut rng).unwrap();
				assert!((min..=max).contains(&word_count(&sentence)), "{min}..={max}: {sentence}");
				assert!(sentence.starts_with(|c: char| c.is_ascii_uppercase()));
				assert!(sentence.ends_with('.'));
			}
		}
	}
}

#[test]
fn every_sentence_of_every_paragraph_is_bounded() {
	let config = GenerationConfig::default()
		.with_amount(6)
		.with_words_per_sentence(2, 5)
		.with_sentences_per_paragraph(2, 3)
		.with_separator(ParagraphSeparator::BlankLine);
	let text = Generator::default().paragraphs(&config, &mut StdRng::seed_from_u64(5)).unwrap();

	let paragraphs: Vec<&str> = text.split("\n\n").collect();
	assert_eq!(paragraphs.len(), 6);
	for paragraph in paragraphs {
		let sentences = sentences_of(paragraph);
		assert!((2..=3).contains(&sentences.len()), "{paragraph}");
		for sentence in sentences {
			assert!((2..=5).contains(&word_count(sentence)), "{sentence}");
		}
	}
}

#[test]
fn thread_rng_helpers_honor_bounds() {
	let config = GenerationConfig::default()
		.with_amount(3)
		.with_words_per_sentence(1, 1)
		.with_sentences_per_paragraph(1, 1);

	let sentence = generate_sentence(&config).unwrap();
	assert_eq!(word_count(&sentence), 1);

	let sentences = generate_sentences(&config).unwrap();
	assert_eq!(word_count(&sentences), 3);

	let paragraph = generate_paragraph(&config).unwrap();
	assert_eq!(sentences_of(&paragraph).len(), 1);

	let paragraphs = generate_paragraphs(&config).unwrap();
	assert_eq!(paragraphs.lines().count(), 3);

	assert_eq!(word_count(&generate_words(7).unwrap()), 7);
}

#[test]
fn repeated_calls_keep_the_same_bounds() {
	let config = GenerationConfig::default().with_amount(2);
	let first = generate_paragraphs(&config).unwrap();
	let second = generate_paragraphs(&config).unwrap();
	for text in [first, second] {
		let paragraphs: Vec<&str> = text.split('\n').collect();
		assert_eq!(paragraphs.len(), 2);
		for paragraph in paragraphs {
			assert!((1..=5).contains(&sentences_of(paragraph).len()));
		}
	}
}

#[test]
fn one_sentence_paragraph() {
	let config = GenerationConfig::default().with_sentences_per_paragraph(1, 1);
	let text = generate_paragraphs(&config).unwrap();
	assert_eq!(sentences_of(&text).len(), 1);
}

#[test]
fn numbered_paragraphs_with_blank_lines() {
	let config = GenerationConfig::default()
		.with_amount(3)
		.with_prefix(Some(LinePrefix::Numbered))
		.with_separator(ParagraphSeparator::BlankLine);
	let text = generate_paragraphs(&config).unwrap();
	let paragraphs: Vec<&str> = text.split("\n\n").collect();
	assert_eq!(paragraphs.len(), 3);
	assert!(paragraphs[0].starts_with("1. "));
	assert!(paragraphs[1].starts_with("2. "));
	assert!(paragraphs[2].starts_with("3. "));
}

#[test]
fn invalid_word_range_produces_nothing() {
	let config = GenerationConfig::default().with_words_per_sentence(10, 4);
	let expected = GenerationError::InvalidRange { what: "words per sentence", min: 10, max: 4 };
	assert_eq!(generate_sentence(&config), Err(expected.clone()));
	assert_eq!(generate_sentences(&config), Err(expected.clone()));
	assert_eq!(generate_paragraph(&config), Err(expected.clone()));
	assert_eq!(generate_paragraphs(&config), Err(expected));
}

#[test]
fn invalid_config_does_not_consume_entropy() {
	let generator = Generator::new(Vocabulary::latin());
	let invalid = GenerationConfig::default().with_sentences_per_paragraph(4, 1);
	let valid = GenerationConfig::default();

	let mut touched = StdRng::seed_from_u64(11);
	assert!(generator.paragraphs(&invalid, &mut touched).is_err());
	let after_error = generator.paragraphs(&valid, &mut touched).unwrap();

	let fresh = generator.paragraphs(&valid, &mut StdRng::seed_from_u64(11)).unwrap();
	assert_eq!(after_error, fresh);
}
