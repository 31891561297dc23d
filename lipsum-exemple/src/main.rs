use lipsum_core::plugin::{Command, LoremIpsumPlugin, MemoryStore, TextBuffer, TextInserter};
use lipsum_core::{GenerationConfig, Generator, LinePrefix, ParagraphSeparator, Vocabulary};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // The default generator samples from the built-in Latin vocabulary
    let generator = Generator::default();

    println!("Vocabulary: {} words", generator.vocabulary().len());

    // A seeded random source makes the output reproducible
    let mut rng = StdRng::seed_from_u64(2024);

    // Defaults: 1 paragraph, 4 to 16 words per sentence, 1 to 5 sentences per paragraph
    let config = GenerationConfig::default();
    println!("Sentence: {}", generator.sentence(&config, &mut rng)?);
    println!("Paragraph: {}", generator.paragraph(&config, &mut rng)?);

    // Three numbered paragraphs of short sentences, separated by an empty line
    let config = GenerationConfig::default()
        .with_amount(3)
        .with_words_per_sentence(3, 6)
        .with_sentences_per_paragraph(2, 2)
        .with_separator(ParagraphSeparator::BlankLine)
        .with_prefix(Some(LinePrefix::Numbered));
    println!("\n{}\n", generator.paragraphs(&config, &mut rng)?);

    // A literal prefix is written as-is, even when it reads "num"
    let config = config.with_prefix(Some(LinePrefix::Literal("num ".to_owned())));
    println!("{}\n", generator.paragraphs(&config, &mut rng)?);

    // Invalid bounds are reported, never clamped
    let invalid = GenerationConfig::default().with_words_per_sentence(10, 4);
    match generator.sentence(&invalid, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }
    match generator.paragraphs(&GenerationConfig::default().with_amount(0), &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Rejected: {e}"),
    }

    // Any non-empty word list can replace the Latin one
    let pirate = Generator::new(Vocabulary::new(&["arr", "matey", "ahoy", "plank", "rum"])?);
    println!("\nPirate: {}", pirate.sentences(&GenerationConfig::default().with_amount(2), &mut rng)?);

    // Drive the editor commands against an in-memory buffer
    let mut plugin = LoremIpsumPlugin::load(MemoryStore::default())?;
    plugin.update_settings(|s| s.line_prefix = Some(LinePrefix::Literal("- ".to_owned())))?;

    let mut buffer = TextBuffer::new("Notes\n");
    buffer.set_cursor_index(6);
    for command in Command::ALL {
        let amount = if command.needs_amount() { Some(2) } else { None };
        plugin.run_with_rng(command, &mut buffer, amount, &mut rng)?;
        println!("\n[{}] cursor at {:?}", command.id(), buffer.cursor());
    }
    println!("\n{}", buffer.into_text());

    Ok(())
}
