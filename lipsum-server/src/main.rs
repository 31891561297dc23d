use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, put, web, App, HttpResponse, HttpServer, Responder};
use log::{info, warn};

use serde::Deserialize;
use lipsum_core::plugin::{LoremIpsumPlugin, MemoryStore, PluginError, PluginSettings};
use lipsum_core::{GenerationConfig, Generator, LinePrefix, ParagraphSeparator};

/// Query parameters shared by the generation endpoints.
///
/// Every parameter is optional; missing ones fall back to the stored settings.
#[derive(Deserialize)]
struct GenerateParams {
	amount: Option<usize>,
	min_words: Option<usize>,
	max_words: Option<usize>,
	min_sentences: Option<usize>,
	max_sentences: Option<usize>,
	blank_line: Option<bool>,
	prefix: Option<String> // -> none, numbered or text:<prefix>
}

struct SharedData {
	plugin: LoremIpsumPlugin<MemoryStore>,
	generator: Generator<'static>
}

impl GenerateParams {
	/// Determines the paragraph prefix.
	///
	/// Literal prefixes are always written `text:<prefix>`, so no literal can
	/// be mistaken for numbering.
	fn line_prefix(&self, default: Option<LinePrefix>) -> Result<Option<LinePrefix>, String> {
		match &self.prefix {
			None => Ok(default),
			Some(s) if s.to_lowercase() == "none" => Ok(None),
			Some(s) if s.to_lowercase() == "numbered" => Ok(Some(LinePrefix::Numbered)),
			Some(s) if s.to_lowercase().starts_with("text:") => {
				let value = &s["text:".len()..];
				if value.is_empty() {
					Err("Text prefix cannot be empty".into())
				} else {
					Ok(Some(LinePrefix::Literal(value.to_owned())))
				}
			}
			Some(_) => Err("Prefix must start with 'text:' or be 'numbered' or 'none'".into()),
		}
	}

	/// Builds the generation configuration on top of `settings`.
	fn config(&self, settings: &PluginSettings) -> Result<GenerationConfig, String> {
		let defaults = settings.generation_config(1);
		let paragraph_separator = match self.blank_line {
			Some(true) => ParagraphSeparator::BlankLine,
			Some(false) => ParagraphSeparator::SingleNewline,
			None => defaults.paragraph_separator,
		};

		Ok(GenerationConfig {
			amount: self.amount.unwrap_or(defaults.amount),
			min_words_per_sentence: self.min_words.unwrap_or(defaults.min_words_per_sentence),
			max_words_per_sentence: self.max_words.unwrap_or(defaults.max_words_per_sentence),
			min_sentences_per_paragraph: self.min_sentences.unwrap_or(defaults.min_sentences_per_paragraph),
			max_sentences_per_paragraph: self.max_sentences.unwrap_or(defaults.max_sentences_per_paragraph),
			paragraph_separator,
			line_prefix: self.line_prefix(defaults.line_prefix.clone())?,
		})
	}
}

/// Which generator entry point an endpoint calls.
#[derive(Clone, Copy)]
enum Unit {
	Words,
	Sentences,
	Paragraphs
}

/// Shared body of the generation endpoints.
///
/// Configuration errors are the caller's fault and answer `400 Bad Request`.
fn generate(data: &web::Data<Mutex<SharedData>>, query: &GenerateParams, unit: Unit) -> HttpResponse {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Settings lock failed"),
	};

	let config = match query.config(shared_data.plugin.settings()) {
		Ok(c) => c,
		Err(e) => return HttpResponse::BadRequest().body(e)
	};

	let mut rng = rand::rng();
	let result = match unit {
		Unit::Words => shared_data.generator.words(config.amount, &mut rng),
		Unit::Sentences => shared_data.generator.sentences(&config, &mut rng),
		Unit::Paragraphs => shared_data.generator.paragraphs(&config, &mut rng),
	};

	match result {
		Ok(text) => HttpResponse::Ok().body(text),
		Err(e) => {
			warn!("Rejected generation request: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/words`
///
/// Returns `amount` lowercase words.
#[get("/v1/words")]
async fn get_words(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	generate(&data, &query, Unit::Words)
}

/// HTTP GET endpoint `/v1/sentences`
///
/// Returns `amount` sentences joined by spaces.
#[get("/v1/sentences")]
async fn get_sentences(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	generate(&data, &query, Unit::Sentences)
}

/// HTTP GET endpoint `/v1/paragraphs`
///
/// Returns `amount` paragraphs, prefixed and separated per the settings
/// or the query.
#[get("/v1/paragraphs")]
async fn get_paragraphs(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	generate(&data, &query, Unit::Paragraphs)
}

#[get("/v1/settings")]
async fn get_settings(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Settings lock failed"),
	};
	HttpResponse::Ok().json(shared_data.plugin.settings())
}

/// HTTP PUT endpoint `/v1/settings`
///
/// Replaces the settings with the JSON body. Absent fields take their
/// default value; invalid bounds are refused.
#[put("/v1/settings")]
async fn put_settings(data: web::Data<Mutex<SharedData>>, body: web::Json<PluginSettings>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Settings lock failed"),
	};

	let settings = body.into_inner();
	match shared_data.plugin.update_settings(|s| *s = settings) {
		Ok(()) => HttpResponse::Ok().json(shared_data.plugin.settings()),
		Err(PluginError::Generation(e)) => HttpResponse::BadRequest().body(e.to_string()),
		Err(e) => HttpResponse::InternalServerError().body(format!("Failed to save settings: {e}"))
	}
}

/// Registers every endpoint.
fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_words)
		.service(get_sentences)
		.service(get_paragraphs)
		.service(get_settings)
		.service(put_settings);
}

fn shared_data() -> Result<SharedData, PluginError<std::convert::Infallible>> {
	Ok(SharedData {
		plugin: LoremIpsumPlugin::load(MemoryStore::default())?,
		generator: Generator::default()
	})
}

/// Main entry point for the server.
///
/// Keeps the settings in a `Mutex` shared by every worker and starts an
/// Actix-web HTTP server on 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = shared_data().map_err(std::io::Error::other)?;
	let shared_data = web::Data::new(Mutex::new(shared_data));

	info!("Listening on 127.0.0.1:5000");
	HttpServer::new(move || {
		App::new()
			.wrap(Cors::permissive())
			.app_data(shared_data.clone())
			.configure(routes)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
