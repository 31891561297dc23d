use std::convert::Infallible;

use eframe::{egui, Frame, Storage};
use egui::text::{CCursor, CCursorRange};
use egui::Context;
use log::{info, warn};

use lipsum_core::plugin::{Command, LoremIpsumPlugin, PluginError, PluginSettings, SettingsStore, TextBuffer};
use lipsum_core::{LinePrefix, ParagraphSeparator};

/// Key of the settings in eframe storage.
const SETTINGS_KEY: &str = "lipsum_settings";

/// Id of the document editor widget.
const EDITOR_ID: &str = "lipsum_document";

/// Settings store backed by eframe persistence.
///
/// eframe only hands out its storage on startup and when it decides to
/// save, so saved settings are kept here until the next `flush`.
#[derive(Default)]
struct EframeStore {
    data: Option<PluginSettings>,
    dirty: bool,
}

impl EframeStore {
    /// Reads the settings saved by a previous session, if any.
    fn from_storage(storage: Option<&dyn Storage>) -> Self {
        Self {
            data: storage.and_then(|s| eframe::get_value(s, SETTINGS_KEY)),
            dirty: false,
        }
    }

    /// Writes pending settings to eframe storage.
    fn flush(&mut self, storage: &mut dyn Storage) {
        if !self.dirty {
            return;
        }
        if let Some(settings) = &self.data {
            eframe::set_value(storage, SETTINGS_KEY, settings);
        }
        self.dirty = false;
    }
}

impl SettingsStore for EframeStore {
    type Error = Infallible;

    fn load_data(&self) -> Result<Option<PluginSettings>, Self::Error> {
        Ok(self.data.clone())
    }

    fn save_data(&mut self, settings: &PluginSettings) -> Result<(), Self::Error> {
        self.data = Some(settings.clone());
        self.dirty = true;
        Ok(())
    }
}

/// Prefix selection mode on the UI side.
/// Kept apart from `LinePrefix` so that an empty custom prefix can be
/// edited without becoming an invalid setting.
#[derive(Debug, PartialEq)]
enum PrefixMode {
    None,
    Numbered,
    Custom,
}

/// Settings being edited, not yet validated nor saved.
struct SettingsDraft {
    settings: PluginSettings,
    blank_line: bool,
    prefix_mode: PrefixMode,
    custom_prefix: String,
}

impl SettingsDraft {
    fn new(settings: &PluginSettings) -> Self {
        let (prefix_mode, custom_prefix) = match &settings.line_prefix {
            None => (PrefixMode::None, String::new()),
            Some(LinePrefix::Numbered) => (PrefixMode::Numbered, String::new()),
            Some(LinePrefix::Literal(s)) => (PrefixMode::Custom, s.clone()),
        };
        Self {
            settings: settings.clone(),
            blank_line: settings.paragraph_separator == ParagraphSeparator::BlankLine,
            prefix_mode,
            custom_prefix,
        }
    }

    /// Builds the settings to save. An empty custom prefix means no prefix.
    fn to_settings(&self) -> PluginSettings {
        let line_prefix = match self.prefix_mode {
            PrefixMode::None => None,
            PrefixMode::Numbered => Some(LinePrefix::Numbered),
            PrefixMode::Custom if self.custom_prefix.is_empty() => None,
            PrefixMode::Custom => Some(LinePrefix::Literal(self.custom_prefix.clone())),
        };
        PluginSettings {
            paragraph_separator: if self.blank_line {
                ParagraphSeparator::BlankLine
            } else {
                ParagraphSeparator::SingleNewline
            },
            line_prefix,
            ..self.settings.clone()
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct LoremIpsumUI {
    plugin: LoremIpsumPlugin<EframeStore>,
    document: TextBuffer,
    draft: SettingsDraft,
    /// `Some(amount)` while the paragraph count dialog is open.
    amount_dialog: Option<usize>,
    notice: Option<String>,
}

impl LoremIpsumUI {
    /// Loads the settings saved by the previous session.
    fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, PluginError<Infallible>> {
        let plugin = LoremIpsumPlugin::load(EframeStore::from_storage(cc.storage))?;
        let draft = SettingsDraft::new(plugin.settings());
        Ok(Self {
            plugin,
            document: TextBuffer::default(),
            draft,
            amount_dialog: None,
            notice: None,
        })
    }

    /// Runs a command at the editor cursor, then puts the editor cursor
    /// after the inserted text.
    fn run_command(&mut self, ctx: &Context, command: Command, amount: Option<usize>) {
        match self.plugin.run(command, &mut self.document, amount) {
            Ok(_) => {
                self.notice = None;
                let id = egui::Id::new(EDITOR_ID);
                let mut state = egui::TextEdit::load_state(ctx, id).unwrap_or_default();
                let cursor = CCursor::new(self.document.cursor_index());
                state.cursor.set_char_range(Some(CCursorRange::one(cursor)));
                state.store(ctx, id);
                ctx.memory_mut(|m| m.request_focus(id));
            }
            Err(e) => {
                warn!("{} failed: {e}", command.id());
                self.notice = Some(format!("Error: {e}"));
            }
        }
    }

    /// Validates and saves the draft settings.
    fn save_settings(&mut self) {
        let settings = self.draft.to_settings();
        match self.plugin.update_settings(|s| *s = settings) {
            Ok(()) => {
                info!("Settings updated from the settings panel");
                self.notice = Some("Settings saved".to_owned());
            }
            Err(e) => self.notice = Some(format!("Error: {e}")),
        }
    }

    /// Paragraph count dialog. Returns the amount once submitted.
    fn amount_dialog(&mut self, ctx: &Context) -> Option<usize> {
        let mut amount = self.amount_dialog?;
        let mut submitted = false;

        let modal = egui::Modal::new(egui::Id::new("paragraph_count")).show(ctx, |ui| {
            ui.heading("How many paragraphs?");
            ui.horizontal(|ui| {
                ui.label("Paragraph count");
                ui.add(egui::DragValue::new(&mut amount).range(1..=100).speed(1));
            });
            if ui.button("Generate").clicked() {
                submitted = true;
            }
        });

        if submitted {
            self.amount_dialog = None;
            Some(amount)
        } else {
            self.amount_dialog = if modal.should_close() { None } else { Some(amount) };
            None
        }
    }

    fn settings_grid(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([20.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                let settings = &mut self.draft.settings;

                ui.label("Min words per sentence");
                ui.add(egui::DragValue::new(&mut settings.min_words_per_sentence).range(1..=100).speed(1));
                ui.end_row();

                ui.label("Max words per sentence");
                ui.add(egui::DragValue::new(&mut settings.max_words_per_sentence).range(1..=100).speed(1));
                ui.end_row();

                ui.label("Min sentences per paragraph");
                ui.add(egui::DragValue::new(&mut settings.min_sentences_per_paragraph).range(1..=100).speed(1));
                ui.end_row();

                ui.label("Max sentences per paragraph");
                ui.add(egui::DragValue::new(&mut settings.max_sentences_per_paragraph).range(1..=100).speed(1));
                ui.end_row();

                ui.label("Empty line between paragraphs");
                ui.checkbox(&mut self.draft.blank_line, "");
                ui.end_row();

                ui.label("Paragraph prefix");
                ui.vertical(|ui| {
                    ui.radio_value(&mut self.draft.prefix_mode, PrefixMode::None, "None");
                    ui.radio_value(&mut self.draft.prefix_mode, PrefixMode::Numbered, "Numbered (1. 2. 3.)");
                    ui.radio_value(&mut self.draft.prefix_mode, PrefixMode::Custom, "Custom");
                });
                ui.end_row();

                if self.draft.prefix_mode == PrefixMode::Custom {
                    ui.label("Custom prefix");
                    ui.text_edit_singleline(&mut self.draft.custom_prefix);
                    ui.end_row();
                }
            });

        if ui.button("Save settings").clicked() {
            self.save_settings();
        }
    }
}

impl eframe::App for LoremIpsumUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        let mut pending: Option<(Command, Option<usize>)> = self
            .amount_dialog(ctx)
            .map(|amount| (Command::GenerateParagraphCustomAmount, Some(amount)));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                for command in Command::ALL {
                    if ui.button(command.name()).clicked() {
                        if command.needs_amount() {
                            self.amount_dialog = Some(1);
                        } else {
                            pending = Some((command, None));
                        }
                    }
                }
            });

            ui.collapsing("Settings", |ui| self.settings_grid(ui));

            if let Some(notice) = &self.notice {
                ui.label(notice);
            }
            ui.separator();

            // Insert before the editor is drawn so it shows the new cursor
            if let Some((command, amount)) = pending {
                self.run_command(ctx, command, amount);
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                let output = egui::TextEdit::multiline(self.document.text_mut())
                    .id(egui::Id::new(EDITOR_ID))
                    .desired_width(f32::INFINITY)
                    .desired_rows(20)
                    .show(ui);
                if let Some(range) = output.state.cursor.char_range() {
                    self.document.set_cursor_index(range.primary.index);
                }
            });
        });
    }

    /// Persists settings saved since the last call.
    fn save(&mut self, storage: &mut dyn Storage) {
        self.plugin.store_mut().flush(storage);
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "lipsum-editor",
        options,
        Box::new(|cc| Ok(Box::new(LoremIpsumUI::new(cc)?))),
    )
}
