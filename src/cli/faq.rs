use super::ui;
use crate::core::config::AppConfig;
use anyhow::Result;

pub fn run(config: &AppConfig) -> Result<()> {
    if config.faq.is_empty() {
        println!(
            "{}",
            ui::style_text("No hay preguntas frecuentes configuradas.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    println!(
        "{}",
        ui::style_text("Preguntas frecuentes", ui::StyleType::Title)
    );
    for entry in &config.faq {
        println!(
            "\n{}\n{}",
            ui::style_text(&entry.question, ui::StyleType::TotalLabel),
            entry.answer
        );
    }
    ui::print_separator();
    Ok(())
}
