//! Fluxo principal do binário: ler aulas, montar a semana e escrever a saída.
//!
//! Separado de `main.rs` para que a saída padrão possa ser trocada por um
//! buffer nos testes.

use std::io::Write;

use crate::EMPTY_INPUT_MESSAGE;
use crate::config::CronogramaConfig;
use crate::error::CronogramaError;
use crate::loader::ClassLoader;
use crate::schedule::{Schedule, WeekAssembler};
use crate::ui::Diagnostics;

/// O que uma execução bem-sucedida produziu.
#[derive(Debug)]
pub enum Outcome {
    /// A semana foi montada e escrita em `out`.
    Scheduled(Schedule),
    /// Nenhuma linha válida; apenas a mensagem de entrada vazia foi escrita.
    NoClasses,
}

/// Lê o arquivo de aulas da configuração e escreve o cronograma em `out`.
///
/// Linhas rejeitadas vão para `diagnostics`. Erro só quando o arquivo não
/// pode ser lido ou a saída não pode ser escrita.
pub fn run(
    config: &CronogramaConfig,
    diagnostics: &Diagnostics,
    out: &mut dyn Write,
) -> Result<Outcome, CronogramaError> {
    let report = ClassLoader::load(&config.input_path)?;
    diagnostics.rejected_lines(&report.rejected);

    if report.classes.is_empty() {
        writeln!(out, "{EMPTY_INPUT_MESSAGE}")?;
        return Ok(Outcome::NoClasses);
    }

    let schedule = WeekAssembler::new(config.placement_policy()).assemble(&report.classes);
    config.format.renderer().render(&schedule, out)?;
    Ok(Outcome::Scheduled(schedule))
}
