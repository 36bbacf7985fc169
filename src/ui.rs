//! Mensagens de diagnóstico no terminal (stderr).
//!
//! Usa a crate `console` para estilização com cores. A saída padrão fica
//! reservada ao cronograma; tudo aqui vai para o stderr.

use console::{Style, Term};

use crate::error::LineError;
use crate::loader::RejectedLine;
use crate::schedule::Schedule;

/// Texto da mensagem de uma linha rejeitada, sem estilo.
pub fn rejection_message(rejected: &RejectedLine) -> String {
    let n = rejected.line_number;
    match rejected.reason {
        LineError::MissingInstructor => {
            format!("❌ Linha {n} ignorada: {}.", rejected.reason)
        }
        LineError::MissingSeparator | LineError::InvalidDuration => format!(
            "❌ Linha {n} ignorada: {}: \"{}\"",
            rejected.reason, rejected.content
        ),
    }
}

/// Escreve diagnósticos coloridos no stderr.
pub struct Diagnostics {
    term: Term,
    // Estilo vermelho para linhas rejeitadas e erros.
    red: Style,
    // Estilo amarelo para avisos do resumo.
    yellow: Style,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            red: Style::new().red().for_stderr(),
            yellow: Style::new().yellow().for_stderr(),
        }
    }

    /// Reporta cada linha rejeitada pelo carregador.
    pub fn rejected_lines(&self, rejected: &[RejectedLine]) {
        for line in rejected {
            self.write(&self.red.apply_to(rejection_message(line)).to_string());
        }
    }

    pub fn error(&self, message: &str) {
        self.write(&self.red.apply_to(message).to_string());
    }

    /// Lista aulas descartadas por conflito e aulas que não couberam na semana.
    pub fn summary(&self, schedule: &Schedule) {
        for class in &schedule.skipped {
            self.write(&format!(
                "  {} {} - Prof. {}: conflito de horário, aula descartada",
                self.yellow.apply_to("↷"),
                class.subject,
                class.instructor
            ));
        }
        for class in &schedule.unplaced {
            self.write(&format!(
                "  {} {} - Prof. {} ({} min): não coube na semana",
                self.yellow.apply_to("⚠"),
                class.subject,
                class.instructor,
                class.duration_minutes
            ));
        }
    }

    fn write(&self, line: &str) {
        // Falha ao escrever no stderr não tem a quem ser reportada.
        let _ = self.term.write_line(line);
    }
}
