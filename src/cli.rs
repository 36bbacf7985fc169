//! Interface de linha de comando do cronograma baseada em clap.
//!
//! Sem argumentos, lê `aulas.txt` do diretório atual e imprime a semana.
//! As flags apenas sobrescrevem o arquivo de configuração.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::CronogramaConfig;
use crate::render::OutputFormat;
use crate::schedule::{AgendaScope, ConflictPolicy};

/// Monta o cronograma semanal de aulas a partir de um arquivo de texto.
#[derive(Debug, Parser)]
#[command(name = "cronograma", version, about)]
pub struct Cli {
    /// Arquivo de aulas (padrão: aulas.txt).
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Arquivo de configuração TOML (padrão: cronograma.toml, se existir).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// O que fazer quando o professor já tem aula no horário.
    #[arg(long, value_enum)]
    pub on_conflict: Option<ConflictArg>,

    /// Compara horários do professor na semana inteira ou só no mesmo dia.
    #[arg(long, value_enum)]
    pub agenda_scope: Option<ScopeArg>,

    /// Formato de saída.
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Habilita saída detalhada (verbose) no stderr.
    #[arg(long, short, default_value_t = false)]
    pub verbose: bool,
}

/// Política de conflito aceita pela CLI, mapeada para [`ConflictPolicy`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ConflictArg {
    /// Descarta a aula conflitante pelo resto da semana.
    Skip,
    /// Tenta a aula conflitante de novo no próximo turno.
    Defer,
}

/// Escopo da agenda aceito pela CLI, mapeado para [`AgendaScope`].
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ScopeArg {
    Week,
    Day,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<ConflictArg> for ConflictPolicy {
    fn from(arg: ConflictArg) -> Self {
        match arg {
            ConflictArg::Skip => ConflictPolicy::Skip,
            ConflictArg::Defer => ConflictPolicy::Defer,
        }
    }
}

impl From<ScopeArg> for AgendaScope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Week => AgendaScope::Week,
            ScopeArg::Day => AgendaScope::Day,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// Aplica as flags presentes sobre a configuração carregada.
    pub fn apply(&self, config: &mut CronogramaConfig) {
        if let Some(input) = &self.input {
            config.input_path = input.clone();
        }
        if let Some(policy) = self.on_conflict {
            config.on_conflict = policy.into();
        }
        if let Some(scope) = self.agenda_scope {
            config.agenda_scope = scope.into();
        }
        if let Some(format) = self.format {
            config.format = format.into();
        }
    }
}
