//! Configuração do cronograma carregada a partir de `cronograma.toml`.
//!
//! A struct [`CronogramaConfig`] contém os parâmetros ajustáveis da montagem.
//! Valores não presentes no arquivo usam defaults que reproduzem o
//! comportamento clássico (pular conflitos, agenda comparada na semana toda).
//! A variável de ambiente `CRONOGRAMA_INPUT` tem precedência sobre o arquivo.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::CronogramaError;
use crate::render::OutputFormat;
use crate::schedule::{AgendaScope, ConflictPolicy, PlacementPolicy};

/// Nome do arquivo de configuração procurado no diretório atual.
pub const DEFAULT_CONFIG_FILE: &str = "cronograma.toml";

/// Variável de ambiente que sobrescreve o arquivo de aulas.
pub const INPUT_ENV_VAR: &str = "CRONOGRAMA_INPUT";

/// Configuração de nível superior carregada de `cronograma.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CronogramaConfig {
    /// Arquivo de aulas a ler.
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// O que fazer com uma aula cujo professor já está ocupado.
    #[serde(default)]
    pub on_conflict: ConflictPolicy,

    /// Se a agenda compara horários na semana inteira ou só no mesmo dia.
    #[serde(default)]
    pub agenda_scope: AgendaScope,

    /// Formato de saída.
    #[serde(default)]
    pub format: OutputFormat,
}

// Valor padrão para o arquivo de entrada: "aulas.txt".
fn default_input_path() -> PathBuf {
    PathBuf::from("aulas.txt")
}

impl Default for CronogramaConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            on_conflict: ConflictPolicy::default(),
            agenda_scope: AgendaScope::default(),
            format: OutputFormat::default(),
        }
    }
}

impl CronogramaConfig {
    /// Carrega a configuração.
    ///
    /// Com `path` explícito, o arquivo precisa existir. Sem ele, usa
    /// `cronograma.toml` do diretório atual se existir, ou os valores padrão.
    pub fn load(path: Option<&Path>) -> Result<Self, CronogramaError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        // Variável de ambiente tem precedência sobre o arquivo para o caminho de entrada.
        if let Ok(input) = std::env::var(INPUT_ENV_VAR)
            && !input.is_empty()
        {
            config.input_path = PathBuf::from(input);
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, CronogramaError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CronogramaError::Config(format!("não foi possível ler {}: {e}", path.display()))
        })?;
        Ok(toml::from_str::<CronogramaConfig>(&contents)?)
    }

    /// Política de alocação derivada da configuração.
    pub fn placement_policy(&self) -> PlacementPolicy {
        PlacementPolicy {
            on_conflict: self.on_conflict,
            agenda_scope: self.agenda_scope,
        }
    }
}
