use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_name_pt;
use crate::utils::formatting::fold_label;
use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub mod migrate; // use submodule at src/config/migrate.rs

pub const DEFAULT_SECTOR: &str = "Produção";

/// `picagens_esperadas`: `auto` or a fixed 4/6/8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedPunches {
    Auto,
    Fixed(u8),
}

impl ExpectedPunches {
    pub fn matches(&self, count: usize) -> bool {
        match self {
            ExpectedPunches::Auto => true,
            ExpectedPunches::Fixed(n) => usize::from(*n) == count,
        }
    }
}

impl fmt::Display for ExpectedPunches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedPunches::Auto => f.write_str("auto"),
            ExpectedPunches::Fixed(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for ExpectedPunches {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExpectedPunches::Auto => serializer.serialize_str("auto"),
            ExpectedPunches::Fixed(n) => serializer.serialize_u8(*n),
        }
    }
}

impl<'de> Deserialize<'de> for ExpectedPunches {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u8),
            Text(String),
        }

        let n = match Raw::deserialize(deserializer)? {
            Raw::Text(s) if s.trim().eq_ignore_ascii_case("auto") => {
                return Ok(ExpectedPunches::Auto);
            }
            Raw::Text(s) => s.trim().parse::<u8>().map_err(|_| {
                serde::de::Error::custom(format!("invalid picagens_esperadas: {s}"))
            })?,
            Raw::Count(n) => n,
        };

        match n {
            4 | 6 | 8 => Ok(ExpectedPunches::Fixed(n)),
            other => Err(serde::de::Error::custom(format!(
                "invalid picagens_esperadas: {other} (expected auto, 4, 6 or 8)"
            ))),
        }
    }
}

/// Per-sector schedule and thresholds. Minute fields are plain minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    pub entrada_padrao: ClockTime,
    pub saida_padrao: ClockTime,
    pub almoco_inicio: ClockTime,
    pub almoco_duracao: i64,
    pub intervalo_manha: i64,
    pub intervalo_tarde: i64,
    pub tolerancia_entrada: i64,
    pub tolerancia_saida: i64,
    pub tolerancia_intervalo: i64,
    /// Delay beyond which a late arrival reads as a forgotten clock-in.
    pub tolerancia_esquecimento: i64,
    pub picagens_esperadas: ExpectedPunches,
    pub dias_trabalho: Vec<String>,
    pub alerta_almoco_curto: i64,
    pub alerta_almoco_longo: i64,
    pub alerta_pausa_longa: i64,
}

fn at(hour: i64, minute: i64) -> ClockTime {
    ClockTime::clamped(hour * 60 + minute)
}

fn weekdays(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

const MON_FRI: &[&str] = &["segunda", "terça", "quarta", "quinta", "sexta"];
const MON_SAT: &[&str] = &["segunda", "terça", "quarta", "quinta", "sexta", "sábado"];

impl Default for SectorConfig {
    fn default() -> Self {
        Self::producao()
    }
}

impl SectorConfig {
    pub fn producao() -> Self {
        Self {
            entrada_padrao: at(8, 0),
            saida_padrao: at(17, 0),
            almoco_inicio: at(12, 0),
            almoco_duracao: 60,
            intervalo_manha: 15,
            intervalo_tarde: 15,
            tolerancia_entrada: 10,
            tolerancia_saida: 15,
            tolerancia_intervalo: 5,
            tolerancia_esquecimento: 30,
            picagens_esperadas: ExpectedPunches::Auto,
            dias_trabalho: weekdays(MON_FRI),
            alerta_almoco_curto: 30,
            alerta_almoco_longo: 90,
            alerta_pausa_longa: 20,
        }
    }

    pub fn administrativo() -> Self {
        Self {
            entrada_padrao: at(9, 0),
            saida_padrao: at(18, 0),
            almoco_inicio: at(12, 30),
            intervalo_manha: 20,
            intervalo_tarde: 20,
            tolerancia_entrada: 15,
            tolerancia_saida: 20,
            tolerancia_intervalo: 10,
            tolerancia_esquecimento: 45,
            ..Self::producao()
        }
    }

    pub fn vendas() -> Self {
        Self {
            entrada_padrao: at(9, 0),
            saida_padrao: at(18, 0),
            almoco_inicio: at(13, 0),
            almoco_duracao: 45,
            intervalo_manha: 10,
            intervalo_tarde: 10,
            tolerancia_entrada: 30,
            tolerancia_saida: 30,
            tolerancia_intervalo: 15,
            tolerancia_esquecimento: 60,
            picagens_esperadas: ExpectedPunches::Fixed(4),
            dias_trabalho: weekdays(MON_SAT),
            ..Self::producao()
        }
    }

    pub fn logistica() -> Self {
        Self {
            entrada_padrao: at(7, 0),
            saida_padrao: at(16, 0),
            almoco_inicio: at(11, 30),
            almoco_duracao: 30,
            intervalo_manha: 10,
            intervalo_tarde: 10,
            tolerancia_entrada: 5,
            tolerancia_saida: 10,
            tolerancia_intervalo: 5,
            tolerancia_esquecimento: 20,
            picagens_esperadas: ExpectedPunches::Fixed(6),
            dias_trabalho: weekdays(MON_SAT),
            ..Self::producao()
        }
    }

    /// Built-in calibration for a sector name, if any.
    pub fn builtin(name: &str) -> Option<Self> {
        match fold_label(name).as_str() {
            "producao" => Some(Self::producao()),
            "administrativo" => Some(Self::administrativo()),
            "vendas" => Some(Self::vendas()),
            "logistica" => Some(Self::logistica()),
            _ => None,
        }
    }

    pub fn is_work_day(&self, date: &NaiveDate) -> bool {
        let day = fold_label(weekday_name_pt(date));
        self.dias_trabalho.iter().any(|d| fold_label(d) == day)
    }
}

pub fn builtin_sectors() -> BTreeMap<String, SectorConfig> {
    let mut map = BTreeMap::new();
    map.insert("Produção".to_string(), SectorConfig::producao());
    map.insert("Administrativo".to_string(), SectorConfig::administrativo());
    map.insert("Vendas".to_string(), SectorConfig::vendas());
    map.insert("Logística".to_string(), SectorConfig::logistica());
    map
}

fn default_sector_name() -> String {
    DEFAULT_SECTOR.to_string()
}

fn default_daily_target() -> i64 {
    480
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_sector_name")]
    pub default_sector: String,
    #[serde(default = "default_daily_target")]
    pub daily_target_minutes: i64,
    #[serde(default = "builtin_sectors")]
    pub sectors: BTreeMap<String, SectorConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_sector: default_sector_name(),
            daily_target_minutes: default_daily_target(),
            sectors: builtin_sectors(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchsheet")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchsheet")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchsheet.conf")
    }

    /// Load configuration from the standard location.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    /// Load configuration from `path`, or return defaults if not found.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a YAML config. Sector entries only need the keys they override:
    /// the rest comes from the built-in calibration of the sector with the
    /// same name, or from the default sector.
    pub fn from_yaml_str(content: &str) -> AppResult<Self> {
        let mut value: Value = serde_yaml::from_str(content)?;
        if value.is_null() {
            value = Value::Mapping(Mapping::new());
        }

        let root = value
            .as_mapping_mut()
            .ok_or_else(|| AppError::Config("top level must be a mapping".into()))?;

        if let Some(Value::Mapping(sectors)) = root.get_mut("sectors") {
            for (name, fields) in sectors.iter_mut() {
                let name = name.as_str().unwrap_or_default();
                let base = SectorConfig::builtin(name).unwrap_or_default();
                let mut merged = match serde_yaml::to_value(&base)? {
                    Value::Mapping(m) => m,
                    _ => Mapping::new(),
                };
                if let Value::Mapping(overrides) = fields {
                    for (k, v) in overrides.iter() {
                        merged.insert(k.clone(), v.clone());
                    }
                }
                *fields = Value::Mapping(merged);
            }
        }

        let mut cfg: Config = serde_yaml::from_value(value)?;
        cfg.ensure_default_sector();
        Ok(cfg)
    }

    fn ensure_default_sector(&mut self) {
        if self.find_sector(&self.default_sector).is_some() {
            return;
        }
        warn!(
            sector = %self.default_sector,
            "default sector not configured, using built-in calibration"
        );
        let base = SectorConfig::builtin(&self.default_sector).unwrap_or_default();
        self.sectors.insert(self.default_sector.clone(), base);
    }

    fn find_sector(&self, name: &str) -> Option<(&String, &SectorConfig)> {
        let wanted = fold_label(name);
        if wanted.is_empty() {
            return None;
        }
        self.sectors
            .get_key_value(name.trim())
            .or_else(|| self.sectors.iter().find(|(k, _)| fold_label(k) == wanted))
    }

    /// Sector name and configuration for a department; unknown or empty
    /// departments get the default sector.
    pub fn sector_for(&self, department: &str) -> (String, SectorConfig) {
        if let Some((name, sector)) = self.find_sector(department) {
            return (name.clone(), sector.clone());
        }

        if !department.trim().is_empty() {
            debug!(
                department,
                fallback = %self.default_sector,
                "unknown sector, using default"
            );
        }

        match self.find_sector(&self.default_sector) {
            Some((name, sector)) => (name.clone(), sector.clone()),
            None => (self.default_sector.clone(), SectorConfig::default()),
        }
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        let yaml = self.to_yaml()?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Write the default configuration to `path`.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        let config = Config::default();

        if !is_test {
            config.save_to(path)?;
        }
        Ok(())
    }
}
