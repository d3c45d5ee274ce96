//! Front-end configuration: defaults < environment < command line.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Result};

use tui_hanoi_core::GameConfig;
use tui_hanoi_types::DEFAULT_DISCS;

pub const DEFAULT_EXPORT_PATH: &str = "hanoi_records.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub num_discs: u8,
    pub timer_minutes: u8,
    /// Log file; no subscriber is installed without one
    pub log_path: Option<PathBuf>,
    /// Records export target; a `.json` extension selects JSON
    pub export_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            num_discs: DEFAULT_DISCS,
            timer_minutes: 0,
            log_path: None,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

impl AppConfig {
    /// Environment layered over defaults, then `args` over that.
    pub fn load(args: &[String]) -> Result<Self> {
        Self::from_env().with_args(args)
    }

    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Read `HANOI_*` variables through `get`. Unparsable numbers fall back to
    /// the defaults; out-of-range ones are clamped.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let num_discs = get("HANOI_DISCS")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|n| GameConfig::clamped(n, 0).num_discs())
            .unwrap_or(defaults.num_discs);

        let timer_minutes = get("HANOI_TIMER_MINUTES")
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map(|m| GameConfig::clamped(DEFAULT_DISCS as i64, m).timer_minutes())
            .unwrap_or(defaults.timer_minutes);

        let log_path = get("HANOI_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let export_path = get("HANOI_EXPORT_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
            .unwrap_or(defaults.export_path);

        Self {
            num_discs,
            timer_minutes,
            log_path,
            export_path,
        }
    }

    /// Apply `--discs`, `--timer`, `--log` and `--export` flags.
    pub fn with_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--discs" | "--timer" | "--log" | "--export" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for {}", flag))?;
                    match flag {
                        "--discs" => {
                            let n = parse_number(flag, v)?;
                            self.num_discs = GameConfig::clamped(n, 0).num_discs();
                        }
                        "--timer" => {
                            let m = parse_number(flag, v)?;
                            self.timer_minutes =
                                GameConfig::clamped(DEFAULT_DISCS as i64, m).timer_minutes();
                        }
                        "--log" => self.log_path = Some(PathBuf::from(v)),
                        _ => self.export_path = PathBuf::from(v),
                    }
                }
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::clamped(self.num_discs as i64, self.timer_minutes as i64)
    }
}

fn parse_number(flag: &str, v: &str) -> Result<i64> {
    v.trim()
        .parse::<i64>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_env() {
        let cfg = AppConfig::from_vars(|_| None);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.game_config(), GameConfig::default());
    }

    #[test]
    fn env_values_are_clamped_or_ignored() {
        let cfg = AppConfig::from_vars(vars(&[
            ("HANOI_DISCS", "12"),
            ("HANOI_TIMER_MINUTES", "abc"),
            ("HANOI_LOG_PATH", "  "),
            ("HANOI_EXPORT_PATH", "out.json"),
        ]));
        assert_eq!(cfg.num_discs, 8);
        assert_eq!(cfg.timer_minutes, 0);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.export_path, PathBuf::from("out.json"));
    }

    #[test]
    fn args_override_env() {
        let cfg = AppConfig::from_vars(vars(&[("HANOI_DISCS", "5"), ("HANOI_TIMER_MINUTES", "2")]))
            .with_args(&args(&["--discs", "4", "--timer", "150", "--log", "hanoi.log"]))
            .unwrap();
        assert_eq!(cfg.num_discs, 4);
        assert_eq!(cfg.timer_minutes, 99);
        assert_eq!(cfg.log_path, Some(PathBuf::from("hanoi.log")));
        assert_eq!(cfg.game_config().timer_minutes(), 99);
    }

    #[test]
    fn bad_args_are_errors() {
        let base = AppConfig::default();
        assert!(base.clone().with_args(&args(&["--discs"])).is_err());
        assert!(base.clone().with_args(&args(&["--discs", "many"])).is_err());
        let err = base.with_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }
}
