pub mod derived;
pub mod mock;

use anyhow::{Context, Result};
use std::io::Write;

use crate::consts::BASE_RUN_LINE;

pub use derived::Derived;

/// Something the driver can run. `run` has no default: every entity decides
/// what it does, usually by delegating to [`base_run`].
pub trait Entity: Send + Sync {
    fn name(&self) -> &str;
    fn age(&self) -> u32;
    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

/// The base behavior of `run`: one fixed line.
pub fn base_run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", BASE_RUN_LINE).context("failed to write run line")
}

/// The base entity. Its attributes are the defaults every entity starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base {
    name: String,
    age: u32,
}

impl Default for Base {
    fn default() -> Self {
        Self {
            name: "Base".to_string(),
            age: 0,
        }
    }
}

impl Entity for Base {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        base_run(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(entity: &dyn Entity) -> String {
        let mut buf = Vec::new();
        entity.run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn base_defaults() {
        let base = Base::default();
        assert_eq!(base.name(), "Base");
        assert_eq!(base.age(), 0);
    }

    #[test]
    fn base_run_writes_one_line() {
        let mut buf = Vec::new();
        base_run(&mut buf).unwrap();
        assert_eq!(buf, b"Base run\n");
    }

    #[test]
    fn base_entity_runs_base_behavior() {
        assert_eq!(run_to_string(&Base::default()), "Base run\n");
    }

    #[test]
    fn repeated_runs_append_identical_lines() {
        let base = Base::default();
        let mut buf = Vec::new();
        for _ in 0..3 {
            base.run(&mut buf).unwrap();
        }
        assert_eq!(String::from_utf8(buf).unwrap(), "Base run\n".repeat(3));
    }

    #[test]
    fn base_run_reports_write_failure() {
        let mut full = [0u8; 4];
        let mut slice: &mut [u8] = &mut full;
        let err = base_run(&mut slice).unwrap_err();
        assert!(err.to_string().contains("failed to write run line"));
    }
}
