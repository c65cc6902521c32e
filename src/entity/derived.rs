use anyhow::Result;
use std::io::Write;

use super::{Base, Entity, base_run};

/// The one concrete entity the binary drives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    base: Base,
}

impl Derived {
    /// Base defaults first, then the derived values on top.
    pub fn new() -> Self {
        let mut base = Base::default();
        base.name = "Derived".to_string();
        base.age = 10;
        Self { base }
    }
}

impl Default for Derived {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Derived {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn age(&self) -> u32 {
        self.base.age
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        base_run(out)
    }
}
