//! Startup banner. Written to stderr; stdout carries only run lines.

use std::io::Write;
use std::time::Duration;

use crate::consts::{AUTHOR, VERSION, format_interval};
use crate::entity::Entity;

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub entity: &'a dyn Entity,
    pub interval: Duration,
}

/// Write the banner to `out`.
pub fn write_banner(out: &mut dyn Write, info: &BannerInfo) -> std::io::Result<()> {
    write!(
        out,
        r#"
   ╔═══════════════════════════════════════╗
   ║             T I C K E R               ║
   ║    derived runs, base speaks, repeat  ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   entity    {} (age {})
   interval  {}
   stop      Ctrl+C
"#,
        VERSION,
        AUTHOR,
        info.entity.name(),
        info.entity.age(),
        format_interval(info.interval),
    )
}

/// Print the startup banner to stderr.
pub fn print_banner(info: &BannerInfo) {
    if let Err(e) = write_banner(&mut std::io::stderr(), info) {
        log::warn!("failed to print banner: {}", e);
    }
}
