//! ANSI color helpers for CLI output.
//!
//! Colors are dropped when `NO_COLOR` is set.

fn paint(code: &str, s: &str) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        return s.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", code, s)
}

pub fn red(s: &str) -> String {
    paint("31", s)
}

pub fn gray(s: &str) -> String {
    paint("90", s)
}

/// Right-aligned, bold green label, e.g. `      Seeded`.
pub fn status_label(label: &str) -> String {
    paint("1;32", &format!("{:>12}", label))
}
